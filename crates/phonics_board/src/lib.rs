//! Phonics tile board.
//!
//! Spelling patterns are sorted into 18 phonics groups, laid out as one grid
//! block per group, and clicked into a build box where their copies spell a
//! word in click order. The engine in [`PhonicsBoard`] is plain data and can
//! be driven without a window; [`PhonicsBoardPlugin`] puts it on screen.

use bevy::prelude::*;
use board_helpers::AppSettings;

mod board;
pub mod build_box;
pub mod catalog;
pub mod category;
pub mod config;
mod error;
pub mod layout;
pub mod motion;
mod plugin;
pub mod render;
pub mod tile;

pub use board::{PhonicsBoard, PressOutcome};
pub use catalog::TileCatalog;
pub use category::{Categorizer, Group, TileColor};
pub use config::BoardConfig;
pub use error::{ConfigError, GroupIndexError};
pub use layout::{BoardLayout, Viewport};
pub use plugin::PhonicsBoardPlugin;
pub use tile::{Tile, TileKey, TileKind};

const BACKGROUND: Color = Color::srgb(0.96, 0.96, 0.96);

pub fn run() {
    let settings = AppSettings {
        title: "Phonics Board",
        log_target: env!("CARGO_CRATE_NAME"),
        resolution: Vec2::new(1280.0, 960.0),
        clear_color: BACKGROUND,
    };

    board_helpers::get_default_app(&settings)
        .add_plugins(PhonicsBoardPlugin)
        .run();
}
