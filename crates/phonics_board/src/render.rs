//! Read-only view of the board for a drawing layer.

use bevy::math::Rect;

use crate::board::PhonicsBoard;
use crate::category::TileColor;
use crate::tile::TileKey;

pub const HINT: &str = "Click letters to build a word";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderTile<'a> {
    pub key: TileKey,
    pub label: &'a str,
    pub rect: Rect,
    pub color: TileColor,
    pub text_size: f32,
    pub in_build_box: bool,
}

impl PhonicsBoard {
    /// Tiles bottom to top, with their current geometry.
    pub fn render_tiles(&self) -> impl Iterator<Item = RenderTile<'_>> {
        let config = self.config();
        let scale = self.layout().scale;
        self.tiles().iter().enumerate().map(move |(index, tile)| {
            let in_build_box = tile.is_active();
            let text_size = if in_build_box {
                (config.clone_text_size * scale).min(tile.size.y * config.clone_text_fill)
            } else {
                (config.base_text_size * scale).min(tile.size.y * config.base_text_fill)
            };
            RenderTile {
                key: tile.key(index),
                label: &tile.label,
                rect: tile.rect(),
                color: tile.color,
                text_size,
                in_build_box,
            }
        })
    }

    /// Borders of the non-empty group blocks.
    pub fn block_borders(&self) -> impl Iterator<Item = Rect> + '_ {
        self.layout().blocks.iter().filter_map(|block| block.border)
    }

    /// Hint text size while the build box is empty, `None` otherwise.
    pub fn hint_text_size(&self) -> Option<f32> {
        self.active_tiles().is_empty().then(|| {
            let config = self.config();
            (config.hint_text_size * self.layout().scale).min(config.hint_text_size)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Viewport;

    #[test]
    fn snapshot_lists_bases_then_clones() {
        let mut board = PhonicsBoard::standard(Viewport::new(1600.0, 1400.0));
        let base_count = board.base_tiles().len();
        let point = board.base_tile("oo").expect("oo tile").rect().center();
        board.press(point);

        let tiles: Vec<RenderTile<'_>> = board.render_tiles().collect();
        assert_eq!(tiles.len(), base_count + 1, "one entry per tile");
        let last = tiles.last().expect("clone entry");
        assert_eq!(last.key, TileKey::Active(0), "clone is drawn last");
        assert_eq!(last.label, "oo", "clone label");
        assert!(last.in_build_box, "clone is in the build box");
        assert!((last.text_size - 39.6).abs() < 1e-3, "clone text {}", last.text_size);

        let first = tiles.first().expect("base entry");
        assert_eq!(first.key, TileKey::Base(0), "bases come first");
        assert!((first.text_size - 20.0).abs() < 1e-3, "base text {}", first.text_size);
    }

    #[test]
    fn hint_only_while_build_box_is_empty() {
        let mut board = PhonicsBoard::standard(Viewport::new(800.0, 700.0));
        assert_eq!(board.hint_text_size(), Some(12.0), "half scale hint");

        let point = board.base_tile("m").expect("m tile").rect().center();
        board.press(point);
        assert_eq!(board.hint_text_size(), None, "hint hidden");
    }

    #[test]
    fn empty_groups_have_no_border() {
        let board = PhonicsBoard::new(
            crate::config::BoardConfig::default(),
            &crate::catalog::TileCatalog::from_raw(["a", "ch", "-ble"]),
            Viewport::new(1600.0, 1400.0),
        );
        assert_eq!(board.block_borders().count(), 3, "one border per used group");
    }
}
