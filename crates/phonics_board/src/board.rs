use bevy::math::Vec2;
use bevy::prelude::Resource;
use tracing::{debug, info};

use crate::build_box;
use crate::catalog::TileCatalog;
use crate::category::{Categorizer, Group, Groups};
use crate::config::BoardConfig;
use crate::layout::{BoardLayout, Viewport, compute_layout};
use crate::motion::{Motion, frame_factor};
use crate::tile::{Tile, TileKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PressOutcome {
    Miss,
    Activated { click_index: u64, label: String },
    Deactivated { click_index: u64, label: String },
}

/// Owns the base tiles, their groups, the current layout and the clones
/// sitting in the build box.
///
/// Base tiles come first in the tile list and are never removed; clones are
/// appended on click, so later entries are drawn on top and hit first.
#[derive(Resource, Debug, Clone)]
pub struct PhonicsBoard {
    config: BoardConfig,
    tiles: Vec<Tile>,
    base_count: usize,
    groups: Groups,
    layout: BoardLayout,
    next_click_index: u64,
}

impl PhonicsBoard {
    pub fn new(config: BoardConfig, catalog: &TileCatalog, viewport: Viewport) -> Self {
        Self::with_categorizer(config, catalog, &Categorizer::default(), viewport)
    }

    pub fn with_categorizer(
        config: BoardConfig,
        catalog: &TileCatalog,
        categorizer: &Categorizer,
        viewport: Viewport,
    ) -> Self {
        let assignments = categorizer.assign(catalog.labels());
        let groups = Groups::from_assignments(&assignments);
        for (group, members) in groups.iter() {
            debug!("{}: {} tiles", group.title(), members.len());
        }
        let default_size = Vec2::new(config.tile_width, config.tile_height);
        let tiles: Vec<Tile> = catalog
            .labels()
            .iter()
            .zip(&assignments)
            .map(|(label, assignment)| {
                Tile::base(label.as_str(), assignment.group, assignment.color, default_size)
            })
            .collect();

        let base_count = tiles.len();
        let mut board = Self {
            config,
            tiles,
            base_count,
            groups,
            layout: BoardLayout::collapsed(viewport, base_count),
            next_click_index: 0,
        };
        board.resize(viewport);
        board
    }

    pub fn standard(viewport: Viewport) -> Self {
        Self::new(BoardConfig::default(), &TileCatalog::standard(), viewport)
    }

    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub const fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    pub const fn groups(&self) -> &Groups {
        &self.groups
    }

    pub const fn next_click_index(&self) -> u64 {
        self.next_click_index
    }

    /// Base tiles followed by clones, bottom to top.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn base_tiles(&self) -> &[Tile] {
        self.tiles.get(..self.base_count).unwrap_or_default()
    }

    pub fn active_tiles(&self) -> &[Tile] {
        self.tiles.get(self.base_count..).unwrap_or_default()
    }

    pub fn base_tile(&self, label: &str) -> Option<&Tile> {
        self.base_tiles().iter().find(|tile| tile.label == label)
    }

    pub fn group_of(&self, label: &str) -> Option<Group> {
        self.base_tile(label).and_then(Tile::group)
    }

    /// Active tiles in click order.
    pub fn build_sequence(&self) -> Vec<&Tile> {
        let mut sequence: Vec<&Tile> = self.active_tiles().iter().collect();
        sequence.sort_by_key(|tile| tile.click_index());
        sequence
    }

    pub fn composed_word(&self) -> String {
        self.build_sequence()
            .into_iter()
            .map(|tile| tile.label.as_str())
            .collect()
    }

    /// Recomputes the layout for a new viewport. Base tiles snap to their new
    /// homes; clones keep their click order and are re-targeted.
    pub fn resize(&mut self, viewport: Viewport) {
        self.layout = compute_layout(&self.config, viewport, &self.groups, self.base_count);
        let tile_size = self.layout.tile_size;

        for (index, tile) in self.tiles.iter_mut().enumerate() {
            tile.size = tile_size;
            if let TileKind::Base {
                home,
                original_color,
                ..
            } = &mut tile.kind
            {
                *home = self.layout.homes.get(index).copied().unwrap_or_default();
                tile.motion = Motion::at_rest(*home);
                tile.color = *original_color;
            }
        }

        debug!(
            "Resized board to {}x{}, {} clones kept",
            viewport.width,
            viewport.height,
            self.tiles.len() - self.base_count
        );
        self.arrange_build_box();
    }

    /// Toggles the topmost tile under `point`, if any.
    pub fn press(&mut self, point: Vec2) -> PressOutcome {
        let Some(index) = self.tiles.iter().rposition(|tile| tile.contains(point)) else {
            return PressOutcome::Miss;
        };

        let outcome = match self.tiles.get(index).map(|tile| tile.kind) {
            Some(TileKind::Base { .. }) => self.activate(index),
            Some(TileKind::Active { click_index, .. }) => {
                let removed = self.tiles.remove(index);
                info!("Removed {:?} (click {click_index})", removed.label);
                PressOutcome::Deactivated {
                    click_index,
                    label: removed.label,
                }
            }
            None => PressOutcome::Miss,
        };

        self.arrange_build_box();
        outcome
    }

    fn activate(&mut self, source: usize) -> PressOutcome {
        let click_index = self.next_click_index;
        let Some(clone) = self
            .tiles
            .get(source)
            .and_then(|tile| tile.activate(source, click_index, self.config.clone_scale))
        else {
            return PressOutcome::Miss;
        };

        self.next_click_index += 1;
        let label = clone.label.clone();
        self.tiles.push(clone);
        info!("Added {label:?} (click {click_index})");
        PressOutcome::Activated { click_index, label }
    }

    /// Removes every clone and restarts click numbering.
    pub fn reset(&mut self) {
        self.tiles.truncate(self.base_count);
        self.next_click_index = 0;
        for tile in &mut self.tiles {
            if let TileKind::Base {
                home,
                original_color,
                ..
            } = tile.kind
            {
                tile.motion = Motion::at_rest(home);
                tile.color = original_color;
            }
        }
        info!("Board reset");
    }

    /// One smoothing step with an explicit factor.
    pub fn tick(&mut self, factor: f32) {
        for tile in &mut self.tiles {
            tile.motion = tile.motion.stepped(factor);
        }
    }

    /// One smoothing step for a frame lasting `delta_secs`.
    pub fn advance(&mut self, delta_secs: f32) {
        let factor = frame_factor(self.config.smoothing, self.config.reference_fps, delta_secs);
        self.tick(factor);
    }

    fn arrange_build_box(&mut self) {
        let mut order: Vec<(u64, usize)> = self
            .tiles
            .iter()
            .enumerate()
            .filter_map(|(index, tile)| tile.click_index().map(|click| (click, index)))
            .collect();
        order.sort_unstable();

        let sizes: Vec<Vec2> = order
            .iter()
            .filter_map(|&(_, index)| self.tiles.get(index).map(|tile| tile.size))
            .collect();
        let placements = build_box::arrange(
            &self.config,
            self.layout.build_region,
            self.layout.scale,
            &sizes,
        );

        for (&(_, index), placement) in order.iter().zip(placements) {
            let inherited = match self.tiles.get(index).map(|tile| tile.kind) {
                Some(TileKind::Active { source, .. }) => {
                    self.tiles.get(source).and_then(Tile::original_color)
                }
                _ => None,
            };
            if let Some(tile) = self.tiles.get_mut(index) {
                tile.motion.target = placement.target;
                tile.motion.target_scale = placement.target_scale;
                if let Some(color) = inherited {
                    tile.color = color;
                }
            }
        }

        for tile in &mut self.tiles {
            if let TileKind::Base {
                home,
                original_color,
                ..
            } = tile.kind
            {
                tile.motion.target = home;
                tile.motion.target_scale = 1.0;
                tile.color = original_color;
            }
        }
    }
}
