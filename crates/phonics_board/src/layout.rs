//! Responsive placement of the group blocks.
//!
//! Everything is derived from the viewport size and the group membership, so
//! recomputing with the same inputs gives the same homes. Coordinates have a
//! top-left origin with y pointing down.

use bevy::math::{Rect, Vec2};
use strum::IntoEnumIterator;
use tracing::debug;

use crate::category::{Group, Groups};
use crate::config::BoardConfig;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupBlock {
    pub group: Group,
    pub columns: usize,
    pub rows: usize,
    pub rect: Rect,
    /// Frame drawn around the block, absent for empty groups.
    pub border: Option<Rect>,
}

impl GroupBlock {
    const fn empty(group: Group) -> Self {
        Self {
            group,
            columns: 0,
            rows: 0,
            rect: Rect {
                min: Vec2::ZERO,
                max: Vec2::ZERO,
            },
            border: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoardLayout {
    pub viewport: Viewport,
    pub scale: f32,
    pub build_region: Rect,
    pub tile_size: Vec2,
    /// Home position of every base tile, by catalog index.
    pub homes: Vec<Vec2>,
    /// One block per group, in group order.
    pub blocks: Vec<GroupBlock>,
}

impl BoardLayout {
    /// Zero-size geometry for viewports that cannot hold anything.
    pub fn collapsed(viewport: Viewport, tile_count: usize) -> Self {
        Self {
            viewport,
            scale: 0.0,
            build_region: Rect::default(),
            tile_size: Vec2::ZERO,
            homes: vec![Vec2::ZERO; tile_count],
            blocks: Group::iter().map(GroupBlock::empty).collect(),
        }
    }

    pub fn block(&self, group: Group) -> Option<&GroupBlock> {
        self.blocks.get(group.index())
    }

    pub fn home(&self, index: usize) -> Option<Vec2> {
        self.homes.get(index).copied()
    }
}

/// Sizes shared by every block of one layout pass.
#[derive(Debug, Clone, Copy)]
struct Grid {
    tile: Vec2,
    gap: f32,
    max_columns: usize,
}

impl Grid {
    fn new(config: &BoardConfig, scale: f32, available_width: f32) -> Self {
        let tile = Vec2::new(
            (config.tile_width * scale)
                .floor()
                .clamp(config.tile_width_min, config.tile_width_max),
            (config.tile_height * scale)
                .floor()
                .clamp(config.tile_height_min, config.tile_height_max),
        );
        let gap = (config.tile_gap * scale).max(config.tile_gap_min);
        let usable = available_width.mul_add(config.block_width, gap);
        let max_columns = ((usable / (tile.x + gap)).floor() as usize).max(1);

        Self {
            tile,
            gap,
            max_columns,
        }
    }

    fn span(&self, count: usize, length: f32) -> f32 {
        if count == 0 {
            return 0.0;
        }
        (count as f32).mul_add(length, (count - 1) as f32 * self.gap)
    }

    /// Columns, rows and size of a block holding `count` tiles.
    fn block_shape(&self, count: usize) -> (usize, usize, Vec2) {
        if count == 0 {
            return (0, 0, Vec2::ZERO);
        }
        let columns = count.min(self.max_columns);
        let rows = count.div_ceil(columns);
        let size = Vec2::new(self.span(columns, self.tile.x), self.span(rows, self.tile.y));
        (columns, rows, size)
    }

    fn pitch(&self) -> Vec2 {
        self.tile + Vec2::splat(self.gap)
    }
}

pub fn build_region(config: &BoardConfig, viewport: Viewport, scale: f32) -> Rect {
    let margin = config.build_margin * viewport.width;
    let top = config.build_top * viewport.height;
    let height =
        (config.build_height * scale).clamp(config.build_height_min, config.build_height_max);
    Rect::new(margin, top, viewport.width - margin, top + height)
}

pub fn compute_layout(
    config: &BoardConfig,
    viewport: Viewport,
    groups: &Groups,
    tile_count: usize,
) -> BoardLayout {
    let mut layout = BoardLayout::collapsed(viewport, tile_count);
    if viewport.is_degenerate() {
        debug!("Viewport {viewport:?} is degenerate, collapsing the layout");
        return layout;
    }

    let scale = (viewport.width / config.design_width).min(viewport.height / config.design_height);
    let build_region = build_region(config, viewport, scale);

    let available_width = viewport.width * config.available_width;
    let left = (viewport.width - available_width) / 2.0;
    let grid = Grid::new(config, scale, available_width);
    let block_gap = config.block_gap * scale;
    let row_gap = (config.row_gap * scale).max(viewport.height * config.row_gap_fraction);

    let mut top = config.grid_top_offset.mul_add(scale, build_region.max.y);
    for row in &config.row_plan {
        let shapes: Vec<(Group, usize, usize, Vec2)> = row
            .iter()
            .map(|&group| {
                let (columns, rows, size) = grid.block_shape(groups.members(group).len());
                (group, columns, rows, size)
            })
            .collect();

        let gaps = row.len().saturating_sub(1) as f32 * block_gap;
        let row_width = shapes.iter().map(|(.., size)| size.x).sum::<f32>() + gaps;
        let mut x = left + (available_width - row_width) / 2.0;

        for &(group, columns, rows, size) in &shapes {
            let members = groups.members(group);
            let origin = Vec2::new(x, top);

            if columns > 0 {
                for (row_index, chunk) in members.chunks(columns).enumerate() {
                    let row_width = grid.span(chunk.len(), grid.tile.x);
                    let start = Vec2::new(
                        origin.x + (size.x - row_width) / 2.0,
                        (row_index as f32).mul_add(grid.pitch().y, origin.y),
                    );
                    for (column, &tile) in chunk.iter().enumerate() {
                        if let Some(home) = layout.homes.get_mut(tile) {
                            *home = Vec2::new(
                                (column as f32).mul_add(grid.pitch().x, start.x),
                                start.y,
                            );
                        }
                    }
                }
            }

            if let Some(block) = layout.blocks.get_mut(group.index()) {
                let rect = Rect::from_corners(origin, origin + size);
                *block = GroupBlock {
                    group,
                    columns,
                    rows,
                    rect,
                    border: (!members.is_empty())
                        .then(|| rect.inflate(config.border_padding * scale)),
                };
            }

            x += size.x + block_gap;
        }

        let tallest = shapes.iter().map(|&(_, _, rows, _)| rows).max().unwrap_or(0);
        top += (tallest as f32).mul_add(grid.pitch().y, row_gap);
    }

    layout.scale = scale;
    layout.build_region = build_region;
    layout.tile_size = grid.tile;

    debug!(
        "Laid out {tile_count} tiles for {}x{} at scale {scale:.3}, {} columns max",
        viewport.width, viewport.height, grid.max_columns
    );
    layout
}
