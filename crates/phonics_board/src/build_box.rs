use bevy::math::{Rect, Vec2};

use crate::config::BoardConfig;

/// Where an active tile should settle inside the build region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub target: Vec2,
    pub target_scale: f32,
}

/// Width of one slot when `count` tiles share the build region.
pub fn slot_width(config: &BoardConfig, region: Rect, scale: f32, count: usize) -> f32 {
    let fitted = region.width() / count.max(1) as f32 * config.slot_fill;
    fitted
        .min(config.slot_max * scale)
        .max(config.slot_min * scale)
}

/// Lays out tiles of the given sizes, already in click order, as one centered
/// row of evenly spaced slots.
pub fn arrange(config: &BoardConfig, region: Rect, scale: f32, sizes: &[Vec2]) -> Vec<Placement> {
    if sizes.is_empty() {
        return Vec::new();
    }

    let count = sizes.len();
    let slot = slot_width(config, region, scale, count);
    let spacing = (config.build_spacing * scale).max(config.build_spacing);
    let total = (count as f32).mul_add(slot, (count - 1) as f32 * spacing);
    let start = region.min.x + (region.width() - total) / 2.0;
    let center_y = region.center().y;

    sizes
        .iter()
        .enumerate()
        .map(|(index, size)| {
            let target_scale = display_scale(config, region, slot, *size);
            let scaled = *size * target_scale;
            let slot_x = (index as f32).mul_add(slot + spacing, start);
            Placement {
                target: Vec2::new(slot_x + (slot - scaled.x) / 2.0, center_y - scaled.y / 2.0),
                target_scale,
            }
        })
        .collect()
}

fn display_scale(config: &BoardConfig, region: Rect, slot: f32, size: Vec2) -> f32 {
    let by_height = region.height() / size.y * config.height_fill;
    let by_width = slot / size.x;
    let scale = config.max_display_scale.min(by_height).min(by_width);
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        config.max_display_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TILE: Vec2 = Vec2::new(70.0, 44.0);

    fn region() -> Rect {
        Rect::new(80.0, 42.0, 1520.0, 162.0)
    }

    #[test]
    fn empty_sequence_has_no_placements() {
        assert!(
            arrange(&BoardConfig::default(), region(), 1.0, &[]).is_empty(),
            "nothing to place"
        );
    }

    #[test]
    fn row_is_centered_and_evenly_spaced() {
        let config = BoardConfig::default();
        let placements = arrange(&config, region(), 1.0, &[TILE, TILE, TILE]);
        assert_eq!(placements.len(), 3, "one placement per tile");

        // 160 wide slots (capped), 8 spacing: 496 in total, centered in 1440.
        let start = 80.0 + (1440.0 - 496.0) / 2.0;
        // Height allows 2.45 and the slot 2.29, the 2.0 cap wins.
        let scale = 2.0;
        for (index, placement) in placements.iter().enumerate() {
            let slot_x = start + index as f32 * 168.0;
            let expected_x = slot_x + (160.0 - 70.0 * scale) / 2.0;
            assert!(
                (placement.target.x - expected_x).abs() < 1e-3,
                "tile {index} at {} instead of {expected_x}",
                placement.target.x
            );
            assert!(
                (placement.target_scale - scale).abs() < 1e-5,
                "tile {index} scale {}",
                placement.target_scale
            );
        }
    }

    #[test]
    fn tiles_are_vertically_centered_with_their_scale() {
        let placements = arrange(&BoardConfig::default(), region(), 1.0, &[TILE]);
        let placement = placements.first().expect("one placement");
        let center = placement.target.y + TILE.y * placement.target_scale / 2.0;
        assert!((center - region().center().y).abs() < 1e-3, "center {center}");
    }

    #[test]
    fn slots_shrink_as_tiles_are_added_within_bounds() {
        let config = BoardConfig::default();
        let widths: Vec<f32> = [1, 5, 10, 20, 60]
            .into_iter()
            .map(|count| slot_width(&config, region(), 1.0, count))
            .collect();
        assert!(
            widths.windows(2).all(|pair| pair.first() >= pair.last()),
            "slots must not grow: {widths:?}"
        );
        assert!(
            widths.iter().all(|width| (40.0..=160.0).contains(width)),
            "slots out of bounds: {widths:?}"
        );
    }

    #[test]
    fn scaled_tile_fits_its_slot() {
        let config = BoardConfig::default();
        let sizes = vec![TILE; 15];
        let slot = slot_width(&config, region(), 1.0, sizes.len());
        for placement in arrange(&config, region(), 1.0, &sizes) {
            assert!(
                TILE.x * placement.target_scale <= slot + 1e-3,
                "scaled width exceeds the {slot} slot"
            );
        }
    }
}
