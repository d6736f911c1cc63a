use bevy::math::{Rect, Vec2};

use crate::category::{Group, TileColor};
use crate::motion::Motion;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TileKind {
    /// Persistent catalog tile living in its group block.
    Base {
        group: Group,
        original_color: TileColor,
        home: Vec2,
    },
    /// Per-click copy shown in the build box. `source` is the index of the
    /// base tile it was made from.
    Active { click_index: u64, source: usize },
}

/// Identity of a tile that survives re-ordering of the tile list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKey {
    Base(usize),
    Active(u64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub label: String,
    pub color: TileColor,
    pub size: Vec2,
    pub motion: Motion,
    pub kind: TileKind,
}

impl Tile {
    pub fn base(label: impl Into<String>, group: Group, color: TileColor, size: Vec2) -> Self {
        Self {
            label: label.into(),
            color,
            size,
            motion: Motion::default(),
            kind: TileKind::Base {
                group,
                original_color: color,
                home: Vec2::ZERO,
            },
        }
    }

    /// Copy of a base tile starting at its home, or `None` for active tiles.
    pub fn activate(&self, source: usize, click_index: u64, target_scale: f32) -> Option<Self> {
        let TileKind::Base {
            original_color,
            home,
            ..
        } = self.kind
        else {
            return None;
        };

        Some(Self {
            label: self.label.clone(),
            color: original_color,
            size: self.size,
            motion: Motion {
                target_scale,
                ..Motion::at_rest(home)
            },
            kind: TileKind::Active {
                click_index,
                source,
            },
        })
    }

    pub const fn is_active(&self) -> bool {
        matches!(self.kind, TileKind::Active { .. })
    }

    pub const fn click_index(&self) -> Option<u64> {
        match self.kind {
            TileKind::Active { click_index, .. } => Some(click_index),
            TileKind::Base { .. } => None,
        }
    }

    pub const fn group(&self) -> Option<Group> {
        match self.kind {
            TileKind::Base { group, .. } => Some(group),
            TileKind::Active { .. } => None,
        }
    }

    pub const fn home(&self) -> Option<Vec2> {
        match self.kind {
            TileKind::Base { home, .. } => Some(home),
            TileKind::Active { .. } => None,
        }
    }

    pub const fn original_color(&self) -> Option<TileColor> {
        match self.kind {
            TileKind::Base { original_color, .. } => Some(original_color),
            TileKind::Active { .. } => None,
        }
    }

    pub const fn key(&self, index: usize) -> TileKey {
        match self.kind {
            TileKind::Base { .. } => TileKey::Base(index),
            TileKind::Active { click_index, .. } => TileKey::Active(click_index),
        }
    }

    /// Current on-screen rectangle, top-left origin.
    pub fn rect(&self) -> Rect {
        let min = self.motion.position;
        Rect::from_corners(min, min + self.size * self.motion.scale)
    }

    /// Strict containment, a point on the edge is a miss.
    pub fn contains(&self, point: Vec2) -> bool {
        let rect = self.rect();
        point.x > rect.min.x && point.x < rect.max.x && point.y > rect.min.y && point.y < rect.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile_at(position: Vec2) -> Tile {
        let mut tile = Tile::base("ch", Group::Digraphs, TileColor::Default, Vec2::new(70.0, 44.0));
        if let TileKind::Base { home, .. } = &mut tile.kind {
            *home = position;
        }
        tile.motion = Motion::at_rest(position);
        tile
    }

    #[test]
    fn contains_is_strict_and_uses_current_scale() {
        let mut tile = tile_at(Vec2::new(10.0, 20.0));
        assert!(tile.contains(Vec2::new(11.0, 21.0)), "inside");
        assert!(!tile.contains(Vec2::new(10.0, 30.0)), "left edge");
        assert!(!tile.contains(Vec2::new(80.0, 30.0)), "right edge");
        assert!(!tile.contains(Vec2::new(100.0, 30.0)), "beyond the unscaled width");

        tile.motion.scale = 2.0;
        assert!(tile.contains(Vec2::new(100.0, 30.0)), "inside the scaled width");
    }

    #[test]
    fn activation_copies_label_color_and_home() {
        let base = tile_at(Vec2::new(5.0, 6.0));
        let clone = base.activate(3, 7, 1.5).expect("base tiles can be activated");

        assert_eq!(clone.label, "ch", "label is shared");
        assert_eq!(clone.color, TileColor::Default, "color is inherited");
        assert_eq!(clone.motion.position, Vec2::new(5.0, 6.0), "starts at home");
        assert!((clone.motion.target_scale - 1.5).abs() < f32::EPSILON, "grows");
        assert_eq!(clone.click_index(), Some(7), "click index is kept");
        assert_eq!(clone.key(42), TileKey::Active(7), "keyed by click index");
        assert!(clone.activate(0, 8, 1.5).is_none(), "clones cannot be cloned");
        assert_eq!(clone.group(), None, "clones carry no group");
    }
}
