use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use strum::{EnumCount, IntoEnumIterator};

use crate::category::Group;
use crate::error::ConfigError;

/// Design constants of the board. Lengths are in design pixels and get
/// multiplied by the viewport scale, fractions are relative to the viewport.
#[derive(Debug, Clone, PartialEq, Resource, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub design_width: f32,
    pub design_height: f32,

    pub build_margin: f32,
    pub build_top: f32,
    pub build_height: f32,
    pub build_height_min: f32,
    pub build_height_max: f32,

    pub tile_width: f32,
    pub tile_height: f32,
    pub tile_width_min: f32,
    pub tile_width_max: f32,
    pub tile_height_min: f32,
    pub tile_height_max: f32,
    pub tile_gap: f32,
    pub tile_gap_min: f32,

    pub block_gap: f32,
    pub row_gap: f32,
    /// Lower bound of the row gap as a fraction of the viewport height.
    pub row_gap_fraction: f32,
    pub available_width: f32,
    /// Share of the available width one group block may use.
    pub block_width: f32,
    pub grid_top_offset: f32,
    pub border_padding: f32,
    pub row_plan: Vec<Vec<Group>>,

    pub slot_min: f32,
    pub slot_max: f32,
    pub slot_fill: f32,
    pub build_spacing: f32,
    pub clone_scale: f32,
    pub max_display_scale: f32,
    pub height_fill: f32,

    pub base_text_size: f32,
    pub base_text_fill: f32,
    pub clone_text_size: f32,
    pub clone_text_fill: f32,
    pub hint_text_size: f32,

    pub reset_button_x: f32,
    pub reset_button_gap: f32,

    /// Share of the remaining distance covered per reference frame.
    pub smoothing: f32,
    pub reference_fps: f32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            design_width: 1600.0,
            design_height: 1400.0,

            build_margin: 0.05,
            build_top: 0.03,
            build_height: 120.0,
            build_height_min: 80.0,
            build_height_max: 200.0,

            tile_width: 70.0,
            tile_height: 44.0,
            tile_width_min: 40.0,
            tile_width_max: 140.0,
            tile_height_min: 28.0,
            tile_height_max: 80.0,
            tile_gap: 8.0,
            tile_gap_min: 6.0,

            block_gap: 70.0,
            row_gap: 35.0,
            row_gap_fraction: 0.03,
            available_width: 0.9,
            block_width: 0.9,
            grid_top_offset: 30.0,
            border_padding: 10.0,
            row_plan: standard_row_plan(),

            slot_min: 40.0,
            slot_max: 160.0,
            slot_fill: 0.9,
            build_spacing: 8.0,
            clone_scale: 1.5,
            max_display_scale: 2.0,
            height_fill: 0.9,

            base_text_size: 20.0,
            base_text_fill: 0.6,
            clone_text_size: 48.0,
            clone_text_fill: 0.9,
            hint_text_size: 24.0,

            reset_button_x: 0.86,
            reset_button_gap: 12.0,

            smoothing: 0.15,
            reference_fps: 60.0,
        }
    }
}

/// Related categories share a row: blends, vowel teams, affixes.
pub fn standard_row_plan() -> Vec<Vec<Group>> {
    vec![
        vec![Group::SingleLetters, Group::Digraphs],
        vec![Group::LBlends, Group::RBlends, Group::SBlends],
        vec![Group::VowelTeams1, Group::VowelTeams2],
        vec![Group::Prefixes, Group::Suffixes],
        vec![
            Group::ThreeLetterBlends,
            Group::WBlends,
            Group::RControlled,
            Group::NgNk,
            Group::FinalClusters,
            Group::MagicE,
            Group::YEndings,
            Group::Oddballs,
            Group::LeSyllables,
        ],
    ]
}

impl BoardConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let design_ok = [self.design_width, self.design_height]
            .iter()
            .all(|side| side.is_finite() && *side > 0.0);
        if !design_ok {
            return Err(ConfigError::InvalidDesignSize {
                width: self.design_width,
                height: self.design_height,
            });
        }

        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(ConfigError::InvalidSmoothing(self.smoothing));
        }

        let mut placements = [0_usize; Group::COUNT];
        for group in self.row_plan.iter().flatten() {
            if let Some(count) = placements.get_mut(group.index()) {
                *count += 1;
            }
        }
        for (group, count) in Group::iter().zip(placements) {
            match count {
                0 => return Err(ConfigError::GroupNotPlanned(group)),
                1 => {}
                _ => return Err(ConfigError::GroupPlannedTwice(group)),
            }
        }

        Ok(())
    }
}
