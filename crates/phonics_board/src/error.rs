use thiserror::Error;

use crate::category::Group;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Design size must be positive and finite, got {width}x{height}")]
    InvalidDesignSize { width: f32, height: f32 },

    #[error("Smoothing factor must be within (0, 1], got {0}")]
    InvalidSmoothing(f32),

    #[error("Group `{0}` is missing from the row plan")]
    GroupNotPlanned(Group),

    #[error("Group `{0}` appears more than once in the row plan")]
    GroupPlannedTwice(Group),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Group index {0} is out of range, expected 0 to 17")]
pub struct GroupIndexError(pub usize);
