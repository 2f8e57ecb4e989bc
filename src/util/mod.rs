//! Small browser and formatting helpers.

pub mod confirm;
pub mod format;
