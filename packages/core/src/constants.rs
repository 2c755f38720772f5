// ABOUTME: Fixed thresholds and defaults shared by the display rules

/// Ratio below which a keyword is considered blue-ocean
pub const BLUE_OCEAN_RATIO: f64 = 0.1;

/// Ratio below which a keyword is considered moderately competitive
pub const MODERATE_RATIO: f64 = 0.5;

/// Difficulty score below which a keyword is easy to rank for
pub const EASY_DIFFICULTY: u8 = 30;

/// Difficulty score below which a keyword is of medium difficulty
pub const MEDIUM_DIFFICULTY: u8 = 60;

/// Number of entries shown per channel in the section preview
pub const SECTION_PREVIEW_LEN: usize = 3;

/// Placeholder shown for an empty section channel or an absent rank
pub const PLACEHOLDER: &str = "-";

/// Total search volume that fills the volume gauge completely
pub const VOLUME_GAUGE_CEILING: u64 = 100_000;

