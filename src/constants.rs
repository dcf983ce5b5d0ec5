/// Percentage points that `darken` / `lighten` move the lightness by when no amount is given.
pub const DEFAULT_ADJUST: u8 = 10;

/// Luma threshold separating "light" from "dark" colours, on the 0 ..= 255 scale.
pub const DEFAULT_LUMA_THRESHOLD: u32 = 130;

// ITU-R BT.601 luma weights, per mille
pub const LUMA_RED_WEIGHT: u32 = 299;
pub const LUMA_GREEN_WEIGHT: u32 = 587;
pub const LUMA_BLUE_WEIGHT: u32 = 114;

/// Mix amounts are a bias in the range -100 ..= 100.
pub const MIX_AMOUNT_MAX: i32 = 100;

pub const HUE_DEGREES: f64 = 360.0;
