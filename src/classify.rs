use super::{
  constants::{LUMA_BLUE_WEIGHT, LUMA_GREEN_WEIGHT, LUMA_RED_WEIGHT},
  rgb::Rgb,
};

fn weighted_sum(rgb: &Rgb) -> u32 {
  rgb.red as u32 * LUMA_RED_WEIGHT
    + rgb.green as u32 * LUMA_GREEN_WEIGHT
    + rgb.blue as u32 * LUMA_BLUE_WEIGHT
}

// widened so that any u32 threshold scales without overflow
fn scaled_threshold(threshold: u32) -> u64 {
  threshold as u64 * 1000
}

/// Approximate perceived brightness (ITU-R BT.601), on the 0 ..= 255 scale.
pub fn luma(rgb: &Rgb) -> f64 {
  weighted_sum(rgb) as f64 / 1000.0
}

/// Returns true if the colour's luma is strictly greater than `threshold`.
pub fn is_light(rgb: &Rgb, threshold: u32) -> bool {
  weighted_sum(rgb) as u64 > scaled_threshold(threshold)
}

/// Returns true if the colour's luma is less than or equal to `threshold`.
///
/// This is only the negation of [`is_light`] when both are given the same threshold.
pub fn is_dark(rgb: &Rgb, threshold: u32) -> bool {
  weighted_sum(rgb) as u64 <= scaled_threshold(threshold)
}
