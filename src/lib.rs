//! Conversion between HEX, RGB, HSL and HSV colour representations, plus derived
//! colours (shades, mixes, complements, gradients) and a simple light / dark test.

pub mod adjust;
pub mod classify;
pub mod colour;
pub mod constants;
pub mod error;
pub mod gradient;
pub mod hex;
pub mod hsl;
pub mod hsv;
pub mod rgb;

pub use adjust::Adjustment;
pub use colour::{Channel, ColourModel};
pub use error::ColourError;
pub use gradient::{CssGradientOptions, Gradient};
pub use hex::{hex_to_rgb, rgb_to_hex, Hex};
pub use hsl::{hex_to_hsl, hsl_to_hex, Hsl};
pub use hsv::{hex_to_hsv, hsv_to_hex, Hsv};
pub use rgb::Rgb;
