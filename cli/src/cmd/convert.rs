use colour_model::{hex_to_hsv, hsl_to_hex, hsv_to_hex, rgb_to_hex, Hsl, Rgb};

use crate::{error::CliError, output};

pub fn run_rgb_to_hex(rgb: &str, json: bool) -> Result<String, CliError> {
  let rgb: Rgb = rgb.parse()?;
  output::hex(&rgb_to_hex(&rgb), json)
}

pub fn run_hsl_to_hex(hsl: &str, json: bool) -> Result<String, CliError> {
  let hsl: Hsl = hsl.parse()?;
  output::hex(&hsl_to_hex(&hsl)?, json)
}

pub fn run_hsv_to_hex(components: &[f64], json: bool) -> Result<String, CliError> {
  output::hex(&hsv_to_hex(components)?, json)
}

pub fn run_hex_to_hsv(colour: &str, json: bool) -> Result<String, CliError> {
  let hsv = hex_to_hsv(colour)?;
  output::value(&hsv, json, |v| {
    format!("{},{},{}", v.hue, v.saturation, v.value)
  })
}

#[cfg(test)]
mod tests {
  use super::{run_hex_to_hsv, run_hsl_to_hex, run_hsv_to_hex, run_rgb_to_hex};

  #[test]
  fn hsv_primaries() {
    assert_eq!(run_hsv_to_hex(&[1.0 / 3.0, 1.0, 1.0], false).unwrap(), "#00ff00");
    assert_eq!(run_hsv_to_hex(&[0.0, 0.0, 0.75], false).unwrap(), "#bfbfbf");
  }

  #[test]
  fn hex_to_hsv_plain() {
    assert_eq!(run_hex_to_hsv("ff0000", false).unwrap(), "0,1,1");
    assert_eq!(run_hex_to_hsv("000000", false).unwrap(), "0,0,0");
  }

  #[test]
  fn conversions_reject_bad_input() {
    assert!(run_rgb_to_hex("256,0,0", false).is_err());
    assert!(run_rgb_to_hex("1,2", false).is_err());
    assert!(run_hsl_to_hex("361,0.5,0.5", false).is_err());
    assert!(run_hsv_to_hex(&[0.5, 1.5, 1.0], false).is_err());
    assert!(run_hex_to_hsv("ggg", false).is_err());
  }
}
