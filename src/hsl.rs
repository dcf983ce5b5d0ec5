use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

use super::{constants::HUE_DEGREES, error::ColourError, hex::Hex, rgb::Rgb};

/// Hue / Saturation / Lightness.
///
/// `hue` is in degrees, 0 .. 360. `saturation` and `lightness` are fractions in 0 ..= 1.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsl {
  #[serde(rename = "H")]
  pub hue: f64,
  #[serde(rename = "S")]
  pub saturation: f64,
  #[serde(rename = "L")]
  pub lightness: f64,
}

impl Hsl {
  pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
    Hsl {
      hue,
      saturation,
      lightness,
    }
  }

  /// Checks that every component is present (finite) and in range.
  ///
  /// Hue may be exactly 360, which the conversion treats the same as 0.
  pub fn validate(&self) -> Result<(), ColourError> {
    let fields = [
      ("hue", self.hue, HUE_DEGREES),
      ("saturation", self.saturation, 1.0),
      ("lightness", self.lightness, 1.0),
    ];
    for (name, value, max) in fields {
      if !value.is_finite() {
        return Err(ColourError::InvalidArgument(format!(
          "HSL value is missing a usable {name} component"
        )));
      }
      if value < 0.0 || value > max {
        return Err(ColourError::InvalidArgument(format!(
          "HSL {name} {value} is outside the range 0 ..= {max}"
        )));
      }
    }
    Ok(())
  }

  pub(crate) fn to_rgb_unchecked(&self) -> Rgb {
    let h = self.hue / HUE_DEGREES;
    let s = self.saturation;
    let l = self.lightness;

    if s == 0.0 {
      let c = to_channel(l);
      return Rgb::new(c, c, c);
    }

    let temp2 = if l < 0.5 { l * (1.0 + s) } else { (l + s) - (s * l) };
    let temp1 = 2.0 * l - temp2;

    Rgb::new(
      to_channel(hue_to_channel(temp1, temp2, h + (1.0 / 3.0))),
      to_channel(hue_to_channel(temp1, temp2, h)),
      to_channel(hue_to_channel(temp1, temp2, h - (1.0 / 3.0))),
    )
  }

  /// Converts to HEX without validating, for values produced by this crate.
  pub(crate) fn to_hex_unchecked(&self) -> Hex {
    Hex::from_rgb(self.to_rgb_unchecked())
  }
}

impl Display for Hsl {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{},{},{}", self.hue, self.saturation, self.lightness)
  }
}

/// Parses `"h,s,l"`, e.g. `"210,0.5,0.4"`.
impl FromStr for Hsl {
  type Err = ColourError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let parts = s
      .split(',')
      .map(|tok| {
        let tok = tok.trim();
        if tok.is_empty() {
          return Err(ColourError::InvalidArgument(format!(
            "missing field in HSL value \"{s}\""
          )));
        }
        f64::from_str(tok).map_err(|e| {
          ColourError::InvalidArgument(format!("unable to parse HSL field \"{tok}\": {e}"))
        })
      })
      .collect::<Result<Vec<f64>, ColourError>>()?;

    if parts.len() != 3 {
      return Err(ColourError::InvalidArgument(format!(
        "HSL value requires 3 fields, but received {}",
        parts.len()
      )));
    }

    let hsl = Hsl::new(parts[0], parts[1], parts[2]);
    hsl.validate()?;
    Ok(hsl)
  }
}

// rounds to nearest for both the achromatic and chromatic branches
fn to_channel(v: f64) -> u8 {
  (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Maps a hue offset onto one RGB channel, given the two intermediate
/// lightness values `v1` (low) and `v2` (high).
///
/// `h` is wrapped into 0 ..= 1 by a single increment or decrement.
pub fn hue_to_channel(v1: f64, v2: f64, h: f64) -> f64 {
  let mut h = h;
  if h < 0.0 {
    h += 1.0;
  }
  if h > 1.0 {
    h -= 1.0;
  }

  if 6.0 * h < 1.0 {
    return v1 + (v2 - v1) * 6.0 * h;
  }
  if 2.0 * h < 1.0 {
    return v2;
  }
  if 3.0 * h < 2.0 {
    return v1 + (v2 - v1) * ((2.0 / 3.0) - h) * 6.0;
  }
  v1
}

pub fn rgb_to_hsl(rgb: &Rgb) -> Hsl {
  let r = rgb.red as f64 / 255.0;
  let g = rgb.green as f64 / 255.0;
  let b = rgb.blue as f64 / 255.0;

  let min = r.min(g).min(b);
  let max = r.max(g).max(b);
  let delta = max - min;

  let lightness = (max + min) / 2.0;

  if delta == 0.0 {
    return Hsl::new(0.0, 0.0, lightness);
  }

  let saturation = if lightness < 0.5 {
    delta / (max + min)
  } else {
    delta / (2.0 - max - min)
  };

  let delta_r = (((max - r) / 6.0) + (delta / 2.0)) / delta;
  let delta_g = (((max - g) / 6.0) + (delta / 2.0)) / delta;
  let delta_b = (((max - b) / 6.0) + (delta / 2.0)) / delta;

  let mut h = if r == max {
    delta_b - delta_g
  } else if g == max {
    (1.0 / 3.0) + delta_r - delta_b
  } else {
    (2.0 / 3.0) + delta_g - delta_r
  };

  // the formula above only ever lands one step outside 0 ..= 1
  if h < 0.0 {
    h += 1.0;
  }
  if h > 1.0 {
    h -= 1.0;
  }

  Hsl::new(h * HUE_DEGREES, saturation, lightness)
}

/// Converts a HEX string into HSL.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ColourError> {
  let hex = Hex::parse(hex)?;
  Ok(rgb_to_hsl(&hex.to_rgb()))
}

/// Converts HSL into HEX.
///
/// Fails with [`ColourError::InvalidArgument`] if a component is missing (non-finite)
/// or out of range.
pub fn hsl_to_hex(hsl: &Hsl) -> Result<Hex, ColourError> {
  hsl.validate()?;
  Ok(hsl.to_hex_unchecked())
}
