use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

use super::error::ColourError;

/// An additive colour with three 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
  #[serde(rename = "R")]
  pub red: u8,
  #[serde(rename = "G")]
  pub green: u8,
  #[serde(rename = "B")]
  pub blue: u8,
}

impl Rgb {
  pub const fn new(red: u8, green: u8, blue: u8) -> Self {
    Rgb { red, green, blue }
  }

  pub fn black() -> Self {
    Rgb::new(0, 0, 0)
  }

  pub fn white() -> Self {
    Rgb::new(0xff, 0xff, 0xff)
  }

  pub fn to_bytes(&self) -> Vec<u8> {
    vec![self.red, self.green, self.blue]
  }

  /// Builds an `Rgb` from loosely typed channel values, e.g. parsed user input.
  ///
  /// All three channels must be present and each must be in the range 0 ..= 255.
  pub fn from_channels(channels: &[i64]) -> Result<Self, ColourError> {
    if channels.len() != 3 {
      return Err(ColourError::InvalidArgument(format!(
        "RGB value requires 3 channels, but received {}",
        channels.len()
      )));
    }

    let mut out = [0u8; 3];
    for (i, c) in channels.iter().enumerate() {
      out[i] = u8::try_from(*c).map_err(|_| {
        ColourError::InvalidArgument(format!("RGB channel {c} is outside the range 0 ..= 255"))
      })?;
    }
    Ok(Rgb::new(out[0], out[1], out[2]))
  }
}

impl Display for Rgb {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{},{},{}", self.red, self.green, self.blue)
  }
}

/// Parses `"r,g,b"`, e.g. `"51, 102, 153"`.
impl FromStr for Rgb {
  type Err = ColourError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let channels = s
      .split(',')
      .map(|tok| {
        let tok = tok.trim();
        if tok.is_empty() {
          return Err(ColourError::InvalidArgument(format!(
            "missing channel in RGB value \"{s}\""
          )));
        }
        i64::from_str(tok).map_err(|e| {
          ColourError::InvalidArgument(format!("unable to parse RGB channel \"{tok}\": {e}"))
        })
      })
      .collect::<Result<Vec<i64>, ColourError>>()?;

    Rgb::from_channels(&channels)
  }
}

impl From<Rgb> for palette::Srgb<u8> {
  fn from(rgb: Rgb) -> Self {
    palette::Srgb::<u8>::new(rgb.red, rgb.green, rgb.blue)
  }
}

impl From<palette::Srgb<u8>> for Rgb {
  fn from(c: palette::Srgb<u8>) -> Self {
    let (red, green, blue) = c.into_components();
    Rgb::new(red, green, blue)
  }
}

#[cfg(test)]
mod tests {
  use super::Rgb;
  use std::str::FromStr;

  #[test]
  fn parses_comma_separated_channels() {
    assert_eq!(Rgb::from_str("51,102,153"), Ok(Rgb::new(51, 102, 153)));
    assert_eq!(Rgb::from_str(" 0, 255 ,7 "), Ok(Rgb::new(0, 255, 7)));
  }

  #[test]
  fn missing_channel_is_invalid_argument() {
    for s in ["51,102", "51,,153", "51,102,", "", "1,2,3,4"] {
      match Rgb::from_str(s) {
        Err(e) => assert!(e.is_invalid_argument(), "{s}: {e}"),
        Ok(rgb) => panic!("expected error for {s:?}, got {rgb:?}"),
      }
    }
  }

  #[test]
  fn out_of_range_channel_is_invalid_argument() {
    assert!(Rgb::from_channels(&[256, 0, 0]).unwrap_err().is_invalid_argument());
    assert!(Rgb::from_channels(&[0, -1, 0]).unwrap_err().is_invalid_argument());
    assert!(Rgb::from_str("0,0,abc").unwrap_err().is_invalid_argument());
  }

  #[test]
  fn converts_to_and_from_palette() {
    let rgb = Rgb::new(0x33, 0x66, 0x99);
    let srgb: palette::Srgb<u8> = rgb.into();
    assert_eq!(format!("{srgb:x}"), "336699");
    assert_eq!(Rgb::from(srgb), rgb);
  }
}
