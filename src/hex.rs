use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

use super::{error::ColourError, rgb::Rgb};

/// A colour in canonical HEX form: six lowercase hex digits, no `#` prefix.
///
/// The `#` is only added at presentation boundaries, see [`Hex::to_css`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hex(String);

impl Hex {
  /// Validates and normalizes a HEX colour string.
  ///
  /// A single leading `#` is stripped, 3-digit shorthand is expanded by duplicating
  /// each digit (`abc` => `aabbcc`), and the result is lowercased.
  pub fn parse(s: &str) -> Result<Hex, ColourError> {
    let digits = s.strip_prefix('#').unwrap_or(s);

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
      return Err(ColourError::InvalidFormat(format!(
        "\"{s}\" contains non-hex characters"
      )));
    }

    let canonical = match digits.len() {
      3 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
      6 => digits.to_string(),
      n => {
        return Err(ColourError::InvalidFormat(format!(
          "HEX colour needs to be 6 or 3 digits long, but \"{s}\" has {n}"
        )))
      }
    };

    Ok(Hex(canonical.to_ascii_lowercase()))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Returns the colour with a `#` prefix, suitable for CSS.
  pub fn to_css(&self) -> String {
    format!("#{}", self.0)
  }

  pub fn to_rgb(&self) -> Rgb {
    let b = self.0.as_bytes();
    Rgb::new(
      byte_at(b[0], b[1]),
      byte_at(b[2], b[3]),
      byte_at(b[4], b[5]),
    )
  }

  pub fn from_rgb(rgb: Rgb) -> Hex {
    let c: palette::Srgb<u8> = rgb.into();
    Hex(format!("{c:x}"))
  }
}

// Hex strings are validated on construction, so every byte here is a hex digit.
fn nibble(c: u8) -> u8 {
  match c {
    b'0'..=b'9' => c - b'0',
    b'a'..=b'f' => c - b'a' + 10,
    b'A'..=b'F' => c - b'A' + 10,
    _ => 0,
  }
}

fn byte_at(hi: u8, lo: u8) -> u8 {
  (nibble(hi) << 4) | nibble(lo)
}

impl FromStr for Hex {
  type Err = ColourError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Hex::parse(s)
  }
}

impl TryFrom<String> for Hex {
  type Error = ColourError;

  fn try_from(s: String) -> Result<Self, Self::Error> {
    Hex::parse(&s)
  }
}

impl From<Hex> for String {
  fn from(hex: Hex) -> Self {
    hex.0
  }
}

impl From<Rgb> for Hex {
  fn from(rgb: Rgb) -> Self {
    Hex::from_rgb(rgb)
  }
}

impl AsRef<str> for Hex {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

impl Display for Hex {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.0)
  }
}

impl PartialEq<str> for Hex {
  fn eq(&self, other: &str) -> bool {
    self.0 == other
  }
}

impl PartialEq<&str> for Hex {
  fn eq(&self, other: &&str) -> bool {
    self.0 == *other
  }
}

/// Decodes a HEX string (with or without `#`, 3 or 6 digits) into its RGB channels.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColourError> {
  Ok(Hex::parse(hex)?.to_rgb())
}

/// Encodes RGB channels as six lowercase, zero-padded hex digits.
pub fn rgb_to_hex(rgb: &Rgb) -> Hex {
  Hex::from_rgb(*rgb)
}
