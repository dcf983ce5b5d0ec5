use serde::{Deserialize, Serialize};

use super::{error::ColourError, hex::Hex, rgb::Rgb};

/// Hue / Saturation / Value, with every component a fraction in 0 ..= 1.
///
/// Unlike [`crate::hsl::Hsl`], the hue here is a fraction of a full turn rather than degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsv {
  pub hue: f64,
  pub saturation: f64,
  pub value: f64,
}

impl Hsv {
  pub fn new(hue: f64, saturation: f64, value: f64) -> Self {
    Hsv {
      hue,
      saturation,
      value,
    }
  }

  pub fn validate(&self) -> Result<(), ColourError> {
    let fields = [
      ("hue", self.hue),
      ("saturation", self.saturation),
      ("value", self.value),
    ];
    for (name, v) in fields {
      if !(0.0..=1.0).contains(&v) {
        return Err(ColourError::InvalidArgument(format!(
          "HSV {name} {v} is outside the range 0 ..= 1"
        )));
      }
    }
    Ok(())
  }

  pub fn to_hex(&self) -> Result<Hex, ColourError> {
    self.validate()?;

    let Hsv {
      saturation: s,
      value: v,
      ..
    } = *self;
    let h = self.hue * 6.0;
    let sector = h.floor();
    let frac = h - sector;

    let m = v * (1.0 - s);
    let n = v * (1.0 - s * frac);
    let k = v * (1.0 - s * (1.0 - frac));

    // sector 6 only happens for hue == 1
    let (r, g, b) = match sector as u8 {
      0 => (v, k, m),
      1 => (n, v, m),
      2 => (m, v, k),
      3 => (m, n, v),
      4 => (k, m, v),
      _ => (v, m, n),
    };

    Ok(Hex::from_rgb(Rgb::new(
      to_channel(r),
      to_channel(g),
      to_channel(b),
    )))
  }
}

impl TryFrom<&[f64]> for Hsv {
  type Error = ColourError;

  fn try_from(components: &[f64]) -> Result<Self, Self::Error> {
    match *components {
      [hue, saturation, value] => {
        let hsv = Hsv::new(hue, saturation, value);
        hsv.validate()?;
        Ok(hsv)
      }
      _ => Err(ColourError::InvalidArgument(format!(
        "HSV value requires exactly 3 components, but received {}",
        components.len()
      ))),
    }
  }
}

fn to_channel(v: f64) -> u8 {
  (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Converts an `[H, S, V]` sequence into HEX. All three components are fractions in 0 ..= 1.
pub fn hsv_to_hex(hsv: &[f64]) -> Result<Hex, ColourError> {
  Hsv::try_from(hsv)?.to_hex()
}

/// Converts a HEX string into HSV, with the hue as a fraction in 0 .. 1.
pub fn hex_to_hsv(hex: &str) -> Result<Hsv, ColourError> {
  let rgb = Hex::parse(hex)?.to_rgb();
  Ok(rgb_to_hsv(&rgb))
}

pub fn rgb_to_hsv(rgb: &Rgb) -> Hsv {
  let r = rgb.red as f64 / 255.0;
  let g = rgb.green as f64 / 255.0;
  let b = rgb.blue as f64 / 255.0;

  let max = r.max(g).max(b);
  let min = r.min(g).min(b);
  let delta = max - min;

  let saturation = if max == 0.0 { 0.0 } else { delta / max };

  let mut hue = if delta == 0.0 {
    0.0
  } else if max == r {
    ((g - b) / delta) / 6.0
  } else if max == g {
    ((b - r) / delta + 2.0) / 6.0
  } else {
    ((r - g) / delta + 4.0) / 6.0
  };
  if hue < 0.0 {
    hue += 1.0;
  }

  Hsv::new(hue, saturation, max)
}

#[cfg(test)]
mod tests {
  use super::{hex_to_hsv, hsv_to_hex, Hsv};
  use rand::Rng;

  #[test]
  fn hsv_to_hex_known_values() {
    assert_eq!(hsv_to_hex(&[0.0, 0.0, 0.0]).unwrap(), "000000");
    assert_eq!(hsv_to_hex(&[120.0 / 360.0, 1.0, 1.0]).unwrap(), "00ff00");
    assert_eq!(hsv_to_hex(&[240.0 / 360.0, 1.0, 1.0]).unwrap(), "0000ff");
    assert_eq!(hsv_to_hex(&[60.0 / 360.0, 1.0, 1.0]).unwrap(), "ffff00");
    assert_eq!(hsv_to_hex(&[300.0 / 360.0, 1.0, 1.0]).unwrap(), "ff00ff");
    assert_eq!(hsv_to_hex(&[0.5, 1.0, 0.5]).unwrap(), "008080");
    assert_eq!(hsv_to_hex(&[0.0, 0.0, 0.75]).unwrap(), "bfbfbf");
    assert_eq!(hsv_to_hex(&[0.0, 0.0, 1.0]).unwrap(), "ffffff");
  }

  #[test]
  fn hue_of_one_uses_the_last_sector() {
    // frac is 0 at the boundary, so N == V
    assert_eq!(hsv_to_hex(&[1.0, 1.0, 1.0]).unwrap(), "ff00ff");
    assert_eq!(hsv_to_hex(&[1.0, 0.0, 1.0]).unwrap(), "ffffff");
  }

  #[test]
  fn wrong_arity_is_invalid_argument() {
    assert!(hsv_to_hex(&[]).unwrap_err().is_invalid_argument());
    assert!(hsv_to_hex(&[0.5, 1.0]).unwrap_err().is_invalid_argument());
    assert!(hsv_to_hex(&[0.5, 1.0, 1.0, 1.0]).unwrap_err().is_invalid_argument());
  }

  #[test]
  fn out_of_range_is_invalid_argument() {
    let bad: [[f64; 3]; 9] = [
      [-0.01, -0.5, -0.5],
      [360.0, 1.01, 1.01],
      [-0.01, 0.5, 0.5],
      [0.01, -0.5, 0.5],
      [0.01, 0.5, -0.5],
      [360.0, 0.5, 0.5],
      [1.01, 0.5, 0.5],
      [0.5, 1.01, 0.5],
      [0.5, 0.5, 1.01],
    ];
    for hsv in bad {
      match hsv_to_hex(&hsv) {
        Err(e) => assert!(e.is_invalid_argument(), "{hsv:?}: {e}"),
        Ok(hex) => panic!("expected error for {hsv:?}, got {hex}"),
      }
    }
    assert!(hsv_to_hex(&[f64::NAN, 0.5, 0.5]).unwrap_err().is_invalid_argument());
  }

  #[test]
  fn hex_to_hsv_known_values() {
    assert_eq!(hex_to_hsv("ff0000").unwrap(), Hsv::new(0.0, 1.0, 1.0));
    assert_eq!(hex_to_hsv("000000").unwrap(), Hsv::new(0.0, 0.0, 0.0));
    assert_eq!(hex_to_hsv("ffffff").unwrap(), Hsv::new(0.0, 0.0, 1.0));
    let green = hex_to_hsv("0f0").unwrap();
    assert!((green.hue - 1.0 / 3.0).abs() < 1e-12);
    assert!(hex_to_hsv("0f").unwrap_err().is_invalid_format());
  }

  #[test]
  fn hsv_round_trip() {
    let mut rng = rand::thread_rng();
    for _ in 0..5000 {
      let h = format!("{:06x}", rng.gen_range(0..0x1000000u32));
      let hsv = hex_to_hsv(&h).unwrap();
      assert_eq!(hsv.to_hex().unwrap(), h.as_str(), "{hsv:?}");
    }
  }
}
