use log::{trace, warn};

use super::{
  constants::{DEFAULT_ADJUST, MIX_AMOUNT_MAX},
  hsl::Hsl,
  rgb::Rgb,
};

/// How far `darken` / `lighten` should move a colour's lightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
  /// Move lightness by this many percentage points, clamped at 0 / 100.
  By(u8),

  /// Move lightness halfway towards black (darken) or white (lighten).
  Halfway,
}

impl Default for Adjustment {
  fn default() -> Self {
    Adjustment::By(DEFAULT_ADJUST)
  }
}

impl From<Option<u8>> for Adjustment {
  fn from(amount: Option<u8>) -> Self {
    match amount {
      Some(n) => Adjustment::By(n),
      None => Adjustment::Halfway,
    }
  }
}

pub fn darken_hsl(hsl: &Hsl, amount: Adjustment) -> Hsl {
  let lightness = match amount {
    Adjustment::By(n) => {
      let l = (hsl.lightness * 100.0) - n as f64;
      if l < 0.0 {
        0.0
      } else {
        l / 100.0
      }
    }
    Adjustment::Halfway => hsl.lightness / 2.0,
  };
  trace!("darken {:?}: lightness {} -> {}", amount, hsl.lightness, lightness);
  Hsl { lightness, ..*hsl }
}

pub fn lighten_hsl(hsl: &Hsl, amount: Adjustment) -> Hsl {
  let lightness = match amount {
    Adjustment::By(n) => {
      let l = (hsl.lightness * 100.0) + n as f64;
      if l > 100.0 {
        1.0
      } else {
        l / 100.0
      }
    }
    Adjustment::Halfway => hsl.lightness + (1.0 - hsl.lightness) / 2.0,
  };
  trace!("lighten {:?}: lightness {} -> {}", amount, hsl.lightness, lightness);
  Hsl { lightness, ..*hsl }
}

/// Blends two colours. `amount` is a bias in -100 ..= 100: 0 is an even mix,
/// 100 is all `a` and -100 is all `b`. Values outside that range are clamped.
///
/// Blended channels are truncated, not rounded.
pub fn mix_rgb(a: &Rgb, b: &Rgb, amount: i32) -> Rgb {
  let clamped = amount.clamp(-MIX_AMOUNT_MAX, MIX_AMOUNT_MAX);
  if clamped != amount {
    warn!("mix amount {amount} is outside -100 ..= 100, using {clamped}");
  }

  let ratio_a = (clamped as f64 + 100.0) / 100.0;
  let ratio_b = 2.0 - ratio_a;
  let blend = |x: u8, y: u8| ((x as f64 * ratio_a + y as f64 * ratio_b) / 2.0).clamp(0.0, 255.0) as u8;

  Rgb::new(
    blend(a.red, b.red),
    blend(a.green, b.green),
    blend(a.blue, b.blue),
  )
}

/// Rotates the hue by 180 degrees. A hue of exactly 180 becomes 360, which
/// converts the same as 0.
pub fn complement_hsl(hsl: &Hsl) -> Hsl {
  let hue = if hsl.hue > 180.0 {
    hsl.hue - 180.0
  } else {
    hsl.hue + 180.0
  };
  Hsl { hue, ..*hsl }
}

#[cfg(test)]
mod tests {
  use super::{complement_hsl, darken_hsl, lighten_hsl, mix_rgb, Adjustment};
  use crate::hex::{hex_to_rgb, rgb_to_hex};
  use crate::hsl::{hex_to_hsl, Hsl};
  use crate::rgb::Rgb;

  #[test]
  fn default_adjustment_is_ten_points() {
    assert_eq!(Adjustment::default(), Adjustment::By(10));
    assert_eq!(Adjustment::from(None), Adjustment::Halfway);
    assert_eq!(Adjustment::from(Some(0)), Adjustment::By(0));
  }

  #[test]
  fn darken_clamps_at_black() {
    let hsl = Hsl::new(210.0, 0.5, 0.05);
    assert_eq!(darken_hsl(&hsl, Adjustment::By(10)).lightness, 0.0);
  }

  #[test]
  fn lighten_clamps_at_white() {
    let hsl = Hsl::new(210.0, 0.5, 0.95);
    assert_eq!(lighten_hsl(&hsl, Adjustment::By(10)).lightness, 1.0);
  }

  #[test]
  fn halfway_adjustments() {
    let hsl = Hsl::new(210.0, 0.5, 0.4);
    assert_eq!(darken_hsl(&hsl, Adjustment::Halfway).lightness, 0.2);
    assert!((lighten_hsl(&hsl, Adjustment::Halfway).lightness - 0.7).abs() < 1e-12);
  }

  #[test]
  fn zero_adjustment_is_not_halfway() {
    let hsl = hex_to_hsl("336699").unwrap();
    let same = darken_hsl(&hsl, Adjustment::By(0));
    assert!((same.lightness - hsl.lightness).abs() < 1e-12);
    assert_eq!(same.hue, hsl.hue);
    assert_eq!(same.saturation, hsl.saturation);
  }

  #[test]
  fn mix_truncates() {
    let white = Rgb::white();
    let red = Rgb::new(0xff, 0, 0);
    assert_eq!(rgb_to_hex(&mix_rgb(&white, &red, 0)), "ff7f7f");
  }

  #[test]
  fn mix_extremes_select_one_side() {
    let a = hex_to_rgb("8d43b4").unwrap();
    let b = hex_to_rgb("35cf64").unwrap();
    assert_eq!(mix_rgb(&a, &b, 100), a);
    assert_eq!(mix_rgb(&a, &b, -100), b);
    // clamped
    assert_eq!(mix_rgb(&a, &b, 250), a);
    assert_eq!(mix_rgb(&a, &b, -250), b);
  }

  #[test]
  fn mix_bias() {
    let black = Rgb::black();
    let white = Rgb::white();
    // 1.5 * 0 + 0.5 * 255 = 127.5, halved and truncated
    assert_eq!(mix_rgb(&black, &white, 50), Rgb::new(63, 63, 63));
    assert_eq!(mix_rgb(&black, &white, -50), Rgb::new(191, 191, 191));
  }

  #[test]
  fn complement_rotates_hue() {
    assert_eq!(complement_hsl(&Hsl::new(0.0, 1.0, 0.5)).hue, 180.0);
    assert_eq!(complement_hsl(&Hsl::new(180.0, 1.0, 0.5)).hue, 360.0);
    assert_eq!(complement_hsl(&Hsl::new(270.0, 1.0, 0.5)).hue, 90.0);
  }
}
