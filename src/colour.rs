//! The [`ColourModel`] value type.
//!
//! A `ColourModel` caches the same colour as HEX, RGB and HSL. Setting a single channel
//! always cascades through HEX, which is the pivot representation:
//!
//! ```text
//!   set red/green/blue:              set hue/saturation/lightness:
//!
//!     RGB ──► HEX ──► HSL              HSL ──► HEX ──► RGB
//! ```
//!
//! There is never a direct RGB <-> HSL conversion, so every observation of the three
//! representations agrees up to 8-bit rounding.

use log::{debug, trace};
use std::fmt::Display;
use std::str::FromStr;

use super::{
  adjust::{complement_hsl, darken_hsl, lighten_hsl, mix_rgb, Adjustment},
  classify,
  constants::DEFAULT_LUMA_THRESHOLD,
  error::ColourError,
  gradient::{css_gradient, CssGradientOptions, Gradient},
  hex::Hex,
  hsl::{rgb_to_hsl, Hsl},
  rgb::Rgb,
};

/// Identifies one component of a colour, for generic get / set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
  Red,
  Green,
  Blue,
  Hue,
  Saturation,
  Lightness,
}

impl Channel {
  pub fn all() -> [Channel; 6] {
    use Channel::*;
    [Red, Green, Blue, Hue, Saturation, Lightness]
  }

  /// True for the channels that live in the RGB representation.
  pub fn is_rgb(&self) -> bool {
    matches!(self, Channel::Red | Channel::Green | Channel::Blue)
  }
}

impl FromStr for Channel {
  type Err = ColourError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    use Channel::*;
    match s.to_ascii_lowercase().as_str() {
      "red" | "r" => Ok(Red),
      "green" | "g" => Ok(Green),
      "blue" | "b" => Ok(Blue),
      "hue" | "h" => Ok(Hue),
      "saturation" | "s" => Ok(Saturation),
      "lightness" | "light" | "l" => Ok(Lightness),
      _ => Err(ColourError::InvalidArgument(format!("unknown colour channel \"{s}\""))),
    }
  }
}

impl Display for Channel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    use Channel::*;
    let name = match self {
      Red => "red",
      Green => "green",
      Blue => "blue",
      Hue => "hue",
      Saturation => "saturation",
      Lightness => "lightness",
    };
    f.write_str(name)
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColourModel {
  hex: Hex,
  rgb: Rgb,
  hsl: Hsl,
}

impl ColourModel {
  /// Creates a colour from a HEX string, e.g. `"#336699"`, `"336699"` or `"369"`.
  pub fn new(hex: &str) -> Result<Self, ColourError> {
    Ok(Self::from_hex(Hex::parse(hex)?))
  }

  pub fn from_hex(hex: Hex) -> Self {
    let rgb = hex.to_rgb();
    let hsl = rgb_to_hsl(&rgb);
    ColourModel { hex, rgb, hsl }
  }

  pub fn from_rgb(rgb: Rgb) -> Self {
    let hex = Hex::from_rgb(rgb);
    let hsl = rgb_to_hsl(&hex.to_rgb());
    ColourModel { hex, rgb, hsl }
  }

  /// Creates a colour from HSL. The given HSL is kept as-is; HEX and RGB are derived from it.
  pub fn from_hsl(hsl: &Hsl) -> Result<Self, ColourError> {
    hsl.validate()?;
    let hex = hsl.to_hex_unchecked();
    let rgb = hex.to_rgb();
    Ok(ColourModel { hex, rgb, hsl: *hsl })
  }

  pub fn hex(&self) -> &Hex {
    &self.hex
  }

  pub fn rgb(&self) -> Rgb {
    self.rgb
  }

  pub fn hsl(&self) -> Hsl {
    self.hsl
  }

  // region: Channel accessors

  pub fn get(&self, channel: Channel) -> f64 {
    use Channel::*;
    match channel {
      Red => self.rgb.red as f64,
      Green => self.rgb.green as f64,
      Blue => self.rgb.blue as f64,
      Hue => self.hsl.hue,
      Saturation => self.hsl.saturation,
      Lightness => self.hsl.lightness,
    }
  }

  /// Sets a single channel and re-derives the other two representations.
  ///
  /// RGB channels take a value in 0 ..= 255 (rounded to the nearest integer). Hue is in
  /// degrees, 0 ..= 360, and saturation / lightness are in 0 ..= 1. On error the colour
  /// is left unchanged.
  pub fn set(&mut self, channel: Channel, value: f64) -> Result<(), ColourError> {
    use Channel::*;

    if channel.is_rgb() {
      if !(0.0..=255.0).contains(&value) {
        return Err(ColourError::InvalidArgument(format!(
          "{channel} value {value} is outside the range 0 ..= 255"
        )));
      }
      let v = value.round() as u8;
      let mut rgb = self.rgb;
      match channel {
        Red => rgb.red = v,
        Green => rgb.green = v,
        _ => rgb.blue = v,
      }
      self.apply_rgb(rgb);
    } else {
      let mut hsl = self.hsl;
      match channel {
        Hue => hsl.hue = value,
        Saturation => hsl.saturation = value,
        _ => hsl.lightness = value,
      }
      hsl.validate()?;
      self.apply_hsl(hsl);
    }

    debug!("set {channel} to {value}, colour is now #{}", self.hex);
    Ok(())
  }

  // RGB -> HEX -> HSL
  fn apply_rgb(&mut self, rgb: Rgb) {
    self.rgb = rgb;
    self.hex = Hex::from_rgb(rgb);
    self.hsl = rgb_to_hsl(&self.hex.to_rgb());
  }

  // HSL -> HEX -> RGB
  fn apply_hsl(&mut self, hsl: Hsl) {
    self.hsl = hsl;
    self.hex = hsl.to_hex_unchecked();
    self.rgb = self.hex.to_rgb();
  }

  pub fn red(&self) -> u8 {
    self.rgb.red
  }

  pub fn green(&self) -> u8 {
    self.rgb.green
  }

  pub fn blue(&self) -> u8 {
    self.rgb.blue
  }

  pub fn hue(&self) -> f64 {
    self.hsl.hue
  }

  pub fn saturation(&self) -> f64 {
    self.hsl.saturation
  }

  pub fn lightness(&self) -> f64 {
    self.hsl.lightness
  }

  pub fn set_red(&mut self, red: u8) {
    self.apply_rgb(Rgb { red, ..self.rgb });
    debug!("set red to {red}, colour is now #{}", self.hex);
  }

  pub fn set_green(&mut self, green: u8) {
    self.apply_rgb(Rgb { green, ..self.rgb });
    debug!("set green to {green}, colour is now #{}", self.hex);
  }

  pub fn set_blue(&mut self, blue: u8) {
    self.apply_rgb(Rgb { blue, ..self.rgb });
    debug!("set blue to {blue}, colour is now #{}", self.hex);
  }

  pub fn set_hue(&mut self, hue: f64) -> Result<(), ColourError> {
    self.set(Channel::Hue, hue)
  }

  pub fn set_saturation(&mut self, saturation: f64) -> Result<(), ColourError> {
    self.set(Channel::Saturation, saturation)
  }

  pub fn set_lightness(&mut self, lightness: f64) -> Result<(), ColourError> {
    self.set(Channel::Lightness, lightness)
  }

  // endregion

  // region: Derived colours

  /// Returns a darker shade. With [`Adjustment::Halfway`], the shade halfway to black.
  pub fn darken(&self, amount: Adjustment) -> Hex {
    let hex = darken_hsl(&self.hsl, amount).to_hex_unchecked();
    trace!("darken #{} by {:?}: #{}", self.hex, amount, hex);
    hex
  }

  /// Returns a lighter shade. With [`Adjustment::Halfway`], the shade halfway to white.
  pub fn lighten(&self, amount: Adjustment) -> Hex {
    let hex = lighten_hsl(&self.hsl, amount).to_hex_unchecked();
    trace!("lighten #{} by {:?}: #{}", self.hex, amount, hex);
    hex
  }

  /// Mixes this colour with `other`. See [`mix_rgb`] for how `amount` biases the blend.
  pub fn mix(&self, other: &Hex, amount: i32) -> Hex {
    let mixed = mix_rgb(&self.rgb, &other.to_rgb(), amount);
    let hex = Hex::from_rgb(mixed);
    trace!("mix #{} with #{} ({amount}): #{}", self.hex, other, hex);
    hex
  }

  /// Returns a light / dark pair. Light colours are darkened to make the pair, dark
  /// colours are lightened; the base colour is kept as the other end.
  pub fn make_gradient(&self, amount: Adjustment) -> Gradient {
    if self.is_light() {
      Gradient {
        light: self.hex.clone(),
        dark: self.darken(amount),
      }
    } else {
      Gradient {
        light: self.lighten(amount),
        dark: self.hex.clone(),
      }
    }
  }

  pub fn complementary(&self) -> Hex {
    complement_hsl(&self.hsl).to_hex_unchecked()
  }

  pub fn css_gradient(&self, opts: &CssGradientOptions) -> String {
    let gradient = self.make_gradient(opts.amount);
    css_gradient(&self.hex, &gradient, opts)
  }

  // endregion

  // region: Classification

  pub fn luma(&self) -> f64 {
    classify::luma(&self.rgb)
  }

  /// Light with the default threshold of 130.
  pub fn is_light(&self) -> bool {
    self.is_lighter_than(DEFAULT_LUMA_THRESHOLD)
  }

  /// Dark with the default threshold of 130.
  pub fn is_dark(&self) -> bool {
    self.is_darker_than(DEFAULT_LUMA_THRESHOLD)
  }

  pub fn is_lighter_than(&self, threshold: u32) -> bool {
    classify::is_light(&self.rgb, threshold)
  }

  pub fn is_darker_than(&self, threshold: u32) -> bool {
    classify::is_dark(&self.rgb, threshold)
  }

  /// Classifies any HEX colour without building a model for it.
  pub fn is_light_hex(hex: &Hex, threshold: u32) -> bool {
    classify::is_light(&hex.to_rgb(), threshold)
  }

  pub fn is_dark_hex(hex: &Hex, threshold: u32) -> bool {
    classify::is_dark(&hex.to_rgb(), threshold)
  }

  // endregion
}

impl FromStr for ColourModel {
  type Err = ColourError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    ColourModel::new(s)
  }
}

impl From<Rgb> for ColourModel {
  fn from(rgb: Rgb) -> Self {
    ColourModel::from_rgb(rgb)
  }
}

impl From<Hex> for ColourModel {
  fn from(hex: Hex) -> Self {
    ColourModel::from_hex(hex)
  }
}

impl Display for ColourModel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "#{}", self.hex)
  }
}
