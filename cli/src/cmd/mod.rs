mod convert;
mod inspect;
mod mix;
mod set;
mod shade;

use clap::{Args, Subcommand};
use colour_model::{constants::DEFAULT_ADJUST, constants::DEFAULT_LUMA_THRESHOLD, Adjustment};

use crate::error::CliError;

use self::{
  convert::{run_hex_to_hsv, run_hsl_to_hex, run_hsv_to_hex, run_rgb_to_hex},
  inspect::{run_classify, run_info},
  mix::{run_complement, run_mix},
  set::run_set,
  shade::{run_darken, run_gradient, run_lighten, GradientArgs},
};

#[derive(Args, Debug)]
pub struct ShadeArgs {
  /// Percentage points to move the lightness by
  #[clap(short, long, value_parser, default_value_t = DEFAULT_ADJUST, conflicts_with = "halfway")]
  amount: u8,

  /// Move halfway towards black / white instead of by a fixed amount
  #[clap(long, action)]
  halfway: bool,
}

impl ShadeArgs {
  pub fn adjustment(&self) -> Adjustment {
    if self.halfway {
      Adjustment::Halfway
    } else {
      Adjustment::By(self.amount)
    }
  }
}

#[derive(Subcommand)]
pub enum CliCommand {
  /// Shows every representation of a colour
  Info {
    #[clap(value_parser)]
    colour: String,
  },

  /// Returns a darker shade of a colour
  Darken {
    #[clap(value_parser)]
    colour: String,
    #[clap(flatten)]
    shade: ShadeArgs,
  },

  /// Returns a lighter shade of a colour
  Lighten {
    #[clap(value_parser)]
    colour: String,
    #[clap(flatten)]
    shade: ShadeArgs,
  },

  /// Mixes two colours
  Mix {
    #[clap(value_parser)]
    colour: String,
    #[clap(value_parser)]
    other: String,
    /// Bias from -100 (all OTHER) through 0 (even) to 100 (all COLOUR)
    #[clap(short, long, value_parser, default_value_t = 0, allow_hyphen_values = true)]
    amount: i32,
  },

  /// Returns the complementary colour (hue rotated by 180 degrees)
  Complement {
    #[clap(value_parser)]
    colour: String,
  },

  /// Returns a light / dark pair, or CSS gradient declarations with --css
  Gradient {
    #[clap(value_parser)]
    colour: String,
    #[clap(flatten)]
    gradient: GradientArgs,
  },

  /// Reports whether a colour is light or dark
  Classify {
    #[clap(value_parser)]
    colour: String,
    #[clap(long, value_parser, default_value_t = DEFAULT_LUMA_THRESHOLD)]
    lighter_than: u32,
    #[clap(long, value_parser, default_value_t = DEFAULT_LUMA_THRESHOLD)]
    darker_than: u32,
  },

  /// Sets one channel (red, green, blue, hue, saturation, lightness) and prints the new colour
  Set {
    #[clap(value_parser)]
    colour: String,
    #[clap(value_parser)]
    channel: String,
    #[clap(value_parser, allow_hyphen_values = true)]
    value: f64,
  },

  /// Converts "r,g,b" to HEX
  RgbToHex {
    #[clap(value_parser)]
    rgb: String,
  },

  /// Converts "h,s,l" (hue in degrees) to HEX
  HslToHex {
    #[clap(value_parser)]
    hsl: String,
  },

  /// Converts H S V, each a fraction in 0..=1, to HEX
  HsvToHex {
    #[clap(value_parser, allow_hyphen_values = true)]
    components: Vec<f64>,
  },

  /// Converts HEX to HSV
  HexToHsv {
    #[clap(value_parser)]
    colour: String,
  },
}

impl CliCommand {
  pub fn run(&self, json: bool) -> Result<String, CliError> {
    match self {
      Self::Info { colour } => run_info(colour, json),

      Self::Darken { colour, shade } => run_darken(colour, shade.adjustment(), json),

      Self::Lighten { colour, shade } => run_lighten(colour, shade.adjustment(), json),

      Self::Mix {
        colour,
        other,
        amount,
      } => run_mix(colour, other, *amount, json),

      Self::Complement { colour } => run_complement(colour, json),

      Self::Gradient { colour, gradient } => run_gradient(colour, gradient, json),

      Self::Classify {
        colour,
        lighter_than,
        darker_than,
      } => run_classify(colour, *lighter_than, *darker_than, json),

      Self::Set {
        colour,
        channel,
        value,
      } => run_set(colour, channel, *value, json),

      Self::RgbToHex { rgb } => run_rgb_to_hex(rgb, json),

      Self::HslToHex { hsl } => run_hsl_to_hex(hsl, json),

      Self::HsvToHex { components } => run_hsv_to_hex(components, json),

      Self::HexToHsv { colour } => run_hex_to_hsv(colour, json),
    }
  }
}
