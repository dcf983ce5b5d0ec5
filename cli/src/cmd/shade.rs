use clap::Args;
use colour_model::{Adjustment, ColourModel, CssGradientOptions};
use log::debug;

use super::ShadeArgs;
use crate::{error::CliError, output};

#[derive(Args, Debug)]
pub struct GradientArgs {
  #[clap(flatten)]
  shade: ShadeArgs,

  /// Print CSS declarations instead of the light / dark pair
  #[clap(long, action)]
  css: bool,

  /// Include declarations for old WebKit, Firefox and Opera releases
  #[clap(long, action, requires = "css")]
  vintage: bool,

  /// Written before every CSS declaration
  #[clap(long, value_parser, requires = "css")]
  prefix: Option<String>,

  /// Written after every CSS declaration (default: a newline)
  #[clap(long, value_parser, requires = "css")]
  suffix: Option<String>,
}

impl GradientArgs {
  fn css_options(&self) -> CssGradientOptions {
    let defaults = CssGradientOptions::default();
    CssGradientOptions {
      amount: self.shade.adjustment(),
      vintage_browsers: self.vintage,
      suffix: self.suffix.clone().unwrap_or(defaults.suffix),
      prefix: self.prefix.clone().unwrap_or(defaults.prefix),
    }
  }
}

pub fn run_darken(colour: &str, amount: Adjustment, json: bool) -> Result<String, CliError> {
  let model = ColourModel::new(colour)?;
  debug!("darkening {model} by {amount:?}");
  output::hex(&model.darken(amount), json)
}

pub fn run_lighten(colour: &str, amount: Adjustment, json: bool) -> Result<String, CliError> {
  let model = ColourModel::new(colour)?;
  debug!("lightening {model} by {amount:?}");
  output::hex(&model.lighten(amount), json)
}

pub fn run_gradient(colour: &str, args: &GradientArgs, json: bool) -> Result<String, CliError> {
  let model = ColourModel::new(colour)?;

  if args.css {
    let css = model.css_gradient(&args.css_options());
    return output::value(&css, json, |s| s.trim_end_matches('\n').to_string());
  }

  let gradient = model.make_gradient(args.shade.adjustment());
  output::value(&gradient, json, |g| {
    format!("light: {}\ndark: {}", g.light.to_css(), g.dark.to_css())
  })
}

#[cfg(test)]
mod tests {
  use super::{run_darken, run_gradient, GradientArgs, ShadeArgs};
  use clap::Parser;
  use colour_model::Adjustment;

  #[derive(Parser)]
  struct Harness {
    #[clap(flatten)]
    args: GradientArgs,
  }

  fn gradient_args(args: &[&str]) -> GradientArgs {
    let mut argv = vec!["gradient"];
    argv.extend(args);
    Harness::try_parse_from(argv).unwrap().args
  }

  #[test]
  fn gradient_pair() {
    let out = run_gradient("336699", &gradient_args(&[]), false).unwrap();
    assert_eq!(out, "light: #4080bf\ndark: #336699");
  }

  #[test]
  fn gradient_pair_as_json() {
    let out = run_gradient("336699", &gradient_args(&[]), true).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["light"], "4080bf");
    assert_eq!(parsed["dark"], "336699");
  }

  #[test]
  fn gradient_css_with_prefix() {
    let out = run_gradient("336699", &gradient_args(&["--css", "--prefix", "  "]), false).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "  background-color: #336699;");
    assert_eq!(
      lines[3],
      "  background-image: linear-gradient(to bottom, #4080bf, #336699);"
    );
  }

  #[test]
  fn vintage_requires_css() {
    let mut argv = vec!["gradient", "--vintage"];
    assert!(Harness::try_parse_from(&argv).is_err());
    argv.push("--css");
    let args = Harness::try_parse_from(&argv).unwrap().args;
    let out = run_gradient("336699", &args, false).unwrap();
    assert_eq!(out.lines().count(), 7);
  }

  #[test]
  fn shade_args_pick_adjustment() {
    let args = gradient_args(&["--halfway"]);
    assert_eq!(args.shade.adjustment(), Adjustment::Halfway);

    let args: ShadeArgs = gradient_args(&["-a", "3"]).shade;
    assert_eq!(args.adjustment(), Adjustment::By(3));
  }

  #[test]
  fn darken_rejects_bad_hex() {
    assert!(run_darken("zzzzzz", Adjustment::default(), false).is_err());
  }
}
