use colour_model::{hsv::rgb_to_hsv, ColourModel, Hex, Hsl, Hsv, Rgb};
use serde::Serialize;

use crate::{error::CliError, output};

#[derive(Serialize)]
struct Info {
  hex: Hex,
  rgb: Rgb,
  hsl: Hsl,
  hsv: Hsv,
  luma: f64,
  light: bool,
  dark: bool,
}

#[derive(Serialize)]
struct Classification {
  luma: f64,
  light: bool,
  dark: bool,
}

pub fn run_info(colour: &str, json: bool) -> Result<String, CliError> {
  let model = ColourModel::new(colour)?;
  let rgb = model.rgb();
  let info = Info {
    hex: model.hex().clone(),
    rgb,
    hsl: model.hsl(),
    hsv: rgb_to_hsv(&rgb),
    luma: model.luma(),
    light: model.is_light(),
    dark: model.is_dark(),
  };

  output::value(&info, json, |i| {
    format!(
      "hex: {}\nrgb: {}\nhsl: {}\nhsv: {:.4},{:.4},{:.4}\nluma: {:.3}\nlight: {}\ndark: {}",
      i.hex.to_css(),
      i.rgb,
      i.hsl,
      i.hsv.hue,
      i.hsv.saturation,
      i.hsv.value,
      i.luma,
      i.light,
      i.dark,
    )
  })
}

pub fn run_classify(
  colour: &str,
  lighter_than: u32,
  darker_than: u32,
  json: bool,
) -> Result<String, CliError> {
  let model = ColourModel::new(colour)?;
  let classification = Classification {
    luma: model.luma(),
    light: model.is_lighter_than(lighter_than),
    dark: model.is_darker_than(darker_than),
  };

  output::value(&classification, json, |c| {
    format!("luma: {:.3}\nlight: {}\ndark: {}", c.luma, c.light, c.dark)
  })
}

#[cfg(test)]
mod tests {
  use super::{run_classify, run_info};

  #[test]
  fn info_lists_every_representation() {
    let out = run_info("#336699", false).unwrap();
    assert!(out.starts_with("hex: #336699\nrgb: 51,102,153\n"), "{out}");
    assert!(out.contains("luma: 92.565"), "{out}");
    assert!(out.ends_with("light: false\ndark: true"), "{out}");
  }

  #[test]
  fn info_as_json() {
    let out = run_info("ffffff", true).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["hex"], "ffffff");
    assert_eq!(parsed["rgb"]["R"], 255);
    assert_eq!(parsed["light"], true);
    assert_eq!(parsed["dark"], false);
  }

  #[test]
  fn classify_default_threshold() {
    let out = run_classify("ffffff", 130, 130, false).unwrap();
    assert_eq!(out, "luma: 255.000\nlight: true\ndark: false");
  }

  #[test]
  fn classify_rejects_bad_hex() {
    assert!(run_classify("#12", 130, 130, false).is_err());
  }
}
