use serde::{Deserialize, Serialize};

use super::{adjust::Adjustment, hex::Hex};

/// Two shades of a colour suitable for a top-to-bottom gradient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gradient {
  pub light: Hex,
  pub dark: Hex,
}

/// Options for [`crate::colour::ColourModel::css_gradient`].
#[derive(Debug, Clone, PartialEq)]
pub struct CssGradientOptions {
  /// How far the contrast shade is from the base colour.
  pub amount: Adjustment,
  /// Include the `-webkit-gradient`, `-moz-` and `-o-` declarations for old browsers.
  pub vintage_browsers: bool,
  /// Written after every declaration. Defaults to a newline, one declaration per line;
  /// set it to `""` for the whole block on a single line.
  pub suffix: String,
  /// Written before every declaration.
  pub prefix: String,
}

impl Default for CssGradientOptions {
  fn default() -> Self {
    CssGradientOptions {
      amount: Adjustment::default(),
      vintage_browsers: false,
      suffix: "\n".to_string(),
      prefix: String::new(),
    }
  }
}

/// Renders the cross-browser CSS declarations for a gradient over `base`.
pub fn css_gradient(base: &Hex, gradient: &Gradient, opts: &CssGradientOptions) -> String {
  let light = gradient.light.to_css();
  let dark = gradient.dark.to_css();

  let mut decls = vec![
    // flat fallback
    format!("background-color: {};", base.to_css()),
    // IE
    format!(
      "filter: progid:DXImageTransform.Microsoft.gradient(startColorstr='{light}', endColorstr='{dark}');"
    ),
  ];

  // Safari 4+, Chrome 1-9
  if opts.vintage_browsers {
    decls.push(format!(
      "background-image: -webkit-gradient(linear, 0% 0%, 0% 100%, from({light}), to({dark}));"
    ));
  }

  // Safari 5.1+, Mobile Safari, Chrome 10+
  decls.push(format!(
    "background-image: -webkit-linear-gradient(top, {light}, {dark});"
  ));

  if opts.vintage_browsers {
    // Firefox 3.6+
    decls.push(format!(
      "background-image: -moz-linear-gradient(top, {light}, {dark});"
    ));
    // Opera 11.10+
    decls.push(format!(
      "background-image: -o-linear-gradient(top, {light}, {dark});"
    ));
  }

  decls.push(format!(
    "background-image: linear-gradient(to bottom, {light}, {dark});"
  ));

  decls
    .iter()
    .map(|d| format!("{}{}{}", opts.prefix, d, opts.suffix))
    .collect()
}
