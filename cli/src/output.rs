use colour_model::Hex;
use serde::Serialize;

use crate::error::CliError;

/// Renders a HEX result, `#`-prefixed for plain output.
pub fn hex(value: &Hex, json: bool) -> Result<String, CliError> {
  if json {
    Ok(serde_json::to_string(value)?)
  } else {
    Ok(value.to_css())
  }
}

/// Renders any serializable value, falling back to `plain` for text output.
pub fn value<T: Serialize>(value: &T, json: bool, plain: impl FnOnce(&T) -> String) -> Result<String, CliError> {
  if json {
    Ok(serde_json::to_string_pretty(value)?)
  } else {
    Ok(plain(value))
  }
}
