use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColourError {
  /// A HEX string that isn't 3 or 6 hex digits once the optional `#` is stripped.
  InvalidFormat(String),

  /// A structured value (RGB, HSL, HSV, channel name) that is incomplete or out of range.
  InvalidArgument(String),
}

impl ColourError {
  pub fn is_invalid_format(&self) -> bool {
    matches!(self, ColourError::InvalidFormat(_))
  }

  pub fn is_invalid_argument(&self) -> bool {
    matches!(self, ColourError::InvalidArgument(_))
  }
}

impl Display for ColourError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    use ColourError::*;
    match self {
      InvalidFormat(msg) => write!(f, "invalid hex colour format: {msg}"),

      InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
    }
  }
}

impl std::error::Error for ColourError {}
