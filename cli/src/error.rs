use colour_model::ColourError;
use std::fmt::Display;

#[derive(Debug)]
pub enum CliError {
  Colour(ColourError),

  Json(serde_json::Error),
}

impl From<ColourError> for CliError {
  fn from(e: ColourError) -> Self {
    CliError::Colour(e)
  }
}

impl From<serde_json::Error> for CliError {
  fn from(e: serde_json::Error) -> Self {
    CliError::Json(e)
  }
}

impl Display for CliError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    use CliError::*;
    match self {
      Colour(err) => write!(f, "{err}"),

      Json(err) => write!(f, "unable to encode output as json: {err}"),
    }
  }
}
