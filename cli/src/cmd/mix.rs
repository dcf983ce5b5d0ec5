use colour_model::{ColourModel, Hex};

use crate::{error::CliError, output};

pub fn run_mix(colour: &str, other: &str, amount: i32, json: bool) -> Result<String, CliError> {
  let model = ColourModel::new(colour)?;
  let other = Hex::parse(other)?;
  output::hex(&model.mix(&other, amount), json)
}

pub fn run_complement(colour: &str, json: bool) -> Result<String, CliError> {
  let model = ColourModel::new(colour)?;
  output::hex(&model.complementary(), json)
}
