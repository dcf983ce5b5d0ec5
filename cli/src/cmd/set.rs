use colour_model::{Channel, ColourModel};
use log::info;

use crate::{error::CliError, output};

pub fn run_set(colour: &str, channel: &str, value: f64, json: bool) -> Result<String, CliError> {
  let mut model = ColourModel::new(colour)?;
  let channel: Channel = channel.parse()?;
  model.set(channel, value)?;
  info!("set {channel} to {value}: {model}");
  output::hex(model.hex(), json)
}
