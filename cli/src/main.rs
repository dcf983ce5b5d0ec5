mod cmd;
mod error;
mod output;

use crate::cmd::CliCommand;

use clap::Parser;
use log::error;

#[derive(Parser)]
#[clap(version, about, long_about = None)]
struct Cli {
  /// Print results as JSON instead of plain text
  #[clap(long, global = true, action)]
  json: bool,

  #[clap(subcommand)]
  command: CliCommand,
}

fn main() {
  let default_log_level = "warn";
  let env = env_logger::Env::default().filter_or("RUST_LOG", default_log_level);
  env_logger::init_from_env(env);

  let cli = Cli::parse();
  match cli.command.run(cli.json) {
    Ok(out) => println!("{out}"),
    Err(err) => {
      error!("{err}");
      eprintln!("error: {err}");
      std::process::exit(1);
    }
  }
}
