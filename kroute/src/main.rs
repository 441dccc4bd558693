use std::error::Error;
use std::io;

use clap::Parser;
use kroute::config::{Args, SolveConfig};

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()))
        .format_timestamp_millis()
        .init();

    let config = SolveConfig::from(args);
    log::debug!("config: {config:?}");

    let stdout = io::stdout();
    kroute::run(&config, &mut stdout.lock())
}
