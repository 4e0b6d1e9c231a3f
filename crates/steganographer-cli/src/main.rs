mod cli;
mod commands;

use clap::Parser;
use log::debug;

use crate::cli::{CliArgs, Commands};

pub type CliResult<T> = steganographer_core::Result<T>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let options = args.options();
    debug!("using marker {:?}", options.marker);

    match args.command {
        Commands::Hide(hide) => hide.run(options),
        Commands::Unveil(unveil) => unveil.run(options),
        Commands::Analyze(analyze) => analyze.run(),
        Commands::Inspect(inspect) => inspect.run(options),
    }
}
