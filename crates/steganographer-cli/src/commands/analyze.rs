use std::path::PathBuf;

use clap::Args;

use crate::cli::progress_printer;
use crate::CliResult;

/// Estimates whether an image contains hidden data, no password needed
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Image to analyze
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub media: PathBuf,
}

impl AnalyzeArgs {
    pub fn run(self) -> CliResult<()> {
        let verdict =
            steganographer_core::commands::analyze(&self.media, progress_printer("Analyzing"))?;
        println!("{verdict}");

        Ok(())
    }
}
