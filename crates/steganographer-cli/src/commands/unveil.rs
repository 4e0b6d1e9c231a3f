use std::path::PathBuf;

use clap::Args;
use steganographer_core::StegoOptions;

use crate::cli::{password_or_prompt, progress_printer};
use crate::CliResult;

/// Unveils a hidden file from an image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Password used for hiding, asked for if missing
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Source image that contains the hidden file
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image source file",
        required = true
    )]
    pub media: PathBuf,

    /// Unveiled file will be stored in that folder
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output folder",
        required = true
    )]
    pub output_folder: PathBuf,
}

impl UnveilArgs {
    pub fn run(self, options: StegoOptions) -> CliResult<()> {
        let password = password_or_prompt(self.password, false)?;
        let unveiled = steganographer_core::commands::unveil(
            &self.media,
            &self.output_folder,
            Some(password),
            options,
            progress_printer("Decoding"),
        )?;
        println!("Unveiled {}", unveiled.display());

        Ok(())
    }
}
