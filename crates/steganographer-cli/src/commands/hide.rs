use std::path::PathBuf;

use clap::Args;
use steganographer_core::StegoOptions;

use crate::cli::{password_or_prompt, progress_printer};
use crate::CliResult;

/// Hides a file in a PNG or JPEG image, the result is always a PNG image
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Password that decides where the bits go, asked for if missing
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Carrier image, PNG or JPEG, used readonly.
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as PNG file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// File to hide in the image
    #[arg(short = 'd', long = "data", value_name = "data file", required = true)]
    pub data_file: PathBuf,
}

impl HideArgs {
    pub fn run(self, options: StegoOptions) -> CliResult<()> {
        let password = password_or_prompt(self.password, true)?;
        steganographer_core::commands::hide(
            &self.media,
            &self.write_to_file,
            &self.data_file,
            Some(password),
            options,
            progress_printer("Encoding"),
        )?;
        println!("Hidden in {}", self.write_to_file.display());

        Ok(())
    }
}
