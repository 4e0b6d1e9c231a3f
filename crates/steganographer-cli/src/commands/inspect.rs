use std::path::PathBuf;

use clap::Args;
use steganographer_core::StegoOptions;

use crate::cli::password_or_prompt;
use crate::CliResult;

/// Shows the capacity of an image and the hidden file for a password
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Password used for hiding, asked for if missing
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Image to inspect
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub media: PathBuf,
}

impl InspectArgs {
    pub fn run(self, options: StegoOptions) -> CliResult<()> {
        let password = password_or_prompt(self.password, false)?;
        let inspection =
            steganographer_core::commands::inspect(&self.media, Some(password), options)?;
        println!("{inspection}");

        Ok(())
    }
}
