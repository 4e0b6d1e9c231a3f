use std::io::{self, Write};

use clap::{Parser, Subcommand};
use steganographer_core::{SteganoError, StegoOptions};

use crate::commands::*;
use crate::CliResult;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Marker written in front of the hidden file, both sides must use the same
    #[arg(long, global = true, default_value = steganographer_core::media::DEFAULT_MARKER)]
    pub marker: String,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn options(&self) -> StegoOptions {
        StegoOptions::default().with_marker(self.marker.as_str())
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    Analyze(analyze::AnalyzeArgs),
    Inspect(inspect::InspectArgs),
}

/// Takes the password from the command line, or asks for it.
/// Hiding asks twice so a typo does not lock the file away.
pub fn password_or_prompt(password: Option<String>, confirm: bool) -> CliResult<String> {
    if let Some(password) = password {
        return Ok(password);
    }

    let mut prompt = dialoguer::Password::new()
        .with_prompt("Password")
        .allow_empty_password(true);
    if confirm {
        prompt = prompt.with_confirmation("Repeat password", "Passwords do not match");
    }

    prompt
        .interact()
        .map_err(|e| SteganoError::IoError(io::Error::new(io::ErrorKind::Other, e)))
}

/// prints `label: n%` on one line of stderr
pub fn progress_printer(label: &'static str) -> impl FnMut(u8) + 'static {
    move |percent| {
        let mut stderr = io::stderr().lock();
        let _ = write!(stderr, "\r{label}: {percent:>3}%");
        if percent >= 100 {
            let _ = writeln!(stderr);
        }
        let _ = stderr.flush();
    }
}
