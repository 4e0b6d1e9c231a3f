use std::path::{Path, PathBuf};

use super::{check_output_dir, run_in_background, Password, ProgressSink};
use crate::media::{HostImage, StegoOptions};
use crate::{SteganoError, Steganographer};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_image: Option<PathBuf>,
    output_folder: Option<PathBuf>,
    password: Password,
    options: StegoOptions,
    progress: ProgressSink,
}

impl UnveilApi {
    /// Use the given options, the marker must match the one used for hiding
    pub fn with_options(mut self, options: StegoOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the secret image that contains the file to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_image = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// The unveiled file is written into this existing folder
    pub fn into_output_folder(mut self, output_folder: impl AsRef<Path>) -> Self {
        self.output_folder = Some(output_folder.as_ref().to_path_buf());
        self
    }

    /// The password used for hiding
    pub fn using_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    pub fn on_progress<F: FnMut(u8) + 'static>(mut self, callback: F) -> Self {
        self.progress = ProgressSink::new(callback);
        self
    }

    /// Returns the path of the unveiled file
    pub fn execute(mut self) -> Result<PathBuf, SteganoError> {
        let Some(secret_image) = self.secret_image else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(output_folder) = self.output_folder else {
            return Err(SteganoError::TargetNotSet);
        };
        check_output_dir(&output_folder)?;

        let stegano = Steganographer::with_options(self.options);
        let decoder = stegano.decoder(
            HostImage::from_file(&secret_image)?,
            &output_folder,
            self.password.as_key(),
        )?;
        let decoder = run_in_background(&stegano, decoder, &mut self.progress)?;

        Ok(decoder.target().to_path_buf())
    }
}
