use std::path::{Path, PathBuf};

use super::{check_output_image_path, run_in_background, Password, ProgressSink};
use crate::media::{HostImage, Persist, StegoOptions};
use crate::{SteganoError, Steganographer};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    file: Option<PathBuf>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    password: Password,
    options: StegoOptions,
    progress: ProgressSink,
}

impl HideApi {
    pub fn with_options(mut self, options: StegoOptions) -> Self {
        self.options = options;
        self
    }

    /// the file to hide, only its name without folders is stored
    pub fn with_file<A: AsRef<Path>>(mut self, data_file: A) -> Self {
        self.file = Some(data_file.as_ref().to_path_buf());
        self
    }

    /// the carrier, PNG or JPEG
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// where the image with the hidden file goes, always written as PNG
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Set the password
    pub fn with_password(mut self, password: &str) -> Self {
        self.password = password.into();
        self
    }

    /// Set the password
    /// If `None` is passed, the empty password is used
    pub fn use_password<S: AsRef<str>>(mut self, password: Option<S>) -> Self {
        self.password = password.map(|s| s.as_ref().to_string()).into();
        self
    }

    pub fn on_progress<F: FnMut(u8) + 'static>(mut self, callback: F) -> Self {
        self.progress = ProgressSink::new(callback);
        self
    }

    pub fn execute(mut self) -> Result<(), SteganoError> {
        let Some(image) = self.image else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(SteganoError::TargetNotSet);
        };
        let Some(file) = self.file else {
            return Err(SteganoError::MissingPayload);
        };
        check_output_image_path(&output)?;

        let stegano = Steganographer::with_options(self.options);
        let encoder = stegano.encoder(HostImage::from_file(&image)?, &file, self.password.as_key())?;
        let encoder = run_in_background(&stegano, encoder, &mut self.progress)?;

        encoder.into_image().save_as(&output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tempfile::tempdir;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        crate::api::hide::prepare()
            .with_file("Cargo.toml")
            .with_image("tests/images/plain/carrier-image.png")
            .with_password("SuperSecret42")
            .with_output(temp_dir.path().join("image-with-secret.png"))
            .execute()
            .expect("Failed to hide file in image");
    }

    #[test]
    fn should_report_progress_up_to_100() -> Result<(), SteganoError> {
        let temp_dir = tempdir()?;
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        prepare()
            .with_file("Cargo.toml")
            .with_image("tests/images/plain/carrier-image.png")
            .with_output(temp_dir.path().join("out.png"))
            .on_progress(move |p| sink.borrow_mut().push(p))
            .execute()?;

        let seen = seen.borrow();
        assert_eq!(seen.len(), 101);
        assert_eq!(seen.last(), Some(&100));

        Ok(())
    }

    #[test]
    fn should_complain_about_missing_inputs() {
        assert!(matches!(
            prepare().with_file("Cargo.toml").with_output("out.png").execute(),
            Err(SteganoError::CarrierNotSet)
        ));
        assert!(matches!(
            prepare()
                .with_image("tests/images/plain/carrier-image.png")
                .with_output("out.png")
                .execute(),
            Err(SteganoError::MissingPayload)
        ));
    }

    #[test]
    fn should_refuse_an_output_in_a_missing_folder() {
        let result = prepare()
            .with_file("Cargo.toml")
            .with_image("tests/images/plain/carrier-image.png")
            .with_output("no/such/folder/out.png")
            .execute();
        assert!(matches!(result, Err(SteganoError::InvalidOutputPath(_))));
    }
}
