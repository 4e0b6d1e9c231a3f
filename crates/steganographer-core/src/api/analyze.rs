use std::path::{Path, PathBuf};

use super::{run_in_background, ProgressSink};
use crate::media::HostImage;
use crate::transfer::Verdict;
use crate::{SteganoError, Steganographer};

pub fn prepare() -> AnalyzeApi {
    AnalyzeApi::default()
}

#[derive(Default, Debug)]
pub struct AnalyzeApi {
    image: Option<PathBuf>,
    progress: ProgressSink,
}

impl AnalyzeApi {
    /// the image to inspect, no password is needed
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn on_progress<F: FnMut(u8) + 'static>(mut self, callback: F) -> Self {
        self.progress = ProgressSink::new(callback);
        self
    }

    pub fn execute(mut self) -> Result<Verdict, SteganoError> {
        let Some(image) = self.image else {
            return Err(SteganoError::CarrierNotSet);
        };

        let stegano = Steganographer::new();
        let analyzer = stegano.analyzer(HostImage::from_file(&image)?);
        let analyzer = run_in_background(&stegano, analyzer, &mut self.progress)?;

        analyzer.verdict().ok_or(SteganoError::TaskPanicked)
    }
}
