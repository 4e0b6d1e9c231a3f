use std::fmt::{self, Display, Formatter};
use std::path::{Path, PathBuf};

use super::Password;
use crate::media::payload::{format_size, HiddenPayload};
use crate::media::{HostImage, StegoOptions};
use crate::{SteganoError, Steganographer};

pub fn prepare() -> InspectApi {
    InspectApi::default()
}

/// What an image can hold and what it holds for a password
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inspection {
    pub capacity: u64,
    pub hidden: Option<HiddenPayload>,
}

impl Display for Inspection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Capacity: {}", format_size(self.capacity))?;
        match &self.hidden {
            Some(hidden) => write!(f, "{hidden}"),
            None => write!(f, "No hidden file found for this password"),
        }
    }
}

#[derive(Default, Debug)]
pub struct InspectApi {
    image: Option<PathBuf>,
    password: Password,
    options: StegoOptions,
}

impl InspectApi {
    pub fn with_options(mut self, options: StegoOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn using_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    /// reads only the header, nothing is written to disk
    pub fn execute(self) -> Result<Inspection, SteganoError> {
        let Some(image) = self.image else {
            return Err(SteganoError::CarrierNotSet);
        };

        let stegano = Steganographer::with_options(self.options);
        let image = HostImage::from_file(&image)?;

        Ok(Inspection {
            capacity: stegano.capacity_bytes(&image),
            hidden: stegano.describe_hidden_payload(&image, self.password.as_key()),
        })
    }
}
