pub mod codec_options;
mod host_image;
pub mod image;
pub mod payload;

use std::path::Path;

pub use codec_options::{StegoOptions, DEFAULT_MARKER, DEFAULT_SEGMENTS};
pub use host_image::*;

pub trait Persist {
    fn save_as(&mut self, _: &Path) -> crate::Result<()>;
}
