use std::path::Path;

use crate::transfer::Verdict;
use crate::SteganoError;

pub fn analyze<F: FnMut(u8) + 'static>(media: &Path, on_progress: F) -> Result<Verdict, SteganoError> {
    crate::api::analyze::prepare()
        .with_image(media)
        .on_progress(on_progress)
        .execute()
}
