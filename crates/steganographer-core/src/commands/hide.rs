use std::path::Path;

use crate::{StegoOptions, SteganoError};

pub fn hide<F: FnMut(u8) + 'static>(
    media: &Path,
    write_to_file: &Path,
    data_file: &Path,
    password: Option<String>,
    options: StegoOptions,
    on_progress: F,
) -> Result<(), SteganoError> {
    crate::api::hide::prepare()
        .with_options(options)
        .with_image(media)
        .with_output(write_to_file)
        .with_file(data_file)
        .use_password(password)
        .on_progress(on_progress)
        .execute()
}
