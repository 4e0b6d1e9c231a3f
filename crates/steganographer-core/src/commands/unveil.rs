use std::path::{Path, PathBuf};

use crate::{StegoOptions, SteganoError};

pub fn unveil<F: FnMut(u8) + 'static>(
    secret_media: &Path,
    output_folder: &Path,
    password: Option<String>,
    options: StegoOptions,
    on_progress: F,
) -> Result<PathBuf, SteganoError> {
    crate::api::unveil::prepare()
        .with_options(options)
        .from_secret_file(secret_media)
        .into_output_folder(output_folder)
        .using_password(password)
        .on_progress(on_progress)
        .execute()
}
