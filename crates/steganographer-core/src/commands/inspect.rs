use std::path::Path;

use crate::api::inspect::Inspection;
use crate::{StegoOptions, SteganoError};

pub fn inspect(
    media: &Path,
    password: Option<String>,
    options: StegoOptions,
) -> Result<Inspection, SteganoError> {
    crate::api::inspect::prepare()
        .with_options(options)
        .with_image(media)
        .using_password(password)
        .execute()
}
