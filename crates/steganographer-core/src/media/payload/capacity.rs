use crate::media::{HostImage, StegoOptions, CHANNELS};
use crate::{Result, SteganoError};

/// bytes taken by the two 32-bit length fields of the header
pub const LENGTH_FIELDS_LEN: u64 = 8;

/// file names must be shorter than this many characters
pub const FILE_NAME_LIMIT: usize = 256;

/// Number of bytes an image can hold: one byte per pixel and color lane,
/// spread over all 8 bit-planes.
pub fn capacity_bytes(image: &HostImage) -> u64 {
    image.pixel_count() as u64 * CHANNELS as u64
}

/// Bytes needed for header and payload. Characters are 16 bits wide.
pub fn required_bytes(marker_len: usize, file_name_len: usize, payload_len: u64) -> u64 {
    2 * marker_len as u64 + LENGTH_FIELDS_LEN + 2 * file_name_len as u64 + payload_len
}

/// pre-flight check, `true` if a file of `payload_len` bytes named with
/// `file_name_len` characters fits into `image`
pub fn can_encode(
    image: &HostImage,
    payload_len: u64,
    file_name_len: usize,
    options: &StegoOptions,
) -> bool {
    check_encode(image, payload_len, file_name_len, options).is_ok()
}

/// same as [`can_encode`] but tells why encoding is impossible
pub fn check_encode(
    image: &HostImage,
    payload_len: u64,
    file_name_len: usize,
    options: &StegoOptions,
) -> Result<()> {
    if file_name_len == 0 || file_name_len >= FILE_NAME_LIMIT {
        return Err(SteganoError::InvalidFileName);
    }
    let required = required_bytes(options.marker_len(), file_name_len, payload_len);
    let capacity = capacity_bytes(image);
    // the length field is a signed 32-bit integer
    if required > capacity || payload_len > i32::MAX as u64 {
        return Err(SteganoError::CannotEncode { required, capacity });
    }

    Ok(())
}
