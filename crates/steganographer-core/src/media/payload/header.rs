use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Display, Formatter};
use std::path::Path;

use log::debug;

use super::capacity::{capacity_bytes, required_bytes, FILE_NAME_LIMIT, LENGTH_FIELDS_LEN};
use crate::media::image::LsbCodec;
use crate::media::{HostImage, StegoOptions};
use crate::{Result, SteganoError};

/// The header in front of every hidden file.
///
/// Layout, bit addressed through the password permutation:
/// `marker: u16[marker_len]`, `payload_len: i32`, `file_name_len: i32`,
/// `file_name: u16[file_name_len]`, followed by the raw payload bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadHeader {
    pub file_name: String,
    pub payload_len: u32,
}

impl PayloadHeader {
    pub fn new<S: Into<String>>(file_name: S, payload_len: u32) -> Self {
        Self {
            file_name: file_name.into(),
            payload_len,
        }
    }

    /// number of 16-bit code units of the file name
    pub fn file_name_len(&self) -> usize {
        self.file_name.encode_utf16().count()
    }

    pub fn write_to<I: BorrowMut<HostImage>>(
        &self,
        codec: &mut LsbCodec<I>,
        options: &StegoOptions,
    ) -> Result<()> {
        codec.write_string(&options.marker)?;
        codec.write_i32(self.payload_len as i32)?;
        codec.write_i32(self.file_name_len() as i32)?;
        codec.write_string(&self.file_name)?;
        debug!(
            "header written: {} bytes named {:?}",
            self.payload_len, self.file_name
        );

        Ok(())
    }

    /// Reads and validates the header. On success the codec points at the
    /// first payload byte.
    ///
    /// Fails with [`SteganoError::CannotDecode`] if the marker does not match,
    /// a length field is out of range, or the announced file would not fit.
    pub fn read_from<I: Borrow<HostImage>>(
        codec: &mut LsbCodec<I>,
        options: &StegoOptions,
    ) -> Result<Self> {
        let capacity = capacity_bytes(codec.image());
        let marker_len = options.marker_len();
        if capacity <= 2 * marker_len as u64 + LENGTH_FIELDS_LEN {
            debug!("image too small to carry a header");
            return Err(SteganoError::CannotDecode);
        }

        let marker = codec.read_utf16(marker_len)?;
        if !marker.iter().copied().eq(options.marker.encode_utf16()) {
            debug!("marker mismatch");
            return Err(SteganoError::CannotDecode);
        }

        let payload_len = codec.read_i32()?;
        if payload_len < 0 {
            debug!("negative payload length {payload_len}");
            return Err(SteganoError::CannotDecode);
        }

        let file_name_len = codec.read_i32()?;
        if file_name_len <= 0 || file_name_len as usize >= FILE_NAME_LIMIT {
            debug!("file name length {file_name_len} out of range");
            return Err(SteganoError::CannotDecode);
        }
        let file_name_len = file_name_len as usize;

        if required_bytes(marker_len, file_name_len, payload_len as u64) > capacity {
            debug!("announced payload of {payload_len} bytes exceeds the capacity");
            return Err(SteganoError::CannotDecode);
        }

        let file_name = String::from_utf16(&codec.read_utf16(file_name_len)?)
            .map_err(|_| SteganoError::CannotDecode)?;

        Ok(Self {
            file_name,
            payload_len: payload_len as u32,
        })
    }

    /// The embedded name reduced to its last path component, so a crafted
    /// image cannot write outside the output folder.
    pub fn safe_file_name(&self) -> Result<&str> {
        Path::new(&self.file_name)
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or(SteganoError::InvalidFileName)
    }

    /// the file as the decoder would write it
    pub fn describe(&self) -> Result<HiddenPayload> {
        Ok(HiddenPayload {
            file_name: self.safe_file_name()?.to_string(),
            size: self.payload_len as u64,
        })
    }
}

/// pre-flight check, `true` if `image` carries a valid header for `password`
pub fn can_decode(image: &HostImage, password: &str, options: &StegoOptions) -> bool {
    describe_hidden_payload(image, password, options).is_some()
}

/// name and size of the hidden file, without extracting it
pub fn describe_hidden_payload(
    image: &HostImage,
    password: &str,
    options: &StegoOptions,
) -> Option<HiddenPayload> {
    let mut codec = LsbCodec::new(image, password);
    PayloadHeader::read_from(&mut codec, options)
        .and_then(|header| header.describe())
        .ok()
}

/// What an image carries for a given password
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenPayload {
    pub file_name: String,
    pub size: u64,
}

impl Display for HiddenPayload {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hidden file name: \"{}\", Size: {}",
            self.file_name,
            format_size(self.size)
        )
    }
}

/// human readable size with binary units and at most two decimals
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["Bytes", "KiB", "MiB", "GiB", "TiB"];

    let mut size = bytes as f64;
    let mut unit = 0;
    while size > 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    let mut number = format!("{size:.2}");
    if number.contains('.') {
        let trimmed = number.trim_end_matches('0').trim_end_matches('.').len();
        number.truncate(trimmed);
    }

    format!("{number} {}", UNITS[unit])
}
