use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, info};

use super::{split_evenly, SegmentCounter, Segmented};
use crate::media::image::LsbCodec;
use crate::media::payload::{check_encode, PayloadHeader};
use crate::media::{HostImage, StegoOptions};
use crate::{Result, SteganoError};

/// Writes one file into a host image.
///
/// The header is written on construction, the payload bytes follow segment by
/// segment. Until the last segment is processed the image is incomplete.
pub struct Encoder {
    codec: LsbCodec,
    source: Box<dyn Read + Send>,
    chunks: Vec<u64>,
    counter: SegmentCounter,
}

impl Encoder {
    /// Fails with [`SteganoError::CannotEncode`] or
    /// [`SteganoError::InvalidFileName`] before any pixel is touched. The name
    /// must be a plain file name without folders.
    pub fn new<R: Read + Send + 'static>(
        image: HostImage,
        source: R,
        payload_len: u64,
        file_name: &str,
        password: &str,
        options: &StegoOptions,
    ) -> Result<Self> {
        let header = PayloadHeader::new(file_name, payload_len as u32);
        if header.safe_file_name()? != file_name {
            return Err(SteganoError::InvalidFileName);
        }
        check_encode(&image, payload_len, header.file_name_len(), options)?;

        let mut codec = LsbCodec::new(image, password);
        header.write_to(&mut codec, options)?;

        let chunks = split_evenly(payload_len, options.segments);
        debug!(
            "encoding {payload_len} bytes in {} segments of {} bytes",
            chunks.len(),
            chunks[0]
        );

        Ok(Self {
            codec,
            source: Box::new(source),
            counter: SegmentCounter::new(chunks.len()),
            chunks,
        })
    }

    /// Hides `payload_file`, only the last component of its path is stored.
    pub fn from_file(
        image: HostImage,
        payload_file: &Path,
        password: &str,
        options: &StegoOptions,
    ) -> Result<Self> {
        let file_name = payload_file
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or(SteganoError::InvalidFileName)?;
        let file = File::open(payload_file).map_err(|source| SteganoError::ReadError { source })?;
        let payload_len = file
            .metadata()
            .map_err(|source| SteganoError::ReadError { source })?
            .len();
        info!("hiding {:?} ({payload_len} bytes)", payload_file);

        Self::new(
            image,
            BufReader::new(file),
            payload_len,
            file_name,
            password,
            options,
        )
    }

    /// the image in its current, possibly still incomplete, state
    pub fn image(&self) -> &HostImage {
        self.codec.image()
    }

    pub fn into_image(self) -> HostImage {
        self.codec.into_image()
    }
}

impl Segmented for Encoder {
    fn counter(&self) -> &SegmentCounter {
        &self.counter
    }

    fn process_next_segment(&mut self) -> Result<()> {
        let index = self.counter.next_index()?;
        let mut chunk = vec![0; self.chunks[index] as usize];
        self.source
            .read_exact(&mut chunk)
            .map_err(|source| SteganoError::ReadError { source })?;
        self.codec.write_bytes(&chunk)?;
        self.counter.mark_completed();

        Ok(())
    }
}
