use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use super::{split_evenly, SegmentCounter, Segmented};
use crate::media::image::LsbCodec;
use crate::media::payload::PayloadHeader;
use crate::media::{HostImage, StegoOptions};
use crate::{Result, SteganoError};

/// Reads a hidden file out of a host image into an output folder.
pub struct Decoder {
    codec: LsbCodec,
    header: PayloadHeader,
    target: PathBuf,
    sink: BufWriter<File>,
    chunks: Vec<u64>,
    counter: SegmentCounter,
}

impl Decoder {
    /// Validates the header first, the output file is created only for a
    /// valid one. Fails with [`SteganoError::CannotDecode`] on a wrong
    /// password, a different marker or an image without hidden data.
    pub fn new(
        image: HostImage,
        output_folder: &Path,
        password: &str,
        options: &StegoOptions,
    ) -> Result<Self> {
        let mut codec = LsbCodec::new(image, password);
        let header = PayloadHeader::read_from(&mut codec, options)?;

        let target = output_folder.join(header.safe_file_name()?);
        let file = File::create(&target).map_err(|source| SteganoError::WriteError { source })?;
        info!(
            "unveiling {:?} ({} bytes) to {:?}",
            header.file_name, header.payload_len, target
        );

        let chunks = split_evenly(header.payload_len as u64, options.segments);
        debug!("decoding in {} segments", chunks.len());

        Ok(Self {
            codec,
            header,
            target,
            sink: BufWriter::new(file),
            counter: SegmentCounter::new(chunks.len()),
            chunks,
        })
    }

    pub fn header(&self) -> &PayloadHeader {
        &self.header
    }

    /// the file the payload is written to
    pub fn target(&self) -> &Path {
        &self.target
    }
}

impl Segmented for Decoder {
    fn counter(&self) -> &SegmentCounter {
        &self.counter
    }

    fn process_next_segment(&mut self) -> Result<()> {
        let index = self.counter.next_index()?;
        let mut chunk = vec![0; self.chunks[index] as usize];
        self.codec.read_bytes(&mut chunk)?;
        self.sink
            .write_all(&chunk)
            .map_err(|source| SteganoError::WriteError { source })?;
        self.counter.mark_completed();

        if !self.counter.has_next() {
            self.sink
                .flush()
                .map_err(|source| SteganoError::WriteError { source })?;
        }

        Ok(())
    }

    /// removes the incomplete output file
    fn discard(&mut self) -> Result<()> {
        warn!("removing incomplete output {:?}", self.target);
        fs::remove_file(&self.target).map_err(|source| SteganoError::WriteError { source })
    }
}
