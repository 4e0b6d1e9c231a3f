//! Long running operations, processed in segments so they can report
//! progress and be cancelled between two segments.

mod analyzer;
mod decoder;
mod encoder;
mod task;

use enum_dispatch::enum_dispatch;

pub use analyzer::{AnalysisTable, Analyzer, Verdict, ANALYSIS_SEGMENTS, ANALYZED_BIT_PLANES};
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use task::{run, CancellationToken, Outcome};

use crate::{Result, SteganoError};

/// Bookkeeping of how many segments an operation has and how many are done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentCounter {
    total: usize,
    completed: usize,
}

impl SegmentCounter {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            completed: 0,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn completed(&self) -> usize {
        self.completed
    }

    pub fn has_next(&self) -> bool {
        self.completed < self.total
    }

    /// index of the segment to process next
    pub fn next_index(&self) -> Result<usize> {
        if !self.has_next() {
            return Err(SteganoError::NoSegmentRemaining);
        }

        Ok(self.completed)
    }

    pub fn mark_completed(&mut self) {
        self.completed = (self.completed + 1).min(self.total);
    }

    /// `completed * 100 / total`, an operation without segments is complete
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }

        (self.completed * 100 / self.total) as u8
    }
}

/// Splits `total` bytes into `segments` chunks. All chunks get
/// `total / segments` bytes, the last one additionally takes the remainder.
pub fn split_evenly(total: u64, segments: usize) -> Vec<u64> {
    let segments = segments.max(1);
    let chunk = total / segments as u64;
    let mut sizes = vec![chunk; segments];
    if let Some(last) = sizes.last_mut() {
        *last = total - chunk * (segments as u64 - 1);
    }

    sizes
}

/// An operation that is driven one segment at a time.
#[enum_dispatch]
pub trait Segmented {
    fn counter(&self) -> &SegmentCounter;

    /// Processes exactly one segment.
    ///
    /// Fails with [`SteganoError::NoSegmentRemaining`] once all segments are done.
    fn process_next_segment(&mut self) -> Result<()>;

    /// Throws away any output produced so far. Called when the operation is
    /// cancelled or failed.
    fn discard(&mut self) -> Result<()> {
        Ok(())
    }

    fn has_next(&self) -> bool {
        self.counter().has_next()
    }

    fn total_segments(&self) -> usize {
        self.counter().total()
    }

    fn completed_segments(&self) -> usize {
        self.counter().completed()
    }

    fn progress(&self) -> u8 {
        self.counter().percent()
    }
}

/// Any of the three operations, so a task runner can drive them uniformly.
#[enum_dispatch(Segmented)]
pub enum Operation {
    Encoder,
    Decoder,
    Analyzer,
}

impl Operation {
    pub fn kind(&self) -> &'static str {
        match self {
            Operation::Encoder(_) => "encoding",
            Operation::Decoder(_) => "decoding",
            Operation::Analyzer(_) => "analysis",
        }
    }
}
