use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{info, warn};

use super::Segmented;
use crate::Result;

/// Shared flag to stop an operation at the next segment boundary.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// How a run ended, failures are reported as `Err` instead
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Cancelled,
}

/// Drives `operation` until all segments are processed.
///
/// The token is checked before every segment. `on_progress` receives the
/// percentage once at the start and after every segment. On cancellation or
/// failure the operation discards its output.
pub fn run<S, F>(operation: &mut S, token: &CancellationToken, mut on_progress: F) -> Result<Outcome>
where
    S: Segmented + ?Sized,
    F: FnMut(u8),
{
    on_progress(operation.progress());
    while operation.has_next() {
        if token.is_cancelled() {
            warn!(
                "cancelled after {} of {} segments",
                operation.completed_segments(),
                operation.total_segments()
            );
            operation.discard()?;
            return Ok(Outcome::Cancelled);
        }
        if let Err(e) = operation.process_next_segment() {
            warn!("failed in segment {}: {e}", operation.completed_segments());
            if let Err(discard_error) = operation.discard() {
                warn!("discarding the output failed as well: {discard_error}");
            }
            return Err(e);
        }
        on_progress(operation.progress());
    }
    info!("done with all {} segments", operation.total_segments());

    Ok(Outcome::Completed)
}
