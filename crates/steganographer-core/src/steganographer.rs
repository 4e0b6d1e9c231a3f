use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{debug, info};

use crate::media::payload::{self, HiddenPayload};
use crate::media::{HostImage, StegoOptions};
use crate::transfer::{self, Analyzer, CancellationToken, Decoder, Encoder, Operation, Outcome};
use crate::{Result, SteganoError};

/// Application context: the options every operation is created with, and the
/// number of operations currently running in the background.
#[derive(Debug, Clone, Default)]
pub struct Steganographer {
    options: StegoOptions,
    active: Arc<AtomicUsize>,
}

impl Steganographer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: StegoOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &StegoOptions {
        &self.options
    }

    /// only operations created afterwards use the new marker
    pub fn set_marker<S: Into<String>>(&mut self, marker: S) {
        self.options.marker = marker.into();
    }

    pub fn encoder(&self, image: HostImage, payload_file: &Path, password: &str) -> Result<Encoder> {
        Encoder::from_file(image, payload_file, password, &self.options)
    }

    pub fn decoder(&self, image: HostImage, output_folder: &Path, password: &str) -> Result<Decoder> {
        Decoder::new(image, output_folder, password, &self.options)
    }

    pub fn analyzer(&self, image: HostImage) -> Analyzer {
        Analyzer::new(image)
    }

    pub fn capacity_bytes(&self, image: &HostImage) -> u64 {
        payload::capacity_bytes(image)
    }

    pub fn can_encode(&self, image: &HostImage, payload_len: u64, file_name_len: usize) -> bool {
        payload::can_encode(image, payload_len, file_name_len, &self.options)
    }

    pub fn can_decode(&self, image: &HostImage, password: &str) -> bool {
        payload::can_decode(image, password, &self.options)
    }

    pub fn describe_hidden_payload(&self, image: &HostImage, password: &str) -> Option<HiddenPayload> {
        payload::describe_hidden_payload(image, password, &self.options)
    }

    /// number of spawned operations that have not finished yet
    pub fn active_operations(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }

    /// `true` while leaving the application would abort running work
    pub fn has_active_operations(&self) -> bool {
        self.active_operations() > 0
    }

    /// Runs `operation` on its own thread. Progress arrives through
    /// [`TaskHandle::progress`], the result through [`TaskHandle::join`].
    pub fn spawn<O: Into<Operation>>(&self, operation: O) -> Result<TaskHandle> {
        let mut operation = operation.into();
        let kind = operation.kind();
        let token = CancellationToken::new();
        let (progress_tx, progress_rx) = mpsc::channel();
        let guard = ActiveGuard::enter(&self.active);

        let worker_token = token.clone();
        let handle = thread::Builder::new()
            .name(format!("steganographer-{kind}"))
            .spawn(move || -> Result<TaskOutcome> {
                let _guard = guard;
                info!("{kind} started");
                let outcome = transfer::run(&mut operation, &worker_token, |percent| {
                    // a dropped receiver just means nobody watches
                    let _ = progress_tx.send(percent);
                })?;
                info!("{kind} finished: {outcome:?}");

                Ok(match outcome {
                    Outcome::Completed => TaskOutcome::Completed(operation),
                    Outcome::Cancelled => TaskOutcome::Cancelled,
                })
            })?;

        Ok(TaskHandle {
            token,
            progress: progress_rx,
            handle,
        })
    }
}

/// counts one running operation for as long as it lives
struct ActiveGuard(Arc<AtomicUsize>);

impl ActiveGuard {
    fn enter(active: &Arc<AtomicUsize>) -> Self {
        let now = active.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("{now} operations active");
        Self(Arc::clone(active))
    }
}

impl Drop for ActiveGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Result of a background operation that did not fail.
pub enum TaskOutcome {
    /// the finished operation, e.g. to save the encoded image or read the verdict
    Completed(Operation),
    Cancelled,
}

/// A running background operation.
pub struct TaskHandle {
    token: CancellationToken,
    progress: Receiver<u8>,
    handle: JoinHandle<Result<TaskOutcome>>,
}

impl TaskHandle {
    /// percentages, the channel closes when the operation ends
    pub fn progress(&self) -> &Receiver<u8> {
        &self.progress
    }

    /// stops the operation before its next segment
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn join(self) -> Result<TaskOutcome> {
        self.handle
            .join()
            .map_err(|_| SteganoError::TaskPanicked)?
    }
}
