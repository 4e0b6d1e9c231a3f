use std::fmt::{self, Debug, Formatter};

use crate::transfer::Operation;
use crate::{Result, SteganoError, Steganographer, TaskOutcome};

/// Optional callback receiving percentages from 0 to 100.
#[derive(Default)]
pub struct ProgressSink(Option<Box<dyn FnMut(u8)>>);

impl ProgressSink {
    pub fn new<F: FnMut(u8) + 'static>(callback: F) -> Self {
        Self(Some(Box::new(callback)))
    }

    pub fn report(&mut self, percent: u8) {
        if let Some(callback) = self.0.as_mut() {
            callback(percent);
        }
    }
}

impl Debug for ProgressSink {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(_) => write!(f, "ProgressSink(callback)"),
            None => write!(f, "ProgressSink(None)"),
        }
    }
}

/// Runs `operation` on a worker thread and forwards its progress to `progress`
/// until the worker is done.
pub(crate) fn run_in_background<O>(
    stegano: &Steganographer,
    operation: O,
    progress: &mut ProgressSink,
) -> Result<O>
where
    O: Into<Operation>,
    Operation: TryInto<O>,
{
    let task = stegano.spawn(operation)?;
    for percent in task.progress().iter() {
        progress.report(percent);
    }

    match task.join()? {
        TaskOutcome::Completed(operation) => operation
            .try_into()
            .map_err(|_| SteganoError::TaskPanicked),
        TaskOutcome::Cancelled => Err(SteganoError::Cancelled),
    }
}
