use std::time::Duration;

use thiserror::Error;

/// Errors an `Observable` can push to a subscriber's error channel on its own,
/// independent of what the emitted values are.
#[derive(Debug, Error)]
pub enum ObservableError {
    /// The observable needs a running `Tokio` runtime to spawn its task.
    #[error("{name} observable requires a Tokio runtime but none is running")]
    NoRuntime { name: &'static str },

    /// A timed observable was given a period it cannot tick at.
    #[error("{name} observable cannot tick with a period of {period:?}")]
    InvalidPeriod {
        name: &'static str,
        period: Duration,
    },
}

/// Errors returned while awaiting a subscription.
#[derive(Debug, Error)]
pub enum SubscriptionError {
    #[error("failed to await observable task")]
    JoinTask(#[from] tokio::task::JoinError),
}

/// A single item of an emission source could not be produced.
#[derive(Debug, Clone, Error)]
#[error("failed to produce item #{index}: {reason}")]
pub struct SourceError {
    pub index: usize,
    pub reason: String,
}

impl SourceError {
    pub fn new(index: usize, reason: impl Into<String>) -> Self {
        SourceError {
            index,
            reason: reason.into(),
        }
    }
}
