use thiserror::Error;

use miqat_formats::ScheduleError;
use miqat_sources::{FetchError, LocationError};

/// Everything that can take a watch session out of `Ready`.
///
#[derive(Debug, Error)]
pub enum EngineStatus {
    #[error("No position: {0}")]
    NoPosition(#[from] LocationError),
    #[error("Fetch failed: {0}")]
    FetchFailed(#[from] FetchError),
    #[error("Bad schedule: {0}")]
    BadSchedule(#[from] ScheduleError),
    #[error("No schedule loaded.")]
    NoSchedule,
    #[error("Unknown source {0}")]
    UnknownSource(String),
}
