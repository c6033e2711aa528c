use thiserror::Error;

use miqat_formats::ScheduleError;

/// Custom error type for position acquisition, allow us to differentiate
/// between a denial, a silent host and a broken provider.
///
#[derive(Clone, Debug, Error, PartialEq)]
pub enum LocationError {
    #[error("Position capability denied by the host")]
    Denied,
    #[error("No position within {0}s")]
    Timeout(u64),
    #[error("Position capability unavailable: {0}")]
    Unavailable(String),
}

/// Custom error type for service fetches.
///
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Bad parameter {0}")]
    BadParam(String),
    #[error("HTTP Error: {0}")]
    HTTP(String),
    #[error("Service returned status {0}")]
    Status(u16),
    #[error("Decoding response: {0}")]
    Decoding(String),
    #[error("Bad payload: {0}")]
    BadData(#[from] ScheduleError),
    #[error("No route {0} for this site")]
    NoRoute(String),
}
