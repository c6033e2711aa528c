//! Ready-made implementations of the capability traits.
//!
//! The channel-backed providers model what a host platform actually does:
//! push readings into a channel from wherever they originate (GPS daemon,
//! geolocation API, sensor event stream), while the consumer side waits with
//! a deadline (position) or keeps the latest reading (heading).
//!

use std::cell::Cell;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Duration;

use tracing::trace;

use miqat_common::Coordinates;

use crate::{HeadingSource, LocationError, LocationSource};

/// How long we wait for the host to come up with a position
///
pub const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Fixed position, e.g. a named location from the configuration file.
///
#[derive(Clone, Copy, Debug)]
pub struct StaticLocation(pub Coordinates);

impl LocationSource for StaticLocation {
    fn position(&self) -> Result<Coordinates, LocationError> {
        Ok(self.0)
    }
}

/// A host that refuses us.
///
#[derive(Clone, Copy, Debug, Default)]
pub struct DeniedLocation;

impl LocationSource for DeniedLocation {
    fn position(&self) -> Result<Coordinates, LocationError> {
        Err(LocationError::Denied)
    }
}

/// One-shot position over a channel.  Whatever feeds the sending side has
/// until the deadline to deliver, a silent host turns into `Timeout`.
///
#[derive(Debug)]
pub struct ChannelLocation {
    rx: Receiver<Coordinates>,
    timeout: Duration,
}

impl ChannelLocation {
    pub fn new(rx: Receiver<Coordinates>) -> Self {
        ChannelLocation {
            rx,
            timeout: ACQUIRE_TIMEOUT,
        }
    }

    /// Same, with a caller-chosen deadline.
    ///
    pub fn with_timeout(rx: Receiver<Coordinates>, timeout: Duration) -> Self {
        ChannelLocation { rx, timeout }
    }
}

impl LocationSource for ChannelLocation {
    #[tracing::instrument(skip(self))]
    fn position(&self) -> Result<Coordinates, LocationError> {
        trace!("providers::position");

        match self.rx.recv_timeout(self.timeout) {
            Ok(pos) => Ok(pos),
            Err(RecvTimeoutError::Timeout) => Err(LocationError::Timeout(self.timeout.as_secs())),
            Err(RecvTimeoutError::Disconnected) => {
                Err(LocationError::Unavailable("provider gone".to_string()))
            }
        }
    }
}

/// Host without any compass.
///
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHeading;

impl HeadingSource for NoHeading {
    fn heading(&self) -> Option<f64> {
        None
    }
}

/// Fixed heading, e.g. from a CLI flag.  Normalised into `[0, 360)`.
///
#[derive(Clone, Copy, Debug)]
pub struct StaticHeading(pub f64);

impl HeadingSource for StaticHeading {
    fn heading(&self) -> Option<f64> {
        Some(self.0.rem_euclid(360.))
    }
}

/// Heading updates over a channel.  The host fires whenever it pleases, we
/// keep the latest reading, `None` until the first one arrives.
///
#[derive(Debug)]
pub struct ChannelHeading {
    rx: Receiver<f64>,
    last: Cell<Option<f64>>,
}

impl ChannelHeading {
    pub fn new(rx: Receiver<f64>) -> Self {
        ChannelHeading {
            rx,
            last: Cell::new(None),
        }
    }
}

impl HeadingSource for ChannelHeading {
    fn heading(&self) -> Option<f64> {
        // Drain whatever piled up, the last reading wins.
        //
        if let Some(h) = self.rx.try_iter().last() {
            self.last.set(Some(h.rem_euclid(360.)));
        }
        self.last.get()
    }
}
