//! Module to deal with the different kinds of sources we can connect to to fetch data,
//! and with the host capabilities we hide behind traits.
//!
//! The service submodules deal with the differences between the remote APIs
//! (routes, payloads).  The capability traits let callers inject whatever the
//! host platform provides for position, compass heading and small persistent
//! state, with ready-made implementations in [`providers`] and [`store`].
//!

use std::fmt::Debug;

use eyre::Result;

use miqat_common::Coordinates;

// Re-export these modules for a shorter import path.
//
pub use access::*;
pub use error::*;
pub use providers::*;
pub use site::*;
pub use sources::*;
pub use store::*;

mod access;
mod error;
mod providers;
mod site;
mod sources;
mod store;

#[macro_use]
mod macros;

/// Position capability.  One-shot acquisition of the observer's position.
///
/// Implementations must answer or fail within a bounded delay, never hang.
/// The first call in a session may trigger the host's permission UI.
///
pub trait LocationSource: Debug {
    /// Where the observer currently is
    fn position(&self) -> Result<Coordinates, LocationError>;
}

/// Compass capability.
///
/// Returns the latest heading in degrees clockwise from North, or `None` when
/// the host never delivered any reading.  Callers treat `None` as facing North.
///
pub trait HeadingSource: Debug {
    fn heading(&self) -> Option<f64>;
}

/// Small persistent string store for counters and cached state.
///
pub trait KeyValueStore: Debug {
    /// Value stored under `key`, `None` when absent
    fn get(&self, key: &str) -> Result<Option<String>>;
    /// Store `value` under `key`, overwriting
    fn put(&self, key: &str, value: &str) -> Result<()>;
}

/// Default configuration filename
const CONFIG: &str = "sources.hcl";

pub fn version() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
