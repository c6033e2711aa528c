//! Definition of the data formats.
//!
//! This module holds the domain types shared by all miqat modules and the wire
//! payloads of the external services, with the conversions from the latter into
//! the former.
//!
//! To add a new service, add a `SERVICE.rs` file which will define its payloads
//! and the transformations needed.
//!

// Re-export for convenience
//
pub use aladhan::*;
pub use event::*;
pub use quran::*;
pub use schedule::*;
pub use zakat::*;

mod aladhan;
mod event;
mod quran;
mod schedule;
mod zakat;
