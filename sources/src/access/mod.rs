//! Actual service access modules, one per remote API.
//!

// Re-export for a shorter import path.
//
pub use aladhan::*;
pub use alquran::*;

mod aladhan;
mod alquran;
