//! This library is there to share some common code amongst all miqat modules.
//!

mod config;
mod coordinates;
mod countdown;
mod locations;
mod logging;
mod macros;

use clap::{crate_name, crate_version};
pub use config::*;
pub use coordinates::*;
pub use countdown::*;
pub use locations::*;
pub use logging::*;

const NAME: &str = crate_name!();
const VERSION: &str = crate_version!();

pub fn version() -> String {
    format!("{}/{}", NAME, VERSION)
}
