//! Library part of the `miqatctl` utility.
//!
//! The CLI surface is in [`cli`], one handler per sub-command in [`cmds`],
//! shared position/date resolution in [`helpers`].  All the actual work is
//! done by the `miqat-engine` crate and what it pulls in.
//!

// Re-export
//
pub use cli::*;
pub use cmds::*;
pub use config::*;
pub use helpers::*;

mod cli;
mod cmds;
mod config;
mod helpers;
