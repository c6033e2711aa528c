//! This is the module handling the `list` sub-command.
//!

use eyre::Result;
use tracing::{info, trace};

use miqat_common::{list_locations, load_locations};
use miqat_engine::Engine;
use miqat_formats::PrayerEvent;

use crate::ListSubCommand;

/// Standalone `list` command.
///
#[tracing::instrument(skip(engine))]
pub fn handle_list(engine: &Engine, cmd: ListSubCommand) -> Result<()> {
    trace!("handle_list");

    match cmd {
        ListSubCommand::Events => {
            info!("Listing all events:");

            println!("{}", PrayerEvent::list()?);
        }
        ListSubCommand::Locations => {
            info!("Listing all locations:");

            let all = load_locations(None)?;
            println!("{}", list_locations(&all)?);
        }
        ListSubCommand::Sources => {
            info!("Listing all sources:");

            println!("{}", engine.sources.list()?);
        }
    }
    Ok(())
}
