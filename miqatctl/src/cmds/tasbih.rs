//! This is the module handling the `tasbih` sub-command.
//!

use eyre::Result;
use tracing::trace;

use miqat_engine::Engine;

use crate::{TasbihOpts, TasbihSubCommand};

/// Counter operations, every change is persisted on the spot.
///
#[tracing::instrument(skip(engine))]
pub fn handle_tasbih(engine: &Engine, opts: &TasbihOpts) -> Result<()> {
    trace!("handle_tasbih");

    let mut counter = engine.tasbih();
    match opts.subcmd {
        TasbihSubCommand::Count => {
            println!("{}", counter.count());
        }
        TasbihSubCommand::Incr => {
            println!("{}", counter.increment()?);
        }
        TasbihSubCommand::Reset => {
            counter.reset()?;
            println!("0");
        }
    }
    Ok(())
}
