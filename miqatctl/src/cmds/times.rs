//! This is the module handling the `times` sub-command.
//!

use eyre::Result;
use tracing::{info, trace};

use miqat_engine::Engine;
use miqat_sources::DEF_METHOD;

use crate::{date_from, position_from, CtlConfig, TimesOpts};

/// Fetch and display the whole day.
///
#[tracing::instrument(skip(engine, cfg))]
pub fn show_times(engine: &Engine, cfg: &CtlConfig, opts: &TimesOpts) -> Result<()> {
    trace!("show_times");

    let position = position_from(cfg, &opts.location, opts.lat, opts.lon)?;
    let date = date_from(&opts.date)?;
    let method = opts.method.or(cfg.method).unwrap_or(DEF_METHOD);

    info!("Fetching timings for {} on {}", position, date);

    let schedule = engine.timings(method)?.fetch(position, date)?;
    println!("{}", schedule.table()?);
    Ok(())
}
