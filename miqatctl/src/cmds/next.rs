//! This is the module handling the `next` sub-command.
//!
//! One-shot mode resolves the next prayer and prints it with the time left.
//! Watch mode keeps a countdown running, one ticker per target, and rolls
//! over to the following event whenever the target is reached.  On the day's
//! last event it rolls over to tomorrow's Fajr.
//!

use std::sync::mpsc::channel;

use chrono::Local;
use eyre::{eyre, Result};
use tracing::{info, trace};

use miqat_common::{format_countdown, remaining};
use miqat_engine::{Engine, Tick, Ticker, Watch};
use miqat_sources::{StaticLocation, DEF_METHOD};

use crate::{position_from, CtlConfig, NextOpts};

/// Resolve the next prayer and count down to it.
///
#[tracing::instrument(skip(engine, cfg))]
pub fn show_next(engine: &Engine, cfg: &CtlConfig, opts: &NextOpts) -> Result<()> {
    trace!("show_next");

    let position = position_from(cfg, &opts.location, opts.lat, opts.lon)?;
    let method = opts.method.or(cfg.method).unwrap_or(DEF_METHOD);

    let src = StaticLocation(position);
    let mut watch = Watch::new();

    let now = Local::now().naive_local();
    engine.acquire(&mut watch, &src, now.date(), method, now)?;

    let next = watch
        .next()
        .ok_or_else(|| eyre!("No next event: {}", watch.state()))?;

    if !opts.watch {
        let left = remaining(next.when, Local::now().naive_local());
        println!("{} (in {})", next, format_countdown(left));
        return Ok(());
    }

    // Watch mode, ^C to quit.
    //
    info!("Watching from {position}.");

    let mut next = next;
    loop {
        println!("{next}");

        let (tx, rx) = channel::<Tick>();
        let ticker = Ticker::start(next.when, tx);

        for tick in rx.iter() {
            match tick {
                Tick::Remaining(left) => {
                    eprint!("\r{left}");
                }
                Tick::Expired => {
                    eprintln!();
                    info!("{} reached.", next.event);
                    break;
                }
            }
        }
        drop(ticker);

        // Same schedule, next target.
        //
        next = watch.advance(Local::now().naive_local())?;
    }
}
