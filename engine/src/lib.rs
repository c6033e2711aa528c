//! Engine, the moving parts between the data sources and a front end.
//!
//! The engine owns the configured sources and the state area.  It hands out
//! ready-made API clients, the persisted counter, and drives a `Watch`
//! session through position acquisition and schedule fetch.  The countdown
//! loop lives in [`Ticker`], resolution rules in `miqat-formats`.
//!

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use eyre::Result;
use tracing::{info, trace};

use miqat_sources::{
    default_config_dir, Aladhan, AlQuran, FileStore, LocationSource, Sources,
};

mod error;
mod tasbih;
mod ticker;
mod watch;

pub use error::*;
pub use tasbih::*;
pub use ticker::*;
pub use watch::*;

const NAME: &str = env!("CARGO_PKG_NAME");
const EVERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine signature
///
pub fn version() -> String {
    format!("{}/{}", NAME, EVERSION)
}

/// Source names looked up in `sources.hcl`
///
pub const TIMINGS_SITE: &str = "aladhan";
pub const QURAN_SITE: &str = "alquran";

/// Main `Engine` struct holding the sources and the state area.
///
#[derive(Clone, Debug)]
pub struct Engine {
    /// Main area where state is saved
    pub home: PathBuf,
    /// Sources
    pub sources: Sources,
}

impl Engine {
    /// Create an instance with the default sources and state area.
    ///
    #[tracing::instrument]
    pub fn new() -> Result<Self> {
        trace!("new engine");

        let sources = Sources::load(None)?;
        info!("{} sources loaded", sources.len());

        Ok(Engine {
            home: default_config_dir(),
            sources,
        })
    }

    /// Same, with explicit sources and state area.
    ///
    pub fn with(sources: Sources, home: PathBuf) -> Self {
        Engine { home, sources }
    }

    /// Timings client, configured from the `aladhan` source.
    ///
    pub fn timings(&self, method: u8) -> Result<Aladhan, EngineStatus> {
        let site = self
            .sources
            .get(TIMINGS_SITE)
            .ok_or_else(|| EngineStatus::UnknownSource(TIMINGS_SITE.to_string()))?;

        let mut client = Aladhan::new();
        client.load(site).method(method);
        Ok(client)
    }

    /// Quran client, configured from the `alquran` source.
    ///
    pub fn quran(&self) -> Result<AlQuran, EngineStatus> {
        let site = self
            .sources
            .get(QURAN_SITE)
            .ok_or_else(|| EngineStatus::UnknownSource(QURAN_SITE.to_string()))?;

        let mut client = AlQuran::new();
        client.load(site);
        Ok(client)
    }

    /// The persisted counter, stored under our state area.
    ///
    pub fn tasbih(&self) -> Tasbih<FileStore> {
        Tasbih::load(FileStore::new(self.home.clone()))
    }

    /// One complete acquisition pass, position then the day's schedule,
    /// driving `watch` through its transitions.
    ///
    /// The sequence number discipline stays inside the watch, an overlapping
    /// pass cannot smuggle in an outdated answer.  On `Ok` the watch state
    /// tells the rest, usually `Ready` but an unresolvable schedule parks it
    /// in `Unavailable` as well.
    ///
    #[tracing::instrument(skip(self, watch, src))]
    pub fn acquire(
        &self,
        watch: &mut Watch,
        src: &dyn LocationSource,
        date: NaiveDate,
        method: u8,
        now: NaiveDateTime,
    ) -> Result<(), EngineStatus> {
        trace!("engine::acquire");

        watch.start();
        let position = match src.position() {
            Ok(position) => position,
            Err(e) => {
                watch.location_failed(&e);
                return Err(e.into());
            }
        };
        let seq = watch.location_ready(position);

        let client = self.timings(method)?;
        match client.fetch(position, date) {
            Ok(schedule) => {
                watch.schedule_ready(seq, schedule, now);
                Ok(())
            }
            Err(e) => {
                watch.schedule_failed(seq, &e);
                Err(e.into())
            }
        }
    }
}
