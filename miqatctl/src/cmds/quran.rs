//! This is the module handling the `quran` sub-command.
//!
//! All content is opaque display data fetched from the service, we only
//! arrange it on screen.
//!

use eyre::Result;
use tracing::{info, trace};

use miqat_engine::Engine;
use miqat_formats::list_chapters;
use miqat_sources::DEF_EDITIONS;

use crate::{QuranOpts, QuranShowOpts, QuranSubCommand};

/// Chapter catalogue and verse display.
///
#[tracing::instrument(skip(engine))]
pub fn handle_quran(engine: &Engine, opts: &QuranOpts) -> Result<()> {
    trace!("handle_quran");

    match &opts.subcmd {
        QuranSubCommand::List => {
            info!("Listing all chapters:");

            let all = engine.quran()?.chapters()?;
            println!("{}", list_chapters(&all)?);
        }
        QuranSubCommand::Show(sopts) => show_chapter(engine, sopts)?,
    }
    Ok(())
}

/// One chapter, text plus translation line by line.
///
#[tracing::instrument(skip(engine))]
fn show_chapter(engine: &Engine, opts: &QuranShowOpts) -> Result<()> {
    trace!("show_chapter({})", opts.chapter);

    let editions = opts.editions.as_deref().unwrap_or(DEF_EDITIONS);
    let verses = engine.quran()?.verses(opts.chapter, editions)?;

    info!("{} verses.", verses.len());

    for v in &verses {
        println!("{:>3}. {}", v.number, v.text);
        if let Some(tr) = &v.translation {
            println!("     {tr}");
        }
        if opts.audio {
            if let Some(url) = &v.audio {
                println!("     {url}");
            }
        }
    }
    Ok(())
}
