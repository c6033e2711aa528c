//! This is the module handling the `qibla` sub-command.
//!

use eyre::Result;
use tracing::trace;

use miqat_common::{distance_km, pointer_angle, qibla, KAABA};
use miqat_sources::{HeadingSource, NoHeading, StaticHeading};

use crate::{position_from, CtlConfig, QiblaOpts};

/// Bearing to the Kaaba, and where to point relative to the device heading.
///
#[tracing::instrument(skip(cfg))]
pub fn show_qibla(cfg: &CtlConfig, opts: &QiblaOpts) -> Result<()> {
    trace!("show_qibla");

    let position = position_from(cfg, &opts.location, opts.lat, opts.lon)?;

    // A CLI host has no compass, an explicit heading stands in for one.
    //
    let compass: Box<dyn HeadingSource> = match opts.heading {
        Some(h) => Box::new(StaticHeading(h)),
        None => Box::new(NoHeading),
    };

    let bearing = qibla(position);
    let heading = compass.heading().unwrap_or(0.);
    let pointer = pointer_angle(bearing, heading);

    println!("Qibla from {position}:");
    println!("  bearing  {bearing:.2}° from North");
    println!("  pointer  {pointer:.2}° (device heading {heading:.0}°)");
    println!("  distance {:.0} km", distance_km(position, KAABA));
    Ok(())
}
