//! Named locations module
//!
//! v1: basic format, only Lat, Lon per name
//!
use std::collections::BTreeMap;
use std::fs;

use eyre::{eyre, Result};
use serde::Deserialize;
use tabled::builder::Builder;
use tabled::settings::Style;
use tracing::trace;

use crate::{distance_km, qibla, Coordinates, KAABA};

/// Current locations file version
const LOCATION_FILE_VER: usize = 1;

/// On-disk structure for the locations file
///
#[derive(Debug, Deserialize)]
struct LocationsFile {
    /// Version number for safety
    pub version: usize,
    /// List of locations
    pub location: BTreeMap<String, Coordinates>,
}

/// Load all locations
///
#[tracing::instrument]
pub fn load_locations(fname: Option<String>) -> Result<BTreeMap<String, Coordinates>> {
    trace!("enter");

    // Load from file if specified
    //
    let data = if let Some(fname) = fname {
        fs::read_to_string(fname)?
    } else {
        include_str!("locations.hcl").to_owned()
    };

    let loc: LocationsFile = hcl::from_str(&data)?;
    if loc.version != LOCATION_FILE_VER {
        return Err(eyre!("Bad locations file version, aborting…"));
    }
    Ok(loc.location)
}

/// List loaded locations
///
#[tracing::instrument]
pub fn list_locations(data: &BTreeMap<String, Coordinates>) -> Result<String> {
    trace!("enter");
    let header = vec!["Location", "Lat/Lon", "Qibla", "Distance"];

    let mut builder = Builder::default();
    builder.push_record(header);

    data.iter().for_each(|(name, pos)| {
        let point = format!("{:.4}, {:.4}", pos.lat, pos.lon);
        let dir = format!("{:.2}°", qibla(*pos));
        let dist = format!("{:.0} km", distance_km(*pos, KAABA));
        builder.push_record(vec![name, &point, &dir, &dist]);
    });

    let allf = builder.build().with(Style::modern()).to_string();
    Ok(format!("List all locations:\n{allf}"))
}
