//! Coordinates and great-circle math.
//!
//! Everything here works on plain decimal degrees.  Bearings are clockwise
//! from true North, normalised into `[0, 360)`.
//!

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

/// Mean Earth radius, in km
const MEAN_EARTH_RADIUS_KM: f64 = 6371.;

/// The Kaaba in Mecca, target of every qibla bearing
pub const KAABA: Coordinates = Coordinates {
    lat: 21.4225,
    lon: 39.8262,
};

/// Out-of-range degrees.
///
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CoordinatesError {
    #[error("latitude {0} out of [-90, 90]")]
    Latitude(f64),
    #[error("longitude {0} out of [-180, 180]")]
    Longitude(f64),
}

/// A geographic position
///
/// `new()` takes values as-is, the trigonometry does not reject them;
/// `checked()` enforces the valid ranges and is what user input goes
/// through.
///
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees, North positive
    pub lat: f64,
    /// Longitude in decimal degrees, East positive
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Coordinates { lat, lon }
    }

    /// Same, rejecting out-of-range degrees.
    ///
    pub fn checked(lat: f64, lon: f64) -> Result<Self, CoordinatesError> {
        if !(-90. ..=90.).contains(&lat) {
            return Err(CoordinatesError::Latitude(lat));
        }
        if !(-180. ..=180.).contains(&lon) {
            return Err(CoordinatesError::Longitude(lon));
        }
        Ok(Coordinates { lat, lon })
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lon)
    }
}

/// Initial great-circle bearing from `from` to `to`, in degrees `[0, 360)`.
///
/// Identical endpoints yield 0., never NaN.
///
#[tracing::instrument]
pub fn bearing(from: Coordinates, to: Coordinates) -> f64 {
    trace!("coordinates::bearing");

    if from == to {
        return 0.;
    }

    let phi1 = from.lat.to_radians();
    let phi2 = to.lat.to_radians();
    let dl = (to.lon - from.lon).to_radians();

    let y = dl.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * dl.cos();

    y.atan2(x).to_degrees().rem_euclid(360.)
}

/// Qibla bearing for an observer, i.e. the initial bearing towards the Kaaba.
///
#[tracing::instrument]
pub fn qibla(from: Coordinates) -> f64 {
    bearing(from, KAABA)
}

/// Angle the compass needle must point at on screen, given the qibla bearing
/// and the device heading (both clockwise from North).  A missing heading is
/// the caller's business, pass 0. for a North-facing device.
///
#[tracing::instrument]
pub fn pointer_angle(bearing: f64, heading: f64) -> f64 {
    (bearing - heading).rem_euclid(360.)
}

/// Great-circle distance between two positions, in km (haversine).
///
#[tracing::instrument]
pub fn distance_km(from: Coordinates, to: Coordinates) -> f64 {
    trace!("coordinates::distance_km");

    let phi1 = from.lat.to_radians();
    let phi2 = to.lat.to_radians();
    let dphi = (to.lat - from.lat).to_radians();
    let dl = (to.lon - from.lon).to_radians();

    let a = (dphi / 2.).sin().powi(2) + phi1.cos() * phi2.cos() * (dl / 2.).sin().powi(2);
    let c = 2. * a.sqrt().atan2((1. - a).sqrt());

    MEAN_EARTH_RADIUS_KM * c
}
