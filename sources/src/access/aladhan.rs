//! Aladhan prayer-times service specifics
//!
//! Free service, no authentication.  One GET returns a whole civil day of
//! timings keyed on the observer's position, the calculation method tunes the
//! twilight angles used for Fajr and Isha.
//!

use chrono::NaiveDate;
use clap::{crate_name, crate_version};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::{debug, trace};

use miqat_common::Coordinates;
use miqat_formats::{Schedule, TimingsResponse};

use crate::site::Site;
use crate::{http_get, FetchError};

/// Default computation method, 3 is Muslim World League
///
pub const DEF_METHOD: u8 = 3;

/// This describes the Aladhan timings service
///
#[derive(Clone, Debug)]
pub struct Aladhan {
    /// Computation method forwarded to the service
    pub method: u8,
    /// Base site url taken from config
    pub base_url: String,
    /// Add this to `base_url` to fetch data, `$1` is the date
    pub get: String,
    /// reqwest blocking client
    pub client: Client,
}

impl Aladhan {
    #[tracing::instrument]
    pub fn new() -> Self {
        trace!("aladhan::new");

        // Set some reasonable defaults
        //
        Aladhan {
            method: DEF_METHOD,
            base_url: "".to_owned(),
            get: "".to_owned(),
            client: Client::new(),
        }
    }

    /// Load our site details from what is in the configuration file
    ///
    #[tracing::instrument]
    pub fn load(&mut self, site: &Site) -> &mut Self {
        trace!("aladhan::load({site:?})");

        self.base_url = site.base_url.to_owned();
        if let Some(get) = site.route("get") {
            self.get = get.to_owned();
        }
        self
    }

    /// Select the computation method
    ///
    pub fn method(&mut self, method: u8) -> &mut Self {
        self.method = method;
        self
    }

    /// Fetch one day of timings for the given position.
    ///
    #[tracing::instrument(skip(self))]
    pub fn fetch(&self, position: Coordinates, date: NaiveDate) -> Result<Schedule, FetchError> {
        trace!("aladhan::fetch");

        if self.get.is_empty() {
            return Err(FetchError::NoRoute("get".to_string()));
        }

        let date = date.format("%d-%m-%Y").to_string();
        let url = format!("{}{}", self.base_url, self.get.replace("$1", &date));
        let url = format!(
            "{}?latitude={}&longitude={}&method={}",
            url, position.lat, position.lon, self.method
        );
        trace!("Fetching timings through {}…", url);

        let resp = http_get!(self, url).map_err(|e| FetchError::HTTP(e.to_string()))?;
        match resp.status() {
            StatusCode::OK => (),
            code => return Err(FetchError::Status(code.as_u16())),
        }

        let resp = resp.text().map_err(|e| FetchError::HTTP(e.to_string()))?;
        debug!("{} bytes read. ", resp.len());

        let data: TimingsResponse =
            serde_json::from_str(&resp).map_err(|e| FetchError::Decoding(e.to_string()))?;

        // The service mirrors its status in the payload as well.
        //
        if data.code != 200 {
            return Err(FetchError::Status(data.code));
        }

        Ok(Schedule::try_from(data)?)
    }
}

impl Default for Aladhan {
    fn default() -> Self {
        Self::new()
    }
}
