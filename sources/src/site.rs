//! Module that defines what is a site (website, API endpoint, etc.)
//!
//! This is used to configure the list of possible services through `sources.hcl`.
//!
//! You can define a set of possible routes for a site depending on how the API
//! is designed.  `$1`, `$2`… inside a route are positional arguments filled in
//! by the access module at request time.
//!

use std::collections::BTreeMap;
use std::fmt::{Debug, Display, Formatter};

use serde::{Deserialize, Serialize};
use strum::EnumString;

use crate::FetchError;

/// What a site serves.
///
#[derive(
    Copy, Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize, strum::Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ServiceKind {
    /// Daily prayer times
    #[default]
    Timings,
    /// Quran chapters and verses
    Quran,
}

/// Describe what a site is.
///
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Site {
    /// Name of the site, filled in from the config block label
    #[serde(default)]
    pub name: String,
    /// What the site serves
    pub kind: ServiceKind,
    /// Base URL (to avoid repeating)
    pub base_url: String,
    /// Different URLs available
    pub routes: Option<BTreeMap<String, String>>,
}

impl Site {
    /// Basic `new()`
    ///
    pub fn new() -> Self {
        Site::default()
    }

    /// Return the list of routes
    ///
    pub fn list(&self) -> Vec<&String> {
        match &self.routes {
            Some(routes) => routes.keys().collect::<Vec<_>>(),
            _ => vec![],
        }
    }

    /// Check whether site has the mentioned route
    ///
    pub fn has(&self, meth: &str) -> bool {
        match &self.routes {
            Some(routes) => routes.contains_key(meth),
            _ => false,
        }
    }

    /// Retrieve a route
    ///
    pub fn route(&self, key: &str) -> Option<&String> {
        match &self.routes {
            Some(routes) => routes.get(key),
            _ => None,
        }
    }

    /// Retrieve a route and fill in its positional arguments
    ///
    pub fn route_with(&self, key: &str, args: &[&str]) -> Result<String, FetchError> {
        let route = self
            .route(key)
            .ok_or_else(|| FetchError::NoRoute(key.to_string()))?;

        let mut url = route.clone();
        for (n, arg) in args.iter().enumerate() {
            url = url.replace(&format!("${}", n + 1), arg);
        }
        Ok(url)
    }
}

impl Display for Site {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ kind={} url={} routes={:?} }}",
            self.kind, self.base_url, self.routes
        )
    }
}
