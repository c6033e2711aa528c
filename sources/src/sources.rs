//! This is the exposed part of the `miqat-sources` API.
//!

use std::collections::btree_map::{Iter, Keys, Values};
use std::collections::BTreeMap;
use std::fs;
use std::ops::Index;
use std::path::PathBuf;

use eyre::{eyre, Result};
use serde::Deserialize;
use tabled::builder::Builder;
use tabled::settings::Style;
use tracing::trace;

use crate::{Site, CONFIG};

use miqat_common::ConfigFile;

/// Current sources.hcl version
const SOURCES_VERSION: usize = 1;

/// On-disk structure of the configuration file.
///
#[derive(Clone, Debug, Default, Deserialize)]
struct SourcesConfig {
    /// Version number for safety
    version: usize,
    /// Known sites
    #[serde(default)]
    site: BTreeMap<String, Site>,
}

/// List of sources, this is the only exposed struct from here.
///
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Sources {
    site: BTreeMap<String, Site>,
}

/// Initialise a `Sources` from a `BTreeMap`
///
impl From<BTreeMap<String, Site>> for Sources {
    fn from(value: BTreeMap<String, Site>) -> Self {
        Sources { site: value }
    }
}

/// Initialise a `Sources` from a list of pairs
///
impl From<Vec<(String, Site)>> for Sources {
    fn from(value: Vec<(String, Site)>) -> Self {
        let mut sites = BTreeMap::<String, Site>::new();
        value.iter().for_each(|(n, s)| {
            sites.insert(n.clone(), s.clone());
        });
        Sources { site: sites }
    }
}

impl Sources {
    /// Load sources from the named file, from the on-disk default, or from the
    /// embedded copy when neither exists.  First run works out of the box.
    ///
    #[tracing::instrument]
    pub fn load(fname: Option<&str>) -> Result<Self> {
        trace!("sources::load");

        let data = match fname {
            Some(fname) => fs::read_to_string(fname)?,
            None => {
                let def = ConfigFile::<SourcesConfig>::default_path().join(CONFIG);
                if def.exists() {
                    fs::read_to_string(def)?
                } else {
                    include_str!("sources.hcl").to_owned()
                }
            }
        };

        let sfile: SourcesConfig = hcl::from_str(&data)?;
        if sfile.version != SOURCES_VERSION {
            return Err(eyre!("Bad sources file version {}", sfile.version));
        }

        // The name of a site is its block label, patch it in.
        //
        let all = sfile
            .site
            .iter()
            .map(|(n, s)| {
                let mut site = s.clone();

                site.name = n.to_string();
                (n.to_string(), site)
            })
            .collect::<Vec<_>>();
        Ok(Sources::from(all))
    }

    /// Install default files
    ///
    #[tracing::instrument]
    pub fn install_defaults(dir: &PathBuf) -> std::io::Result<()> {
        // Create config directory if needed
        //
        if !dir.exists() {
            fs::create_dir_all(dir)?
        }

        // Copy content of `sources.hcl` into place.
        //
        let fname: PathBuf = dir.join(CONFIG);
        let content = include_str!("sources.hcl");
        fs::write(fname, content)
    }

    /// List of currently known sources into a nicely formatted string.
    ///
    #[tracing::instrument(skip(self))]
    pub fn list(&self) -> Result<String> {
        let header = vec!["Name", "Kind", "URL", "Ops"];

        let mut builder = Builder::default();
        builder.push_record(header);

        self.site.iter().for_each(|(n, s)| {
            let mut row = vec![];

            let kind = s.kind.to_string();
            let base_url = s.base_url.clone();
            let ops = s
                .list()
                .iter()
                .map(|r| r.to_string())
                .collect::<Vec<String>>()
                .join(",");
            row.push(n);
            row.push(&kind);
            row.push(&base_url);
            row.push(&ops);
            builder.push_record(row);
        });

        let table = builder.build().with(Style::rounded()).to_string();
        let table = format!("Listing all sources:\n{table}");
        Ok(table)
    }
}

/// Default directory where configuration and state files live.
///
pub fn default_config_dir() -> PathBuf {
    ConfigFile::<SourcesConfig>::default_path()
}

// -----

/// Helper methods
///
impl Sources {
    /// Wrap `get`
    ///
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Site> {
        self.site.get(name)
    }

    /// Wrap `is_empty()`
    ///
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.site.is_empty()
    }

    /// Wrap `len()`
    ///
    #[inline]
    pub fn len(&self) -> usize {
        self.site.len()
    }

    /// Wrap `keys()`
    ///
    #[inline]
    pub fn keys(&self) -> Keys<'_, String, Site> {
        self.site.keys()
    }

    /// Wrap `values()`
    ///
    #[inline]
    pub fn values(&self) -> Values<'_, String, Site> {
        self.site.values()
    }

    /// Wrap `contains_key()`
    ///
    #[inline]
    pub fn contains_key(&self, s: &str) -> bool {
        self.site.contains_key(s)
    }

    /// Wrap `iter()`
    ///
    #[inline]
    pub fn iter(&self) -> Iter<'_, String, Site> {
        self.site.iter()
    }
}

impl Index<&str> for Sources {
    type Output = Site;

    /// Wrap `index()`
    ///
    #[inline]
    fn index(&self, s: &str) -> &Self::Output {
        self.site.get(s).unwrap()
    }
}

impl<'a> IntoIterator for &'a Sources {
    type Item = (&'a String, &'a Site);
    type IntoIter = Iter<'a, String, Site>;

    /// We can now do `for (name, site) in &sources`
    ///
    fn into_iter(self) -> Iter<'a, String, Site> {
        self.site.iter()
    }
}
