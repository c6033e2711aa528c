//! Configuration of the `miqatctl` binary.
//!
//! Everything here is optional, a missing file just means built-in defaults.
//!

use eyre::{eyre, Result};
use serde::Deserialize;
use tracing::trace;

use miqat_common::ConfigFile;

/// Default configuration filename
const CTL_CONFIG: &str = "config.hcl";

/// Configuration file version
const CONFIG_VERSION: usize = 1;

/// Options kept in `config.hcl`.
///
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CtlConfig {
    /// Usual check for malformed file
    pub version: usize,
    /// Named location used when none is given on the command line
    pub default_location: Option<String>,
    /// Default computation method
    pub method: Option<u8>,
}

impl CtlConfig {
    /// Load the configuration.  An absent default file is not an error, the
    /// defaults apply.
    ///
    #[tracing::instrument]
    pub fn load(fname: Option<&str>) -> Result<Self> {
        trace!("ctlconfig::load");

        let inner = match fname {
            Some(fname) => ConfigFile::<CtlConfig>::load(Some(fname))?.inner().clone(),
            None => {
                let def = ConfigFile::<CtlConfig>::default_path().join(CTL_CONFIG);
                if def.exists() {
                    ConfigFile::<CtlConfig>::load(Some(&def.to_string_lossy()))?
                        .inner()
                        .clone()
                } else {
                    return Ok(CtlConfig {
                        version: CONFIG_VERSION,
                        ..Default::default()
                    });
                }
            }
        };

        if inner.version != CONFIG_VERSION {
            return Err(eyre!(
                "Bad config version {}, need {}",
                inner.version,
                CONFIG_VERSION
            ));
        }
        Ok(inner)
    }
}
