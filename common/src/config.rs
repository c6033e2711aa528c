//! This is the `ConfigFile` struct.
//!
//! This is for finding the right default locations for various configuration files for
//! `miqat`.  This is a configuration file/struct neutral loading engine, storing only the
//! base directory and with `load()` read the proper file or the default one.
//!
//! This encapsulates the configuration file, available with `.inner()` or `.inner_mut()`.
//!
//! Each configuration struct carries its own `version` attribute, checked by its caller
//! after loading.
//!

use crate::makepath;

use directories::BaseDirs;
use eyre::{eyre, Result};
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use std::path::PathBuf;
use std::{env, fs};
use tracing::{debug, trace};

/// Config filename
const CONFIG: &str = "config.hcl";

/// Main name for the directory base
const TAG: &str = "miqat";

/// Configuration for the CLI tool, holds parameters like the default observer
/// location and the computation method.
///
#[derive(Debug)]
pub struct ConfigFile<T: Debug + DeserializeOwned> {
    /// Tag is the project name.
    tag: String,
    /// This is the base directory for all files.
    basedir: PathBuf,
    inner: Option<T>,
}

impl<T> ConfigFile<T>
where
    T: Debug + DeserializeOwned,
{
    #[tracing::instrument]
    fn new(tag: &str) -> Self {
        let base = BaseDirs::new();

        let basedir: PathBuf = match base {
            Some(base) => {
                #[cfg(unix)]
                let base = base.home_dir().join(".config").to_string_lossy().to_string();

                #[cfg(windows)]
                let base = base.data_local_dir().to_string_lossy().to_string();

                debug!("base = {base}");
                let base: PathBuf = makepath!(base, tag);
                base
            }
            None => {
                #[cfg(unix)]
                let homedir = env::var("HOME").unwrap_or_else(|_| String::from("."));

                #[cfg(windows)]
                let homedir = env::var("LOCALAPPDATA").unwrap_or_else(|_| String::from("."));

                debug!("base = {homedir}");

                #[cfg(unix)]
                let base: PathBuf = makepath!(homedir, ".config", tag);

                #[cfg(windows)]
                let base: PathBuf = makepath!(homedir, tag);

                base
            }
        };
        ConfigFile {
            tag: String::from(tag),
            basedir,
            inner: None,
        }
    }

    /// Returns the path of the default config directory
    ///
    #[tracing::instrument]
    pub fn config_path(&self) -> PathBuf {
        self.basedir.clone()
    }

    /// Returns the path of the default config directory without loading anything
    ///
    #[tracing::instrument]
    pub fn default_path() -> PathBuf {
        // FIXME: TAG is hardcoded.
        //
        ConfigFile::<T>::new(TAG).config_path()
    }

    /// Returns the path of the default config file
    ///
    #[tracing::instrument]
    pub fn default_file(&self) -> PathBuf {
        let cfg = self.config_path().join(CONFIG);
        debug!("default = {cfg:?}");
        cfg
    }

    /// Load the file and return a struct T in the right format.
    ///
    /// Use the following search path:
    /// - file specified on CLI
    /// - default basedir (based on $HOME or $LOCALAPPDATA)
    ///
    #[tracing::instrument]
    pub fn load(fname: Option<&str>) -> Result<ConfigFile<T>> {
        // Create context
        //
        // FIXME: TAG is hardcoded.
        //
        let mut cfg = ConfigFile::<T>::new(TAG);

        let fname = match fname {
            Some(fname) => PathBuf::from(fname),
            None => cfg.default_file(),
        };

        // Use a full path
        //
        let fname = if fname.exists() {
            fname.canonicalize()?
        } else {
            return Err(eyre!(
                "Unknown config file {:?} and no default in {:?}",
                fname,
                cfg.default_file()
            ));
        };

        trace!("Loading config file {fname:?} from {:?}", cfg.config_path());

        let data = fs::read_to_string(fname)?;
        debug!("string data = {data}");

        let data: T = hcl::from_str(&data)?;
        debug!("struct data = {data:?}");

        cfg.inner = Some(data);
        Ok(cfg)
    }

    /// Return the inner configuration file
    ///
    pub fn inner(&self) -> &T {
        self.inner.as_ref().unwrap()
    }

    /// Return the inner configuration file as mutable
    ///
    pub fn inner_mut(&mut self) -> &mut T {
        self.inner.as_mut().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::env::temp_dir;

    #[derive(Clone, Debug, Default, Deserialize)]
    struct Foo {
        pub version: usize,
        pub name: String,
    }

    #[test]
    fn test_config_engine_load_file() -> Result<()> {
        let fname = temp_dir().join("miqat-config-test.hcl");
        fs::write(&fname, "version = 1\nname = \"testbed\"\n")?;

        let cfg = ConfigFile::<Foo>::load(Some(&fname.to_string_lossy()))?;
        let inner = cfg.inner();
        assert_eq!(1, inner.version);
        assert_eq!("testbed", inner.name);

        fs::remove_file(&fname)?;
        Ok(())
    }

    #[test]
    fn test_config_engine_load_missing() {
        let cfg = ConfigFile::<Foo>::load(Some("/nonexistent/miqat.hcl"));
        assert!(cfg.is_err());
    }
}
