//! Key/value stores backing the persisted counters.
//!
//! `FileStore` keeps one plain file per key under a base directory, created
//! on first write.  `MemoryStore` is for hosts without a writable filesystem
//! and for tests.
//!

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use eyre::{eyre, Result};
use tracing::trace;

use crate::KeyValueStore;

/// Subdirectory holding the stored values
const STORE_BASE: &str = "state";

/// One plain file per key.  Keys are used as file names so keep them simple.
///
#[derive(Debug)]
pub struct FileStore {
    /// Base directory, created on first write
    base: PathBuf,
}

impl FileStore {
    /// `base` is usually the application configuration directory, values go
    /// into a `state/` subdirectory underneath.
    ///
    pub fn new(base: PathBuf) -> Self {
        FileStore {
            base: base.join(STORE_BASE),
        }
    }

    fn path_of(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl KeyValueStore for FileStore {
    #[tracing::instrument]
    fn get(&self, key: &str) -> Result<Option<String>> {
        let fname = self.path_of(key);
        trace!("store::get {fname:?}");

        if fname.exists() {
            Ok(Some(fs::read_to_string(fname)?))
        } else {
            Ok(None)
        }
    }

    #[tracing::instrument]
    fn put(&self, key: &str, value: &str) -> Result<()> {
        if !self.base.exists() {
            // Create it
            //
            trace!("store::create {:?}", self.base);
            fs::create_dir_all(&self.base)?;
        }
        let fname = self.path_of(key);
        trace!("store::put {fname:?}");

        Ok(fs::write(fname, value)?)
    }
}

/// In-memory store for tests and throwaway sessions.
///
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let inner = self.inner.lock().map_err(|_| eyre!("store poisoned"))?;
        Ok(inner.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        let mut inner = self.inner.lock().map_err(|_| eyre!("store poisoned"))?;
        inner.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_filestore_missing_key() -> Result<()> {
        init();

        let base = temp_dir().join("miqat-store-missing");
        let store = FileStore::new(base.clone());

        assert_eq!(None, store.get("nope")?);
        let _ = fs::remove_dir_all(&base);
        Ok(())
    }

    #[test]
    fn test_filestore_roundtrip() -> Result<()> {
        init();

        let base = temp_dir().join("miqat-store-roundtrip");
        let store = FileStore::new(base.clone());

        store.put("counter", "42")?;
        assert_eq!(Some("42".to_string()), store.get("counter")?);

        // Overwrite in place.
        //
        store.put("counter", "43")?;
        assert_eq!(Some("43".to_string()), store.get("counter")?);

        let _ = fs::remove_dir_all(&base);
        Ok(())
    }

    #[test]
    fn test_filestore_survives_reopen() -> Result<()> {
        init();

        let base = temp_dir().join("miqat-store-reopen");
        {
            let store = FileStore::new(base.clone());
            store.put("counter", "3")?;
        }

        let store = FileStore::new(base.clone());
        assert_eq!(Some("3".to_string()), store.get("counter")?);

        let _ = fs::remove_dir_all(&base);
        Ok(())
    }

    #[test]
    fn test_memorystore() -> Result<()> {
        let store = MemoryStore::new();

        assert_eq!(None, store.get("counter")?);
        store.put("counter", "7")?;
        assert_eq!(Some("7".to_string()), store.get("counter")?);
        Ok(())
    }
}
