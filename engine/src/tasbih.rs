//! Persisted dhikr counter.
//!
//! Every change is written through to the backing store right away, a crash
//! or restart resumes at the last persisted value.  Absent or garbled stored
//! data restarts the count at zero rather than failing.
//!

use eyre::Result;
use tracing::{trace, warn};

use miqat_sources::KeyValueStore;

/// Key under which the count is stored
const COUNT_KEY: &str = "tasbih_count";

/// The counter and its backing store.  No upper bound.
///
#[derive(Debug)]
pub struct Tasbih<S: KeyValueStore> {
    store: S,
    count: u64,
}

impl<S: KeyValueStore> Tasbih<S> {
    /// Open the counter, restoring the previous count if any.
    ///
    #[tracing::instrument(skip(store))]
    pub fn load(store: S) -> Self {
        let count = match store.get(COUNT_KEY) {
            Ok(Some(data)) => data.trim().parse::<u64>().unwrap_or_else(|_| {
                warn!("stored count {data:?} is not a number, starting over");
                0
            }),
            Ok(None) => 0,
            Err(e) => {
                warn!("can not read stored count: {e}");
                0
            }
        };
        trace!("tasbih::load count={count}");
        Tasbih { store, count }
    }

    /// Current count
    ///
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Bump by one and persist.
    ///
    pub fn increment(&mut self) -> Result<u64> {
        self.count += 1;
        self.store.put(COUNT_KEY, &self.count.to_string())?;
        Ok(self.count)
    }

    /// Back to zero and persist.
    ///
    pub fn reset(&mut self) -> Result<()> {
        self.count = 0;
        self.store.put(COUNT_KEY, "0")?;
        Ok(())
    }
}
