//! Once-per-second countdown loop.
//!
//! The loop recomputes the time left on every tick instead of decrementing,
//! so a suspended or slow host shows the true remainder when it wakes up.
//! On reaching the target it sends the final `00:00:00`, announces `Expired`
//! and stops.  It never advances to the next event on its own, that decision
//! belongs to the watch.
//!

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use chrono::{Local, NaiveDateTime, TimeDelta};
use tracing::trace;

use miqat_common::{format_countdown, remaining};

/// Nominal tick period
const TICK: Duration = Duration::from_secs(1);

/// What the loop sends on each tick.
///
#[derive(Clone, Debug, PartialEq)]
pub enum Tick {
    /// Time left, already formatted as `HH:MM:SS`
    Remaining(String),
    /// Target reached, the loop is done
    Expired,
}

/// Handle on a running countdown.  Dropping it cancels the loop.
///
#[derive(Debug)]
pub struct Ticker {
    /// Set to true to stop the loop
    term: Arc<AtomicBool>,
    /// Worker thread
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Spawn the loop counting down to `target`, ticks go out on `tx`.
    ///
    pub fn start(target: NaiveDateTime, tx: Sender<Tick>) -> Self {
        Self::with_period(target, tx, TICK)
    }

    /// Same, with a caller-chosen period.
    ///
    #[tracing::instrument(skip(tx))]
    pub fn with_period(target: NaiveDateTime, tx: Sender<Tick>, period: Duration) -> Self {
        trace!("ticker::start({target})");

        let term = Arc::new(AtomicBool::new(false));
        let stop = Arc::clone(&term);

        let handle = thread::spawn(move || {
            loop {
                if stop.load(Ordering::Relaxed) {
                    trace!("ticker::stopped");
                    break;
                }

                let now = Local::now().naive_local();
                let left = remaining(target, now);

                // A gone receiver means nobody is watching anymore.
                //
                if tx.send(Tick::Remaining(format_countdown(left))).is_err() {
                    break;
                }

                if left == TimeDelta::zero() {
                    trace!("ticker::expired");
                    let _ = tx.send(Tick::Expired);
                    break;
                }

                thread::sleep(period);
            }
        });

        Ticker {
            term,
            handle: Some(handle),
        }
    }

    /// Stop the loop and wait for the thread to finish.
    ///
    pub fn stop(&mut self) {
        self.term.store(true, Ordering::Relaxed);
        if let Some(h) = self.handle.take() {
            let _ = h.join();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::channel;

    #[test]
    fn test_ticker_expired_target() {
        let (tx, rx) = channel();
        let target = Local::now().naive_local() - TimeDelta::seconds(5);

        let mut t = Ticker::with_period(target, tx, Duration::from_millis(5));

        assert_eq!(Tick::Remaining("00:00:00".to_string()), rx.recv().unwrap());
        assert_eq!(Tick::Expired, rx.recv().unwrap());
        t.stop();
    }

    #[test]
    fn test_ticker_counts() {
        let (tx, rx) = channel();
        let target = Local::now().naive_local() + TimeDelta::minutes(10);

        let mut t = Ticker::with_period(target, tx, Duration::from_millis(5));

        match rx.recv().unwrap() {
            Tick::Remaining(s) => {
                assert_eq!(8, s.len());
                assert!(s.starts_with("00:0"));
                assert_ne!("00:00:00", s);
            }
            Tick::Expired => panic!("expired way too early"),
        }
        t.stop();
    }

    #[test]
    fn test_ticker_stop_ends_stream() {
        let (tx, rx) = channel();
        let target = Local::now().naive_local() + TimeDelta::hours(1);

        let mut t = Ticker::with_period(target, tx, Duration::from_millis(5));
        let _ = rx.recv().unwrap();
        t.stop();

        // Thread is joined, draining the channel must terminate.
        //
        let rest = rx.iter().count();
        assert!(rest < 10_000);
    }

    #[test]
    fn test_ticker_drop_cancels() {
        let (tx, rx) = channel();
        let target = Local::now().naive_local() + TimeDelta::hours(1);

        {
            let _t = Ticker::with_period(target, tx, Duration::from_millis(5));
            let _ = rx.recv().unwrap();
        }

        // Sender side is gone once the handle is dropped.
        //
        let rest = rx.iter().count();
        assert!(rest < 10_000);
    }
}
