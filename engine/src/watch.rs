//! Lifecycle of one watch session.
//!
//! A session goes position, then schedule, then a resolved next event.  Every
//! step can fail without killing the session, failures park it in
//! `Unavailable` until somebody starts it again.
//!
//! Fetches are numbered.  The watch hands out a sequence number with each
//! position and only accepts the schedule answer carrying the current one, so
//! a slow fetch that comes home after a relocation is dropped on the floor
//! instead of overwriting fresher data.
//!

use std::fmt;

use chrono::NaiveDateTime;
use tracing::{debug, trace};

use miqat_common::Coordinates;
use miqat_formats::{ResolvedEvent, Schedule};
use miqat_sources::{FetchError, LocationError};

use crate::EngineStatus;

/// Where a session currently stands.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub enum WatchState {
    /// Nothing started yet
    #[default]
    Idle,
    /// Waiting for the host to produce a position
    AwaitingLocation,
    /// Position known, schedule fetch in flight
    AwaitingSchedule,
    /// Schedule loaded and next event resolved
    Ready,
    /// Something gave up on the way, the reason is for display
    Unavailable(String),
}

impl fmt::Display for WatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WatchState::Idle => write!(f, "idle"),
            WatchState::AwaitingLocation => write!(f, "awaiting location"),
            WatchState::AwaitingSchedule => write!(f, "awaiting schedule"),
            WatchState::Ready => write!(f, "ready"),
            WatchState::Unavailable(reason) => write!(f, "unavailable: {reason}"),
        }
    }
}

/// The session itself.  Pure state, all I/O stays with the caller.
///
#[derive(Debug, Default)]
pub struct Watch {
    /// Where we are in the lifecycle
    state: WatchState,
    /// Observer position once acquired
    position: Option<Coordinates>,
    /// The day's schedule once fetched
    schedule: Option<Schedule>,
    /// Next event, resolved whenever we reach `Ready`
    next: Option<ResolvedEvent>,
    /// Fetch sequence number, last issued wins
    seq: u64,
}

impl Watch {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> &WatchState {
        &self.state
    }

    #[inline]
    pub fn position(&self) -> Option<Coordinates> {
        self.position
    }

    #[inline]
    pub fn schedule(&self) -> Option<&Schedule> {
        self.schedule.as_ref()
    }

    /// Resolved next event, `None` unless we got to `Ready` at least once.
    ///
    #[inline]
    pub fn next(&self) -> Option<ResolvedEvent> {
        self.next
    }

    /// Begin (or retry) a session.  Everything acquired so far is dropped.
    ///
    #[tracing::instrument(skip(self))]
    pub fn start(&mut self) -> &mut Self {
        trace!("watch::start");

        self.state = WatchState::AwaitingLocation;
        self.position = None;
        self.schedule = None;
        self.next = None;
        self
    }

    /// Position acquired.  Returns the sequence number the matching schedule
    /// answer must carry.
    ///
    #[tracing::instrument(skip(self))]
    pub fn location_ready(&mut self, position: Coordinates) -> u64 {
        self.seq += 1;
        trace!("watch::location_ready seq={}", self.seq);

        self.position = Some(position);
        self.schedule = None;
        self.next = None;
        self.state = WatchState::AwaitingSchedule;
        self.seq
    }

    /// Position acquisition failed, park the session.
    ///
    pub fn location_failed(&mut self, err: &LocationError) -> &mut Self {
        debug!("watch: no position: {err}");
        self.state = WatchState::Unavailable(err.to_string());
        self
    }

    /// A new position supersedes whatever is in flight, the old fetch's
    /// answer becomes stale.
    ///
    pub fn relocate(&mut self, position: Coordinates) -> u64 {
        self.location_ready(position)
    }

    /// Schedule answer for fetch `seq`.  Returns false when the answer was
    /// stale and dropped.
    ///
    #[tracing::instrument(skip(self, schedule))]
    pub fn schedule_ready(&mut self, seq: u64, schedule: Schedule, now: NaiveDateTime) -> bool {
        if seq != self.seq {
            debug!("watch: dropping stale schedule seq={seq} current={}", self.seq);
            return false;
        }

        match schedule.next_after(now) {
            Ok(next) => {
                self.next = Some(next);
                self.schedule = Some(schedule);
                self.state = WatchState::Ready;
            }
            Err(e) => {
                self.schedule = Some(schedule);
                self.next = None;
                self.state = WatchState::Unavailable(e.to_string());
            }
        }
        true
    }

    /// Fetch failure for `seq`.  A stale failure is dropped the same way a
    /// stale answer is.
    ///
    #[tracing::instrument(skip(self))]
    pub fn schedule_failed(&mut self, seq: u64, err: &FetchError) -> bool {
        if seq != self.seq {
            debug!("watch: dropping stale failure seq={seq} current={}", self.seq);
            return false;
        }

        self.state = WatchState::Unavailable(err.to_string());
        true
    }

    /// Re-resolve against the current schedule once the target has passed.
    ///
    /// The countdown loop never advances on its own, the caller invokes this
    /// on expiry and restarts its ticker on the new target.
    ///
    #[tracing::instrument(skip(self))]
    pub fn advance(&mut self, now: NaiveDateTime) -> Result<ResolvedEvent, EngineStatus> {
        trace!("watch::advance");

        let schedule = self.schedule.as_ref().ok_or(EngineStatus::NoSchedule)?;
        let next = schedule.next_after(now)?;

        self.next = Some(next);
        self.state = WatchState::Ready;
        Ok(next)
    }
}
