//! Daily schedule and next-event resolution.
//!
//! A `Schedule` holds the wall-clock times of one civil day.  Resolution walks
//! the canonical events in day order and picks the first one strictly after
//! `now`, rolling over to tomorrow's Fajr once the day is exhausted.
//!

use std::collections::BTreeMap;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};
use tabled::builder::Builder;
use tabled::settings::Style;
use thiserror::Error;
use tracing::trace;

use crate::PrayerEvent;

/// Errors around schedule content.
///
#[derive(Debug, Error, PartialEq)]
pub enum ScheduleError {
    #[error("unparsable date string {0}")]
    BadDate(String),
    #[error("unparsable time string {0}")]
    BadTime(String),
    #[error("no {0} in schedule, cannot roll over")]
    MissingEvent(PrayerEvent),
}

/// Parse a service time like `"05:00"` or `"05:00 (+03)"` into a `NaiveTime`.
///
/// Some deployments of the service append a timezone annotation, anything
/// after the first blank is ignored.
///
pub fn parse_hhmm(input: &str) -> Result<NaiveTime, ScheduleError> {
    let hhmm = input.split_whitespace().next().unwrap_or(input);
    NaiveTime::parse_from_str(hhmm, "%H:%M").map_err(|_| ScheduleError::BadTime(input.to_owned()))
}

/// Outcome of a resolution, an event and the instant it occurs.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedEvent {
    pub event: PrayerEvent,
    pub when: NaiveDateTime,
}

impl fmt::Display for ResolvedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.event, self.when.format("%H:%M"))
    }
}

/// One civil day of event times, as fetched from the service.
///
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Schedule {
    /// Civil date the times belong to
    pub date: NaiveDate,
    /// Wall-clock time of each known event
    pub times: BTreeMap<PrayerEvent, NaiveTime>,
    /// Hijri date label as the service displays it
    pub hijri: Option<String>,
}

impl Schedule {
    pub fn new(date: NaiveDate) -> Self {
        Schedule {
            date,
            ..Self::default()
        }
    }

    #[inline]
    pub fn time(&self, event: PrayerEvent) -> Option<NaiveTime> {
        self.times.get(&event).copied()
    }

    /// All five prayers present?
    ///
    pub fn is_complete(&self) -> bool {
        PrayerEvent::CANONICAL
            .iter()
            .all(|e| self.times.contains_key(e))
    }

    /// Resolve the next event strictly after `now`.
    ///
    /// Candidate instants are formed on `now`'s calendar day, an event at
    /// exactly `now` is already behind us.  When every prayer of the day has
    /// passed, the answer is Fajr on the following day.
    ///
    #[tracing::instrument(skip(self))]
    pub fn next_after(&self, now: NaiveDateTime) -> Result<ResolvedEvent, ScheduleError> {
        trace!("schedule::next_after");

        let today = now.date();
        for event in PrayerEvent::CANONICAL {
            if let Some(t) = self.times.get(&event) {
                let when = today.and_time(*t);
                if when > now {
                    return Ok(ResolvedEvent { event, when });
                }
            }
        }

        // Day exhausted, roll over to tomorrow's Fajr.
        //
        let fajr = self
            .times
            .get(&PrayerEvent::Fajr)
            .ok_or(ScheduleError::MissingEvent(PrayerEvent::Fajr))?;
        let when = today.and_time(*fajr) + TimeDelta::days(1);
        Ok(ResolvedEvent {
            event: PrayerEvent::Fajr,
            when,
        })
    }

    /// Render the whole day as a table using `tabled`.
    ///
    pub fn table(&self) -> eyre::Result<String> {
        let header = vec!["Event", "Time"];

        let mut builder = Builder::default();
        builder.push_record(header);

        self.times.iter().for_each(|(event, t)| {
            let name = event.to_string();
            let time = t.format("%H:%M").to_string();
            builder.push_record(vec![name, time]);
        });

        let allf = builder.build().with(Style::modern()).to_string();
        let day = match &self.hijri {
            Some(hijri) => format!("{} ({})", self.date, hijri),
            None => self.date.to_string(),
        };
        Ok(format!("Schedule for {day}:\n{allf}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> Schedule {
        let mut s = Schedule::new(NaiveDate::from_ymd_opt(2026, 8, 23).unwrap());
        for (event, hhmm) in [
            (PrayerEvent::Fajr, "05:00"),
            (PrayerEvent::Dhuhr, "12:15"),
            (PrayerEvent::Asr, "15:45"),
            (PrayerEvent::Maghrib, "18:20"),
            (PrayerEvent::Isha, "19:50"),
        ] {
            s.times.insert(event, parse_hhmm(hhmm).unwrap());
        }
        s
    }

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 23)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_parse_hhmm() {
        assert_eq!(
            NaiveTime::from_hms_opt(5, 0, 0).unwrap(),
            parse_hhmm("05:00").unwrap()
        );
        assert_eq!(
            NaiveTime::from_hms_opt(18, 20, 0).unwrap(),
            parse_hhmm("18:20 (+03)").unwrap()
        );
        assert_eq!(
            NaiveTime::from_hms_opt(5, 0, 0).unwrap(),
            parse_hhmm("5:00").unwrap()
        );
    }

    #[rstest]
    #[case("")]
    #[case("garbage")]
    #[case("25:00")]
    #[case("12:61")]
    fn test_parse_hhmm_bad(#[case] input: &str) {
        assert!(parse_hhmm(input).is_err());
    }

    #[rstest]
    #[case(4, 0, 0, PrayerEvent::Fajr, "05:00")]
    #[case(5, 0, 0, PrayerEvent::Dhuhr, "12:15")]
    #[case(12, 14, 59, PrayerEvent::Dhuhr, "12:15")]
    #[case(12, 15, 0, PrayerEvent::Asr, "15:45")]
    #[case(18, 20, 0, PrayerEvent::Isha, "19:50")]
    fn test_next_after_same_day(
        #[case] h: u32,
        #[case] m: u32,
        #[case] s: u32,
        #[case] event: PrayerEvent,
        #[case] hhmm: &str,
    ) {
        let next = sample().next_after(at(h, m, s)).unwrap();
        assert_eq!(event, next.event);
        assert_eq!(parse_hhmm(hhmm).unwrap(), next.when.time());
        assert_eq!(at(0, 0, 0).date(), next.when.date());
    }

    #[rstest]
    #[case(19, 50, 0)]
    #[case(20, 0, 0)]
    #[case(23, 59, 59)]
    fn test_next_after_rolls_over(#[case] h: u32, #[case] m: u32, #[case] s: u32) {
        let next = sample().next_after(at(h, m, s)).unwrap();
        assert_eq!(PrayerEvent::Fajr, next.event);
        assert_eq!(
            NaiveDate::from_ymd_opt(2026, 8, 24).unwrap(),
            next.when.date()
        );
        assert_eq!(NaiveTime::from_hms_opt(5, 0, 0).unwrap(), next.when.time());
    }

    #[test]
    fn test_next_after_skips_missing() {
        let mut s = sample();
        s.times.remove(&PrayerEvent::Asr);
        let next = s.next_after(at(12, 15, 0)).unwrap();
        assert_eq!(PrayerEvent::Maghrib, next.event);
    }

    #[test]
    fn test_next_after_ignores_sunrise() {
        let mut s = sample();
        s.times
            .insert(PrayerEvent::Sunrise, parse_hhmm("06:10").unwrap());
        let next = s.next_after(at(5, 30, 0)).unwrap();
        assert_eq!(PrayerEvent::Dhuhr, next.event);
    }

    #[test]
    fn test_next_after_no_fajr() {
        let mut s = sample();
        s.times.remove(&PrayerEvent::Fajr);
        let next = s.next_after(at(20, 0, 0));
        assert_eq!(
            Err(ScheduleError::MissingEvent(PrayerEvent::Fajr)),
            next
        );
    }

    #[test]
    fn test_is_complete() {
        let mut s = sample();
        assert!(s.is_complete());
        s.times.remove(&PrayerEvent::Isha);
        assert!(!s.is_complete());
    }

    #[test]
    fn test_table() {
        let out = sample().table().unwrap();
        assert!(out.contains("Fajr"));
        assert!(out.contains("05:00"));
        assert!(out.contains("2026-08-23"));
    }

    #[test]
    fn test_resolved_display() {
        let next = sample().next_after(at(12, 15, 0)).unwrap();
        assert_eq!("Asr at 15:45", next.to_string());
    }
}
