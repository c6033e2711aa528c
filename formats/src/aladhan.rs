//! Payloads of the `api.aladhan.com` timings endpoint.
//!
//! Only the fields we consume are declared, everything else in the rather
//! large response is left to serde to skip.
//!

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::trace;

use crate::{parse_hhmm, PrayerEvent, Schedule, ScheduleError};

/// Toplevel response of `GET /v1/timings/{date}`.
///
#[derive(Clone, Debug, Deserialize)]
pub struct TimingsResponse {
    /// Service-level status, mirrors the HTTP code
    pub code: u16,
    pub data: TimingsData,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TimingsData {
    /// Label to `HH:MM` string, includes non-prayer labels like `Imsak`
    pub timings: BTreeMap<String, String>,
    pub date: DateInfo,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DateInfo {
    pub gregorian: GregorianDate,
    pub hijri: HijriDate,
}

#[derive(Clone, Debug, Deserialize)]
pub struct GregorianDate {
    /// `DD-MM-YYYY`
    pub date: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct HijriDate {
    pub day: String,
    pub month: HijriMonth,
    pub year: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct HijriMonth {
    /// Transliterated month name
    pub en: String,
}

impl HijriDate {
    /// The label we display, e.g. `10 Rabīʿ al-awwal 1448 AH`.
    ///
    pub fn label(&self) -> String {
        format!("{} {} {} AH", self.day, self.month.en, self.year)
    }
}

impl TryFrom<TimingsResponse> for Schedule {
    type Error = ScheduleError;

    /// Keep the labels we know about, the service also sends `Imsak`,
    /// `Midnight` and friends which are not ours to display.
    ///
    #[tracing::instrument(skip(value))]
    fn try_from(value: TimingsResponse) -> Result<Self, Self::Error> {
        trace!("aladhan::try_from");

        let gregorian = &value.data.date.gregorian.date;
        let date = NaiveDate::parse_from_str(gregorian, "%d-%m-%Y")
            .map_err(|_| ScheduleError::BadDate(gregorian.clone()))?;

        let mut sched = Schedule::new(date);
        for (label, hhmm) in &value.data.timings {
            if let Ok(event) = label.parse::<PrayerEvent>() {
                sched.times.insert(event, parse_hhmm(hhmm)?);
            }
        }
        sched.hijri = Some(value.data.date.hijri.label());

        Ok(sched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    const TIMINGS: &str = r##"
{
  "code": 200,
  "status": "OK",
  "data": {
    "timings": {
      "Fajr": "05:00",
      "Sunrise": "06:10",
      "Dhuhr": "12:15",
      "Asr": "15:45",
      "Sunset": "18:20",
      "Maghrib": "18:20",
      "Isha": "19:50",
      "Imsak": "04:50",
      "Midnight": "00:07"
    },
    "date": {
      "readable": "23 Aug 2026",
      "timestamp": "1787787661",
      "gregorian": {
        "date": "23-08-2026",
        "format": "DD-MM-YYYY"
      },
      "hijri": {
        "date": "10-03-1448",
        "day": "10",
        "month": {
          "number": 3,
          "en": "Rabīʿ al-awwal"
        },
        "year": "1448"
      }
    },
    "meta": {
      "latitude": 21.4225,
      "longitude": 39.8262,
      "method": {
        "id": 3,
        "name": "Muslim World League"
      }
    }
  }
}
"##;

    #[test]
    fn test_timings_decode() {
        let resp: TimingsResponse = serde_json::from_str(TIMINGS).unwrap();
        assert_eq!(200, resp.code);
        assert_eq!("05:00", resp.data.timings["Fajr"]);
        assert_eq!("10 Rabīʿ al-awwal 1448 AH", resp.data.date.hijri.label());
    }

    #[test]
    fn test_timings_into_schedule() {
        let resp: TimingsResponse = serde_json::from_str(TIMINGS).unwrap();
        let sched = Schedule::try_from(resp).unwrap();

        assert_eq!(NaiveDate::from_ymd_opt(2026, 8, 23).unwrap(), sched.date);
        assert!(sched.is_complete());
        assert_eq!(
            NaiveTime::from_hms_opt(6, 10, 0).unwrap(),
            sched.time(PrayerEvent::Sunrise).unwrap()
        );

        // Unknown labels must not survive the conversion.
        //
        assert_eq!(6, sched.times.len());
        assert_eq!(
            Some("10 Rabīʿ al-awwal 1448 AH".to_string()),
            sched.hijri
        );
    }

    #[test]
    fn test_timings_bad_date() {
        let mut resp: TimingsResponse = serde_json::from_str(TIMINGS).unwrap();
        resp.data.date.gregorian.date = "2026/08/23".to_string();
        assert!(matches!(
            Schedule::try_from(resp),
            Err(ScheduleError::BadDate(_))
        ));
    }

    #[test]
    fn test_timings_bad_time() {
        let mut resp: TimingsResponse = serde_json::from_str(TIMINGS).unwrap();
        resp.data
            .timings
            .insert("Asr".to_string(), "soon".to_string());
        assert_eq!(
            Err(ScheduleError::BadTime("soon".to_string())),
            Schedule::try_from(resp).map(|_| ())
        );
    }
}
