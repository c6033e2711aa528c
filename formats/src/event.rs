use serde::{Deserialize, Serialize};
use strum::EnumString;
use tabled::builder::Builder;
use tabled::settings::Style;

// -----

pub fn version() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// The six daily time points delivered by the schedule service.
///
/// Declaration order is day order, which the derived `Ord` and every
/// `BTreeMap` keyed on this type rely on.  `Sunrise` is delivered and
/// displayed but is not a prayer.
///
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Deserialize,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    strum::Display,
    EnumString,
    strum::VariantNames,
)]
#[strum(ascii_case_insensitive)]
pub enum PrayerEvent {
    /// Dawn prayer
    #[default]
    Fajr,
    /// Sunrise, closes the Fajr window
    Sunrise,
    /// Noon prayer
    Dhuhr,
    /// Afternoon prayer
    Asr,
    /// Sunset prayer
    Maghrib,
    /// Night prayer
    Isha,
}

impl PrayerEvent {
    /// The five prayers of the day, in day order.  `Sunrise` is not one.
    ///
    pub const CANONICAL: [PrayerEvent; 5] = [
        PrayerEvent::Fajr,
        PrayerEvent::Dhuhr,
        PrayerEvent::Asr,
        PrayerEvent::Maghrib,
        PrayerEvent::Isha,
    ];

    #[inline]
    pub fn is_prayer(self) -> bool {
        self != PrayerEvent::Sunrise
    }

    /// Short human description for listings.
    ///
    pub fn label(self) -> &'static str {
        match self {
            PrayerEvent::Fajr => "Dawn prayer",
            PrayerEvent::Sunrise => "Sunrise, closes the Fajr window",
            PrayerEvent::Dhuhr => "Noon prayer",
            PrayerEvent::Asr => "Afternoon prayer",
            PrayerEvent::Maghrib => "Sunset prayer",
            PrayerEvent::Isha => "Night prayer",
        }
    }

    /// List all known events into a string using `tabled`.
    ///
    pub fn list() -> eyre::Result<String> {
        let header = vec!["Name", "Prayer", "Description"];

        let mut builder = Builder::default();
        builder.push_record(header);

        let all = [
            PrayerEvent::Fajr,
            PrayerEvent::Sunrise,
            PrayerEvent::Dhuhr,
            PrayerEvent::Asr,
            PrayerEvent::Maghrib,
            PrayerEvent::Isha,
        ];
        all.iter().for_each(|event| {
            let name = event.to_string();
            let prayer = if event.is_prayer() { "✓" } else { "" };
            builder.push_record(vec![&name, prayer, event.label()]);
        });

        let allf = builder.build().with(Style::modern()).to_string();
        Ok(format!("List all events:\n{allf}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::VariantNames;

    #[test]
    fn test_event_from_str() {
        assert_eq!(PrayerEvent::Fajr, PrayerEvent::from_str("fajr").unwrap());
        assert_eq!(PrayerEvent::Isha, PrayerEvent::from_str("Isha").unwrap());
        assert!(PrayerEvent::from_str("midnight").is_err());
    }

    #[test]
    fn test_event_display() {
        assert_eq!("Dhuhr", PrayerEvent::Dhuhr.to_string());
        assert_eq!("Maghrib", format!("{}", PrayerEvent::Maghrib));
    }

    #[test]
    fn test_event_day_order() {
        assert!(PrayerEvent::Fajr < PrayerEvent::Sunrise);
        assert!(PrayerEvent::Sunrise < PrayerEvent::Dhuhr);
        assert!(PrayerEvent::Maghrib < PrayerEvent::Isha);
    }

    #[test]
    fn test_event_canonical() {
        assert_eq!(5, PrayerEvent::CANONICAL.len());
        assert!(!PrayerEvent::CANONICAL.contains(&PrayerEvent::Sunrise));
        assert!(PrayerEvent::CANONICAL.iter().all(|e| e.is_prayer()));
    }

    #[test]
    fn test_event_variants() {
        assert_eq!(6, PrayerEvent::VARIANTS.len());
        assert!(PrayerEvent::VARIANTS.contains(&"Sunrise"));
    }

    #[test]
    fn test_event_list() {
        let out = PrayerEvent::list().unwrap();
        assert!(out.contains("Fajr"));
        assert!(out.contains("Night prayer"));
    }
}
