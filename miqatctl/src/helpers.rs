//! Small helpers shared by the sub-command handlers.
//!

use chrono::{Local, NaiveDate};
use eyre::{eyre, Result};
use tracing::trace;

use miqat_common::{load_locations, Coordinates};

use crate::CtlConfig;

/// Observer position from explicit degrees, a named location, or the
/// configured default, in that order.
///
#[tracing::instrument]
pub fn position_from(
    cfg: &CtlConfig,
    location: &Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
) -> Result<Coordinates> {
    trace!("position_from");

    if let (Some(lat), Some(lon)) = (lat, lon) {
        return Ok(Coordinates::checked(lat, lon)?);
    }

    let name = location.clone().or_else(|| cfg.default_location.clone());
    match name {
        Some(name) => {
            let all = load_locations(None)?;
            all.get(&name)
                .copied()
                .ok_or_else(|| eyre!("Unknown location {name}, see `list locations`"))
        }
        None => Err(eyre!(
            "No position given, use --lat/--lon, --location or the configuration file"
        )),
    }
}

/// Free-form date through `dateparser`, default is today.
///
pub fn date_from(date: &Option<String>) -> Result<NaiveDate> {
    match date {
        Some(input) => {
            let tm = dateparser::parse(input).map_err(|e| eyre!("Bad date {input}: {e}"))?;
            Ok(tm.date_naive())
        }
        None => Ok(Local::now().date_naive()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn cfg_with(default_location: Option<&str>) -> CtlConfig {
        CtlConfig {
            version: 1,
            default_location: default_location.map(String::from),
            method: None,
        }
    }

    #[test]
    fn test_position_explicit_wins() -> Result<()> {
        let pos = position_from(
            &cfg_with(Some("paris")),
            &Some("london".to_string()),
            Some(-33.8688),
            Some(151.2093),
        )?;
        assert_eq!(Coordinates::new(-33.8688, 151.2093), pos);
        Ok(())
    }

    #[test]
    fn test_position_named() -> Result<()> {
        let pos = position_from(&cfg_with(None), &Some("mecca".to_string()), None, None)?;
        assert_eq!(Coordinates::new(21.4225, 39.8262), pos);
        Ok(())
    }

    #[test]
    fn test_position_config_fallback() -> Result<()> {
        let pos = position_from(&cfg_with(Some("mecca")), &None, None, None)?;
        assert_eq!(Coordinates::new(21.4225, 39.8262), pos);
        Ok(())
    }

    #[rstest]
    #[case(Some("atlantis".to_string()))]
    #[case(None)]
    fn test_position_errors(#[case] location: Option<String>) {
        assert!(position_from(&cfg_with(None), &location, None, None).is_err());
    }

    #[test]
    fn test_position_out_of_range() {
        assert!(position_from(&cfg_with(None), &None, Some(91.), Some(0.)).is_err());
        assert!(position_from(&cfg_with(None), &None, Some(0.), Some(-181.)).is_err());
    }

    #[test]
    fn test_date_from_explicit() -> Result<()> {
        let d = date_from(&Some("2026-08-23".to_string()))?;
        assert_eq!(NaiveDate::from_ymd_opt(2026, 8, 23).unwrap(), d);
        Ok(())
    }

    #[test]
    fn test_date_from_default_is_today() -> Result<()> {
        assert_eq!(Local::now().date_naive(), date_from(&None)?);
        Ok(())
    }

    #[test]
    fn test_date_from_bad() {
        assert!(date_from(&Some("the day after tuesday-ish".to_string())).is_err());
    }
}
