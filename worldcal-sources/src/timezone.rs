//! Timezone details backed by the bundled tz database (chrono-tz).
//!
//! Every lookup is best-effort: a zone that fails to parse or resolve
//! falls back to a placeholder value instead of propagating an error.

use chrono::{Datelike, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use worldcal_core::source::{TimezoneSource, TIME_UNAVAILABLE};
use worldcal_core::Country;

/// Curated display zones, grouped roughly by region.
const ZONES: &[&str] = &[
    // Africa
    "Africa/Cairo",
    "Africa/Casablanca",
    "Africa/Johannesburg",
    "Africa/Lagos",
    "Africa/Nairobi",
    "Africa/Tunis",
    // North America
    "America/New_York",
    "America/Chicago",
    "America/Denver",
    "America/Los_Angeles",
    "America/Phoenix",
    "America/Anchorage",
    "America/Toronto",
    "America/Vancouver",
    // Central America
    "America/Mexico_City",
    "America/Panama",
    "America/Costa_Rica",
    "America/El_Salvador",
    "America/Guatemala",
    "America/Managua",
    "America/Tegucigalpa",
    // South America
    "America/Sao_Paulo",
    "America/Buenos_Aires",
    "America/Santiago",
    "America/Lima",
    "America/Bogota",
    "America/Caracas",
    // Caribbean
    "America/Santo_Domingo",
    "America/Port-au-Prince",
    "America/Havana",
    "America/Jamaica",
    "America/Puerto_Rico",
    // Asia
    "Asia/Almaty",
    "Asia/Bishkek",
    "Asia/Dhaka",
    "Asia/Karachi",
    "Asia/Tashkent",
    "Asia/Yekaterinburg",
    "Asia/Hong_Kong",
    "Asia/Tokyo",
    "Asia/Seoul",
    "Asia/Shanghai",
    "Asia/Singapore",
    "Asia/Taipei",
    "Asia/Colombo",
    "Asia/Kolkata",
    "Asia/Kathmandu",
    "Asia/Thimphu",
    "Asia/Dubai",
    "Asia/Baghdad",
    "Asia/Jerusalem",
    "Asia/Kuwait",
    "Asia/Riyadh",
    "Asia/Tehran",
    "Asia/Vladivostok",
    "Asia/Magadan",
    "Asia/Kamchatka",
    "Asia/Sakhalin",
    // Atlantic
    "Atlantic/Azores",
    "Atlantic/Cape_Verde",
    "Atlantic/South_Georgia",
    "Atlantic/Stanley",
    "Atlantic/Reykjavik",
    // Australia
    "Australia/Sydney",
    "Australia/Melbourne",
    "Australia/Brisbane",
    "Australia/Adelaide",
    "Australia/Perth",
    "Australia/Darwin",
    // Europe
    "Europe/Amsterdam",
    "Europe/Berlin",
    "Europe/Brussels",
    "Europe/Paris",
    "Europe/Rome",
    "Europe/Vienna",
    "Europe/Warsaw",
    "Europe/Athens",
    "Europe/Bucharest",
    "Europe/Helsinki",
    "Europe/Kiev",
    "Europe/Riga",
    "Europe/Sofia",
    "Europe/Dublin",
    "Europe/Lisbon",
    "Europe/London",
    "Europe/Madrid",
    "Europe/Moscow",
    "Europe/Samara",
    "Europe/Kaliningrad",
    // Indian Ocean
    "Indian/Maldives",
    "Indian/Mauritius",
    "Indian/Reunion",
    "Indian/Mahe",
    "Indian/Kerguelen",
    // Pacific
    "Pacific/Auckland",
    "Pacific/Fiji",
    "Pacific/Guam",
    "Pacific/Honolulu",
    "Pacific/Tahiti",
];

/// Timezone source over the curated zone table.
#[derive(Debug, Clone, Copy, Default)]
pub struct IanaTimezones;

impl IanaTimezones {
    pub fn new() -> Self {
        IanaTimezones
    }
}

impl TimezoneSource for IanaTimezones {
    fn resolve_timezone(&self, country: &Country) -> String {
        let capital = country.capital.replace(' ', "_");
        ZONES
            .iter()
            .find(|zone| {
                zone.contains(&country.code) || (!capital.is_empty() && zone.contains(&capital))
            })
            .map(|zone| zone.to_string())
            .unwrap_or_else(|| "UTC".to_string())
    }

    fn current_time(&self, zone: &str) -> String {
        match zone.parse::<Tz>() {
            Ok(tz) => Utc::now()
                .with_timezone(&tz)
                .format("%-I:%M %p")
                .to_string(),
            Err(_) => {
                tracing::warn!(zone, "failed to resolve current time");
                TIME_UNAVAILABLE.to_string()
            }
        }
    }

    fn utc_offset(&self, zone: &str) -> String {
        match zone.parse::<Tz>() {
            Ok(tz) => {
                let offset = Utc::now().with_timezone(&tz).format("%:z").to_string();
                if offset == "+00:00" {
                    "+0".to_string()
                } else {
                    offset
                }
            }
            Err(_) => {
                tracing::warn!(zone, "failed to resolve UTC offset");
                String::new()
            }
        }
    }

    fn observes_dst(&self, zone: &str) -> bool {
        let Ok(tz) = zone.parse::<Tz>() else {
            tracing::warn!(zone, "failed to check DST");
            return false;
        };
        let year = Utc::now().year();
        let offset_on = |month: u32| {
            tz.with_ymd_and_hms(year, month, 1, 12, 0, 0)
                .single()
                .map(|dt| dt.offset().fix().local_minus_utc())
        };
        // A zone observes DST when its June and December offsets differ.
        match (offset_on(6), offset_on(12)) {
            (Some(june), Some(december)) => june != december,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(code: &str, capital: &str) -> Country {
        Country {
            code: code.to_string(),
            name: code.to_string(),
            flag: String::new(),
            capital: capital.to_string(),
        }
    }

    #[test]
    fn resolves_by_capital_name() {
        let tz = IanaTimezones::new();
        assert_eq!(tz.resolve_timezone(&country("DE", "Berlin")), "Europe/Berlin");
        assert_eq!(
            tz.resolve_timezone(&country("MX", "Mexico City")),
            "America/Mexico_City"
        );
    }

    #[test]
    fn unknown_country_falls_back_to_utc() {
        let tz = IanaTimezones::new();
        assert_eq!(tz.resolve_timezone(&country("XX", "Nowhere")), "UTC");
    }

    #[test]
    fn bad_zone_degrades_to_placeholders() {
        let tz = IanaTimezones::new();
        assert_eq!(tz.current_time("Not/AZone"), TIME_UNAVAILABLE);
        assert_eq!(tz.utc_offset("Not/AZone"), "");
        assert!(!tz.observes_dst("Not/AZone"));
    }

    #[test]
    fn utc_offset_is_collapsed_for_utc() {
        let tz = IanaTimezones::new();
        assert_eq!(tz.utc_offset("UTC"), "+0");
        // Kathmandu has a half-hour-offset zone year round.
        assert_eq!(tz.utc_offset("Asia/Kathmandu"), "+05:45");
    }

    #[test]
    fn dst_observation_differs_between_zones() {
        let tz = IanaTimezones::new();
        assert!(tz.observes_dst("Europe/Berlin"));
        assert!(!tz.observes_dst("Asia/Tokyo"));
    }

    #[test]
    fn current_time_formats_as_clock() {
        let tz = IanaTimezones::new();
        let time = tz.current_time("Europe/London");
        assert!(time.ends_with("AM") || time.ends_with("PM"), "got {time}");
    }
}
