use std::fmt;
use std::str::FromStr;

use chrono_tz::Tz;

use crate::error::ClockError;

/// The timezones a clock can be switched to.
///
/// Each zone carries its IANA id, the country name shown in the control panel
/// and the short label painted on the face.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Zone {
    #[default]
    Paris,
    NewYork,
    Shanghai,
    Tokyo,
}

impl Zone {
    pub const ALL: [Zone; 4] = [Zone::Paris, Zone::NewYork, Zone::Shanghai, Zone::Tokyo];

    /// IANA timezone identifier.
    pub const fn iana(self) -> &'static str {
        match self {
            Zone::Paris => "Europe/Paris",
            Zone::NewYork => "America/New_York",
            Zone::Shanghai => "Asia/Shanghai",
            Zone::Tokyo => "Asia/Tokyo",
        }
    }

    /// Country name used as the option label in the control panel.
    pub const fn country(self) -> &'static str {
        match self {
            Zone::Paris => "France",
            Zone::NewYork => "USA",
            Zone::Shanghai => "China",
            Zone::Tokyo => "Japan",
        }
    }

    /// Short label painted on the clock face.
    pub const fn label(self) -> &'static str {
        match self {
            Zone::Paris => "FR",
            Zone::NewYork => "USA",
            Zone::Shanghai => "CH",
            Zone::Tokyo => "JP",
        }
    }

    pub fn tz(self) -> Tz {
        match self {
            Zone::Paris => chrono_tz::Europe::Paris,
            Zone::NewYork => chrono_tz::America::New_York,
            Zone::Shanghai => chrono_tz::Asia::Shanghai,
            Zone::Tokyo => chrono_tz::Asia::Tokyo,
        }
    }

    pub fn from_iana(id: &str) -> Option<Zone> {
        Zone::ALL.into_iter().find(|z| z.iana() == id)
    }
}

/// Looks up the face label for an IANA id. `None` for unsupported zones.
pub fn country_label(iana: &str) -> Option<&'static str> {
    Zone::from_iana(iana).map(Zone::label)
}

/// Accepts an IANA id (exact) or a country name (case-insensitive).
impl FromStr for Zone {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Zone::from_iana(s)
            .or_else(|| Zone::ALL.into_iter().find(|z| z.country().eq_ignore_ascii_case(s)))
            .ok_or_else(|| ClockError::UnknownTimezone(s.to_string()))
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.iana())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_table() {
        assert_eq!(country_label("Europe/Paris"), Some("FR"));
        assert_eq!(country_label("America/New_York"), Some("USA"));
        assert_eq!(country_label("Asia/Shanghai"), Some("CH"));
        assert_eq!(country_label("Asia/Tokyo"), Some("JP"));
    }

    #[test]
    fn unsupported_zone_has_no_label() {
        assert_eq!(country_label("Europe/London"), None);
        assert_eq!(country_label(""), None);
    }

    #[test]
    fn parse_iana_and_country() {
        assert_eq!("Asia/Tokyo".parse::<Zone>().unwrap(), Zone::Tokyo);
        assert_eq!("japan".parse::<Zone>().unwrap(), Zone::Tokyo);
        assert_eq!(" USA ".parse::<Zone>().unwrap(), Zone::NewYork);
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(
            "Mars/Olympus".parse::<Zone>(),
            Err(ClockError::UnknownTimezone("Mars/Olympus".into()))
        );
    }

    #[test]
    fn tz_matches_iana_name() {
        for zone in Zone::ALL {
            assert_eq!(zone.tz().name(), zone.iana());
            assert_eq!(zone.to_string(), zone.iana());
        }
    }
}
