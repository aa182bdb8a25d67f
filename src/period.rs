//! Year-month period keys.
//!
//! A `Period` is a calendar date truncated to month granularity. It is the
//! key the dashboard filters on: every record carries one, the selection
//! control lists them, and the time-series chart groups by them.

use chrono::{Datelike, NaiveDate};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A calendar year-month.
///
/// Periods order chronologically and render as `YYYY-MM`, the same label
/// format the selection control exchanges with the server.
///
/// # Examples
///
/// ```
/// use salesboard::Period;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
/// let period = Period::from_date(date);
/// assert_eq!(period.to_string(), "2024-01");
/// assert_eq!("2024-01".parse::<Period>().unwrap(), period);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// Truncate a date to month granularity.
    pub fn from_date(date: NaiveDate) -> Self {
        Period {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Period {
    type Err = String;

    /// Parse the `YYYY-MM` label format.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year_str, month_str) = s
            .split_once('-')
            .ok_or_else(|| format!("Invalid period '{}': expected YYYY-MM", s))?;

        let year: i32 = year_str
            .parse()
            .map_err(|_| format!("Invalid period '{}': bad year", s))?;
        let month: u32 = month_str
            .parse()
            .map_err(|_| format!("Invalid period '{}': bad month", s))?;

        if !(1..=12).contains(&month) {
            return Err(format!("Invalid period '{}': month out of range", s));
        }

        Ok(Period { year, month })
    }
}

// On the wire a period is just its label, so the JSON matches what the
// selection control sends back.
impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PeriodVisitor;

        impl<'de> Visitor<'de> for PeriodVisitor {
            type Value = Period;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a period string in YYYY-MM format")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Period, E> {
                v.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(PeriodVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_date_truncates_to_month() {
        let early = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let late = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();

        assert_eq!(Period::from_date(early), Period::from_date(late));
        assert_eq!(Period::from_date(early).year(), 2024);
        assert_eq!(Period::from_date(early).month(), 3);
    }

    #[test]
    fn test_display_pads_month() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
        assert_eq!(Period::from_date(date).to_string(), "2024-02");
    }

    #[test]
    fn test_parse_round_trip() {
        let period: Period = "2024-11".parse().unwrap();
        assert_eq!(period.year(), 2024);
        assert_eq!(period.month(), 11);
        assert_eq!(period.to_string(), "2024-11");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("2024".parse::<Period>().is_err());
        assert!("2024-13".parse::<Period>().is_err());
        assert!("2024-00".parse::<Period>().is_err());
        assert!("202x-01".parse::<Period>().is_err());
        // A full date is not a period
        assert!("2024-01-05".parse::<Period>().is_err());
    }

    #[test]
    fn test_chronological_ordering() {
        let dec_2023: Period = "2023-12".parse().unwrap();
        let jan_2024: Period = "2024-01".parse().unwrap();
        let feb_2024: Period = "2024-02".parse().unwrap();

        assert!(dec_2023 < jan_2024);
        assert!(jan_2024 < feb_2024);
    }

    #[test]
    fn test_serde_as_label() {
        let period: Period = "2024-01".parse().unwrap();
        let json = serde_json::to_string(&period).unwrap();
        assert_eq!(json, "\"2024-01\"");

        let back: Period = serde_json::from_str(&json).unwrap();
        assert_eq!(back, period);

        assert!(serde_json::from_str::<Period>("\"garbage\"").is_err());
    }
}
