//! Timestamps consumed by the interval resolver.
//!
//! Offsets are normalized to UTC on parse; the stored value is naive.

use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::error::TimestampError;

/// Date-time layouts tried after RFC 3339, in order.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Date-only layouts. Two-digit years must be tried before four-digit ones.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%y", "%m/%d/%Y"];

/// A point in time without a time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Parses an ISO-8601 date or date-time, or a US-style `MM/DD/YY[YY]` date.
    ///
    /// Supports:
    /// - RFC 3339: "2007-03-01T13:00:00Z", "2007-03-01T13:00:00+02:00"
    /// - Naive date-times with `T` or a space: "2019-05-06 00:14:26.246155"
    /// - Dates: "2008-05-11", "03/01/20", "05/06/2019"
    pub fn parse(s: &str) -> Result<Self, TimestampError> {
        let s = s.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self(dt.naive_utc()));
        }

        let naive = s.strip_suffix(['Z', 'z']).unwrap_or(s);
        for format in DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(naive, format) {
                return Ok(Self(dt));
            }
        }
        for format in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(naive, format) {
                return Ok(Self(date.and_time(NaiveTime::MIN)));
            }
        }

        Err(TimestampError::Unparseable {
            value: s.to_string(),
        })
    }

    /// Builds a timestamp from `(year, month, day[, hour, minute, second, microsecond])`.
    pub fn from_tuple(values: &[i64]) -> Result<Self, TimestampError> {
        if !(3..=7).contains(&values.len()) {
            return Err(TimestampError::TupleArity { len: values.len() });
        }
        let field = |index: usize| values.get(index).copied().unwrap_or(0);
        Self::from_parts(
            field(0),
            field(1),
            field(2),
            field(3),
            field(4),
            field(5),
            field(6),
        )
    }

    /// Builds a timestamp from `year`/`month`/`day` keys plus optional
    /// `hour`/`minute`/`second`/`microsecond` keys.
    pub fn from_mapping(entries: &[(&str, i64)]) -> Result<Self, TimestampError> {
        let lookup = |key: &str| {
            entries
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(key))
                .map(|(_, value)| *value)
        };
        for (name, _) in entries {
            let known = [
                "year",
                "month",
                "day",
                "hour",
                "minute",
                "second",
                "microsecond",
            ]
            .iter()
            .any(|key| name.eq_ignore_ascii_case(key));
            if !known {
                tracing::warn!(field = %name, "ignoring unknown timestamp field");
            }
        }

        let year = lookup("year").ok_or(TimestampError::MissingField { field: "year" })?;
        let month = lookup("month").ok_or(TimestampError::MissingField { field: "month" })?;
        let day = lookup("day").ok_or(TimestampError::MissingField { field: "day" })?;
        Self::from_parts(
            year,
            month,
            day,
            lookup("hour").unwrap_or(0),
            lookup("minute").unwrap_or(0),
            lookup("second").unwrap_or(0),
            lookup("microsecond").unwrap_or(0),
        )
    }

    fn from_parts(
        year: i64,
        month: i64,
        day: i64,
        hour: i64,
        minute: i64,
        second: i64,
        microsecond: i64,
    ) -> Result<Self, TimestampError> {
        let out_of_range = || TimestampError::OutOfRange {
            detail: format!(
                "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}.{microsecond:06}"
            ),
        };

        let date = NaiveDate::from_ymd_opt(
            i32::try_from(year).map_err(|_| out_of_range())?,
            u32::try_from(month).map_err(|_| out_of_range())?,
            u32::try_from(day).map_err(|_| out_of_range())?,
        )
        .ok_or_else(out_of_range)?;
        let time = NaiveTime::from_hms_micro_opt(
            u32::try_from(hour).map_err(|_| out_of_range())?,
            u32::try_from(minute).map_err(|_| out_of_range())?,
            u32::try_from(second).map_err(|_| out_of_range())?,
            u32::try_from(microsecond).map_err(|_| out_of_range())?,
        )
        .ok_or_else(out_of_range)?;

        Ok(Self(date.and_time(time)))
    }

    /// The calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    /// Renders `YYYY-MM-DDTHH:MM:SS`, with a fraction only when non-zero.
    pub fn to_iso(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
    }

    /// The year plus the elapsed fraction of a 365-day year.
    pub fn to_fractional_year(&self) -> f64 {
        f64::from(self.0.year()) + f64::from(self.0.ordinal()) / 365.0
    }
}

impl Sub for Timestamp {
    type Output = TimeDelta;

    fn sub(self, rhs: Self) -> TimeDelta {
        self.0 - rhs.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_iso())
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_datetime() -> Timestamp {
        Timestamp::from_tuple(&[2019, 5, 6, 0, 14, 26, 246_155]).unwrap()
    }

    #[test]
    fn parses_dates_in_every_supported_layout() {
        let expected = NaiveDate::from_ymd_opt(2019, 5, 6).unwrap();
        for input in ["2019-05-06", "05/06/2019", "05/06/19", "2019-05-06T08:00:00Z"] {
            let ts = Timestamp::parse(input).unwrap();
            assert_eq!(ts.date(), expected, "failed for {input}");
        }
    }

    #[test]
    fn parses_datetimes_from_string_tuple_and_mapping() {
        let from_mapping = Timestamp::from_mapping(&[
            ("year", 2019),
            ("month", 5),
            ("day", 6),
            ("hour", 0),
            ("minute", 14),
            ("second", 26),
            ("microsecond", 246_155),
        ])
        .unwrap();

        assert_eq!(from_mapping, expected_datetime());
        assert_eq!(
            Timestamp::parse("2019-05-06 00:14:26.246155").unwrap(),
            expected_datetime()
        );
        assert_eq!(
            Timestamp::parse("2019-05-06T00:14:26.246155Z").unwrap(),
            expected_datetime()
        );
    }

    #[test]
    fn offsets_are_normalized_to_utc() {
        let ts = Timestamp::parse("2007-03-01T13:00:00+02:00").unwrap();
        assert_eq!(ts.to_iso(), "2007-03-01T11:00:00");
    }

    #[test]
    fn two_digit_us_year_lands_in_this_century() {
        let ts = Timestamp::parse("03/01/20").unwrap();
        assert_eq!(ts.to_iso().split('T').next(), Some("2020-03-01"));
    }

    #[test]
    fn to_iso_keeps_microseconds() {
        assert_eq!(expected_datetime().to_iso(), "2019-05-06T00:14:26.246155");
        assert_eq!(
            Timestamp::from_tuple(&[2019, 5, 6]).unwrap().to_iso(),
            "2019-05-06T00:00:00"
        );
    }

    #[test]
    fn fractional_year_uses_day_of_year() {
        let ts = Timestamp::from_tuple(&[2019, 2, 13]).unwrap();
        assert!((ts.to_fractional_year() - (2019.0 + 44.0 / 365.0)).abs() < 1e-9);
    }

    #[test]
    fn subtraction_yields_a_time_delta() {
        let start = Timestamp::parse("2007-03-01").unwrap();
        let end = Timestamp::parse("2008-05-11").unwrap();
        assert_eq!(end - start, TimeDelta::days(437));
    }

    #[test]
    fn rejects_unparseable_strings() {
        assert_eq!(
            Timestamp::parse("yesterday"),
            Err(TimestampError::Unparseable {
                value: "yesterday".to_string()
            })
        );
    }

    #[test]
    fn rejects_bad_tuples_and_mappings() {
        assert_eq!(
            Timestamp::from_tuple(&[2019, 5]),
            Err(TimestampError::TupleArity { len: 2 })
        );
        assert!(matches!(
            Timestamp::from_tuple(&[2019, 13, 1]),
            Err(TimestampError::OutOfRange { .. })
        ));
        assert_eq!(
            Timestamp::from_mapping(&[("year", 2019), ("day", 1)]),
            Err(TimestampError::MissingField { field: "month" })
        );
    }
}
