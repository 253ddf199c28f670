//! Rendering a duration as an ISO-8601 string, a long breakdown or a scalar.

use serde::{Deserialize, Serialize};

use crate::duration::{Duration, MICROS_PER_SECOND, SECONDS_PER_DAY};
use crate::error::DurationError;
use crate::units::{DAYS_PER_YEAR, Unit};

/// A duration decomposed into human-sized units.
///
/// Months are never used; the part below a year is split into weeks and days
/// only. `seconds` carries the sub-second remainder as a fraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LongBreakdown {
    pub years: i64,
    pub weeks: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: f64,
}

/// Integer decomposition shared by the breakdown and the ISO renderer.
struct Parts {
    years: i64,
    weeks: i64,
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
    microseconds: i64,
}

impl Parts {
    fn of(duration: &Duration) -> Self {
        let carried = duration.abs().to_dict();
        let (years, days) = (carried.days / 365, carried.days % 365);
        let (weeks, days) = (days / 7, days % 7);
        let (hours, seconds) = (carried.seconds / 3600, carried.seconds % 3600);
        let (minutes, seconds) = (seconds / 60, seconds % 60);
        Self {
            years,
            weeks,
            days,
            hours,
            minutes,
            seconds,
            microseconds: carried.microseconds,
        }
    }

    fn seconds_text(&self) -> String {
        if self.microseconds == 0 {
            return self.seconds.to_string();
        }
        let fraction = format!("{:06}", self.microseconds);
        format!("{}.{}", self.seconds, fraction.trim_end_matches('0'))
    }
}

impl Duration {
    /// Decomposes the magnitude of the duration into years, weeks, days,
    /// hours, minutes and fractional seconds.
    pub fn long_breakdown(&self) -> LongBreakdown {
        let parts = Parts::of(self);
        LongBreakdown {
            years: parts.years,
            weeks: parts.weeks,
            days: parts.days,
            hours: parts.hours,
            minutes: parts.minutes,
            seconds: parts.seconds as f64 + parts.microseconds as f64 / MICROS_PER_SECOND,
        }
    }

    /// Renders the duration as `P[n]Y[n]M[n]W[n]DT[n]H[n]M[n]S`.
    ///
    /// With `compact`, zero fields are omitted and `T` appears only before a
    /// time field, so the zero duration is `P`. Otherwise every field is
    /// written and the zero duration is `PT0S`. Months are always zero since
    /// the date part is split into years, weeks and days. A negative duration
    /// is its magnitude prefixed with `-`.
    pub fn to_iso(&self, compact: bool) -> String {
        if !compact && self.is_zero() {
            return "PT0S".to_string();
        }

        let parts = Parts::of(self);
        let mut out = String::from(if self.is_negative() { "-P" } else { "P" });

        let date = [
            (parts.years, 'Y'),
            (0, 'M'),
            (parts.weeks, 'W'),
            (parts.days, 'D'),
        ];
        for (value, designator) in date {
            if !compact || value != 0 {
                out.push_str(&format!("{value}{designator}"));
            }
        }

        let mut time = String::new();
        for (value, designator) in [(parts.hours, 'H'), (parts.minutes, 'M')] {
            if !compact || value != 0 {
                time.push_str(&format!("{value}{designator}"));
            }
        }
        if !compact || parts.seconds != 0 || parts.microseconds != 0 {
            time.push_str(&parts.seconds_text());
            time.push('S');
        }
        if !time.is_empty() {
            out.push('T');
            out.push_str(&time);
        }

        out
    }

    /// Total elapsed time in days.
    pub fn total_days(&self) -> f64 {
        self.total_seconds() / SECONDS_PER_DAY
    }

    /// Total elapsed time in 365-day years.
    pub fn total_years(&self) -> f64 {
        self.total_days() / DAYS_PER_YEAR
    }

    /// Total elapsed time in `days`, `years` or `months` (twelve per year).
    pub fn to_numeric(&self, unit: &str) -> Result<f64, DurationError> {
        match unit.parse::<Unit>() {
            Ok(Unit::Days) => Ok(self.total_days()),
            Ok(Unit::Years) => Ok(self.total_years()),
            Ok(Unit::Months) => Ok(self.total_years() * 12.0),
            _ => Err(DurationError::UnsupportedUnit {
                unit: unit.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn zero_duration_formatting() {
        assert_eq!(Duration::ZERO.to_iso(true), "P");
        assert_eq!(Duration::ZERO.to_iso(false), "PT0S");
    }

    #[test]
    fn compact_omits_zero_fields() {
        let d = Duration::new(400.0, 3725.0, 0.0);
        assert_eq!(d.to_iso(true), "P1Y5WT1H2M5S");
        assert_eq!(Duration::new(3.0, 0.0, 0.0).to_iso(true), "P3D");
        assert_eq!(Duration::new(0.0, 60.0, 0.0).to_iso(true), "PT1M");
    }

    #[test]
    fn full_form_writes_every_field() {
        let d = Duration::new(400.0, 3725.0, 0.0);
        assert_eq!(d.to_iso(false), "P1Y0M5W0DT1H2M5S");
        assert_eq!(
            Duration::new(3.0, 0.0, 0.0).to_iso(false),
            "P0Y0M0W3DT0H0M0S"
        );
    }

    #[test]
    fn fractional_seconds_keep_significant_digits() {
        assert_eq!(Duration::new(0.0, 7.0, 500_000.0).to_iso(true), "PT7.5S");
        assert_eq!(Duration::new(0.0, 0.0, 1.0).to_iso(true), "PT0.000001S");
    }

    #[test]
    fn uncarried_fields_are_carried_when_formatting() {
        let d = Duration::new(0.0, 90_000.0, 1_500_000.0);
        assert_eq!(d.to_iso(true), "P1DT1H1.5S");
    }

    #[test]
    fn negative_durations_are_prefixed() {
        let d = -Duration::new(1.0, 7200.0, 0.0);
        assert_eq!(d.to_iso(true), "-P1DT2H");
    }

    #[test]
    fn display_is_compact_iso() {
        assert_eq!(Duration::new(8.0, 0.0, 0.0).to_string(), "P1W1D");
    }

    #[test]
    fn long_breakdown_splits_days_and_seconds() {
        let d = Duration::new(2019.0 * 365.0 + 156.0, 866.0, 246_155.0);
        let breakdown = d.long_breakdown();
        assert_eq!(
            (breakdown.years, breakdown.weeks, breakdown.days),
            (2019, 22, 2)
        );
        assert_eq!((breakdown.hours, breakdown.minutes), (0, 14));
        approx(breakdown.seconds, 26.246_155);
    }

    #[test]
    fn large_durations_render_every_microsecond() {
        let d = Duration::from_tuple(&[2019.0, 5.0, 6.0, 0.0, 14.0, 26.0, 246_155.0]).unwrap();
        assert_eq!(d.to_iso(true), "P2019Y22W2DT14M26.246155S");
    }

    #[test]
    fn out_of_range_durations_render_saturated() {
        assert_eq!(
            Duration::new(1e300, 0.0, 0.0).to_iso(true),
            "P2739726Y1W2DT23H59M59.999999S"
        );
    }

    #[test]
    fn iso_output_roundtrips_total_seconds() {
        for d in [
            Duration::new(400.0, 3725.0, 0.0),
            Duration::new(0.0, 59.0, 0.0),
            Duration::new(12.0, 86_399.0, 0.0),
            Duration::ZERO,
            -Duration::new(3.0, 10.0, 0.0),
        ] {
            let reparsed = Duration::parse_str(&d.to_iso(false)).unwrap();
            approx(reparsed.total_seconds(), d.total_seconds());
        }
    }

    #[test]
    fn scalar_projections() {
        let year = Duration::parse_str("P1Y").unwrap();
        approx(year.total_days(), 365.0);
        approx(year.total_years(), 1.0);
        approx(Duration::parse_str("P1M").unwrap().total_days(), 30.0);
        approx(Duration::parse_str("PT12H").unwrap().total_days(), 0.5);

        approx(year.to_numeric("days").unwrap(), 365.0);
        approx(year.to_numeric("Years").unwrap(), 1.0);
        approx(year.to_numeric("months").unwrap(), 12.0);
    }

    #[test]
    fn unsupported_scalar_unit() {
        let year = Duration::parse_str("P1Y").unwrap();
        assert_eq!(
            year.to_numeric("hours"),
            Err(DurationError::UnsupportedUnit {
                unit: "hours".to_string()
            })
        );
        assert!(year.to_numeric("fortnights").is_err());
    }
}
