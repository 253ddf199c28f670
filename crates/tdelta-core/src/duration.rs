//! The canonical duration value.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DurationError;
use crate::fields::ParsedFields;
use crate::units::UnitDelta;

pub(crate) const SECONDS_PER_DAY: f64 = 86_400.0;
pub(crate) const MICROS_PER_SECOND: f64 = 1_000_000.0;
const MICROS_PER_DAY: i128 = 86_400_000_000;
const MICROS_PER_SECOND_I128: i128 = 1_000_000;

/// Largest magnitude, in whole days, that carried forms can represent.
///
/// Durations beyond it are still stored as given, but compare, hash and
/// format as if saturated at `MAX_DAYS` days and the last microsecond of the
/// following day.
pub const MAX_DAYS: i64 = 999_999_999;
const MAX_MICROS: i128 = 1_000_000_000 * MICROS_PER_DAY - 1;

/// A normalized amount of elapsed time.
///
/// Holds `days`, `seconds` and `microseconds` exactly as they were accumulated
/// from the parsed fields. Nothing is carried between the three until the
/// duration is formatted, so `seconds` may exceed a day and `microseconds` may
/// exceed a second. Years and months have already been folded into `days`.
///
/// Equality, ordering and hashing compare the total elapsed time rounded to
/// the microsecond, so `P1M` and `P30D` are the same duration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Duration {
    days: f64,
    seconds: f64,
    microseconds: f64,
}

/// The carried `(days, seconds, microseconds)` form of a [`Duration`].
///
/// `seconds` is in `0..86_400` and `microseconds` in `0..1_000_000`; the sign
/// of the duration lives in `days`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Components {
    pub days: i64,
    pub seconds: i64,
    pub microseconds: i64,
}

impl Duration {
    /// The zero-length duration.
    pub const ZERO: Self = Self {
        days: 0.0,
        seconds: 0.0,
        microseconds: 0.0,
    };

    /// Builds a duration from already-normalized day, second and microsecond counts.
    pub fn new(days: f64, seconds: f64, microseconds: f64) -> Self {
        Self::from_delta(UnitDelta {
            days,
            seconds,
            microseconds,
        })
    }

    /// Builds a duration by normalizing every field of `fields`.
    pub fn from_fields(fields: &ParsedFields) -> Self {
        Self::from_delta(fields.to_delta())
    }

    pub(crate) const fn from_delta(delta: UnitDelta) -> Self {
        Self {
            days: delta.days,
            seconds: delta.seconds,
            microseconds: delta.microseconds,
        }
    }

    /// Uncarried day count.
    pub const fn days(&self) -> f64 {
        self.days
    }

    /// Uncarried second count.
    pub const fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Uncarried microsecond count.
    pub const fn microseconds(&self) -> f64 {
        self.microseconds
    }

    /// Total elapsed time in seconds.
    pub fn total_seconds(&self) -> f64 {
        self.days * SECONDS_PER_DAY + self.seconds + self.microseconds / MICROS_PER_SECOND
    }

    /// Total elapsed time rounded to the nearest microsecond.
    ///
    /// Each field is scaled on its own so whole days and seconds stay exact.
    /// The result saturates at [`MAX_DAYS`].
    pub fn total_microseconds(&self) -> i128 {
        let total = scaled_micros(self.days, MICROS_PER_DAY)
            .saturating_add(scaled_micros(self.seconds, MICROS_PER_SECOND_I128))
            .saturating_add(self.microseconds.round() as i128);
        total.clamp(-MAX_MICROS, MAX_MICROS)
    }

    /// Returns `true` if no time elapses.
    pub fn is_zero(&self) -> bool {
        self.total_microseconds() == 0
    }

    /// Returns `true` if the duration points backwards in time.
    pub fn is_negative(&self) -> bool {
        self.total_microseconds() < 0
    }

    /// The same amount of time with a non-negative sign.
    #[must_use]
    pub fn abs(&self) -> Self {
        if self.is_negative() { -*self } else { *self }
    }

    /// Carries seconds into days and microseconds into seconds.
    pub fn to_dict(&self) -> Components {
        let total = self.total_microseconds();
        let days = total.div_euclid(MICROS_PER_DAY);
        let rem = total.rem_euclid(MICROS_PER_DAY);
        Components {
            days: days as i64,
            seconds: (rem / MICROS_PER_SECOND_I128) as i64,
            microseconds: (rem % MICROS_PER_SECOND_I128) as i64,
        }
    }
}

/// `amount` units of `micros_per_unit` microseconds, with the fractional part
/// rounded separately from the whole part.
fn scaled_micros(amount: f64, micros_per_unit: i128) -> i128 {
    let whole = amount.trunc();
    let fraction = ((amount - whole) * micros_per_unit as f64).round() as i128;
    (whole as i128)
        .saturating_mul(micros_per_unit)
        .saturating_add(fraction)
}

impl From<Components> for Duration {
    fn from(components: Components) -> Self {
        Self::new(
            components.days as f64,
            components.seconds as f64,
            components.microseconds as f64,
        )
    }
}

impl Add for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            days: self.days + rhs.days,
            seconds: self.seconds + rhs.seconds,
            microseconds: self.microseconds + rhs.microseconds,
        }
    }
}

impl Sub for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + -rhs
    }
}

impl Neg for Duration {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            days: -self.days,
            seconds: -self.seconds,
            microseconds: -self.microseconds,
        }
    }
}

impl PartialEq for Duration {
    fn eq(&self, other: &Self) -> bool {
        self.total_microseconds() == other.total_microseconds()
    }
}

impl Eq for Duration {}

impl PartialOrd for Duration {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Duration {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total_microseconds().cmp(&other.total_microseconds())
    }
}

impl Hash for Duration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.total_microseconds().hash(state);
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_iso(true))
    }
}

impl FromStr for Duration {
    type Err = DurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl Serialize for Duration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_iso(true))
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
