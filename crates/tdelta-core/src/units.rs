//! Unit keywords and their canonical day/second/microsecond deltas.

use std::fmt;
use std::ops::AddAssign;
use std::str::FromStr;

/// Days folded in for one year.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Days folded in for one month.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// The unit vocabulary accepted by every structured input form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
    Microseconds,
}

impl Unit {
    /// All units, coarsest first.
    pub const ALL: [Self; 9] = [
        Self::Years,
        Self::Months,
        Self::Weeks,
        Self::Days,
        Self::Hours,
        Self::Minutes,
        Self::Seconds,
        Self::Milliseconds,
        Self::Microseconds,
    ];

    /// Keyword used for this unit in mappings and on the command line.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Years => "years",
            Self::Months => "months",
            Self::Weeks => "weeks",
            Self::Days => "days",
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
            Self::Milliseconds => "milliseconds",
            Self::Microseconds => "microseconds",
        }
    }

    /// Converts `amount` of this unit into a canonical delta.
    ///
    /// Years and months are folded into days at 365 and 30 days apiece.
    pub fn delta(self, amount: f64) -> UnitDelta {
        match self {
            Self::Years => UnitDelta::days(DAYS_PER_YEAR * amount),
            Self::Months => UnitDelta::days(DAYS_PER_MONTH * amount),
            Self::Weeks => UnitDelta::days(7.0 * amount),
            Self::Days => UnitDelta::days(amount),
            Self::Hours => UnitDelta::seconds(3600.0 * amount),
            Self::Minutes => UnitDelta::seconds(60.0 * amount),
            Self::Seconds => UnitDelta::seconds(amount),
            Self::Milliseconds => UnitDelta::microseconds(1000.0 * amount),
            Self::Microseconds => UnitDelta::microseconds(amount),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Unit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|unit| unit.as_str() == lowered)
            .ok_or_else(|| UnknownUnit(s.to_string()))
    }
}

/// Error type for unit keywords outside the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownUnit(String);

impl fmt::Display for UnknownUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown unit: {}", self.0)
    }
}

impl std::error::Error for UnknownUnit {}

/// A `(days, seconds, microseconds)` contribution.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UnitDelta {
    pub days: f64,
    pub seconds: f64,
    pub microseconds: f64,
}

impl UnitDelta {
    /// The empty delta.
    pub const ZERO: Self = Self {
        days: 0.0,
        seconds: 0.0,
        microseconds: 0.0,
    };

    const fn days(days: f64) -> Self {
        Self {
            days,
            ..Self::ZERO
        }
    }

    const fn seconds(seconds: f64) -> Self {
        Self {
            seconds,
            ..Self::ZERO
        }
    }

    const fn microseconds(microseconds: f64) -> Self {
        Self {
            microseconds,
            ..Self::ZERO
        }
    }
}

impl AddAssign for UnitDelta {
    fn add_assign(&mut self, rhs: Self) {
        self.days += rhs.days;
        self.seconds += rhs.seconds;
        self.microseconds += rhs.microseconds;
    }
}

/// Normalizes `amount` given in the unit named by `keyword`, as used by the
/// number-with-unit form.
///
/// Keywords are matched case-insensitively. Milliseconds are divided by 1000
/// into microseconds here, unlike [`Unit::delta`] which the keyword mapping
/// form goes through. An unknown keyword contributes nothing; it is logged
/// and dropped rather than reported.
pub fn normalize(keyword: &str, amount: f64) -> UnitDelta {
    match keyword.parse::<Unit>() {
        Ok(Unit::Milliseconds) => UnitDelta::microseconds(amount / 1000.0),
        Ok(unit) => unit.delta(amount),
        Err(err) => {
            tracing::warn!(%err, amount, "ignoring unknown duration unit");
            UnitDelta::ZERO
        }
    }
}
