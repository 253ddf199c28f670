//! Intermediate unit-keyword to amount mapping shared by every parser branch.

use crate::units::{DAYS_PER_MONTH, DAYS_PER_YEAR, Unit, UnitDelta};

/// Amounts per unit, as extracted by a parser before normalization.
///
/// Missing fields are zero. Amounts may be fractional.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParsedFields {
    pub years: f64,
    pub months: f64,
    pub weeks: f64,
    pub days: f64,
    pub hours: f64,
    pub minutes: f64,
    pub seconds: f64,
    pub milliseconds: f64,
    pub microseconds: f64,
}

impl ParsedFields {
    /// Returns the amount stored for `unit`.
    pub const fn get(&self, unit: Unit) -> f64 {
        match unit {
            Unit::Years => self.years,
            Unit::Months => self.months,
            Unit::Weeks => self.weeks,
            Unit::Days => self.days,
            Unit::Hours => self.hours,
            Unit::Minutes => self.minutes,
            Unit::Seconds => self.seconds,
            Unit::Milliseconds => self.milliseconds,
            Unit::Microseconds => self.microseconds,
        }
    }

    /// Mutable access to the amount stored for `unit`.
    pub fn get_mut(&mut self, unit: Unit) -> &mut f64 {
        match unit {
            Unit::Years => &mut self.years,
            Unit::Months => &mut self.months,
            Unit::Weeks => &mut self.weeks,
            Unit::Days => &mut self.days,
            Unit::Hours => &mut self.hours,
            Unit::Minutes => &mut self.minutes,
            Unit::Seconds => &mut self.seconds,
            Unit::Milliseconds => &mut self.milliseconds,
            Unit::Microseconds => &mut self.microseconds,
        }
    }

    /// Moves years and months into days, leaving both at zero.
    #[must_use]
    pub fn fold_calendar(mut self) -> Self {
        self.days += DAYS_PER_YEAR * self.years + DAYS_PER_MONTH * self.months;
        self.years = 0.0;
        self.months = 0.0;
        self
    }

    /// Iterates over the non-zero fields, coarsest first.
    pub fn iter(&self) -> impl Iterator<Item = (Unit, f64)> + '_ {
        Unit::ALL
            .into_iter()
            .map(|unit| (unit, self.get(unit)))
            .filter(|(_, amount)| *amount != 0.0)
    }

    /// Collapses every field into a single canonical delta.
    pub fn to_delta(&self) -> UnitDelta {
        let mut delta = UnitDelta::ZERO;
        for (unit, amount) in self.iter() {
            delta += unit.delta(amount);
        }
        delta
    }
}
