//! Tuple, mapping and number-with-unit input forms.

use crate::duration::MICROS_PER_SECOND;
use crate::error::DurationError;
use crate::fields::ParsedFields;
use crate::units::{Unit, UnitDelta, normalize};

/// How the amount of a number-with-unit input is interpreted.
#[derive(Debug, Clone, PartialEq)]
pub enum UnitSpec {
    /// A single unit keyword applied to the scalar.
    Keyword(String),
    /// Keyword amounts that replace the scalar entirely.
    Mapping(Vec<(String, f64)>),
}

/// Parses `(years, months, days, hours, minutes, seconds[, microseconds])`.
///
/// A microsecond value below 1 is a fraction of a second, so `0.5` becomes
/// `500_000`. Years and months are folded into days.
pub fn parse_tuple(values: &[f64]) -> Result<ParsedFields, DurationError> {
    let [years, months, days, hours, minutes, seconds, rest @ ..] = values else {
        return Err(unsupported_tuple(values.len()));
    };
    let microseconds = match rest {
        [] => 0.0,
        [micros] if *micros < 1.0 => micros * MICROS_PER_SECOND,
        [micros] => *micros,
        _ => return Err(unsupported_tuple(values.len())),
    };

    Ok(ParsedFields {
        years: *years,
        months: *months,
        days: *days,
        hours: *hours,
        minutes: *minutes,
        seconds: *seconds,
        microseconds,
        ..ParsedFields::default()
    }
    .fold_calendar())
}

fn unsupported_tuple(len: usize) -> DurationError {
    DurationError::UnsupportedInputKind {
        kind: format!("tuple of {len} values, expected 6 or 7"),
    }
}

/// Parses a mapping of unit keywords to amounts.
///
/// Keywords are case-insensitive and repeated keywords accumulate. Unknown
/// keywords are logged and dropped.
pub fn parse_mapping<K: AsRef<str>>(entries: &[(K, f64)]) -> ParsedFields {
    let mut fields = ParsedFields::default();
    for (key, amount) in entries {
        match key.as_ref().parse::<Unit>() {
            Ok(unit) => *fields.get_mut(unit) += amount,
            Err(err) => tracing::warn!(%err, amount, "ignoring unknown duration unit"),
        }
    }
    fields
}

/// Parses a scalar together with its unit specification.
///
/// With a [`UnitSpec::Keyword`] only that unit contributes. With a
/// [`UnitSpec::Mapping`] every entry contributes and the scalar is unused.
pub fn parse_number(value: f64, unit: &UnitSpec) -> ParsedFields {
    let delta = match unit {
        UnitSpec::Keyword(keyword) => normalize(keyword, value),
        UnitSpec::Mapping(entries) => {
            tracing::debug!(value, "unit mapping given, scalar value unused");
            let mut delta = UnitDelta::ZERO;
            for (key, amount) in entries {
                delta += normalize(key, *amount);
            }
            delta
        }
    };

    ParsedFields {
        days: delta.days,
        seconds: delta.seconds,
        microseconds: delta.microseconds,
        ..ParsedFields::default()
    }
}
