//! ISO-8601 interval resolver for `start/end`, `start/duration` and
//! `duration/end` strings.

use crate::error::DurationError;
use crate::fields::ParsedFields;
use crate::generic;
use crate::iso::parse_iso;
use crate::timestamp::Timestamp;

/// How one side of an interval was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Duration,
    Timestamp,
}

impl Side {
    /// Dates always contain `-`, durations normally do not.
    ///
    /// A negative duration or a timestamp written without hyphens is
    /// misclassified; no further disambiguation is attempted.
    pub fn classify(text: &str) -> Self {
        if text.contains('-') {
            Self::Timestamp
        } else {
            Self::Duration
        }
    }
}

/// Resolves an interval string into parsed fields.
///
/// Two timestamps yield their difference (`end - start`). When exactly one
/// side is a duration, that side is parsed and the timestamp is ignored.
pub fn parse_interval(input: &str) -> Result<ParsedFields, DurationError> {
    let ambiguous = || DurationError::AmbiguousInterval {
        input: input.to_string(),
    };

    let (left, right) = input.split_once('/').ok_or_else(ambiguous)?;
    if right.contains('/') {
        return Err(ambiguous());
    }

    match (Side::classify(left), Side::classify(right)) {
        (Side::Timestamp, Side::Timestamp) => {
            let start = Timestamp::parse(left)?;
            let end = Timestamp::parse(right)?;
            tracing::debug!(%start, %end, "resolving interval between timestamps");
            generic::extract(&(end - start), false)
        }
        (Side::Duration, Side::Timestamp) => parse_iso(left),
        (Side::Timestamp, Side::Duration) => parse_iso(right),
        (Side::Duration, Side::Duration) => Err(ambiguous()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duration::Duration;
    use crate::error::TimestampError;

    fn resolve(input: &str) -> Duration {
        Duration::from_fields(&parse_interval(input).expect("should resolve"))
    }

    #[test]
    fn classifies_sides_by_hyphen() {
        assert_eq!(Side::classify("2007-03-01"), Side::Timestamp);
        assert_eq!(Side::classify("P1Y2M10DT2H30M"), Side::Duration);
        assert_eq!(Side::classify("-P1D"), Side::Timestamp);
    }

    #[test]
    fn two_timestamps_yield_their_difference() {
        let start = Timestamp::parse("2007-03-01").unwrap();
        let end = Timestamp::parse("2008-05-11").unwrap();
        let expected = Duration::from_fields(&generic::extract(&(end - start), false).unwrap());

        assert_eq!(resolve("2007-03-01/2008-05-11"), expected);
        assert_eq!(resolve("2007-03-01/2008-05-11"), Duration::new(437.0, 0.0, 0.0));
    }

    #[test]
    fn timestamps_with_times_include_the_clock_difference() {
        let d = resolve("2007-03-01T13:00:00Z/2008-05-11T15:30:00Z");
        assert_eq!(d, Duration::new(437.0, 2.5 * 3600.0, 0.0));
    }

    #[test]
    fn duration_side_wins_over_timestamp_side() {
        let expected = Duration::from_fields(&parse_iso("P1Y2M10DT2H30M").unwrap());
        assert_eq!(resolve("2007-03-01T13:00:00Z/P1Y2M10DT2H30M"), expected);
        assert_eq!(resolve("P1Y2M10DT2H30M/2008-05-11T15:30:00Z"), expected);
    }

    #[test]
    fn two_durations_are_ambiguous() {
        assert_eq!(
            parse_interval("P1D/P2D"),
            Err(DurationError::AmbiguousInterval {
                input: "P1D/P2D".to_string()
            })
        );
    }

    #[test]
    fn extra_separators_are_ambiguous() {
        assert!(matches!(
            parse_interval("2007-03-01/2008-05-11/2009-01-01"),
            Err(DurationError::AmbiguousInterval { .. })
        ));
    }

    #[test]
    fn timestamp_failures_propagate() {
        assert_eq!(
            parse_interval("2007-03-01/not-a-date"),
            Err(DurationError::Timestamp(TimestampError::Unparseable {
                value: "not-a-date".to_string()
            }))
        );
    }
}
