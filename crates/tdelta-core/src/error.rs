//! Error types for duration and timestamp parsing.

use thiserror::Error;

/// Errors produced while parsing or converting a duration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DurationError {
    /// The input shape is not one the dispatcher can route.
    #[error("unsupported duration input: {kind}")]
    UnsupportedInputKind { kind: String },

    /// A matched ISO-8601 field could not be read as a number.
    #[error("malformed ISO-8601 duration {input:?}: invalid {field} value {value:?}")]
    MalformedDurationString {
        input: String,
        field: &'static str,
        value: String,
    },

    /// Neither side of an interval could be told apart from the other.
    #[error("ambiguous ISO-8601 interval: {input:?}")]
    AmbiguousInterval { input: String },

    /// Every capability probe failed on a generic object.
    #[error("unsupported generic type: {description}")]
    UnsupportedGenericType { description: String },

    /// The requested scalar unit is not supported.
    #[error("unsupported unit {unit:?}, expected one of days, years, months")]
    UnsupportedUnit { unit: String },

    /// The timestamp collaborator rejected one side of an interval.
    #[error(transparent)]
    Timestamp(#[from] TimestampError),
}

/// Errors produced by the timestamp collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimestampError {
    /// The string matched none of the supported timestamp layouts.
    #[error("invalid timestamp: {value:?}")]
    Unparseable { value: String },

    /// A tuple had the wrong number of fields.
    #[error("timestamp tuple must have 3 to 7 fields, got {len}")]
    TupleArity { len: usize },

    /// A mapping lacked a required calendar key.
    #[error("timestamp mapping is missing {field}")]
    MissingField { field: &'static str },

    /// The calendar fields do not form a real date or time.
    #[error("timestamp fields out of range: {detail}")]
    OutOfRange { detail: String },
}
