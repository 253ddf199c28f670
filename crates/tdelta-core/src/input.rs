//! Input dispatch: routes each supported input shape to its parser.

use crate::duration::Duration;
use crate::error::DurationError;
use crate::fields::ParsedFields;
use crate::generic::{self, DurationLike};
use crate::interval::parse_interval;
use crate::iso::parse_iso;
use crate::structured::{UnitSpec, parse_mapping, parse_number, parse_tuple};

/// Every input shape a duration can be parsed from.
#[derive(Debug)]
pub enum RawInput {
    /// An ISO-8601 duration or interval string.
    Text(String),
    /// `(years, months, days, hours, minutes, seconds[, microseconds])`.
    Tuple(Vec<f64>),
    /// Unit keyword to amount pairs.
    Fields(Vec<(String, f64)>),
    /// A scalar with a unit keyword or a keyword mapping.
    Number { value: f64, unit: UnitSpec },
    /// A value from another library, probed for duration capabilities.
    Generic(Box<dyn DurationLike>),
}

impl RawInput {
    /// A scalar amount of a single unit.
    pub fn number(value: f64, unit: impl Into<String>) -> Self {
        Self::Number {
            value,
            unit: UnitSpec::Keyword(unit.into()),
        }
    }

    /// Wraps a duration-like value from another library.
    pub fn generic(value: impl DurationLike + 'static) -> Self {
        Self::Generic(Box::new(value))
    }

    const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Tuple(_) => "tuple",
            Self::Fields(_) => "fields",
            Self::Number { .. } => "number",
            Self::Generic(_) => "generic",
        }
    }
}

impl From<&str> for RawInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RawInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<f64>> for RawInput {
    fn from(values: Vec<f64>) -> Self {
        Self::Tuple(values)
    }
}

impl From<Vec<(String, f64)>> for RawInput {
    fn from(entries: Vec<(String, f64)>) -> Self {
        Self::Fields(entries)
    }
}

/// Options that change how inputs are parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Yield a zero duration instead of failing when a generic value exposes
    /// no duration capability.
    pub force: bool,
}

/// How a text input is routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    /// No `/`: a plain ISO-8601 duration.
    Duration,
    /// A `/` with mostly digits around it, such as `03/01/20`.
    Numeric,
    /// A `/` joining two interval sides.
    Interval,
}

impl TextKind {
    pub fn classify(text: &str) -> Self {
        if !text.contains('/') {
            return Self::Duration;
        }
        let non_digits = text.chars().filter(|c| !c.is_ascii_digit()).count();
        if non_digits < 3 {
            Self::Numeric
        } else {
            Self::Interval
        }
    }
}

/// Parses a text input into fields.
pub fn parse_text(text: &str) -> Result<ParsedFields, DurationError> {
    match TextKind::classify(text) {
        TextKind::Duration => parse_iso(text),
        TextKind::Interval => parse_interval(text),
        TextKind::Numeric => Err(DurationError::UnsupportedInputKind {
            kind: format!("numeric string {text:?} without unit suffixes"),
        }),
    }
}

/// Routes `input` to its parser and returns the extracted fields.
pub fn parse_fields(input: &RawInput, options: ParseOptions) -> Result<ParsedFields, DurationError> {
    tracing::debug!(kind = input.kind(), "parsing duration input");
    match input {
        RawInput::Text(text) => parse_text(text),
        RawInput::Tuple(values) => parse_tuple(values),
        RawInput::Fields(entries) => Ok(parse_mapping(entries)),
        RawInput::Number { value, unit } => Ok(parse_number(*value, unit)),
        RawInput::Generic(object) => generic::extract(object.as_ref(), options.force),
    }
}

impl Duration {
    /// Parses any supported input with default options.
    pub fn parse(input: impl Into<RawInput>) -> Result<Self, DurationError> {
        Self::parse_with(input, ParseOptions::default())
    }

    /// Parses any supported input.
    pub fn parse_with(
        input: impl Into<RawInput>,
        options: ParseOptions,
    ) -> Result<Self, DurationError> {
        let fields = parse_fields(&input.into(), options)?;
        Ok(Self::from_fields(&fields))
    }

    /// Parses an ISO-8601 duration or interval string.
    pub fn parse_str(text: &str) -> Result<Self, DurationError> {
        Ok(Self::from_fields(&parse_text(text)?))
    }

    /// Parses `(years, months, days, hours, minutes, seconds[, microseconds])`.
    pub fn from_tuple(values: &[f64]) -> Result<Self, DurationError> {
        Ok(Self::from_fields(&parse_tuple(values)?))
    }

    /// Parses unit keyword to amount pairs.
    pub fn from_mapping<K: AsRef<str>>(entries: &[(K, f64)]) -> Self {
        Self::from_fields(&parse_mapping(entries))
    }

    /// Parses `value` expressed in `unit`.
    pub fn from_number(value: f64, unit: &str) -> Self {
        Self::from_fields(&parse_number(value, &UnitSpec::Keyword(unit.to_string())))
    }

    /// Extracts a duration from a value defined in another library.
    pub fn from_generic(value: &dyn DurationLike, force: bool) -> Result<Self, DurationError> {
        Ok(Self::from_fields(&generic::extract(value, force)?))
    }
}

impl From<chrono::TimeDelta> for Duration {
    fn from(delta: chrono::TimeDelta) -> Self {
        let fields = ParsedFields {
            seconds: delta.num_seconds() as f64,
            microseconds: f64::from(delta.subsec_nanos() / 1000),
            ..ParsedFields::default()
        };
        Self::from_fields(&fields)
    }
}
