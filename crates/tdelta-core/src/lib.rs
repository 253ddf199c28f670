//! Flexible duration parsing and normalization.
//!
//! This crate converts durations written in several shapes into one canonical
//! [`Duration`]:
//! - ISO-8601 durations (`P1Y2M10DT2H30M`) and intervals (`start/end`)
//! - Positional tuples, unit keyword mappings and number-with-unit pairs
//! - Values from other libraries exposing duration-like capabilities
//!
//! A [`Duration`] renders back to ISO-8601, a [`LongBreakdown`] or a scalar.

mod duration;
mod error;
mod fields;
mod format;
pub mod generic;
mod input;
pub mod interval;
pub mod iso;
pub mod structured;
mod timestamp;
pub mod units;

pub use duration::{Components, Duration, MAX_DAYS};
pub use error::{DurationError, TimestampError};
pub use fields::ParsedFields;
pub use format::LongBreakdown;
pub use generic::DurationLike;
pub use input::{ParseOptions, RawInput, TextKind, parse_fields, parse_text};
pub use structured::UnitSpec;
pub use timestamp::Timestamp;
pub use units::{Unit, UnitDelta, normalize};
