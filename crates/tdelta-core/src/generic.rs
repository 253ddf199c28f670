//! Extraction from duration-like values defined outside this crate.

use std::fmt;

use chrono::TimeDelta;

use crate::duration::Duration;
use crate::error::DurationError;
use crate::fields::ParsedFields;
use crate::units::UnitDelta;

/// A value that may expose duration data in one of several shapes.
///
/// Every capability defaults to absent; implementors override the ones
/// their type supports.
pub trait DurationLike: fmt::Debug {
    /// Day, second and microsecond counts read directly off the value.
    fn components(&self) -> Option<UnitDelta> {
        None
    }

    /// The whole value expressed in seconds.
    fn total_seconds(&self) -> Option<f64> {
        None
    }

    /// Converts the value into another duration-like value.
    fn to_duration_like(&self) -> Option<Box<dyn DurationLike>> {
        None
    }
}

/// Capability probes, finest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Probe {
    Components,
    TotalSeconds,
    Conversion,
}

const PROBES: [Probe; 3] = [Probe::Components, Probe::TotalSeconds, Probe::Conversion];

/// Extracts parsed fields from `object`.
///
/// Probes are tried in order: direct components, total seconds, then a
/// single conversion whose result is probed again without converting
/// further. When every probe fails, `force` yields a zero-length duration
/// and otherwise the object is rejected.
pub fn extract(object: &dyn DurationLike, force: bool) -> Result<ParsedFields, DurationError> {
    if let Some(fields) = probe(object, &PROBES) {
        return Ok(fields);
    }
    if force {
        tracing::debug!(?object, "no duration capability found, using zero duration");
        return Ok(ParsedFields::default());
    }
    Err(DurationError::UnsupportedGenericType {
        description: format!("{object:?}"),
    })
}

fn probe(object: &dyn DurationLike, probes: &[Probe]) -> Option<ParsedFields> {
    probes.iter().find_map(|step| match step {
        Probe::Components => object.components().map(|delta| ParsedFields {
            days: delta.days,
            seconds: delta.seconds,
            microseconds: delta.microseconds,
            ..ParsedFields::default()
        }),
        Probe::TotalSeconds => object.total_seconds().map(|seconds| ParsedFields {
            seconds,
            ..ParsedFields::default()
        }),
        Probe::Conversion => object
            .to_duration_like()
            .and_then(|converted| probe(converted.as_ref(), &PROBES[..2])),
    })
}

impl DurationLike for Duration {
    fn components(&self) -> Option<UnitDelta> {
        Some(UnitDelta {
            days: self.days(),
            seconds: self.seconds(),
            microseconds: self.microseconds(),
        })
    }
}

impl DurationLike for TimeDelta {
    fn components(&self) -> Option<UnitDelta> {
        let days = self.num_days();
        let rest = *self - Self::days(days);
        Some(UnitDelta {
            days: days as f64,
            seconds: rest.num_seconds() as f64,
            microseconds: f64::from(rest.subsec_nanos() / 1000),
        })
    }
}

impl DurationLike for std::time::Duration {
    fn total_seconds(&self) -> Option<f64> {
        Some(self.as_secs_f64())
    }
}
