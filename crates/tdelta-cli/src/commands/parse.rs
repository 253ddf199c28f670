//! Parse command for ISO-8601 text and numbers with units.

use std::io::Write;

use anyhow::{Context, Result};

use tdelta_core::{Duration, RawInput};

use super::render::{Render, write_duration};

/// Parses `input` and writes the canonical duration.
///
/// With a `unit`, the input must be a plain number in that unit.
pub fn run<W: Write>(
    writer: &mut W,
    input: &str,
    unit: Option<&str>,
    render: Render,
) -> Result<()> {
    let duration = parse_input(input, unit)?;
    tracing::debug!(?duration, "parsed duration");
    write_duration(writer, &duration, render)
}

/// Parses text, or a number when `unit` is given.
pub fn parse_input(input: &str, unit: Option<&str>) -> Result<Duration> {
    let duration = match unit {
        Some(unit) => {
            let value: f64 = input
                .trim()
                .parse()
                .with_context(|| format!("invalid number {input:?} for unit {unit}"))?;
            Duration::parse(RawInput::number(value, unit))?
        }
        None => Duration::parse_str(input)
            .with_context(|| format!("failed to parse duration {input:?}"))?,
    };
    Ok(duration)
}
