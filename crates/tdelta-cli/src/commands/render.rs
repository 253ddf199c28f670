//! Shared rendering of parsed durations.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use tdelta_core::{Components, Duration, LongBreakdown};

use crate::{Config, OutputArgs, OutputFormat};

/// Output settings after merging command-line flags over the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Render {
    pub format: OutputFormat,
    pub compact: bool,
}

impl Render {
    /// Flags win over the config; `--full` always disables compact output.
    pub fn resolve(args: OutputArgs, config: &Config) -> Self {
        Self {
            format: args.format.unwrap_or(config.format),
            compact: config.compact && !args.full,
        }
    }
}

impl Default for Render {
    fn default() -> Self {
        Self {
            format: OutputFormat::Iso,
            compact: true,
        }
    }
}

#[derive(Serialize)]
struct DurationReport {
    iso: String,
    total_seconds: f64,
    negative: bool,
    components: Components,
    long: LongBreakdown,
}

/// Writes `duration` in the requested format, followed by a newline.
pub fn write_duration<W: Write>(writer: &mut W, duration: &Duration, render: Render) -> Result<()> {
    match render.format {
        OutputFormat::Iso => writeln!(writer, "{}", duration.to_iso(render.compact))?,
        OutputFormat::Long => {
            let long = duration.long_breakdown();
            if duration.is_negative() {
                writeln!(writer, "sign: -")?;
            }
            writeln!(writer, "years: {}", long.years)?;
            writeln!(writer, "weeks: {}", long.weeks)?;
            writeln!(writer, "days: {}", long.days)?;
            writeln!(writer, "hours: {}", long.hours)?;
            writeln!(writer, "minutes: {}", long.minutes)?;
            writeln!(writer, "seconds: {}", long.seconds)?;
        }
        OutputFormat::Dict => {
            let dict = duration.to_dict();
            writeln!(writer, "days: {}", dict.days)?;
            writeln!(writer, "seconds: {}", dict.seconds)?;
            writeln!(writer, "microseconds: {}", dict.microseconds)?;
        }
        OutputFormat::Json => {
            let report = DurationReport {
                iso: duration.to_iso(render.compact),
                total_seconds: duration.total_seconds(),
                negative: duration.is_negative(),
                components: duration.to_dict(),
                long: duration.long_breakdown(),
            };
            writeln!(writer, "{}", serde_json::to_string(&report)?)?;
        }
    }
    Ok(())
}
