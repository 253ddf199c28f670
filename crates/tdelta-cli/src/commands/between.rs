//! Between command for the duration separating two timestamps.

use std::io::Write;

use anyhow::{Context, Result};

use tdelta_core::{Duration, Timestamp};

use super::render::{Render, write_duration};

pub fn run<W: Write>(writer: &mut W, start: &str, end: &str, render: Render) -> Result<()> {
    let start = Timestamp::parse(start).context("invalid start timestamp")?;
    let end = Timestamp::parse(end).context("invalid end timestamp")?;
    let duration = Duration::from_generic(&(end - start), false)?;
    write_duration(writer, &duration, render)
}
