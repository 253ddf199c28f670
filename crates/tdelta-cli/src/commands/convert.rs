//! Convert command for scalar projections.

use std::io::Write;

use anyhow::Result;

use super::parse::parse_input;

/// Writes the duration in `input` as a number of `to` units.
pub fn run<W: Write>(writer: &mut W, input: &str, to: &str) -> Result<()> {
    let duration = parse_input(input, None)?;
    let value = duration.to_numeric(to)?;
    writeln!(writer, "{value}")?;
    Ok(())
}
