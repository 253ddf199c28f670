//! Tuple command for positional `years months days hours minutes seconds [microseconds]`.

use std::io::Write;

use anyhow::Result;

use tdelta_core::Duration;

use super::render::{Render, write_duration};

pub fn run<W: Write>(writer: &mut W, values: &[f64], render: Render) -> Result<()> {
    let duration = Duration::from_tuple(values)?;
    write_duration(writer, &duration, render)
}
