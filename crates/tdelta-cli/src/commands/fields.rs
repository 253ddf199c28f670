//! Fields command for `unit=amount` assignments.

use std::io::Write;

use anyhow::{Context, Result};

use tdelta_core::Duration;

use super::render::{Render, write_duration};

pub fn run<W: Write>(writer: &mut W, entries: &[String], render: Render) -> Result<()> {
    let pairs = entries
        .iter()
        .map(|entry| parse_entry(entry))
        .collect::<Result<Vec<_>>>()?;
    let duration = Duration::from_mapping(&pairs);
    write_duration(writer, &duration, render)
}

/// Splits `unit=amount` into its parts.
fn parse_entry(entry: &str) -> Result<(String, f64)> {
    let Some((unit, amount)) = entry.split_once('=') else {
        anyhow::bail!("Invalid field: {entry}. Use unit=amount (e.g., hours=2.5)");
    };
    let amount: f64 = amount
        .trim()
        .parse()
        .with_context(|| format!("invalid amount in field {entry:?}"))?;
    Ok((unit.trim().to_string(), amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    fn entries(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn fields_accumulate() {
        let mut output = Vec::new();
        run(
            &mut output,
            &entries(&["weeks=1", "Days=2", "hours=1.5", "milliseconds=250"]),
            Render::default(),
        )
        .unwrap();
        let output = String::from_utf8(output).unwrap();
        assert_snapshot!(output.trim_end(), @"P1W2DT1H30M0.25S");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let mut output = Vec::new();
        run(&mut output, &entries(&["fortnights=2", "days=1"]), Render::default()).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "P1D\n");
    }

    #[test]
    fn parse_entry_rejects_missing_separator() {
        let err = parse_entry("hours").unwrap_err();
        assert!(err.to_string().starts_with("Invalid field: hours"));
    }

    #[test]
    fn parse_entry_rejects_bad_amount() {
        assert!(parse_entry("hours=two").is_err());
        assert_eq!(
            parse_entry(" minutes = -5 ").unwrap(),
            ("minutes".to_string(), -5.0)
        );
    }
}
