//! ISO-8601 duration matcher.
//!
//! Matching is deliberately permissive: every component is optional and the
//! pattern is searched for rather than anchored, so an empty or unrelated
//! string yields all-zero fields instead of an error.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::DurationError;
use crate::fields::ParsedFields;
use crate::units::Unit;

/// `P[n]Y[n]M[n]W[n]DT[n]H[n]M[n(.n)]S`, case-insensitive, `-` allowed between fields.
static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)
        p?
        (?:(?P<years>[0-9]+)y)?-?
        (?:(?P<months>[0-9]+)m)?-?
        (?:(?P<weeks>[0-9]+)w)?-?
        (?:(?P<days>[0-9]+)d)?
        t?
        (?:(?P<hours>[0-9]+)h)?-?
        (?:(?P<minutes>[0-9]+)m)?-?
        (?:(?P<seconds>[0-9]+(?:.[0-9]+)?)s)?",
    )
    .expect("duration pattern is valid")
});

/// Named capture groups and the unit each one feeds.
const GROUPS: [(&str, Unit); 7] = [
    ("years", Unit::Years),
    ("months", Unit::Months),
    ("weeks", Unit::Weeks),
    ("days", Unit::Days),
    ("hours", Unit::Hours),
    ("minutes", Unit::Minutes),
    ("seconds", Unit::Seconds),
];

/// Extracts the fields of an ISO-8601 duration string.
///
/// Missing components are zero. Years and months are folded into days, so the
/// returned fields never carry either. A single leading `-` negates the whole
/// duration and a leading `+` is ignored.
pub fn parse_iso(input: &str) -> Result<ParsedFields, DurationError> {
    let (negative, body) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };

    let Some(caps) = DURATION_RE.captures(body) else {
        return Err(DurationError::MalformedDurationString {
            input: input.to_string(),
            field: "duration",
            value: body.to_string(),
        });
    };

    let mut fields = ParsedFields::default();
    for (name, unit) in GROUPS {
        let Some(matched) = caps.name(name) else {
            continue;
        };
        let raw = matched.as_str();
        let value: f64 = raw.replace(',', ".").parse().map_err(|_| {
            DurationError::MalformedDurationString {
                input: input.to_string(),
                field: unit.as_str(),
                value: raw.to_string(),
            }
        })?;
        *fields.get_mut(unit) = if negative { -value } else { value };
    }

    Ok(fields.fold_calendar())
}
