//! Retention time strings.
//!
//! Ion definition files give retention times either as a bare number of
//! seconds (`612`) or with a unit suffix (`10.2m`, `"1 min"`, `30 s`).

use crate::mid::MidError;

const SECONDS: &[&str] = &["s", "sec", "secs", "second", "seconds"];
const MINUTES: &[&str] = &["m", "min", "mins", "minute", "minutes"];

/// Convert a time string to seconds
pub fn time_str_secs(time_str: &str) -> Result<f64, MidError> {
    let invalid = |reason: &str| MidError::InvalidTime {
        input: time_str.to_string(),
        reason: reason.to_string(),
    };

    let text = strip_quotes(time_str.trim()).trim();
    if text.is_empty() {
        return Err(invalid("empty time string"));
    }

    let split = text
        .find(|c: char| c.is_ascii_alphabetic())
        .unwrap_or(text.len());
    let (number, unit) = text.split_at(split);

    let value: f64 = number
        .trim()
        .parse()
        .map_err(|_| invalid("expected a number optionally followed by 's' or 'm'"))?;

    let unit = unit.trim().to_ascii_lowercase();
    let factor = if unit.is_empty() || SECONDS.contains(&unit.as_str()) {
        1.0
    } else if MINUTES.contains(&unit.as_str()) {
        60.0
    } else {
        return Err(invalid("time unit must be seconds ('s') or minutes ('m')"));
    };

    let seconds = value * factor;
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(invalid("time must be a non-negative finite value"));
    }
    Ok(seconds)
}

fn strip_quotes(text: &str) -> &str {
    for quote in ['"', '\''] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            return &text[1..text.len() - 1];
        }
    }
    text
}
