//! Keystroke-level normalization for the text fields of the pace form.
//!
//! These run on every edit, before anything is parsed. They never fail:
//! a distance edit that would produce a malformed number is simply not
//! applied, and time fields are coerced into range.

use tracing::debug;

/// Applies an edit to the distance field.
///
/// The first `,` is read as a decimal separator. The candidate text is
/// accepted when it consists of ASCII digits with at most one `.`;
/// otherwise `previous` is returned unchanged and the keystroke is lost.
pub fn normalize_distance_text(previous: &str, raw: &str) -> String {
    accept_distance_text(raw).unwrap_or_else(|| {
        debug!("Rejected distance edit '{}', keeping '{}'", raw, previous);
        previous.to_string()
    })
}

/// The normalized distance text, or `None` when the edit must be rejected.
pub fn accept_distance_text(raw: &str) -> Option<String> {
    let candidate = raw.replacen(',', ".", 1);
    is_decimal_text(&candidate).then_some(candidate)
}

/// Applies an edit to one of the time fields (hours, minutes, seconds).
///
/// Non-digits are stripped. An empty result stays empty so the field can
/// still be edited; a value above `max` is replaced by `max`.
pub fn clamp_time_text(raw: &str, max: u32) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return digits;
    }

    // Too many digits for u64 is certainly above any field maximum.
    let exceeds = match digits.parse::<u64>() {
        Ok(value) => value > u64::from(max),
        Err(_) => true,
    };

    if exceeds {
        max.to_string()
    } else {
        digits
    }
}

fn is_decimal_text(text: &str) -> bool {
    let mut seen_dot = false;
    for c in text.chars() {
        match c {
            '0'..='9' => {}
            '.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    true
}
