use crate::consts::{MAX_DISTANCE_KM, MAX_DURATION_SECS, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::error::PaceError;
use serde::Serialize;
use tracing::debug;

/// Outcome of a successful calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaceResult {
    /// Pace rendered as `M:SS`.
    pub display: String,
    /// Raw pace in seconds per kilometer.
    pub pace_seconds: f64,
    pub distance_km: f64,
    pub total_seconds: i64,
}

/// Computes the pace (seconds per km) for a distance and an elapsed time,
/// all given as the raw text of the form fields.
///
/// Distance is validated strictly. Time fields that are empty or do not
/// start with a number count as zero; only the total is validated.
pub fn calculate_pace(
    distance_text: &str,
    hours_text: &str,
    minutes_text: &str,
    seconds_text: &str,
) -> Result<PaceResult, PaceError> {
    let distance_km = parse_distance(distance_text)?;

    if !(distance_km > 0.0 && distance_km <= MAX_DISTANCE_KM) {
        return Err(PaceError::DistanceOutOfRange);
    }

    let h = parse_time_field(hours_text);
    let m = parse_time_field(minutes_text);
    let s = parse_time_field(seconds_text);

    let total_seconds = h
        .saturating_mul(SECONDS_PER_HOUR)
        .saturating_add(m.saturating_mul(SECONDS_PER_MINUTE))
        .saturating_add(s);

    if total_seconds <= 0 {
        return Err(PaceError::InvalidDuration);
    }
    if total_seconds > MAX_DURATION_SECS {
        return Err(PaceError::DurationTooLong);
    }

    let pace_seconds = total_seconds as f64 / distance_km;
    let shown = format_pace(pace_seconds);
    debug!(
        "Pace: {} s over {} km -> {} ({:.3} s/km)",
        total_seconds, distance_km, shown, pace_seconds
    );

    Ok(PaceResult {
        display: shown,
        pace_seconds,
        distance_km,
        total_seconds,
    })
}

/// Formats seconds-per-km as `M:SS`: whole minutes without padding, whole
/// seconds padded to two digits. Both parts are truncated, never rounded.
/// Minutes stay `f64` so sub-meter distances do not saturate an integer.
pub fn format_pace(pace_seconds: f64) -> String {
    let minutes = (pace_seconds / 60.0).floor();
    let seconds = (pace_seconds % 60.0).floor() as u64;
    format!("{}:{:02}", minutes, seconds)
}

fn parse_distance(text: &str) -> Result<f64, PaceError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(PaceError::InvalidDistance);
    }

    match trimmed.parse::<f64>() {
        Ok(value) if !value.is_nan() => Ok(value),
        _ => Err(PaceError::InvalidDistance),
    }
}

/// Lenient integer parse: optional sign followed by the leading run of
/// ASCII digits. Anything unparsable is zero; overflow saturates.
fn parse_time_field(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return 0;
    }

    let magnitude = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_field_parsing_is_lenient() {
        assert_eq!(parse_time_field(""), 0);
        assert_eq!(parse_time_field("abc"), 0);
        assert_eq!(parse_time_field("07"), 7);
        assert_eq!(parse_time_field(" 12xyz"), 12);
        assert_eq!(parse_time_field("-5"), -5);
        assert_eq!(parse_time_field("+5"), 5);
        assert_eq!(parse_time_field("99999999999999999999999"), i64::MAX);
    }

    #[test]
    fn distance_parse_edges() {
        assert_eq!(parse_distance("5."), Ok(5.0));
        assert_eq!(parse_distance(".5"), Ok(0.5));
        assert_eq!(parse_distance("."), Err(PaceError::InvalidDistance));
        assert_eq!(parse_distance("   "), Err(PaceError::InvalidDistance));
        assert_eq!(parse_distance("NaN"), Err(PaceError::InvalidDistance));
    }

    #[test]
    fn format_truncates_seconds() {
        assert_eq!(format_pace(359.99), "5:59");
        assert_eq!(format_pace(600.0), "10:00");
        assert_eq!(format_pace(0.5), "0:00");
        let huge = format_pace(1e30);
        assert!(huge.starts_with("1666666666666666"), "got {}", huge);
        assert!(!huge.contains('e'));
    }
}
