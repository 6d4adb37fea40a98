use pacecalc::pace::{calculate_pace, format_pace};
use pacecalc::PaceError;
use rstest::rstest;

#[rstest]
#[case("5", "", "25", "00", 1500, "5:00")]
#[case("10", "0", "50", "30", 3030, "5:03")]
#[case("21.0975", "1", "45", "0", 6300, "4:58")]
#[case("42.195", "3", "30", "0", 12600, "4:58")]
#[case("1", "", "", "1", 1, "0:01")]
#[case("0.5", "", "3", "", 180, "6:00")]
#[case("500", "23", "59", "59", 86399, "2:52")]
fn test_valid_paces(
    #[case] distance: &str,
    #[case] h: &str,
    #[case] m: &str,
    #[case] s: &str,
    #[case] total: i64,
    #[case] display: &str,
) {
    let result = calculate_pace(distance, h, m, s).expect("calculation should succeed");
    assert_eq!(result.total_seconds, total);
    assert_eq!(result.display, display);

    let expected = total as f64 / distance.parse::<f64>().unwrap();
    assert!((result.pace_seconds - expected).abs() < 1e-9);
}

// --- DISTANCE VALIDATION ---
#[rstest]
#[case("")]
#[case("   ")]
#[case(".")]
#[case("abc")]
fn test_invalid_distance(#[case] distance: &str) {
    assert_eq!(
        calculate_pace(distance, "0", "30", "0"),
        Err(PaceError::InvalidDistance)
    );
}

#[rstest]
#[case("0")]
#[case("0.0")]
#[case("500.0001")]
#[case("1000")]
#[case("-3")]
fn test_distance_out_of_range(#[case] distance: &str) {
    assert_eq!(
        calculate_pace(distance, "0", "30", "0"),
        Err(PaceError::DistanceOutOfRange)
    );
}

#[test]
fn test_distance_upper_bound_is_inclusive() {
    let result = calculate_pace("500", "", "", "1").unwrap();
    assert_eq!(result.distance_km, 500.0);
}

// Distance is checked before time, so a bad distance wins over a bad time.
#[test]
fn test_distance_error_reported_first() {
    assert_eq!(
        calculate_pace("", "", "", ""),
        Err(PaceError::InvalidDistance)
    );
    assert_eq!(
        calculate_pace("0", "", "", ""),
        Err(PaceError::DistanceOutOfRange)
    );
}

// --- DURATION VALIDATION ---
#[rstest]
#[case("", "", "")]
#[case("0", "0", "0")]
#[case("x", "y", "z")]
#[case("", "-1", "30")]
fn test_invalid_duration(#[case] h: &str, #[case] m: &str, #[case] s: &str) {
    assert_eq!(
        calculate_pace("5", h, m, s),
        Err(PaceError::InvalidDuration)
    );
}

#[test]
fn test_duration_bounds() {
    assert!(calculate_pace("10", "24", "0", "0").is_ok());
    assert_eq!(
        calculate_pace("10", "24", "0", "1"),
        Err(PaceError::DurationTooLong)
    );
    assert_eq!(
        calculate_pace("10", "99999999999999999999", "", ""),
        Err(PaceError::DurationTooLong)
    );
}

#[test]
fn test_malformed_time_fields_count_as_zero() {
    let result = calculate_pace("5", "abc", "25", "").unwrap();
    assert_eq!(result.total_seconds, 1500);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        PaceError::InvalidDistance.to_string(),
        "Por favor, insira uma distância válida"
    );
    assert_eq!(
        PaceError::DistanceOutOfRange.to_string(),
        "A distância deve estar entre 0.1 e 500 km"
    );
    assert_eq!(
        PaceError::InvalidDuration.to_string(),
        "Por favor, insira um tempo válido"
    );
    assert_eq!(
        PaceError::DurationTooLong.to_string(),
        "O tempo deve ser menor que 24 horas"
    );
}

#[test]
fn test_tiny_distance_keeps_full_minutes() {
    let result = calculate_pace("0.00000000000000000001", "24", "", "").unwrap();
    let minutes = (result.pace_seconds / 60.0).floor();
    let seconds = (result.pace_seconds % 60.0).floor() as u64;
    assert_eq!(result.display, format!("{}:{:02}", minutes, seconds));
    assert!(result.display.starts_with("14400000000000002"));
}

#[rstest]
#[case(300.0, "5:00")]
#[case(303.0, "5:03")]
#[case(59.999, "0:59")]
#[case(3600.0, "60:00")]
fn test_format_pace(#[case] pace: f64, #[case] expected: &str) {
    assert_eq!(format_pace(pace), expected);
}
