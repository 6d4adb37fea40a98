/// Upper bound (inclusive) for the distance field, in kilometers.
pub const MAX_DISTANCE_KM: f64 = 500.0;

/// Upper bound (inclusive) for the total duration: 24 hours.
pub const MAX_DURATION_SECS: i64 = 86_400;

/// Clamp ceilings for the individual time fields.
pub const MAX_HOURS: u32 = 23;
pub const MAX_MINUTES: u32 = 59;
pub const MAX_SECONDS: u32 = 59;

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 3_600;

/// Title shown above every validation notice.
pub const ALERT_TITLE: &str = "Atenção";

/// Unit label rendered next to the pace value.
pub const PACE_UNIT: &str = "min/km";
