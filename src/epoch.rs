/// Julian day number of the Unix epoch.
///
/// 1970-01-01 is Julian day 2440588.
pub const JULIAN_EPOCH_OFFSET_DAYS: i32 = 2_440_588;

/// Milliseconds in one calendar day.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Nanoseconds in one millisecond.
pub const NANOS_PER_MILLI: i64 = 1_000_000;

/// Returns milliseconds since the Unix epoch at midnight of the given Julian
/// day.
///
/// The subtraction and multiplication are done in 64 bits, so any `i32` day
/// maps without overflow, including days before the epoch.
pub fn julian_day_to_millis(julian_day: i32) -> i64 {
    (julian_day as i64 - JULIAN_EPOCH_OFFSET_DAYS as i64) * MILLIS_PER_DAY
}

/// Splits milliseconds since the Unix epoch into a Julian day and the
/// milliseconds elapsed since midnight of that day.
///
/// The day is floored, so the returned millisecond-of-day is always in
/// `0..MILLIS_PER_DAY`, also for instants before the epoch.
pub fn millis_to_julian_day(unix_millis: i64) -> (i64, i64) {
    let days = unix_millis.div_euclid(MILLIS_PER_DAY);
    let millis_of_day = unix_millis.rem_euclid(MILLIS_PER_DAY);
    (days + JULIAN_EPOCH_OFFSET_DAYS as i64, millis_of_day)
}
