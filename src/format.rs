use {
    crate::{
        error::{Int96Error, Int96Result},
        zone::DisplayZone,
    },
    chrono::{DateTime, TimeZone, Utc},
    std::fmt::Display,
};

/// Output pattern, `yyyy-MM-dd HH:mm:ss.SSS`.
pub const DATETIME_PATTERN: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Renders milliseconds since the Unix epoch as `yyyy-MM-dd HH:mm:ss.SSS`
/// observed in the given zone.
///
/// Fails only if the instant lies outside of the calendar range supported by
/// `chrono` (roughly 262,000 years either side of year 0).
pub fn format(unix_millis: i64, zone: &DisplayZone) -> Int96Result<String> {
    let utc = Utc
        .timestamp_millis_opt(unix_millis)
        .single()
        .ok_or(Int96Error::OutOfRangeTimestamp(unix_millis))?;

    Ok(match zone {
        DisplayZone::Fixed(offset) => render(utc.with_timezone(offset)),
        DisplayZone::Named(tz) => render(utc.with_timezone(tz)),
    })
}

/// Same as [`format()`], with the zone given as an identifier such as
/// `+08:00` or `Asia/Shanghai`.
pub fn format_in(unix_millis: i64, zone_id: &str) -> Int96Result<String> {
    format(unix_millis, &zone_id.parse()?)
}

fn render<Tz>(dt: DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    dt.format(DATETIME_PATTERN).to_string()
}
