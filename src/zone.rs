use {
    crate::error::{Int96Error, Int96Result},
    chrono::{FixedOffset, Offset, Utc},
    chrono_tz::Tz,
    std::str::FromStr,
};

/// Largest accepted fixed offset, in hours either side of UTC.
const MAX_OFFSET_HOURS: i32 = 18;

/// Timezone in which timestamps are rendered.
///
/// Either a fixed UTC offset (`+08:00`, `GMT-5`, `Z`) or a named IANA zone
/// (`Asia/Shanghai`) whose offset depends on the instant being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayZone {
    /// Fixed offset from UTC.
    Fixed(FixedOffset),

    /// IANA timezone database entry.
    Named(Tz),
}

impl DisplayZone {
    /// UTC, i.e. offset `+00:00`.
    pub fn utc() -> Self {
        Self::Fixed(Utc.fix())
    }

    /// Creates a fixed offset of whole hours east of UTC.
    pub fn fixed_hours(hours: i32) -> Int96Result<Self> {
        hours
            .checked_abs()
            .and_then(|abs| fixed_offset(hours.signum(), abs, 0))
            .map(Self::Fixed)
            .ok_or_else(|| Int96Error::InvalidTimezone(format!("{hours:+}")))
    }
}

impl std::fmt::Display for DisplayZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed(offset) => write!(f, "{offset}"),
            Self::Named(tz) => f.write_str(tz.name()),
        }
    }
}

impl FromStr for DisplayZone {
    type Err = Int96Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        if let Some(offset) = parse_fixed_offset(id) {
            return Ok(Self::Fixed(offset));
        }
        id.parse::<Tz>()
            .map(Self::Named)
            .map_err(|_| Int96Error::InvalidTimezone(s.to_string()))
    }
}

/// Parses `Z`, `UTC`, `GMT`, and signed offsets such as `+08:00`, `-0530`,
/// `+8`, optionally prefixed with `UTC` or `GMT`.
fn parse_fixed_offset(id: &str) -> Option<FixedOffset> {
    if id.eq_ignore_ascii_case("z") {
        return fixed_offset(1, 0, 0);
    }

    let rest = id
        .strip_prefix("UTC")
        .or_else(|| id.strip_prefix("GMT"))
        .unwrap_or(id);
    if rest.is_empty() && rest.len() != id.len() {
        return fixed_offset(1, 0, 0);
    }

    let (sign, digits) = match rest.split_at_checked(1)? {
        ("+", digits) => (1, digits),
        ("-", digits) => (-1, digits),
        _ => return None,
    };
    if !digits.bytes().all(|b| b.is_ascii_digit() || b == b':') {
        return None;
    }

    let (hours, minutes) = match digits.split_once(':') {
        Some((h, m)) if h.len() == 2 && m.len() == 2 => (h, m),
        Some(_) => return None,
        None if digits.len() <= 2 => (digits, "0"),
        None if digits.len() == 4 => digits.split_at(2),
        None => return None,
    };
    fixed_offset(sign, hours.parse().ok()?, minutes.parse().ok()?)
}

fn fixed_offset(sign: i32, hours: i32, minutes: i32) -> Option<FixedOffset> {
    if hours > MAX_OFFSET_HOURS || minutes >= 60 {
        return None;
    }
    if hours * 60 + minutes > MAX_OFFSET_HOURS * 60 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
