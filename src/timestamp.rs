use crate::{
    epoch::{NANOS_PER_MILLI, julian_day_to_millis, millis_to_julian_day},
    error::{Int96Error, Int96Result},
};

/// Size of an encoded INT96 timestamp in bytes.
pub const INT96_LEN: usize = 12;

/// Parquet INT96 timestamp.
///
/// The encoded form is 12 bytes: the first 8 bytes hold the nanoseconds
/// elapsed since midnight, the last 4 bytes hold the Julian day number. Both
/// groups are stored little-endian.
///
/// Use [`from_bytes()`](Self::from_bytes()) to parse the encoded form and
/// [`timestamp_millis()`](Self::timestamp_millis()) to convert it into
/// milliseconds since the Unix epoch. The reverse direction is covered by
/// [`from_millis()`](Self::from_millis()) and
/// [`to_bytes()`](Self::to_bytes()).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Int96Timestamp {
    // Field order matters for the derived `Ord`: day first, then time of day.
    julian_day: i32,
    nanos_of_day: i64,
}

impl std::fmt::Display for Int96Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Int96Timestamp {{ julian_day: {}, nanos_of_day: {} }}",
            self.julian_day, self.nanos_of_day
        )
    }
}

impl TryFrom<&[u8]> for Int96Timestamp {
    type Error = Int96Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(value)
    }
}

impl From<Int96Timestamp> for [u8; INT96_LEN] {
    fn from(ts: Int96Timestamp) -> Self {
        ts.to_bytes()
    }
}

impl Int96Timestamp {
    /// Creates a timestamp from a Julian day and nanoseconds since midnight of
    /// that day.
    pub fn from_parts(julian_day: i32, nanos_of_day: i64) -> Self {
        Self {
            julian_day,
            nanos_of_day,
        }
    }

    /// Parses the 12-byte encoded form.
    ///
    /// Each little-endian group is reversed first and then read
    /// most-significant-byte first.
    pub fn from_bytes(buf: &[u8]) -> Int96Result<Self> {
        if buf.len() != INT96_LEN {
            return Err(Int96Error::MalformedTimestamp(buf.len()));
        }

        let mut nanos = [0u8; 8];
        nanos.copy_from_slice(&buf[..8]);
        nanos.reverse();

        let mut day = [0u8; 4];
        day.copy_from_slice(&buf[8..]);
        day.reverse();

        Ok(Self::from_parts(
            i32::from_be_bytes(day),
            i64::from_be_bytes(nanos),
        ))
    }

    /// Creates a timestamp from milliseconds since the Unix epoch.
    ///
    /// Instants before the epoch land on an earlier Julian day with a
    /// non-negative time of day. Fails if the day does not fit into 32 bits.
    pub fn from_millis(unix_millis: i64) -> Int96Result<Self> {
        let (day, millis_of_day) = millis_to_julian_day(unix_millis);
        let julian_day =
            i32::try_from(day).map_err(|_| Int96Error::OutOfRangeTimestamp(unix_millis))?;
        Ok(Self::from_parts(julian_day, millis_of_day * NANOS_PER_MILLI))
    }

    /// Returns the 12-byte encoded form.
    pub fn to_bytes(&self) -> [u8; INT96_LEN] {
        let mut nanos = self.nanos_of_day.to_be_bytes();
        nanos.reverse();

        let mut day = self.julian_day.to_be_bytes();
        day.reverse();

        let mut out = [0u8; INT96_LEN];
        out[..8].copy_from_slice(&nanos);
        out[8..].copy_from_slice(&day);
        out
    }

    /// Julian day number.
    pub fn julian_day(&self) -> i32 {
        self.julian_day
    }

    /// Nanoseconds since midnight of the Julian day.
    pub fn nanos_of_day(&self) -> i64 {
        self.nanos_of_day
    }

    /// Unix timestamp in milliseconds.
    ///
    /// Sub-millisecond precision is truncated toward zero, not rounded.
    pub fn timestamp_millis(&self) -> i64 {
        julian_day_to_millis(self.julian_day) + self.nanos_of_day / NANOS_PER_MILLI
    }
}

/// Decodes a 12-byte INT96 value into milliseconds since the Unix epoch.
pub fn decode(buf: &[u8]) -> Int96Result<i64> {
    Int96Timestamp::from_bytes(buf).map(|ts| ts.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes_reverses_each_group() {
        let buf = [
            0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01, // nanos of day
            0x0c, 0x0b, 0x0a, 0x09, // julian day
        ];
        let ts = Int96Timestamp::from_bytes(&buf).unwrap();
        assert_eq!(ts.nanos_of_day(), 0x0102_0304_0506_0708);
        assert_eq!(ts.julian_day(), 0x090a_0b0c);
        assert_eq!(ts.to_bytes(), buf);
    }

    #[test]
    fn sign_bits_are_kept() {
        let buf = [0xff; INT96_LEN];
        let ts = Int96Timestamp::from_bytes(&buf).unwrap();
        assert_eq!(ts.nanos_of_day(), -1);
        assert_eq!(ts.julian_day(), -1);

        // -1 ns truncates toward zero, so only the day contributes.
        assert_eq!(ts.timestamp_millis(), (-1 - 2_440_588) * 86_400_000);
    }

    #[test]
    fn wrong_length_is_rejected() {
        for len in [0, 1, 8, 11, 13, 24] {
            let buf = vec![0u8; len];
            assert_eq!(
                Int96Timestamp::from_bytes(&buf),
                Err(Int96Error::MalformedTimestamp(len))
            );
            assert_eq!(decode(&buf), Err(Int96Error::MalformedTimestamp(len)));
        }
    }

    #[test]
    fn from_millis_before_epoch() {
        let ts = Int96Timestamp::from_millis(-1).unwrap();
        assert_eq!(ts.julian_day(), 2_440_587);
        assert_eq!(ts.nanos_of_day(), 86_399_999_000_000);
        assert_eq!(ts.timestamp_millis(), -1);
    }

    #[test]
    fn from_millis_out_of_range() {
        assert_eq!(
            Int96Timestamp::from_millis(i64::MAX),
            Err(Int96Error::OutOfRangeTimestamp(i64::MAX))
        );
        assert_eq!(
            Int96Timestamp::from_millis(i64::MIN),
            Err(Int96Error::OutOfRangeTimestamp(i64::MIN))
        );
    }

    #[test]
    fn ordering_follows_time() {
        let t1 = Int96Timestamp::from_parts(2_440_588, 86_399_999_999_999);
        let t2 = Int96Timestamp::from_parts(2_440_589, 0);
        assert!(t1 < t2);
        assert!(t1.timestamp_millis() < t2.timestamp_millis());
    }

    #[test]
    fn display() {
        let ts = Int96Timestamp::from_parts(2_440_588, 42);
        assert_eq!(
            ts.to_string(),
            "Int96Timestamp { julian_day: 2440588, nanos_of_day: 42 }"
        );
    }
}
