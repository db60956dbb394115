/// INT96 codec error type.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Int96Error {
    /// Encoded timestamp is not exactly 12 bytes long.
    #[error("Malformed INT96 timestamp: must be 12 bytes, actual {0}")]
    MalformedTimestamp(usize),

    /// Zone identifier is neither a fixed offset nor a known IANA zone.
    #[error("Invalid timezone: {0:?}")]
    InvalidTimezone(String),

    /// Timestamp is outside of the representable calendar range.
    #[error("Out of range timestamp: {0} ms")]
    OutOfRangeTimestamp(i64),
}

/// INT96 codec result type.
pub type Int96Result<T> = Result<T, Int96Error>;
