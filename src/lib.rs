//! Decoder and formatter for Parquet INT96 timestamps.
//!
//! An INT96 timestamp is 12 bytes: 8 bytes of nanoseconds since midnight
//! followed by 4 bytes of Julian day number, both little-endian. This crate
//! converts the encoded form into milliseconds since the Unix epoch and
//! renders those as `yyyy-MM-dd HH:mm:ss.SSS` in an explicitly chosen zone.
//!
//! ```
//! use int96_ts::{DisplayZone, decode, format};
//!
//! // Julian day 2440589 (1970-01-02), midnight.
//! let raw = [0, 0, 0, 0, 0, 0, 0, 0, 0x8d, 0x3d, 0x25, 0x00];
//! let millis = decode(&raw).unwrap();
//! assert_eq!(millis, 86_400_000);
//!
//! let zone: DisplayZone = "+08:00".parse().unwrap();
//! assert_eq!(format(millis, &zone).unwrap(), "1970-01-02 08:00:00.000");
//! ```
//!
//! All operations are pure functions and may be called concurrently.

pub mod epoch;
pub mod error;
pub mod format;
pub mod timestamp;
pub mod zone;

pub use {
    error::{Int96Error, Int96Result},
    format::{format, format_in},
    timestamp::{INT96_LEN, Int96Timestamp, decode},
    zone::DisplayZone,
};
