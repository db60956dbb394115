#![allow(dead_code)]

// Julian day number of 1970-01-01.
pub const JULIAN_EPOCH: i32 = 2_440_588;

pub const MILLIS_PER_DAY: i64 = 86_400_000;

// Builds the on-disk INT96 layout by hand: nanos of day, then Julian day, each
// written least-significant byte first.
pub fn int96_bytes(julian_day: i32, nanos_of_day: i64) -> Vec<u8> {
    let mut buf = Vec::with_capacity(12);
    for i in 0..8 {
        buf.push((nanos_of_day >> (8 * i)) as u8);
    }
    for i in 0..4 {
        buf.push((julian_day >> (8 * i)) as u8);
    }
    buf
}
