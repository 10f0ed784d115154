// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Conversion between NTP era-0 seconds and Unix seconds.
//!
//! NTP counts from 1900-01-01 00:00:00 UTC, Unix from 1970-01-01 00:00:00 UTC.
//! Two conversions are offered, differing only for NTP values below
//! [`EPOCH_DELTA`]:
//!
//! - [`wrapping_unix_seconds`] subtracts in 32-bit unsigned arithmetic, as
//!   small embedded clients do. A value below the delta wraps to a large
//!   positive count, which happens to land in NTP era 1 (2036-02-07 onward).
//! - [`checked_unix_seconds`] refuses such values.
//!
//! All arithmetic is integral.

/// The number of seconds from 1st January 1900 UTC to the start of the Unix epoch.
pub const EPOCH_DELTA: i64 = 2_208_988_800;

/// Subtract [`EPOCH_DELTA`] from raw NTP seconds with 32-bit wraparound.
///
/// ```
/// use stamp_proto::unix_time::wrapping_unix_seconds;
///
/// assert_eq!(wrapping_unix_seconds(3_887_522_660), 1_678_533_860);
/// // Below the delta the subtraction wraps instead of going negative.
/// assert_eq!(wrapping_unix_seconds(0), 2_085_978_496);
/// ```
pub const fn wrapping_unix_seconds(ntp_seconds: u32) -> i64 {
    ntp_seconds.wrapping_sub(EPOCH_DELTA as u32) as i64
}

/// Subtract [`EPOCH_DELTA`] from raw NTP seconds, returning `None` when the
/// result would fall before 1970-01-01.
pub const fn checked_unix_seconds(ntp_seconds: u32) -> Option<i64> {
    let secs = ntp_seconds as i64 - EPOCH_DELTA;
    if secs >= 0 { Some(secs) } else { None }
}
