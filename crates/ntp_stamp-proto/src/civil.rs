// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Proleptic Gregorian civil date/time derived from Unix seconds.
//!
//! The conversion is closed-form and loop-free: days are shifted so that the
//! year starts on March 1st (placing the leap day last), split into 400-year
//! eras of 146 097 days, and the year, month, and day are recovered from the
//! day-of-era with integer division only. The result is valid for every `i64`
//! input, including instants before 1970 and before year 1.
//!
//! ```
//! use stamp_proto::civil::CivilDateTime;
//!
//! let dt = CivilDateTime::from_unix_seconds(-86_400);
//! assert_eq!((dt.year, dt.month, dt.day), (1969, 12, 31));
//! ```

use core::fmt;

use crate::unix_time;

const SECS_PER_DAY: i64 = 86_400;
const SECS_PER_HOUR: i64 = 3_600;
const SECS_PER_MINUTE: i64 = 60;

/// Days in a 400-year Gregorian era.
const DAYS_PER_ERA: i64 = 146_097;

/// Days from 0000-03-01 to 1970-01-01.
const UNIX_EPOCH_SHIFT: i64 = 719_468;

/// How a [`CivilDateTime`] is rendered as text.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum TimestampStyle {
    /// `YYYY-MM-DDTHH:M:SS`: zero-padded except the minute.
    ///
    /// Existing consumers parse this exact shape, so it is the default.
    #[default]
    Compact,
    /// `YYYY-MM-DDTHH:MM:SS`: every field zero-padded.
    Iso8601,
}

/// A UTC calendar date and time of day.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CivilDateTime {
    /// Proleptic Gregorian year; year 0 is 1 BC.
    pub year: i64,
    /// Month of the year, `1..=12`.
    pub month: u8,
    /// Day of the month, `1..=31`.
    pub day: u8,
    /// Hour of the day, `0..=23`.
    pub hour: u8,
    /// Minute of the hour, `0..=59`.
    pub minute: u8,
    /// Second of the minute, `0..=59`. Leap seconds are not represented.
    pub second: u8,
}

/// Convert days since 1970-01-01 into `(year, month, day)`.
pub const fn civil_from_days(days_since_epoch: i64) -> (i64, u8, u8) {
    let days = days_since_epoch + UNIX_EPOCH_SHIFT;
    let era = days.div_euclid(DAYS_PER_ERA);
    let day_of_era = days - era * DAYS_PER_ERA; // [0, 146096]
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146_096) / 365; // [0, 399]
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100); // [0, 365]
    let mp = (5 * day_of_year + 2) / 153; // March = 0
    let day = day_of_year - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = year_of_era + era * 400 + if month <= 2 { 1 } else { 0 };
    (year, month as u8, day as u8)
}

impl CivilDateTime {
    /// Convert seconds since 1970-01-01T00:00:00Z.
    pub const fn from_unix_seconds(secs: i64) -> Self {
        let (year, month, day) = civil_from_days(secs.div_euclid(SECS_PER_DAY));
        let time_of_day = secs.rem_euclid(SECS_PER_DAY);
        CivilDateTime {
            year,
            month,
            day,
            hour: (time_of_day / SECS_PER_HOUR) as u8,
            minute: (time_of_day % SECS_PER_HOUR / SECS_PER_MINUTE) as u8,
            second: (time_of_day % SECS_PER_MINUTE) as u8,
        }
    }

    /// Convert raw NTP seconds with 32-bit wraparound below the Unix epoch.
    ///
    /// See [`unix_time::wrapping_unix_seconds`].
    pub const fn from_ntp_seconds(ntp_seconds: u32) -> Self {
        Self::from_unix_seconds(unix_time::wrapping_unix_seconds(ntp_seconds))
    }

    /// Render with the given style.
    pub fn display(&self, style: TimestampStyle) -> StyledDateTime {
        StyledDateTime { dt: *self, style }
    }
}

impl fmt::Display for CivilDateTime {
    /// Formats with [`TimestampStyle::Compact`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display(TimestampStyle::Compact), f)
    }
}

/// A [`CivilDateTime`] paired with a [`TimestampStyle`], returned by
/// [`CivilDateTime::display`].
#[derive(Clone, Copy, Debug)]
pub struct StyledDateTime {
    dt: CivilDateTime,
    style: TimestampStyle,
}

impl fmt::Display for StyledDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dt = &self.dt;
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:",
            dt.year, dt.month, dt.day, dt.hour
        )?;
        match self.style {
            TimestampStyle::Compact => write!(f, "{}", dt.minute)?,
            TimestampStyle::Iso8601 => write!(f, "{:02}", dt.minute)?,
        }
        write!(f, ":{:02}", dt.second)
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    fn compact(secs: i64) -> String {
        CivilDateTime::from_unix_seconds(secs).to_string()
    }

    fn iso(secs: i64) -> String {
        CivilDateTime::from_unix_seconds(secs)
            .display(TimestampStyle::Iso8601)
            .to_string()
    }

    #[test]
    fn unix_epoch() {
        assert_eq!(compact(0), "1970-01-01T00:0:00");
        assert_eq!(iso(0), "1970-01-01T00:00:00");
    }

    #[test]
    fn known_ntp_reply() {
        assert_eq!(
            CivilDateTime::from_ntp_seconds(3_887_522_660).to_string(),
            "2023-03-11T11:24:20"
        );
    }

    #[test]
    fn single_digit_minute_is_unpadded() {
        assert_eq!(compact(1_678_532_720), "2023-03-11T11:5:20");
        assert_eq!(compact(1_704_067_747), "2024-01-01T00:9:07");
    }

    #[test]
    fn iso_style_pads_minute() {
        let dt = CivilDateTime::from_unix_seconds(1_678_532_720);
        assert_eq!(
            dt.display(TimestampStyle::Iso8601).to_string(),
            "2023-03-11T11:05:20"
        );
    }

    #[test]
    fn negative_seconds_floor_toward_past() {
        assert_eq!(compact(-86_400), "1969-12-31T00:0:00");
        assert_eq!(iso(-86_400), "1969-12-31T00:00:00");
        assert_eq!(compact(-1), "1969-12-31T23:59:59");
    }

    #[test]
    fn leap_days() {
        assert_eq!(iso(951_782_400), "2000-02-29T00:00:00");
        assert_eq!(iso(951_868_800), "2000-03-01T00:00:00");
        // 2100 is not a leap year.
        assert_eq!(iso(4_107_542_400), "2100-03-01T00:00:00");
        assert_eq!(compact(951_782_400), "2000-02-29T00:0:00");
    }

    #[test]
    fn far_past_and_future() {
        assert_eq!(compact(-62_135_596_800), "0001-01-01T00:0:00");
        assert_eq!(iso(-62_167_219_200), "0000-01-01T00:00:00");
        assert_eq!(compact(253_402_300_799), "9999-12-31T23:59:59");
    }

    #[test]
    fn wrapped_ntp_zero_lands_in_2036() {
        assert_eq!(
            CivilDateTime::from_ntp_seconds(0).to_string(),
            "2036-02-07T06:28:16"
        );
    }

    #[test]
    fn extreme_inputs_do_not_overflow() {
        let max = CivilDateTime::from_unix_seconds(i64::MAX);
        assert!(max.year > 292_000_000_000);
        let min = CivilDateTime::from_unix_seconds(i64::MIN);
        assert!(min.year < -292_000_000_000);
        assert!((1..=12).contains(&min.month));
    }

    #[test]
    fn civil_from_days_epoch() {
        assert_eq!(civil_from_days(0), (1970, 1, 1));
        assert_eq!(civil_from_days(-1), (1969, 12, 31));
        assert_eq!(civil_from_days(59), (1970, 3, 1));
    }
}
