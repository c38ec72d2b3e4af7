//! Unix time conversion and weekday lookup
//!
//! Calendar arithmetic is delegated to `chrono`'s naive types; this module
//! only maps between them and the watch's field layout.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use super::fields::DateTime;

const SECONDS_PER_MINUTE: i64 = 60;

/// Two-letter weekday labels, Monday first
const WEEKDAYS: [&str; 7] = ["MO", "TU", "WE", "TH", "FR", "SA", "SU"];

/// Label shown when the fields do not name a real date
const UNKNOWN_WEEKDAY: &str = "  ";

/// Fields as a chrono date, `None` if they do not name a real date
pub(crate) fn naive_date(dt: &DateTime) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(dt.year as i32, dt.month as u32, dt.day as u32)
}

fn naive_date_time(dt: &DateTime) -> Option<NaiveDateTime> {
    naive_date(dt)?.and_hms_opt(dt.hour as u32, dt.minute as u32, dt.second as u32)
}

impl From<NaiveDateTime> for DateTime {
    fn from(naive: NaiveDateTime) -> Self {
        Self {
            year: naive.year().clamp(0, u16::MAX as i32) as u16,
            month: naive.month() as u8,
            day: naive.day() as u8,
            hour: naive.hour() as u8,
            minute: naive.minute() as u8,
            second: naive.second() as u8,
        }
    }
}

/// Convert local calendar fields at `utc_offset_minutes` to a Unix timestamp
///
/// Results before the epoch clamp to 0, as do fields that name no real
/// date or time.
pub fn to_unix_time(dt: &DateTime, utc_offset_minutes: i32) -> u32 {
    let Some(local) = naive_date_time(dt) else {
        return 0;
    };
    let utc = local.and_utc().timestamp() - utc_offset_minutes as i64 * SECONDS_PER_MINUTE;
    utc.clamp(0, u32::MAX as i64) as u32
}

/// Decompose a Unix timestamp into calendar fields at `utc_offset_minutes`
pub fn from_unix_time(timestamp: u32, utc_offset_minutes: i32) -> DateTime {
    let local = timestamp as i64 + utc_offset_minutes as i64 * SECONDS_PER_MINUTE;
    // Every u32 timestamp shifted by at most a day is in chrono's range
    chrono::DateTime::from_timestamp(local, 0)
        .map(|utc| utc.naive_utc())
        .unwrap_or_default()
        .into()
}

/// Two-letter weekday label for the date, e.g. "MO"
pub fn weekday_abbreviation(dt: &DateTime) -> &'static str {
    naive_date(dt)
        .map(|date| WEEKDAYS[date.weekday().num_days_from_monday() as usize])
        .unwrap_or(UNKNOWN_WEEKDAY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dt(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> DateTime {
        DateTime::new(year, month, day, hour, minute, second).unwrap()
    }

    #[test]
    fn test_known_timestamps() {
        assert_eq!(to_unix_time(&dt(2020, 1, 1, 0, 0, 0), 0), 1_577_836_800);
        assert_eq!(to_unix_time(&dt(2023, 6, 15, 14, 30, 45), 0), 1_686_839_445);
        assert_eq!(to_unix_time(&dt(2024, 2, 29, 23, 59, 59), 0), 1_709_251_199);
    }

    #[test]
    fn test_offset_shifts_to_utc() {
        // 14:30:45 in India (+05:30) is 09:00:45 UTC
        let ts = to_unix_time(&dt(2023, 6, 15, 14, 30, 45), 330);
        assert_eq!(from_unix_time(ts, 0), dt(2023, 6, 15, 9, 0, 45));

        // 02:00 in New York (-05:00) on New Year's Day is 07:00 UTC
        let ts = to_unix_time(&dt(2024, 1, 1, 2, 0, 0), -300);
        assert_eq!(from_unix_time(ts, 0), dt(2024, 1, 1, 7, 0, 0));
    }

    #[test]
    fn test_offset_crosses_day_boundary() {
        // 00:30 on March 1st at +01:00 is still February in UTC (leap year)
        let ts = to_unix_time(&dt(2024, 3, 1, 0, 30, 0), 60);
        assert_eq!(from_unix_time(ts, 0), dt(2024, 2, 29, 23, 30, 0));
    }

    #[test]
    fn test_before_epoch_clamps() {
        let early = DateTime {
            year: 1970,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0,
        };
        assert_eq!(to_unix_time(&early, 60), 0);
    }

    #[test]
    fn test_impossible_fields_clamp() {
        let bogus = DateTime {
            year: 2024,
            month: 2,
            day: 30,
            hour: 0,
            minute: 0,
            second: 0,
        };
        assert_eq!(to_unix_time(&bogus, 0), 0);
        assert_eq!(weekday_abbreviation(&bogus), "  ");
    }

    #[test]
    fn test_weekdays() {
        assert_eq!(weekday_abbreviation(&dt(2024, 1, 1, 0, 0, 0)), "MO");
        assert_eq!(weekday_abbreviation(&dt(2023, 6, 15, 0, 0, 0)), "TH");
        assert_eq!(weekday_abbreviation(&dt(2024, 3, 10, 0, 0, 0)), "SU");
        assert_eq!(weekday_abbreviation(&dt(2024, 2, 29, 0, 0, 0)), "TH");
    }

    proptest! {
        #[test]
        fn unix_conversion_is_reversible(
            ts in 1_577_836_800u32..3_600_000_000u32,
            offset in -720i32..=840,
        ) {
            let local = from_unix_time(ts, offset);
            prop_assert_eq!(to_unix_time(&local, offset), ts);
        }
    }
}
