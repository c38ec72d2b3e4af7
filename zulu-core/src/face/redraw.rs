//! Redraw-scope decision and line formatting
//!
//! Rewriting LCD segments costs power, so each time update only touches the
//! characters whose fields changed since the last render.

use core::fmt::Write;

use heapless::String;

use crate::datetime::{DateTime, EncodedDateTime};

/// Characters on the main line
pub const LINE_LEN: usize = 10;

/// First position of the minute digits
pub const MINUTES_POSITION: u8 = 6;

/// First position of the second digits
pub const SECONDS_POSITION: u8 = 8;

/// Label shown in the weekday slot
pub const UTC_LABEL: &str = "UT";

/// How much of the line a time update has to rewrite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RedrawScope {
    /// Only the two second digits changed
    Seconds,
    /// Minute and second digits, from position 6
    MinutesSeconds,
    /// The whole line from position 0
    Full,
}

impl RedrawScope {
    /// Pick the narrowest redraw covering every field that changed
    ///
    /// Low-energy updates always redraw the whole line since seconds are
    /// blanked in that mode.
    pub fn decide(previous: EncodedDateTime, current: EncodedDateTime, low_energy: bool) -> Self {
        if low_energy {
            RedrawScope::Full
        } else if current.same_minute(previous) {
            RedrawScope::Seconds
        } else if current.same_hour(previous) {
            RedrawScope::MinutesSeconds
        } else {
            RedrawScope::Full
        }
    }
}

/// Minute and second digits, e.g. "3045"
///
/// The buffer holds exactly two two-digit fields; anything wider is cut.
pub fn format_minutes_seconds(dt: &DateTime) -> String<4> {
    let mut buf = String::new();
    let written = write!(buf, "{:02}{:02}", dt.minute, dt.second);
    debug_assert!(written.is_ok(), "minute/second out of range: {:?}", dt);
    buf
}

/// Full line: label, day, hour, minute and seconds
///
/// Day and hour are right-aligned in two characters. In low-energy mode the
/// seconds are left blank. The line is sized for validated fields; anything
/// wider is cut.
pub fn format_full_line(dt: &DateTime, low_energy: bool) -> String<LINE_LEN> {
    let mut buf = String::new();
    let written = if low_energy {
        write!(
            buf,
            "{}{:2}{:2}{:02}  ",
            UTC_LABEL, dt.day, dt.hour, dt.minute
        )
    } else {
        write!(
            buf,
            "{}{:2}{:2}{:02}{:02}",
            UTC_LABEL, dt.day, dt.hour, dt.minute, dt.second
        )
    };
    debug_assert!(written.is_ok(), "time fields out of range: {:?}", dt);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(day: u8, hour: u8, minute: u8, second: u8) -> DateTime {
        DateTime::new(2024, 5, day, hour, minute, second).unwrap()
    }

    fn encoded(day: u8, hour: u8, minute: u8, second: u8) -> EncodedDateTime {
        EncodedDateTime::encode(&dt(day, hour, minute, second))
    }

    #[test]
    fn test_full_line() {
        assert_eq!(format_full_line(&dt(15, 14, 30, 45), false).as_str(), "UT15143045");
    }

    #[test]
    fn test_full_line_low_energy_blanks_seconds() {
        assert_eq!(format_full_line(&dt(15, 14, 30, 45), true).as_str(), "UT151430  ");
    }

    #[test]
    fn test_full_line_pads_single_digits() {
        assert_eq!(format_full_line(&dt(5, 9, 3, 7), false).as_str(), "UT 5 90307");
        assert_eq!(format_full_line(&dt(1, 0, 0, 0), false).as_str(), "UT 1 00000");
    }

    #[test]
    fn test_minutes_seconds() {
        assert_eq!(format_minutes_seconds(&dt(15, 14, 30, 45)).as_str(), "3045");
        assert_eq!(format_minutes_seconds(&dt(15, 14, 3, 5)).as_str(), "0305");
    }

    #[test]
    fn test_decide_seconds_only() {
        let scope = RedrawScope::decide(encoded(15, 14, 30, 44), encoded(15, 14, 30, 45), false);
        assert_eq!(scope, RedrawScope::Seconds);
    }

    #[test]
    fn test_decide_minutes() {
        let scope = RedrawScope::decide(encoded(15, 14, 30, 59), encoded(15, 14, 31, 0), false);
        assert_eq!(scope, RedrawScope::MinutesSeconds);
    }

    #[test]
    fn test_decide_full_on_hour_or_day() {
        let scope = RedrawScope::decide(encoded(15, 14, 59, 59), encoded(15, 15, 0, 0), false);
        assert_eq!(scope, RedrawScope::Full);

        let scope = RedrawScope::decide(encoded(15, 14, 30, 0), encoded(16, 14, 30, 0), false);
        assert_eq!(scope, RedrawScope::Full);
    }

    #[test]
    fn test_decide_full_after_sentinel() {
        let scope = RedrawScope::decide(EncodedDateTime::SENTINEL, encoded(15, 14, 30, 45), false);
        assert_eq!(scope, RedrawScope::Full);
    }

    #[test]
    fn test_decide_low_energy_always_full() {
        let same = encoded(15, 14, 30, 45);
        assert_eq!(RedrawScope::decide(same, same, true), RedrawScope::Full);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "minute/second out of range")]
    fn test_unvalidated_minutes_are_caught() {
        let wide = DateTime {
            minute: 100,
            ..dt(15, 14, 30, 45)
        };
        format_minutes_seconds(&wide);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "time fields out of range")]
    fn test_unvalidated_hour_is_caught() {
        let wide = DateTime {
            hour: 100,
            ..dt(15, 14, 30, 45)
        };
        format_full_line(&wide, false);
    }
}
