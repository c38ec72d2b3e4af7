//! Clock source trait for the watch RTC

use crate::datetime::{self, DateTime};

/// Source of wall-clock time
///
/// Only [`current_date_time`](ClockSource::current_date_time) is required.
/// The conversions default to the software implementations in
/// [`crate::datetime`]; boards with hardware assistance may override them.
pub trait ClockSource {
    /// Current date and time as tracked by the RTC
    fn current_date_time(&self) -> DateTime;

    /// Convert local fields at `utc_offset_minutes` to a Unix timestamp
    fn to_unix_timestamp(&self, dt: &DateTime, utc_offset_minutes: i32) -> u32 {
        datetime::to_unix_time(dt, utc_offset_minutes)
    }

    /// Decompose a Unix timestamp into fields at `utc_offset_minutes`
    fn from_unix_timestamp(&self, timestamp: u32, utc_offset_minutes: i32) -> DateTime {
        datetime::from_unix_time(timestamp, utc_offset_minutes)
    }

    /// Two-letter weekday label for the date
    fn weekday_abbreviation(&self, dt: &DateTime) -> &'static str {
        datetime::weekday_abbreviation(dt)
    }
}

/// Software clock holding a settable date and time
///
/// Stands in for the RTC in simulation and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SoftClock {
    now: DateTime,
}

impl SoftClock {
    /// Create a clock reading `now`
    pub const fn new(now: DateTime) -> Self {
        Self { now }
    }

    /// Set the current date and time
    pub fn set(&mut self, now: DateTime) {
        self.now = now;
    }

    /// Move the clock forward, carrying into minutes, hours and days
    pub fn advance(&mut self, seconds: u32) {
        let ts = datetime::to_unix_time(&self.now, 0).saturating_add(seconds);
        self.now = datetime::from_unix_time(ts, 0);
    }
}

impl ClockSource for SoftClock {
    fn current_date_time(&self) -> DateTime {
        self.now
    }
}
