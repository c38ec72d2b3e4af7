//! Calendar fields

use super::unix::naive_date;

/// First year representable by the watch RTC
pub const REFERENCE_YEAR: u16 = 2020;

/// Last year representable by the watch RTC (6-bit year offset)
pub const MAX_YEAR: u16 = REFERENCE_YEAR + 63;

/// Reasons a set of calendar fields can be rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DateTimeError {
    /// Year outside 2020..=2083
    InvalidYear,
    /// Month outside 1..=12
    InvalidMonth,
    /// Day is zero or past the end of the month
    InvalidDay,
    /// Hour outside 0..=23
    InvalidHour,
    /// Minute outside 0..=59
    InvalidMinute,
    /// Second outside 0..=59
    InvalidSecond,
}

/// Wall-clock date and time, decomposed into fields
///
/// Fields are declared most significant first, so the derived ordering is
/// chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateTime {
    /// Full Gregorian year (e.g. 2024)
    pub year: u16,
    /// Month (1-12)
    pub month: u8,
    /// Day of month (1-31)
    pub day: u8,
    /// Hour (0-23)
    pub hour: u8,
    /// Minute (0-59)
    pub minute: u8,
    /// Second (0-59)
    pub second: u8,
}

impl Default for DateTime {
    fn default() -> Self {
        Self {
            year: REFERENCE_YEAR,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0,
        }
    }
}

impl DateTime {
    /// Create a validated date and time
    pub fn new(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, DateTimeError> {
        let dt = Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        };
        dt.validate()?;
        Ok(dt)
    }

    /// Check that every field is in range for the watch RTC
    pub fn validate(&self) -> Result<(), DateTimeError> {
        if !(REFERENCE_YEAR..=MAX_YEAR).contains(&self.year) {
            return Err(DateTimeError::InvalidYear);
        }
        if !(1..=12).contains(&self.month) {
            return Err(DateTimeError::InvalidMonth);
        }
        if naive_date(self).is_none() {
            return Err(DateTimeError::InvalidDay);
        }
        if self.hour > 23 {
            return Err(DateTimeError::InvalidHour);
        }
        if self.minute > 59 {
            return Err(DateTimeError::InvalidMinute);
        }
        if self.second > 59 {
            return Err(DateTimeError::InvalidSecond);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_datetime() {
        let dt = DateTime::new(2024, 2, 29, 23, 59, 59).unwrap();
        assert_eq!((dt.month, dt.day), (2, 29));
    }

    #[test]
    fn test_rejects_out_of_range_fields() {
        assert_eq!(DateTime::new(2019, 1, 1, 0, 0, 0), Err(DateTimeError::InvalidYear));
        assert_eq!(DateTime::new(2084, 1, 1, 0, 0, 0), Err(DateTimeError::InvalidYear));
        assert_eq!(DateTime::new(2024, 13, 1, 0, 0, 0), Err(DateTimeError::InvalidMonth));
        assert_eq!(DateTime::new(2023, 2, 29, 0, 0, 0), Err(DateTimeError::InvalidDay));
        assert_eq!(DateTime::new(2024, 4, 0, 0, 0, 0), Err(DateTimeError::InvalidDay));
        assert_eq!(DateTime::new(2024, 4, 1, 24, 0, 0), Err(DateTimeError::InvalidHour));
        assert_eq!(DateTime::new(2024, 4, 1, 0, 60, 0), Err(DateTimeError::InvalidMinute));
        assert_eq!(DateTime::new(2024, 4, 1, 0, 0, 60), Err(DateTimeError::InvalidSecond));
    }

    #[test]
    fn test_leap_days() {
        assert!(DateTime::new(2024, 2, 29, 0, 0, 0).is_ok());
        assert_eq!(DateTime::new(2023, 2, 29, 0, 0, 0), Err(DateTimeError::InvalidDay));
        assert_eq!(DateTime::new(2024, 4, 31, 0, 0, 0), Err(DateTimeError::InvalidDay));
        assert!(DateTime::new(2024, 12, 31, 0, 0, 0).is_ok());
    }

    #[test]
    fn test_ordering_is_chronological() {
        let earlier = DateTime::new(2024, 1, 31, 23, 59, 59).unwrap();
        let later = DateTime::new(2024, 2, 1, 0, 0, 0).unwrap();
        assert!(earlier < later);
    }
}
