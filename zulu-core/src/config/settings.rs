//! Shared watch settings
//!
//! One `Settings` value is owned by the host and lent to each face callback.

use super::timezones::timezone_offset_minutes;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settings shared by every face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Settings {
    /// Render hours 0-23 instead of 1-12 with a PM indicator
    pub clock_mode_24h: bool,
    /// Index into the timezone offset table
    pub time_zone: u8,
    /// Beep on button presses
    pub button_should_sound: bool,
    /// Low-energy timeout choice, interpreted by the host scheduler
    pub le_interval: u8,
    /// Face inactivity timeout choice, interpreted by the host scheduler
    pub to_interval: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            clock_mode_24h: false,
            time_zone: 0,
            button_should_sound: true,
            le_interval: 1,
            to_interval: 0,
        }
    }
}

impl Settings {
    /// UTC offset of the selected timezone
    ///
    /// An index past the end of the table resolves to UTC.
    pub fn utc_offset_minutes(&self) -> i32 {
        timezone_offset_minutes(self.time_zone).unwrap_or(0) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(!settings.clock_mode_24h);
        assert_eq!(settings.utc_offset_minutes(), 0);
    }

    #[test]
    fn test_selected_offset() {
        let settings = Settings {
            time_zone: 33,
            ..Settings::default()
        };
        assert_eq!(settings.utc_offset_minutes(), -300);
    }

    #[test]
    fn test_invalid_timezone_is_utc() {
        let settings = Settings {
            time_zone: 200,
            ..Settings::default()
        };
        assert_eq!(settings.utc_offset_minutes(), 0);
    }
}
