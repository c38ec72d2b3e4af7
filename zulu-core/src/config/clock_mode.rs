//! Scoped override of the shared 24-hour flag
//!
//! A face that always renders in 24-hour style engages the override when it
//! becomes active and releases it when it resigns, putting back whatever the
//! user had selected.

use super::settings::Settings;

/// Saved 24-hour flag from before a face forced 24-hour mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockModeOverride {
    saved: bool,
}

impl ClockModeOverride {
    /// Save the current flag and force 24-hour mode
    pub fn engage(settings: &mut Settings) -> Self {
        let saved = settings.clock_mode_24h;
        settings.clock_mode_24h = true;
        Self { saved }
    }

    /// Flag value that will be restored
    pub fn saved(&self) -> bool {
        self.saved
    }

    /// Put the saved flag back
    pub fn release(self, settings: &mut Settings) {
        settings.clock_mode_24h = self.saved;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engage_and_release() {
        for user_choice in [false, true] {
            let mut settings = Settings {
                clock_mode_24h: user_choice,
                ..Settings::default()
            };
            let guard = ClockModeOverride::engage(&mut settings);
            assert!(settings.clock_mode_24h);
            assert_eq!(guard.saved(), user_choice);

            guard.release(&mut settings);
            assert_eq!(settings.clock_mode_24h, user_choice);
        }
    }
}
