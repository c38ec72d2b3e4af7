//! Simulated watch host
//!
//! Pairs a software clock with a segment screen and stands in for the host
//! firmware's dispatcher, so a face can be driven tick by tick.

use zulu_core::config::Settings;
use zulu_core::datetime::DateTime;
use zulu_core::face::{EventType, FaceEvent};
use zulu_core::traits::{ClockSource, DisplaySink, FaceHost, Indicator, SoftClock};

use crate::screen::SegmentScreen;

/// Software clock plus segment screen
#[derive(Debug, Clone, Default)]
pub struct SimWatch {
    pub clock: SoftClock,
    pub screen: SegmentScreen,
    /// Most recent event handed to the default handler
    last_unhandled: Option<EventType>,
}

impl SimWatch {
    /// Create a watch whose RTC reads `now`
    pub fn new(now: DateTime) -> Self {
        Self {
            clock: SoftClock::new(now),
            screen: SegmentScreen::new(),
            last_unhandled: None,
        }
    }

    /// Advance the RTC by whole seconds
    pub fn advance(&mut self, seconds: u32) {
        self.clock.advance(seconds);
    }

    /// Most recent event the face left to the default handler
    pub fn last_unhandled(&self) -> Option<EventType> {
        self.last_unhandled
    }
}

impl ClockSource for SimWatch {
    fn current_date_time(&self) -> DateTime {
        self.clock.current_date_time()
    }
}

impl DisplaySink for SimWatch {
    fn display_string(&mut self, text: &str, position: u8) {
        self.screen.display_string(text, position);
    }

    fn display_character(&mut self, character: char, position: u8) {
        self.screen.display_character(character, position);
    }

    fn set_indicator(&mut self, indicator: Indicator) {
        self.screen.set_indicator(indicator);
    }

    fn clear_indicator(&mut self, indicator: Indicator) {
        self.screen.clear_indicator(indicator);
    }

    fn set_colon(&mut self) {
        self.screen.set_colon();
    }

    fn is_tick_animation_running(&self) -> bool {
        self.screen.is_tick_animation_running()
    }

    fn start_tick_animation(&mut self, interval_ms: u32) {
        self.screen.start_tick_animation(interval_ms);
    }

    fn stop_tick_animation(&mut self) {
        self.screen.stop_tick_animation();
    }
}

impl FaceHost for SimWatch {
    fn default_loop_handler(&mut self, event: FaceEvent, _settings: &mut Settings) -> bool {
        self.last_unhandled = Some(event.event_type);
        true
    }
}
