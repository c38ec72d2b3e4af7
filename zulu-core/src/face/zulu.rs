//! Zulu clock face
//!
//! Shows UTC regardless of the selected timezone, always in 24-hour style:
//!
//! ```text
//! position  0 1 2 3 4 5 6 7 8 9
//!           U T 1 5 1 4 3 0 4 5
//!           └┬┘ └┬┘ └┬┘ └┬┘ └┬┘
//!          label day hour min sec
//! ```
//!
//! Holding the alarm button swaps the label for the weekday.

use super::events::{EventType, FaceEvent};
use super::redraw::{
    format_full_line, format_minutes_seconds, RedrawScope, MINUTES_POSITION, SECONDS_POSITION,
    UTC_LABEL,
};
use super::WatchFace;
use crate::config::{ClockModeOverride, Settings};
use crate::datetime::{DateTime, EncodedDateTime};
use crate::traits::{DisplayExt, FaceHost, Indicator};

/// Tick animation period used in low-energy mode
pub const TICK_ANIMATION_INTERVAL_MS: u32 = 500;

/// State kept in the face's slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ZuluState {
    /// Slot this face was set up in
    pub watch_face_index: u8,
    /// User's 24-hour choice, restored on resign
    pub clock_mode: ClockModeOverride,
    /// Last rendered time; the sentinel forces a full redraw
    pub previous: EncodedDateTime,
}

impl ZuluState {
    pub fn new(watch_face_index: u8) -> Self {
        Self {
            watch_face_index,
            clock_mode: ClockModeOverride::default(),
            previous: EncodedDateTime::SENTINEL,
        }
    }
}

/// Face showing the current time in UTC
#[derive(Debug, Clone, Copy, Default)]
pub struct ZuluClockFace;

impl ZuluClockFace {
    pub const fn new() -> Self {
        Self
    }

    /// Current RTC time re-expressed in UTC
    ///
    /// The RTC tracks local time in the selected zone; going through a Unix
    /// timestamp with a zero offset on the way back yields UTC fields.
    fn utc_now<H: FaceHost>(settings: &Settings, host: &H) -> DateTime {
        let local = host.current_date_time();
        let timestamp = host.to_unix_timestamp(&local, settings.utc_offset_minutes());
        host.from_unix_timestamp(timestamp, 0)
    }

    fn render_time<H: FaceHost>(
        &self,
        event: FaceEvent,
        settings: &Settings,
        state: &mut ZuluState,
        host: &mut H,
    ) {
        let now = Self::utc_now(settings, host);
        let current = EncodedDateTime::encode(&now);
        let previous = core::mem::replace(&mut state.previous, current);
        let low_energy = event.is_low_energy();

        let scope = RedrawScope::decide(previous, current, low_energy);
        #[cfg(feature = "defmt")]
        defmt::trace!("zulu: {} redraw at {}", scope, now);

        match scope {
            RedrawScope::Seconds => host.display_digit_pair(now.second, SECONDS_POSITION),
            RedrawScope::MinutesSeconds => {
                host.display_string(&format_minutes_seconds(&now), MINUTES_POSITION)
            }
            RedrawScope::Full => {
                if low_energy && !host.is_tick_animation_running() {
                    host.start_tick_animation(TICK_ANIMATION_INTERVAL_MS);
                }
                host.display_string(&format_full_line(&now, low_energy), 0);
            }
        }
    }
}

impl WatchFace for ZuluClockFace {
    type State = ZuluState;

    fn setup(&self, _settings: &Settings, watch_face_index: u8, slot: &mut Option<ZuluState>) {
        if slot.is_none() {
            #[cfg(feature = "defmt")]
            defmt::debug!("zulu: allocating state for slot {}", watch_face_index);
            *slot = Some(ZuluState::new(watch_face_index));
        }
    }

    fn activate<H: FaceHost>(&self, settings: &mut Settings, state: &mut ZuluState, host: &mut H) {
        state.clock_mode = ClockModeOverride::engage(settings);

        if host.is_tick_animation_running() {
            host.stop_tick_animation();
        }
        if settings.clock_mode_24h {
            host.set_indicator(Indicator::H24);
        }
        host.set_colon();

        state.previous = EncodedDateTime::SENTINEL;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "zulu: activated, saved 24h mode {}",
            state.clock_mode.saved()
        );
    }

    fn face_loop<H: FaceHost>(
        &self,
        event: FaceEvent,
        settings: &mut Settings,
        state: &mut ZuluState,
        host: &mut H,
    ) -> bool {
        match event.event_type {
            event_type if event_type.is_time_update() => {
                self.render_time(event, settings, state, host);
            }
            EventType::AlarmButtonDown => {
                let today = host.current_date_time();
                let weekday = host.weekday_abbreviation(&today);
                host.display_string(weekday, 0);
            }
            EventType::AlarmButtonUp | EventType::AlarmLongUp => {
                host.display_string(UTC_LABEL, 0);
            }
            _ => return host.default_loop_handler(event, settings),
        }

        true
    }

    fn resign<H: FaceHost>(&self, settings: &mut Settings, state: &mut ZuluState, _host: &mut H) {
        state.clock_mode.release(settings);

        #[cfg(feature = "defmt")]
        defmt::debug!("zulu: resigned, 24h mode {}", settings.clock_mode_24h);
    }
}
