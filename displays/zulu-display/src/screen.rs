//! Segment screen buffer
//!
//! Holds what the LCD currently shows and which positions were written
//! since the last time the buffer was marked clean.

use heapless::Vec;
use zulu_core::traits::{DisplaySink, Indicator};

/// Character positions on the main line
pub const SEGMENT_POSITIONS: usize = 10;

const BLANK: u8 = b' ';

/// Segment buffer errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SegmentError {
    /// Write extends past the last position
    OutOfRange,
    /// Character has no segment representation
    UnsupportedCharacter,
}

/// Ten-position character LCD
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentScreen {
    /// Current characters, ASCII
    chars: [u8; SEGMENT_POSITIONS],
    /// Indicator segments, one bit per `Indicator`
    indicators: u8,
    colon: bool,
    /// Tick animation period while running
    tick_animation_ms: Option<u32>,
    /// Positions written since the last `mark_clean`, one bit each
    written: u16,
}

impl Default for SegmentScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl SegmentScreen {
    /// Create a blank screen
    pub const fn new() -> Self {
        Self {
            chars: [BLANK; SEGMENT_POSITIONS],
            indicators: 0,
            colon: false,
            tick_animation_ms: None,
            written: 0,
        }
    }

    /// Write one character
    pub fn try_write_char(&mut self, character: char, position: u8) -> Result<(), SegmentError> {
        let index = position as usize;
        if index >= SEGMENT_POSITIONS {
            return Err(SegmentError::OutOfRange);
        }
        if !character.is_ascii() || character.is_ascii_control() {
            return Err(SegmentError::UnsupportedCharacter);
        }
        self.chars[index] = character as u8;
        self.written |= 1 << index;
        Ok(())
    }

    /// Write `text` starting at `position`
    ///
    /// Characters that fit are written even when the rest overflow.
    pub fn try_write_str(&mut self, text: &str, position: u8) -> Result<(), SegmentError> {
        let mut result = Ok(());
        for (offset, character) in text.chars().enumerate() {
            let target = position as usize + offset;
            if target >= SEGMENT_POSITIONS {
                return Err(SegmentError::OutOfRange);
            }
            if let Err(e) = self.try_write_char(character, target as u8) {
                // Keep the slot consistent with what the panel would show
                self.chars[target] = BLANK;
                self.written |= 1 << target;
                result = Err(e);
            }
        }
        result
    }

    /// Whole line as text
    pub fn line(&self) -> &str {
        // Only ASCII is ever stored
        core::str::from_utf8(&self.chars).unwrap_or("")
    }

    /// Character at a position
    pub fn char_at(&self, position: u8) -> Option<char> {
        self.chars.get(position as usize).map(|&c| c as char)
    }

    pub fn has_indicator(&self, indicator: Indicator) -> bool {
        self.indicators & indicator.bit() != 0
    }

    pub fn colon(&self) -> bool {
        self.colon
    }

    /// Tick animation period, if running
    pub fn tick_animation(&self) -> Option<u32> {
        self.tick_animation_ms
    }

    /// Positions written since the last `mark_clean`, ascending
    pub fn written_positions(&self) -> Vec<u8, SEGMENT_POSITIONS> {
        (0..SEGMENT_POSITIONS as u8)
            .filter(|&position| self.written & (1 << position) != 0)
            .collect()
    }

    /// Check if anything was written since the last `mark_clean`
    pub fn is_dirty(&self) -> bool {
        self.written != 0
    }

    /// Forget which positions were written
    pub fn mark_clean(&mut self) {
        self.written = 0;
    }
}

impl DisplaySink for SegmentScreen {
    fn display_string(&mut self, text: &str, position: u8) {
        // Overflow is clipped, unsupported characters show blank
        let _ = self.try_write_str(text, position);
    }

    fn display_character(&mut self, character: char, position: u8) {
        if self.try_write_char(character, position) == Err(SegmentError::UnsupportedCharacter) {
            let _ = self.try_write_char(' ', position);
        }
    }

    fn set_indicator(&mut self, indicator: Indicator) {
        self.indicators |= indicator.bit();
    }

    fn clear_indicator(&mut self, indicator: Indicator) {
        self.indicators &= !indicator.bit();
    }

    fn set_colon(&mut self) {
        self.colon = true;
    }

    fn is_tick_animation_running(&self) -> bool {
        self.tick_animation_ms.is_some()
    }

    fn start_tick_animation(&mut self, interval_ms: u32) {
        self.tick_animation_ms = Some(interval_ms);
    }

    fn stop_tick_animation(&mut self) {
        self.tick_animation_ms = None;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SegmentScreen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Screen[{} colon={} indicators={=u8:b}]",
            self.line(),
            self.colon,
            self.indicators
        );
    }
}
