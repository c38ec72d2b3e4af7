//! Display sink trait for the segment LCD

/// Fixed indicator segments on the watch LCD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Indicator {
    /// Radio/signal glyph
    Signal,
    /// Alarm bell
    Bell,
    /// PM marker for 12-hour mode
    Pm,
    /// 24-hour mode marker
    H24,
    /// Lap marker
    Lap,
}

impl Indicator {
    /// All indicators, in segment order
    pub const ALL: [Indicator; 5] = [
        Indicator::Signal,
        Indicator::Bell,
        Indicator::Pm,
        Indicator::H24,
        Indicator::Lap,
    ];

    /// Bit used for this indicator in an indicator mask
    pub const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Trait for the character display
///
/// Positions count characters from the left edge of the main line.
/// All operations are fire-and-forget; the display owns any failure.
pub trait DisplaySink {
    /// Write `text` starting at `position`
    fn display_string(&mut self, text: &str, position: u8);

    /// Write a single character at `position`
    fn display_character(&mut self, character: char, position: u8);

    /// Turn an indicator segment on
    fn set_indicator(&mut self, indicator: Indicator);

    /// Turn an indicator segment off
    fn clear_indicator(&mut self, indicator: Indicator);

    /// Turn the hour/minute colon on
    fn set_colon(&mut self);

    /// Whether the low-power tick animation is running
    fn is_tick_animation_running(&self) -> bool;

    /// Start the low-power tick animation with the given period
    fn start_tick_animation(&mut self, interval_ms: u32);

    /// Stop the low-power tick animation
    fn stop_tick_animation(&mut self);
}

/// Helpers built on top of [`DisplaySink`]
pub trait DisplayExt: DisplaySink {
    /// Write a value 0-99 as two digits at `position` and `position + 1`,
    /// one character at a time
    ///
    /// Positions past the end are left for the sink to clip.
    fn display_digit_pair(&mut self, value: u8, position: u8) {
        let value = value % 100;
        self.display_character(char::from(b'0' + value / 10), position);
        self.display_character(char::from(b'0' + value % 10), position.saturating_add(1));
    }
}

// Blanket implementation for all DisplaySink types
impl<T: DisplaySink + ?Sized> DisplayExt for T {}
