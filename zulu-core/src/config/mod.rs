//! Configuration types
//!
//! Shared watch settings, the timezone offset table and the scoped 24-hour
//! mode override used by faces that force a display style.

pub mod clock_mode;
pub mod settings;
pub mod timezones;

pub use clock_mode::ClockModeOverride;
pub use settings::Settings;
pub use timezones::{timezone_offset_minutes, TIMEZONE_COUNT, TIMEZONE_OFFSETS};
