//! Collaborator traits
//!
//! These traits define the interface between the face logic and the host
//! watch firmware that owns the RTC, the segment display and event dispatch.

pub mod clock;
pub mod display;
pub mod host;

pub use clock::{ClockSource, SoftClock};
pub use display::{DisplayExt, DisplaySink, Indicator};
pub use host::FaceHost;
