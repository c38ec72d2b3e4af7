//! Board-agnostic logic for the Zulu watch face
//!
//! This crate contains everything the face needs that does not depend on a
//! particular watch board:
//!
//! - Calendar fields, the ordered encoded timestamp and Unix-time conversion
//! - Collaborator traits (clock source, display sink, face host)
//! - Shared settings and the timezone offset table
//! - The face lifecycle and the Zulu clock face state machine

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod config;
pub mod datetime;
pub mod face;
pub mod traits;

pub use config::{ClockModeOverride, Settings};
pub use datetime::{DateTime, DateTimeError, EncodedDateTime};
pub use face::{EventType, FaceEvent, RedrawScope, WatchFace, ZuluClockFace, ZuluState};
pub use traits::{ClockSource, DisplaySink, FaceHost, Indicator};
