//! Segment display model for the Zulu face
//!
//! This crate provides:
//! - `SegmentScreen`, a ten-position character LCD buffer implementing
//!   `DisplaySink`, with indicators, colon and tick animation state
//! - `SimWatch`, a host that pairs a software clock with the screen so faces
//!   can be driven without hardware
//!
//! # Layout
//!
//! ```text
//! position  0 1 │ 2 3 │ 4 5 : 6 7 │ 8 9
//!           label│ day │ hour: min │ sec
//! ```

#![no_std]

pub mod screen;
pub mod sim;

// Re-export key types
pub use screen::{SegmentError, SegmentScreen, SEGMENT_POSITIONS};
pub use sim::SimWatch;
