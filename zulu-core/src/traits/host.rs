//! Host firmware seam for watch faces

use super::{ClockSource, DisplaySink};
use crate::config::Settings;
use crate::face::FaceEvent;

/// Everything a face borrows from the host while handling a callback
///
/// The host owns the RTC and the display and provides the fallback handler
/// for events a face does not consume.
pub trait FaceHost: ClockSource + DisplaySink {
    /// Default handling for events a face ignores
    ///
    /// The return value is handed back to the dispatcher unchanged.
    fn default_loop_handler(&mut self, event: FaceEvent, settings: &mut Settings) -> bool;
}
