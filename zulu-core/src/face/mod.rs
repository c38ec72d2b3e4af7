//! Watch face lifecycle
//!
//! Every face implements the same four callbacks. The host keeps one state
//! slot per face, typed by [`WatchFace::State`], and calls:
//!
//! 1. `setup` once per boot (and again on wake), to populate the slot
//! 2. `activate` each time the face comes to the foreground
//! 3. `face_loop` for every event while in the foreground
//! 4. `resign` when the user moves to another face
//!
//! Callbacks run one at a time on the dispatcher; none of them block.

pub mod events;
pub mod redraw;
pub mod zulu;

pub use events::{EventType, FaceEvent};
pub use redraw::RedrawScope;
pub use zulu::{ZuluClockFace, ZuluState};

use crate::config::Settings;
use crate::traits::FaceHost;

/// Lifecycle every watch face implements
pub trait WatchFace {
    /// Per-slot state kept by the host between callbacks
    type State;

    /// Populate `slot` if it is empty
    ///
    /// Called more than once over the life of the watch; an occupied slot
    /// must be left untouched.
    fn setup(&self, settings: &Settings, watch_face_index: u8, slot: &mut Option<Self::State>);

    /// Prepare the display when the face comes to the foreground
    fn activate<H: FaceHost>(&self, settings: &mut Settings, state: &mut Self::State, host: &mut H);

    /// Handle one event
    ///
    /// Returns `true` when the host needs no further repaint.
    fn face_loop<H: FaceHost>(
        &self,
        event: FaceEvent,
        settings: &mut Settings,
        state: &mut Self::State,
        host: &mut H,
    ) -> bool;

    /// Undo any shared-state changes before another face takes over
    fn resign<H: FaceHost>(&self, settings: &mut Settings, state: &mut Self::State, host: &mut H);
}
