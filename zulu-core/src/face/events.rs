//! Events dispatched to the active face

/// Kinds of event the host dispatcher delivers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventType {
    /// No event
    None,
    /// Face just became the foreground face
    Activate,
    /// Once-per-second (or faster, if requested) tick
    Tick,
    /// Once-per-minute update while in low-energy mode
    LowEnergyUpdate,

    // Light button
    LightButtonDown,
    LightButtonUp,
    LightLongPress,
    LightLongUp,

    // Mode button
    ModeButtonDown,
    ModeButtonUp,
    ModeLongPress,
    ModeLongUp,

    // Alarm button
    AlarmButtonDown,
    AlarmButtonUp,
    AlarmLongPress,
    AlarmLongUp,

    /// Face has been idle for the configured timeout
    Timeout,
}

impl EventType {
    /// Events that carry a new time to render
    pub fn is_time_update(&self) -> bool {
        matches!(
            self,
            EventType::Activate | EventType::Tick | EventType::LowEnergyUpdate
        )
    }
}

/// An event as delivered by the host dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceEvent {
    pub event_type: EventType,
}

impl FaceEvent {
    pub const fn new(event_type: EventType) -> Self {
        Self { event_type }
    }

    pub fn is_low_energy(&self) -> bool {
        self.event_type == EventType::LowEnergyUpdate
    }
}
