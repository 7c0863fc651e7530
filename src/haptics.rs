//! Haptic feedback sink
//!
//! Engines fire events and never wait for an answer. The platform shell
//! plugs a backend into [`HapticsService`]; when haptics are disabled every
//! call is dropped.

use std::cell::Cell;

/// Haptic feedback types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HapticEvent {
    /// Light tap - UI interactions, placing stones
    Tap,
    /// Medium impact - reaction game jump
    Jump,
    /// Obstacle passed
    Score,
    /// Heavy impact - player crashed
    Collision,
    /// Game won
    Success,
    /// Draw or other alert
    Warning,
    /// Run ended without a new best
    GameOver,
    /// Run ended with a new best score
    NewHighScore,
}

impl HapticEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            HapticEvent::Tap => "tap",
            HapticEvent::Jump => "jump",
            HapticEvent::Score => "score",
            HapticEvent::Collision => "collision",
            HapticEvent::Success => "success",
            HapticEvent::Warning => "warning",
            HapticEvent::GameOver => "game_over",
            HapticEvent::NewHighScore => "new_high_score",
        }
    }
}

/// Fire-and-forget haptic output
pub trait HapticSink {
    fn play(&self, event: HapticEvent);
}

/// Sink that drops every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHaptics;

impl HapticSink for NullHaptics {
    fn play(&self, _event: HapticEvent) {}
}

/// Haptics manager with an enable switch and an optional platform backend
pub struct HapticsService {
    enabled: Cell<bool>,
    backend: Option<Box<dyn Fn(HapticEvent)>>,
}

impl Default for HapticsService {
    fn default() -> Self {
        Self::new(true)
    }
}

impl HapticsService {
    /// Service without a backend; events are only logged
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: Cell::new(enabled),
            backend: None,
        }
    }

    pub fn with_backend(enabled: bool, backend: impl Fn(HapticEvent) + 'static) -> Self {
        Self {
            enabled: Cell::new(enabled),
            backend: Some(Box::new(backend)),
        }
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }
}

impl HapticSink for HapticsService {
    fn play(&self, event: HapticEvent) {
        if !self.enabled.get() {
            return;
        }
        log::debug!("haptic: {}", event.as_str());
        if let Some(backend) = &self.backend {
            backend(event);
        }
    }
}
