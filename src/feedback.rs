//! Haptic feedback cues and sinks.
//!
//! The game core names the moments worth feeling; what a cue does (a
//! vibration, a terminal bell, nothing) is up to the sink the host injects.

/// Named feedback moments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HapticCue {
    HookDropped,
    FishCaught,
    TimerWarning,
    GameOver,
    ButtonTap,
}

impl HapticCue {
    /// Rough strength, 0 (subtle) to 2 (strong).
    pub fn intensity(&self) -> u8 {
        match self {
            Self::ButtonTap | Self::HookDropped => 0,
            Self::TimerWarning => 1,
            Self::FishCaught | Self::GameOver => 2,
        }
    }
}

/// Receives feedback cues.
pub trait HapticSink {
    fn play(&mut self, cue: HapticCue);
}

impl<F: FnMut(HapticCue)> HapticSink for F {
    fn play(&mut self, cue: HapticCue) {
        self(cue)
    }
}

/// Discards every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHaptics;

impl HapticSink for NoHaptics {
    fn play(&mut self, _cue: HapticCue) {}
}

/// Forwards cues only while vibration is enabled in settings.
#[derive(Debug, Clone)]
pub struct GatedHaptics<S> {
    inner: S,
    enabled: bool,
}

impl<S: HapticSink> GatedHaptics<S> {
    pub fn new(inner: S, enabled: bool) -> Self {
        Self { inner, enabled }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl<S: HapticSink> HapticSink for GatedHaptics<S> {
    fn play(&mut self, cue: HapticCue) {
        if self.enabled {
            self.inner.play(cue);
        }
    }
}
