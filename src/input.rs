//! Keyboard input for the terminal host.
//!
//! A terminal has no touch screen, so a held key stands in for a finger on
//! the ice. Terminals that report key releases end the touch on release;
//! the rest only send repeated presses, so a touch also ends once no press
//! has arrived for `TOUCH_HOLD_MS`.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::core::constants::TOUCH_HOLD_MS;

/// Host-level meaning of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Up,
    Down,
    Left,
    Right,
    /// Enter: select a menu entry.
    Primary,
    /// Space: the fishing line "touch".
    Hold,
    /// Esc: back out of the current screen.
    Back,
    /// `v`: toggle vibration in settings.
    Toggle,
    /// `r`: reset stats.
    Reset,
    Quit,
    Other,
}

pub fn map_key(code: KeyCode) -> KeyInput {
    match code {
        KeyCode::Up | KeyCode::Char('k') => KeyInput::Up,
        KeyCode::Down | KeyCode::Char('j') => KeyInput::Down,
        KeyCode::Left | KeyCode::Char('h') => KeyInput::Left,
        KeyCode::Right | KeyCode::Char('l') => KeyInput::Right,
        KeyCode::Enter => KeyInput::Primary,
        KeyCode::Char(' ') => KeyInput::Hold,
        KeyCode::Esc | KeyCode::Backspace => KeyInput::Back,
        KeyCode::Char('v') | KeyCode::Char('V') => KeyInput::Toggle,
        KeyCode::Char('r') | KeyCode::Char('R') => KeyInput::Reset,
        KeyCode::Char('q') | KeyCode::Char('Q') => KeyInput::Quit,
        _ => KeyInput::Other,
    }
}

/// Whether a key event is a press (repeats count as presses).
pub fn is_press(key: &KeyEvent) -> bool {
    matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
}

/// Turns key presses and releases into touch-down / touch-up edges.
#[derive(Debug, Clone)]
pub struct TouchHold {
    held: bool,
    idle_ms: u64,
    hold_ms: u64,
    release_events: bool,
}

impl TouchHold {
    /// `release_events` is true when the terminal reports key releases.
    pub fn new(release_events: bool) -> Self {
        Self {
            held: false,
            idle_ms: 0,
            hold_ms: TOUCH_HOLD_MS,
            release_events,
        }
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Record a press. Returns true when this starts a new touch.
    pub fn press(&mut self) -> bool {
        self.idle_ms = 0;
        if self.held {
            return false;
        }
        self.held = true;
        true
    }

    /// Record a release. Returns true when a touch was in progress.
    pub fn release(&mut self) -> bool {
        let was_held = self.held;
        self.held = false;
        self.idle_ms = 0;
        was_held
    }

    /// Let `elapsed_ms` pass without a press. Returns true when the touch
    /// ends because the key stopped repeating.
    pub fn advance(&mut self, elapsed_ms: u64) -> bool {
        if !self.held || self.release_events {
            return false;
        }
        self.idle_ms = self.idle_ms.saturating_add(elapsed_ms);
        if self.idle_ms >= self.hold_ms {
            self.release()
        } else {
            false
        }
    }
}
