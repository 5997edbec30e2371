//! Platform abstraction layer
//!
//! Handles the boundary between the window system and the game:
//! - Discrete input events (drained once per tick)
//! - Level-triggered direction keys

pub mod native;

use glam::Vec2;

/// Keys the game distinguishes. Everything else arrives as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    /// Confirm key in exploration
    Space,
    Enter,
    Backspace,
    Escape,
    Other,
}

/// One discrete input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    /// A typed character (never a control character)
    Text(char),
    /// Any mouse button pressed at a screen position
    PointerDown(Vec2),
}

impl InputEvent {
    pub fn is_key_down(&self) -> bool {
        matches!(self, InputEvent::KeyDown(_))
    }
}

/// Direction keys currently held down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// Order one frame's raw input for dispatch: the pointer press, then typed
/// characters, then key presses.
///
/// Keys and characters arrive in separate queues, so their interleaving
/// within a frame is lost. Backspace followed by typing in one frame is
/// replayed out of order.
pub fn frame_events(
    pointer: Option<Vec2>,
    keys: impl IntoIterator<Item = Key>,
    chars: impl IntoIterator<Item = char>,
) -> Vec<InputEvent> {
    pointer
        .map(InputEvent::PointerDown)
        .into_iter()
        .chain(chars.into_iter().filter(|ch| !ch.is_control()).map(InputEvent::Text))
        .chain(keys.into_iter().map(InputEvent::KeyDown))
        .collect()
}
