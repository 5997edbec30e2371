//! Desktop input via macroquad

use glam::Vec2;
use macroquad::input::{
    KeyCode, MouseButton, get_char_pressed, get_keys_pressed, is_key_down, is_mouse_button_pressed,
    mouse_position,
};

use super::{HeldKeys, InputEvent, Key, frame_events};

fn map_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Space => Key::Space,
        KeyCode::Enter | KeyCode::KpEnter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Escape => Key::Escape,
        _ => Key::Other,
    }
}

/// Drain this frame's input in dispatch order (see [`frame_events`])
pub fn poll_events() -> Vec<InputEvent> {
    let any_button = [MouseButton::Left, MouseButton::Right, MouseButton::Middle]
        .into_iter()
        .any(is_mouse_button_pressed);
    let pointer = any_button.then(|| {
        let (x, y) = mouse_position();
        Vec2::new(x, y)
    });

    let keys: Vec<Key> = get_keys_pressed().into_iter().map(map_key).collect();
    let chars = std::iter::from_fn(get_char_pressed);

    frame_events(pointer, keys, chars)
}

pub fn held_keys() -> HeldKeys {
    HeldKeys {
        left: is_key_down(KeyCode::Left),
        right: is_key_down(KeyCode::Right),
        up: is_key_down(KeyCode::Up),
        down: is_key_down(KeyCode::Down),
    }
}
