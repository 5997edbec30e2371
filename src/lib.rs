//! Sa invatam planetele - an educational solar system adventure
//!
//! Core modules:
//! - `sim`: Mode sessions and their rules (quiz, dodge, slideshow, notes)
//! - `modes`: The `Mode` capability each screen implements
//! - `controller`: Finite state machine that owns the active mode
//! - `renderer`: Draw lists and the macroquad backend
//! - `platform`: Input events and held keys
//! - `persistence`: Notes storage

pub mod controller;
pub mod error;
pub mod layout;
pub mod modes;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use controller::{GameController, GameState};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Logical canvas size (no resizing, no DPI scaling)
    pub const SCREEN_WIDTH: f32 = 1024.0;
    pub const SCREEN_HEIGHT: f32 = 768.0;

    /// Ticks per second, one per displayed frame at 60 Hz
    pub const FPS: u32 = 60;

    pub const WINDOW_TITLE: &str = "Sa invatam planetele - Aventura educationala";
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Center of the logical canvas
#[inline]
pub fn screen_center() -> Vec2 {
    Vec2::new(consts::SCREEN_WIDTH / 2.0, consts::SCREEN_HEIGHT / 2.0)
}
