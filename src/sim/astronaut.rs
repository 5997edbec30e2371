//! The player's astronaut in exploration

use glam::Vec2;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::platform::HeldKeys;

pub const ASTRONAUT_SIZE: f32 = 20.0;
pub const ASTRONAUT_SPEED: f32 = 5.0;

#[derive(Debug, Clone)]
pub struct Astronaut {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
}

impl Astronaut {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: ASTRONAUT_SIZE,
            speed: ASTRONAUT_SPEED,
        }
    }

    /// Move one step per held direction and stay on screen
    pub fn update(&mut self, held: HeldKeys) {
        if held.left {
            self.pos.x -= self.speed;
        }
        if held.right {
            self.pos.x += self.speed;
        }
        if held.up {
            self.pos.y -= self.speed;
        }
        if held.down {
            self.pos.y += self.speed;
        }

        self.pos.x = self.pos.x.clamp(self.size, SCREEN_WIDTH - self.size);
        self.pos.y = self.pos.y.clamp(self.size, SCREEN_HEIGHT - self.size);
    }
}

impl Default for Astronaut {
    fn default() -> Self {
        let center = crate::screen_center();
        Self::new(center.x, center.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_screen_center() {
        let astronaut = Astronaut::default();
        assert_eq!(astronaut.pos, Vec2::new(512.0, 384.0));
    }

    #[test]
    fn test_diagonal_move() {
        let mut astronaut = Astronaut::default();
        astronaut.update(HeldKeys {
            right: true,
            up: true,
            ..Default::default()
        });
        assert_eq!(astronaut.pos, Vec2::new(517.0, 379.0));
    }

    #[test]
    fn test_clamped_to_screen() {
        let mut astronaut = Astronaut::new(21.0, SCREEN_HEIGHT - 21.0);
        let held = HeldKeys {
            left: true,
            down: true,
            ..Default::default()
        };
        for _ in 0..10 {
            astronaut.update(held);
        }
        assert_eq!(astronaut.pos, Vec2::new(ASTRONAUT_SIZE, SCREEN_HEIGHT - ASTRONAUT_SIZE));
    }
}
