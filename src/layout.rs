//! Screen-space hit regions shared by input handling and drawing

use glam::Vec2;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Axis-aligned rectangle in screen pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Half-open containment: the right and bottom edges are outside
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x < self.x + self.w && point.y >= self.y && point.y < self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// Menu start button
pub const START_BUTTON: Rect = Rect::new(SCREEN_WIDTH / 2.0 - 100.0, SCREEN_HEIGHT / 2.0 + 50.0, 200.0, 60.0);

/// Close button shared by the slideshow and notes screens
pub const CLOSE_BUTTON: Rect = Rect::new(SCREEN_WIDTH - 60.0, 10.0, 50.0, 50.0);

/// Quiz answer slot `index` (0..4)
pub const fn answer_slot(index: usize) -> Rect {
    Rect::new(SCREEN_WIDTH / 2.0 - 300.0, 300.0 + index as f32 * 70.0, 600.0, 50.0)
}

pub const SLIDE_PREV_BUTTON: Rect = Rect::new(50.0, SCREEN_HEIGHT - 80.0, 150.0, 60.0);
pub const SLIDE_NEXT_BUTTON: Rect = Rect::new(SCREEN_WIDTH - 200.0, SCREEN_HEIGHT - 80.0, 150.0, 60.0);

pub const NOTES_AREA: Rect = Rect::new(50.0, 90.0, SCREEN_WIDTH - 120.0, SCREEN_HEIGHT - 300.0);
pub const NOTES_INPUT: Rect = Rect::new(50.0, SCREEN_HEIGHT - 180.0, SCREEN_WIDTH - 100.0, 100.0);
pub const NOTES_ADD_BUTTON: Rect = Rect::new(SCREEN_WIDTH - 200.0, SCREEN_HEIGHT - 70.0, 150.0, 50.0);
pub const NOTES_SCROLL_UP: Rect = Rect::new(SCREEN_WIDTH - 60.0, 100.0, 40.0, 40.0);
pub const NOTES_SCROLL_DOWN: Rect = Rect::new(SCREEN_WIDTH - 60.0, SCREEN_HEIGHT - 250.0, 40.0, 40.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_half_open() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert!(rect.contains(Vec2::new(10.0, 20.0)));
        assert!(rect.contains(Vec2::new(39.9, 59.9)));
        assert!(!rect.contains(Vec2::new(40.0, 30.0)));
        assert!(!rect.contains(Vec2::new(20.0, 60.0)));
    }

    #[test]
    fn test_answer_slots_do_not_overlap() {
        for i in 0..3 {
            let a = answer_slot(i);
            let b = answer_slot(i + 1);
            assert!(a.y + a.h <= b.y);
        }
    }

    #[test]
    fn test_fixed_regions_match_canvas() {
        assert_eq!(START_BUTTON, Rect::new(412.0, 434.0, 200.0, 60.0));
        assert_eq!(CLOSE_BUTTON, Rect::new(964.0, 10.0, 50.0, 50.0));
        assert_eq!(NOTES_SCROLL_DOWN, Rect::new(964.0, 518.0, 40.0, 40.0));
    }
}
