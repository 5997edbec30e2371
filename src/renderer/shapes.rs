//! Composite figures built from draw primitives

use std::f32::consts::PI;

use glam::Vec2;

use super::palette::{self, Color};
use super::{Anchor, FontSize, Frame};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::layout::Rect;
use crate::sim::{Asteroid, Planet};

pub const STAR_COUNT: u32 = 100;

/// Deterministic star field; `scroll` shifts it downward with wraparound
pub fn starfield(frame: &mut Frame, scroll: u32) {
    for i in 0..STAR_COUNT {
        let x = (i * 137) % SCREEN_WIDTH as u32;
        let y = (i * 219 + scroll) % SCREEN_HEIGHT as u32;
        let size = (i % 3 + 1) as f32;
        frame.circle(Vec2::new(x as f32, y as f32), size, palette::WHITE);
    }
}

/// Elliptical arc as a polyline. Angles are in screen space (y down), so
/// `0..PI` traces the lower half.
pub fn arc(frame: &mut Frame, center: Vec2, radii: Vec2, start: f32, end: f32, thickness: f32, color: Color) {
    let span = end - start;
    let segments = ((span.abs() / PI) * 12.0).ceil().max(4.0) as u32;

    let point = |t: f32| center + Vec2::new(radii.x * t.cos(), radii.y * t.sin());

    for i in 0..segments {
        let t1 = start + span * (i as f32 / segments as f32);
        let t2 = start + span * ((i + 1) as f32 / segments as f32);
        frame.line(point(t1), point(t2), thickness, color);
    }
}

/// Smiling helmet, as seen in exploration and on the menu
pub fn astronaut(frame: &mut Frame, pos: Vec2, size: f32) {
    frame.circle(pos, size, palette::WHITE);
    frame.circle(pos + Vec2::new(-7.0, -5.0), 3.0, palette::SPACE_BLUE);
    frame.circle(pos + Vec2::new(7.0, -5.0), 3.0, palette::SPACE_BLUE);
    arc(frame, pos + Vec2::new(0.0, 4.0), Vec2::new(8.0, 6.0), 0.0, PI, 2.0, palette::SPACE_BLUE);
}

pub fn planet(frame: &mut Frame, planet: &Planet) {
    let r = planet.radius;
    frame.circle(planet.pos, r, planet.color);
    // Glow
    frame.ring(planet.pos, r + 5.0, 2.0, planet.color);

    if planet.has_smiley {
        let eye_dx = (r / 3.0).floor();
        let eye_dy = (r / 4.0).floor();
        let eye_size = (r / 8.0).floor();
        frame.circle(planet.pos + Vec2::new(-eye_dx, -eye_dy), eye_size, palette::BLACK);
        frame.circle(planet.pos + Vec2::new(eye_dx, -eye_dy), eye_size, palette::BLACK);

        let half = (r / 2.0).floor();
        let smile_center = planet.pos + Vec2::new(0.0, r / 4.0);
        arc(frame, smile_center, Vec2::splat(half), 0.0, PI, 4.0, palette::BLACK);
    }

    frame.text(
        planet.name,
        planet.pos + Vec2::new(0.0, r + 20.0),
        FontSize::Small,
        palette::WHITE,
        Anchor::Center,
    );
}

/// Filled button with a centered label
pub fn button(frame: &mut Frame, rect: Rect, fill: Color, label: &str, label_color: Color, size: FontSize) {
    frame.rect(rect, fill);
    frame.text(label, rect.center(), size, label_color, Anchor::Center);
}

/// Red close button in the top right corner
pub fn close_button(frame: &mut Frame) {
    button(
        frame,
        crate::layout::CLOSE_BUTTON,
        palette::RED,
        "X",
        palette::WHITE,
        FontSize::Medium,
    );
}

pub fn dodge_player(frame: &mut Frame, pos: Vec2, size: f32) {
    frame.circle(pos, size, palette::WHITE);
    frame.circle(pos + Vec2::new(-8.0, -5.0), 4.0, palette::SPACE_BLUE);
    frame.circle(pos + Vec2::new(8.0, -5.0), 4.0, palette::SPACE_BLUE);
}

pub fn asteroid(frame: &mut Frame, asteroid: &Asteroid) {
    frame.circle(asteroid.pos, asteroid.size, palette::ASTEROID);
    frame.ring(asteroid.pos, asteroid.size, 3.0, palette::ASTEROID_RIM);
}
