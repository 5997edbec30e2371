//! Planets, hubs and the proximity rule

use glam::Vec2;

use super::astronaut::Astronaut;
use super::catalog::{self, Question};
use crate::renderer::palette::{self, Color};

/// Extra reach, beyond touching, within which a planet can be entered
pub const ACTIVATION_MARGIN: f32 = 20.0;
/// Real planets the player can complete
pub const TOTAL_BODIES: usize = 8;

/// Shown by `planet_info` for names that are not a real planet
pub const INFO_UNAVAILABLE: &str = "Informatii indisponibile";

/// The eight planets of the solar system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Body {
    Mercur,
    Venus,
    Pamant,
    Marte,
    Jupiter,
    Saturn,
    Uranus,
    Neptun,
}

impl Body {
    pub const ALL: [Body; TOTAL_BODIES] = [
        Body::Mercur,
        Body::Venus,
        Body::Pamant,
        Body::Marte,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptun,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Body::Mercur => "Mercur",
            Body::Venus => "Venus",
            Body::Pamant => "Pamant",
            Body::Marte => "Marte",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptun => "Neptun",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.name() == name)
    }

    pub fn facts(&self) -> &'static [&'static str; 4] {
        catalog::facts(*self)
    }

    pub fn questions(&self) -> &'static [Question; 5] {
        catalog::questions(*self)
    }
}

/// What entering a planet leads to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanetKind {
    /// Info, then quiz, then dodge
    Body(Body),
    /// Straight to the slideshow
    SlideshowHub,
    /// Straight to the notes
    NotesHub,
}

#[derive(Debug, Clone)]
pub struct Planet {
    pub name: &'static str,
    pub pos: Vec2,
    pub radius: f32,
    pub color: Color,
    pub kind: PlanetKind,
    pub has_smiley: bool,
}

impl Planet {
    pub fn body(name: &'static str, x: f32, y: f32, radius: f32, color: Color, body: Body) -> Self {
        Self {
            name,
            pos: Vec2::new(x, y),
            radius,
            color,
            kind: PlanetKind::Body(body),
            has_smiley: false,
        }
    }

    pub fn hub(name: &'static str, x: f32, y: f32, radius: f32, color: Color, kind: PlanetKind) -> Self {
        Self {
            name,
            pos: Vec2::new(x, y),
            radius,
            color,
            kind,
            has_smiley: true,
        }
    }

    pub fn is_slideshow(&self) -> bool {
        self.kind == PlanetKind::SlideshowHub
    }

    pub fn is_notes(&self) -> bool {
        self.kind == PlanetKind::NotesHub
    }

    pub fn as_body(&self) -> Option<Body> {
        match self.kind {
            PlanetKind::Body(body) => Some(body),
            _ => None,
        }
    }

    /// True when the astronaut is close enough to enter this planet
    pub fn check_collision(&self, astronaut: &Astronaut) -> bool {
        crate::distance(self.pos, astronaut.pos) < self.radius + astronaut.size + ACTIVATION_MARGIN
    }

    pub fn get_info(&self) -> Vec<&'static str> {
        planet_info(self.name)
    }
}

/// Fact lines for a planet name, or a single placeholder line
pub fn planet_info(name: &str) -> Vec<&'static str> {
    match Body::from_name(name) {
        Some(body) => body.facts().to_vec(),
        None => vec![INFO_UNAVAILABLE],
    }
}

/// The fixed startup planet list, in interaction priority order
pub fn default_planets() -> Vec<Planet> {
    vec![
        Planet::body("Mercur", 200.0, 200.0, 30.0, palette::MERCUR, Body::Mercur),
        Planet::body("Venus", 700.0, 150.0, 45.0, palette::VENUS, Body::Venus),
        Planet::body("Pamant", 300.0, 500.0, 50.0, palette::PAMANT, Body::Pamant),
        Planet::body("Marte", 800.0, 450.0, 40.0, palette::MARTE, Body::Marte),
        Planet::body("Jupiter", 500.0, 600.0, 80.0, palette::JUPITER, Body::Jupiter),
        Planet::body("Saturn", 150.0, 400.0, 70.0, palette::SATURN, Body::Saturn),
        Planet::body("Uranus", 650.0, 600.0, 55.0, palette::URANUS, Body::Uranus),
        Planet::body("Neptun", 900.0, 250.0, 55.0, palette::NEPTUN, Body::Neptun),
        Planet::hub("Hai sa invatam", 500.0, 300.0, 60.0, palette::PINK, PlanetKind::SlideshowHub),
        Planet::hub("Notite", 400.0, 100.0, 55.0, palette::LIGHT_BLUE, PlanetKind::NotesHub),
    ]
}
