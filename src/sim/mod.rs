//! Simulation module
//!
//! Session rules for every screen. Nothing here draws or talks to the
//! window system:
//! - Fixed timestep only (one `update` per tick)
//! - Seeded RNG only
//! - Input arrives as already-decoded events

pub mod astronaut;
pub mod catalog;
pub mod dodge;
pub mod notes;
pub mod planet;
pub mod quiz;
pub mod slideshow;

pub use astronaut::Astronaut;
pub use catalog::Question;
pub use dodge::{Asteroid, Dodge, DODGE_DURATION};
pub use notes::{Notes, wrap_note};
pub use planet::{Body, Planet, PlanetKind, TOTAL_BODIES, default_planets, planet_info};
pub use quiz::{OptionShade, Quiz, QUESTIONS_PER_QUIZ};
pub use slideshow::{Slide, SlideImage, Slideshow};
