//! Screen modes driven by the controller
//!
//! Each mode owns its own session state. Shared state (astronaut, planets,
//! visited set, current planet) is lent in through `ModeContext` for the
//! duration of one call.

mod dodge;
mod exploration;
mod info;
mod menu;
mod notes;
mod quiz;
mod slideshow;

use std::collections::BTreeSet;

pub use exploration::Exploration;
pub use info::Info;
pub use menu::Menu;

use crate::platform::{HeldKeys, InputEvent};
use crate::renderer::Frame;
use crate::sim::{Astronaut, Body, Planet};

/// Shared game state borrowed by the active mode
pub struct ModeContext<'a> {
    pub astronaut: &'a mut Astronaut,
    pub planets: &'a [Planet],
    pub visited: &'a BTreeSet<Body>,
    pub current: Option<&'a Planet>,
}

impl ModeContext<'_> {
    pub fn is_visited(&self, planet: &Planet) -> bool {
        planet.as_body().is_some_and(|body| self.visited.contains(&body))
    }
}

pub trait Mode {
    /// React to one discrete input event
    fn handle_input(&mut self, event: &InputEvent, ctx: &mut ModeContext<'_>);

    /// Advance one tick
    fn update(&mut self, _held: HeldKeys, _ctx: &mut ModeContext<'_>) {}

    fn render(&self, frame: &mut Frame<'_>, ctx: &ModeContext<'_>);

    /// The controller should leave this mode
    fn is_finished(&self) -> bool;
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::renderer::{DrawCmd, MonospaceMetrics};
    use crate::sim::default_planets;

    /// Owned shared state for driving a single mode in tests
    pub struct Fixture {
        pub astronaut: Astronaut,
        pub planets: Vec<Planet>,
        pub visited: BTreeSet<Body>,
        pub current: Option<usize>,
    }

    impl Fixture {
        pub fn new() -> Self {
            Self {
                astronaut: Astronaut::default(),
                planets: default_planets(),
                visited: BTreeSet::new(),
                current: None,
            }
        }

        pub fn planet_index(&self, name: &str) -> usize {
            self.planets.iter().position(|p| p.name == name).unwrap()
        }

        pub fn ctx(&mut self) -> ModeContext<'_> {
            ModeContext {
                astronaut: &mut self.astronaut,
                planets: &self.planets,
                visited: &self.visited,
                current: self.current.and_then(|i| self.planets.get(i)),
            }
        }

        pub fn render_commands(&mut self, mode: &dyn Mode) -> Vec<DrawCmd> {
            let metrics = MonospaceMetrics::new(10.0);
            let mut frame = Frame::new(&metrics);
            let ctx = self.ctx();
            mode.render(&mut frame, &ctx);
            frame.into_commands()
        }

        /// Text drawn by one render, in draw order
        pub fn render(&mut self, mode: &dyn Mode) -> Vec<String> {
            self.render_commands(mode)
                .into_iter()
                .filter_map(|cmd| match cmd {
                    DrawCmd::Text { text, .. } => Some(text),
                    _ => None,
                })
                .collect()
        }
    }
}
