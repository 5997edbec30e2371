//! Free flight between planets

use glam::Vec2;

use super::{Mode, ModeContext};
use crate::platform::{HeldKeys, InputEvent, Key};
use crate::renderer::{Anchor, FontSize, Frame, palette, shapes};
use crate::sim::TOTAL_BODIES;

pub const INSTRUCTIONS: &str = "Foloseste sagetile pentru a te misca | SPACE pentru interactiune";
/// Radius of the green marker on visited planets
pub const VISITED_MARKER_RADIUS: f32 = 10.0;

#[derive(Debug, Default)]
pub struct Exploration {
    selected: Option<usize>,
}

impl Exploration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the planet chosen with the confirm key
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }
}

impl Mode for Exploration {
    fn handle_input(&mut self, event: &InputEvent, ctx: &mut ModeContext<'_>) {
        if *event != InputEvent::KeyDown(Key::Space) {
            return;
        }
        // List order breaks ties
        self.selected = ctx.planets.iter().position(|p| p.check_collision(ctx.astronaut));
        if let Some(i) = self.selected {
            log::debug!("Confirm near {}", ctx.planets[i].name);
        }
    }

    fn update(&mut self, held: HeldKeys, ctx: &mut ModeContext<'_>) {
        ctx.astronaut.update(held);
    }

    fn render(&self, frame: &mut Frame<'_>, ctx: &ModeContext<'_>) {
        shapes::starfield(frame, 0);

        for planet in ctx.planets {
            shapes::planet(frame, planet);
            if ctx.is_visited(planet) {
                let marker = planet.pos + Vec2::new(planet.radius, -planet.radius);
                frame.circle(marker, VISITED_MARKER_RADIUS, palette::GREEN);
            }
        }

        shapes::astronaut(frame, ctx.astronaut.pos, ctx.astronaut.size);

        frame.text(
            INSTRUCTIONS,
            Vec2::new(20.0, 20.0),
            FontSize::Small,
            palette::WHITE,
            Anchor::TopLeft,
        );
        frame.text(
            format!("Planete explorate: {}/{}", ctx.visited.len(), TOTAL_BODIES),
            Vec2::new(20.0, 60.0),
            FontSize::Small,
            palette::YELLOW,
            Anchor::TopLeft,
        );
    }

    fn is_finished(&self) -> bool {
        self.selected.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modes::test_support::Fixture;
    use crate::renderer::DrawCmd;
    use crate::sim::Body;

    #[test]
    fn test_confirm_away_from_planets_does_nothing() {
        let mut fixture = Fixture::new();
        fixture.astronaut.pos = Vec2::new(40.0, 740.0);
        let mut mode = Exploration::new();
        mode.handle_input(&InputEvent::KeyDown(Key::Space), &mut fixture.ctx());
        assert!(!mode.is_finished());
    }

    #[test]
    fn test_confirm_selects_nearby_planet() {
        let mut fixture = Fixture::new();
        let pamant = fixture.planet_index("Pamant");
        fixture.astronaut.pos = fixture.planets[pamant].pos;

        let mut mode = Exploration::new();
        mode.handle_input(&InputEvent::KeyDown(Key::Enter), &mut fixture.ctx());
        assert!(!mode.is_finished());

        mode.handle_input(&InputEvent::KeyDown(Key::Space), &mut fixture.ctx());
        assert_eq!(mode.selected(), Some(pamant));
    }

    #[test]
    fn test_first_planet_in_list_wins_ties() {
        let mut fixture = Fixture::new();
        // Inside both Jupiter's and Uranus's activation range
        fixture.astronaut.pos = Vec2::new(580.0, 600.0);
        let jupiter = fixture.planet_index("Jupiter");
        let uranus = fixture.planet_index("Uranus");
        assert!(fixture.planets[uranus].check_collision(&fixture.astronaut));
        assert!(jupiter < uranus);

        let mut mode = Exploration::new();
        mode.handle_input(&InputEvent::KeyDown(Key::Space), &mut fixture.ctx());
        assert_eq!(mode.selected(), Some(jupiter));
    }

    #[test]
    fn test_update_moves_astronaut() {
        let mut fixture = Fixture::new();
        let start = fixture.astronaut.pos;
        let mut mode = Exploration::new();
        let held = HeldKeys {
            up: true,
            ..Default::default()
        };
        mode.update(held, &mut fixture.ctx());
        assert_eq!(fixture.astronaut.pos, start - Vec2::new(0.0, fixture.astronaut.speed));
    }

    #[test]
    fn test_progress_and_visited_markers() {
        let mut fixture = Fixture::new();
        fixture.visited.insert(Body::Marte);
        fixture.visited.insert(Body::Venus);
        let mode = Exploration::new();

        let texts = fixture.render(&mode);
        assert!(texts.contains(&"Planete explorate: 2/8".to_string()));

        let marte = &fixture.planets[fixture.planet_index("Marte")];
        let marker = marte.pos + Vec2::new(marte.radius, -marte.radius);
        let markers = fixture
            .render_commands(&mode)
            .into_iter()
            .filter(|cmd| {
                matches!(cmd, DrawCmd::Circle { radius, color, .. }
                    if *radius == VISITED_MARKER_RADIUS && *color == palette::GREEN)
            })
            .count();
        assert_eq!(markers, 2);
        assert!(fixture.render_commands(&mode).iter().any(|cmd| {
            matches!(cmd, DrawCmd::Circle { center, color, .. } if *center == marker && *color == palette::GREEN)
        }));
    }
}
