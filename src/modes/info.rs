//! Planet fact sheet shown before the quiz

use glam::Vec2;

use super::{Mode, ModeContext};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::platform::InputEvent;
use crate::renderer::{Anchor, FontSize, Frame, palette};

pub const CONTINUE_PROMPT: &str = "Apasa orice tasta pentru a continua la quiz...";
const FACT_LINE_SPACING: f32 = 40.0;

#[derive(Debug, Default)]
pub struct Info {
    done: bool,
}

impl Info {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Mode for Info {
    fn handle_input(&mut self, event: &InputEvent, _ctx: &mut ModeContext<'_>) {
        // Typed characters echo key presses, so they do not count
        if event.is_key_down() || matches!(event, InputEvent::PointerDown(_)) {
            self.done = true;
        }
    }

    fn render(&self, frame: &mut Frame<'_>, ctx: &ModeContext<'_>) {
        let Some(planet) = ctx.current else {
            return;
        };
        let cx = SCREEN_WIDTH / 2.0;

        frame.text(
            planet.name,
            Vec2::new(cx, 100.0),
            FontSize::Large,
            palette::YELLOW,
            Anchor::Center,
        );
        frame.circle(
            Vec2::new(cx, SCREEN_HEIGHT / 2.0 - 50.0),
            planet.radius * 2.0,
            planet.color,
        );

        let mut y = SCREEN_HEIGHT / 2.0 + 100.0;
        for line in planet.get_info() {
            frame.text(line, Vec2::new(cx, y), FontSize::Small, palette::WHITE, Anchor::Center);
            y += FACT_LINE_SPACING;
        }

        frame.text(
            CONTINUE_PROMPT,
            Vec2::new(cx, SCREEN_HEIGHT - 50.0),
            FontSize::Small,
            palette::GREEN,
            Anchor::Center,
        );
    }

    fn is_finished(&self) -> bool {
        self.done
    }
}
