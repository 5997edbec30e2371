use glam::Vec2;

use super::{Mode, ModeContext};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::platform::{HeldKeys, InputEvent};
use crate::renderer::{Anchor, FontSize, Frame, palette, shapes};
use crate::sim::Dodge;

pub const INSTRUCTIONS: &str = "Foloseste sagetile STANGA/DREAPTA pentru a evita!";
pub const WIN_TITLE: &str = "FELICITARI!";
pub const WIN_MESSAGE: &str = "Ai evitat toti asteroizii!";
pub const LOSS_TITLE: &str = "LOVIT DE ASTEROID!";
pub const LOSS_MESSAGE: &str = "Mai mult noroc data viitoare!";
pub const CONTINUE_PROMPT: &str = "Apasa orice tasta pentru a continua...";

impl Mode for Dodge {
    // Held keys drive the player; discrete events only matter to the controller
    fn handle_input(&mut self, _event: &InputEvent, _ctx: &mut ModeContext<'_>) {}

    fn update(&mut self, held: HeldKeys, _ctx: &mut ModeContext<'_>) {
        Dodge::update(self, held);
    }

    fn render(&self, frame: &mut Frame<'_>, _ctx: &ModeContext<'_>) {
        shapes::starfield(frame, self.time_survived);
        let cx = SCREEN_WIDTH / 2.0;

        if !self.finished {
            shapes::dodge_player(frame, self.player, self.player_size);
            for asteroid in &self.asteroids {
                shapes::asteroid(frame, asteroid);
            }

            frame.text(
                format!("Timp: {}s", self.seconds_left()),
                Vec2::new(cx, 20.0),
                FontSize::Medium,
                palette::YELLOW,
                Anchor::TopCenter,
            );
            frame.text(
                INSTRUCTIONS,
                Vec2::new(cx, 70.0),
                FontSize::Small,
                palette::WHITE,
                Anchor::TopCenter,
            );
            return;
        }

        let (title, title_color, message) = if self.won {
            (WIN_TITLE, palette::GREEN, WIN_MESSAGE)
        } else {
            (LOSS_TITLE, palette::RED, LOSS_MESSAGE)
        };
        let cy = SCREEN_HEIGHT / 2.0;
        frame.text(
            title,
            Vec2::new(cx, cy - 50.0),
            FontSize::Medium,
            title_color,
            Anchor::TopCenter,
        );
        frame.text(
            message,
            Vec2::new(cx, cy + 20.0),
            FontSize::Small,
            palette::WHITE,
            Anchor::TopCenter,
        );
        frame.text(
            CONTINUE_PROMPT,
            Vec2::new(cx, cy + 100.0),
            FontSize::Small,
            palette::YELLOW,
            Anchor::TopCenter,
        );
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}
