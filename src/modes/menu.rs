//! Title screen

use glam::Vec2;

use super::{Mode, ModeContext};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::layout::START_BUTTON;
use crate::platform::InputEvent;
use crate::renderer::{Anchor, FontSize, Frame, palette, shapes};

pub const TITLE: &str = "SA INVATAM PLANETELE";
pub const SUBTITLE: &str = "(cu ajutorul manualului ArtKlett)";
pub const START_LABEL: &str = "INCEPE";

#[derive(Debug, Default)]
pub struct Menu {
    started: bool,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Mode for Menu {
    fn handle_input(&mut self, event: &InputEvent, _ctx: &mut ModeContext<'_>) {
        if let InputEvent::PointerDown(pos) = event {
            if START_BUTTON.contains(*pos) {
                self.started = true;
            }
        }
    }

    fn render(&self, frame: &mut Frame<'_>, _ctx: &ModeContext<'_>) {
        shapes::starfield(frame, 0);

        let cx = SCREEN_WIDTH / 2.0;
        frame.text(
            TITLE,
            Vec2::new(cx, SCREEN_HEIGHT / 3.0 - 20.0),
            FontSize::Large,
            palette::YELLOW,
            Anchor::Center,
        );
        frame.text(
            SUBTITLE,
            Vec2::new(cx, SCREEN_HEIGHT / 3.0 + 40.0),
            FontSize::Small,
            palette::WHITE,
            Anchor::Center,
        );

        // Big astronaut head
        let head = Vec2::new(cx, SCREEN_HEIGHT / 2.0 - 50.0);
        frame.circle(head, 30.0, palette::WHITE);
        frame.circle(head + Vec2::new(-10.0, -10.0), 5.0, palette::SPACE_BLUE);
        frame.circle(head + Vec2::new(10.0, -10.0), 5.0, palette::SPACE_BLUE);

        shapes::button(
            frame,
            START_BUTTON,
            palette::GREEN,
            START_LABEL,
            palette::BLACK,
            FontSize::Medium,
        );
    }

    fn is_finished(&self) -> bool {
        self.started
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modes::test_support::Fixture;
    use crate::platform::Key;

    #[test]
    fn test_only_start_button_starts() {
        let mut fixture = Fixture::new();
        let mut menu = Menu::new();

        menu.handle_input(&InputEvent::KeyDown(Key::Enter), &mut fixture.ctx());
        menu.handle_input(&InputEvent::PointerDown(Vec2::new(5.0, 5.0)), &mut fixture.ctx());
        assert!(!menu.is_finished());

        menu.handle_input(&InputEvent::PointerDown(START_BUTTON.center()), &mut fixture.ctx());
        assert!(menu.is_finished());
    }

    #[test]
    fn test_renders_title_and_button() {
        let mut fixture = Fixture::new();
        let menu = Menu::new();
        let texts = fixture.render(&menu);
        assert!(texts.contains(&TITLE.to_string()));
        assert!(texts.contains(&START_LABEL.to_string()));
    }
}
