use std::rc::Rc;

use glam::Vec2;

use super::{Mode, ModeContext};
use crate::layout::{SLIDE_NEXT_BUTTON, SLIDE_PREV_BUTTON};
use crate::platform::InputEvent;
use crate::renderer::{Anchor, FontSize, Frame, palette, shapes};
use crate::sim::Slideshow;

pub const PREV_LABEL: &str = "< Inapoi";
pub const NEXT_LABEL: &str = "Inainte >";

impl Mode for Slideshow {
    fn handle_input(&mut self, event: &InputEvent, _ctx: &mut ModeContext<'_>) {
        if let InputEvent::PointerDown(pos) = event {
            self.handle_pointer(*pos);
        }
    }

    fn render(&self, frame: &mut Frame<'_>, _ctx: &ModeContext<'_>) {
        let center = crate::screen_center();
        match self.current() {
            Some(slide) => frame.image(Rc::clone(&slide.image), center),
            None => frame.text(
                format!("No images loaded ({} total)", self.len()),
                center,
                FontSize::Small,
                palette::RED,
                Anchor::TopCenter,
            ),
        }

        shapes::close_button(frame);

        if self.has_previous() {
            shapes::button(
                frame,
                SLIDE_PREV_BUTTON,
                palette::GREEN,
                PREV_LABEL,
                palette::BLACK,
                FontSize::Small,
            );
        }
        if self.has_next() {
            shapes::button(
                frame,
                SLIDE_NEXT_BUTTON,
                palette::GREEN,
                NEXT_LABEL,
                palette::BLACK,
                FontSize::Small,
            );
        }

        frame.text(
            format!("{} / {}", self.current_index() + 1, self.len()),
            Vec2::new(center.x, 20.0),
            FontSize::Small,
            palette::YELLOW,
            Anchor::TopCenter,
        );
    }

    fn is_finished(&self) -> bool {
        self.is_closed()
    }
}
