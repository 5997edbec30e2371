use glam::Vec2;

use super::{Mode, ModeContext};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::layout::{NOTES_ADD_BUTTON, NOTES_AREA, NOTES_INPUT, NOTES_SCROLL_DOWN, NOTES_SCROLL_UP};
use crate::platform::InputEvent;
use crate::renderer::{Anchor, FontSize, Frame, palette, shapes};
use crate::sim::Notes;
use crate::sim::notes::MAX_NOTE_LENGTH;
use crate::sim::wrap_note;

pub const TITLE: &str = "NOTITE";
pub const EMPTY_MESSAGE: &str = "Nu exista notite inca. Adauga una mai jos!";
pub const INPUT_PLACEHOLDER: &str = "Click aici pentru a scrie o notita...";
pub const ADD_LABEL: &str = "Adauga";
pub const BULLET: &str = "\u{2022}";

/// Width available to one wrapped note line
pub const NOTE_WRAP_WIDTH: f32 = SCREEN_WIDTH - 180.0;
const NOTE_LINE_HEIGHT: f32 = 40.0;
const NOTE_GAP: f32 = 10.0;

impl Mode for Notes {
    fn handle_input(&mut self, event: &InputEvent, _ctx: &mut ModeContext<'_>) {
        match *event {
            InputEvent::PointerDown(pos) => self.handle_pointer(pos),
            InputEvent::KeyDown(key) => self.handle_key(key),
            InputEvent::Text(ch) => self.handle_text(ch),
        }
    }

    fn render(&self, frame: &mut Frame<'_>, _ctx: &ModeContext<'_>) {
        frame.text(
            TITLE,
            Vec2::new(SCREEN_WIDTH / 2.0, 20.0),
            FontSize::Medium,
            palette::YELLOW,
            Anchor::TopCenter,
        );
        shapes::close_button(frame);

        frame.rect(NOTES_AREA, palette::PANEL);
        frame.rect_outline(NOTES_AREA, 2.0, palette::WHITE);

        if self.notes().is_empty() {
            frame.text(
                EMPTY_MESSAGE,
                Vec2::new(SCREEN_WIDTH / 2.0, 200.0),
                FontSize::Small,
                palette::MUTED,
                Anchor::TopCenter,
            );
        } else {
            let metrics = frame.metrics();
            let mut y = 110.0;
            for note in self.visible() {
                for line in wrap_note(note, NOTE_WRAP_WIDTH, FontSize::Small, metrics) {
                    frame.text(
                        format!("{BULLET} {line}"),
                        Vec2::new(70.0, y),
                        FontSize::Small,
                        palette::WHITE,
                        Anchor::TopLeft,
                    );
                    y += NOTE_LINE_HEIGHT;
                }
                y += NOTE_GAP;
            }
        }

        if self.can_scroll_up() {
            shapes::button(frame, NOTES_SCROLL_UP, palette::GREEN, "^", palette::BLACK, FontSize::Small);
        }
        if self.can_scroll_down() {
            shapes::button(frame, NOTES_SCROLL_DOWN, palette::GREEN, "v", palette::BLACK, FontSize::Small);
        }

        let (fill, border) = if self.is_input_active() {
            (palette::INPUT_ACTIVE, palette::YELLOW)
        } else {
            (palette::PANEL, palette::WHITE)
        };
        frame.rect(NOTES_INPUT, fill);
        frame.rect_outline(NOTES_INPUT, 3.0, border);

        let draft_pos = Vec2::new(70.0, SCREEN_HEIGHT - 160.0);
        if !self.draft().is_empty() || self.is_input_active() {
            frame.text(self.draft(), draft_pos, FontSize::Small, palette::WHITE, Anchor::TopLeft);
        } else {
            frame.text(INPUT_PLACEHOLDER, draft_pos, FontSize::Small, palette::HINT, Anchor::TopLeft);
        }

        frame.text(
            format!("{}/{}", self.draft_len(), MAX_NOTE_LENGTH),
            Vec2::new(SCREEN_WIDTH - 150.0, SCREEN_HEIGHT - 100.0),
            FontSize::Small,
            palette::MUTED,
            Anchor::TopLeft,
        );

        let (add_fill, add_text) = if self.can_commit() {
            (palette::GREEN, palette::BLACK)
        } else {
            (palette::HINT, palette::DISABLED_TEXT)
        };
        shapes::button(frame, NOTES_ADD_BUTTON, add_fill, ADD_LABEL, add_text, FontSize::Small);

        frame.text(
            format!("Total notite: {}", self.notes().len()),
            Vec2::new(50.0, SCREEN_HEIGHT - 70.0),
            FontSize::Small,
            palette::YELLOW,
            Anchor::TopLeft,
        );
    }

    fn is_finished(&self) -> bool {
        self.is_closed()
    }
}
