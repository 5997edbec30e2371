//! Student notes with a write-through store

use std::rc::Rc;

use glam::Vec2;

use crate::error::StorageError;
use crate::layout::{CLOSE_BUTTON, NOTES_ADD_BUTTON, NOTES_INPUT, NOTES_SCROLL_DOWN, NOTES_SCROLL_UP};
use crate::persistence::NoteStore;
use crate::platform::Key;
use crate::renderer::{FontSize, TextMetrics};

/// Draft cap, in characters
pub const MAX_NOTE_LENGTH: usize = 200;
/// Notes visible at once
pub const VISIBLE_NOTES: usize = 5;
/// Wrapped lines shown per note; the rest is hidden, not deleted
pub const MAX_LINES_PER_NOTE: usize = 2;

pub struct Notes {
    store: Rc<dyn NoteStore>,
    notes: Vec<String>,
    draft: String,
    input_active: bool,
    scroll_offset: usize,
    closed: bool,
    last_fault: Option<StorageError>,
}

impl Notes {
    /// Open the notes screen, loading the stored collection once
    pub fn open(store: Rc<dyn NoteStore>) -> Self {
        let (notes, last_fault) = match store.load() {
            Ok(notes) => (notes, None),
            Err(e) => {
                log::warn!("{e}; starting with no notes");
                (Vec::new(), Some(e))
            }
        };
        Self {
            store,
            notes,
            draft: String::new(),
            input_active: false,
            scroll_offset: 0,
            closed: false,
            last_fault,
        }
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_input_active(&self) -> bool {
        self.input_active
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// The most recent storage failure, if any
    pub fn last_fault(&self) -> Option<&StorageError> {
        self.last_fault.as_ref()
    }

    pub fn draft_len(&self) -> usize {
        self.draft.chars().count()
    }

    /// Draft has something besides whitespace
    pub fn can_commit(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    pub fn max_scroll(&self) -> usize {
        self.notes.len().saturating_sub(VISIBLE_NOTES)
    }

    pub fn can_scroll_up(&self) -> bool {
        self.notes.len() > VISIBLE_NOTES && self.scroll_offset > 0
    }

    pub fn can_scroll_down(&self) -> bool {
        self.notes.len() > VISIBLE_NOTES && self.scroll_offset < self.max_scroll()
    }

    pub fn scroll_up(&mut self) {
        if self.can_scroll_up() {
            self.scroll_offset -= 1;
        }
    }

    pub fn scroll_down(&mut self) {
        if self.can_scroll_down() {
            self.scroll_offset += 1;
        }
    }

    /// Notes in the current scroll window
    pub fn visible(&self) -> &[String] {
        let start = self.scroll_offset.min(self.notes.len());
        let end = (start + VISIBLE_NOTES).min(self.notes.len());
        &self.notes[start..end]
    }

    /// Append the trimmed draft and rewrite the store. Empty drafts are ignored.
    pub fn commit(&mut self) {
        let note = self.draft.trim();
        if note.is_empty() {
            return;
        }
        self.notes.push(note.to_string());
        match self.store.save(&self.notes) {
            Ok(()) => self.last_fault = None,
            Err(e) => {
                log::warn!("{e}; note kept for this session only");
                self.last_fault = Some(e);
            }
        }
        self.draft.clear();
        self.input_active = false;
    }

    pub fn handle_pointer(&mut self, pos: Vec2) {
        if CLOSE_BUTTON.contains(pos) {
            self.closed = true;
            return;
        }

        self.input_active = NOTES_INPUT.contains(pos);

        if (self.input_active || !self.draft.is_empty()) && NOTES_ADD_BUTTON.contains(pos) {
            self.commit();
        }

        if self.can_scroll_up() && NOTES_SCROLL_UP.contains(pos) {
            self.scroll_up();
        }
        if self.can_scroll_down() && NOTES_SCROLL_DOWN.contains(pos) {
            self.scroll_down();
        }
    }

    pub fn handle_key(&mut self, key: Key) {
        if !self.input_active {
            return;
        }
        match key {
            Key::Enter => self.commit(),
            Key::Backspace => {
                self.draft.pop();
            }
            Key::Escape => self.input_active = false,
            _ => {}
        }
    }

    pub fn handle_text(&mut self, ch: char) {
        if self.input_active && !ch.is_control() && self.draft_len() < MAX_NOTE_LENGTH {
            self.draft.push(ch);
        }
    }
}

/// Greedy word wrap on single spaces, cut to `MAX_LINES_PER_NOTE` lines
pub fn wrap_note(text: &str, max_width: f32, size: FontSize, metrics: &dyn TextMetrics) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split(' ') {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if metrics.text_width(&candidate, size) <= max_width {
            current = candidate;
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines.truncate(MAX_LINES_PER_NOTE);
    lines
}
