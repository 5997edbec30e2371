//! Rendering module
//!
//! Screens describe a frame as an ordered list of draw commands. The
//! backend replays that list with macroquad; tests read it directly.

pub mod backend;
pub mod palette;
pub mod shapes;

use std::rc::Rc;

use glam::Vec2;

use crate::layout::Rect;
use crate::sim::SlideImage;
use palette::Color;

/// The three text sizes the screens use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontSize {
    Large,
    Medium,
    Small,
}

/// Which point of the text box `pos` names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopCenter,
    Center,
}

/// Text measuring, provided by whoever rasterizes text
pub trait TextMetrics {
    fn text_width(&self, text: &str, size: FontSize) -> f32;
}

/// Fixed advance per character, for headless layout
#[derive(Debug, Clone, Copy)]
pub struct MonospaceMetrics {
    advance: f32,
}

impl MonospaceMetrics {
    pub fn new(advance: f32) -> Self {
        Self { advance }
    }
}

impl TextMetrics for MonospaceMetrics {
    fn text_width(&self, text: &str, size: FontSize) -> f32 {
        let scale = match size {
            FontSize::Large => 2.0,
            FontSize::Medium => 1.5,
            FontSize::Small => 1.0,
        };
        text.chars().count() as f32 * self.advance * scale
    }
}

#[derive(Debug, Clone)]
pub enum DrawCmd {
    Clear(Color),
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Ring {
        center: Vec2,
        radius: f32,
        thickness: f32,
        color: Color,
    },
    Rect {
        rect: Rect,
        color: Color,
    },
    RectOutline {
        rect: Rect,
        thickness: f32,
        color: Color,
    },
    Line {
        from: Vec2,
        to: Vec2,
        thickness: f32,
        color: Color,
    },
    Text {
        text: String,
        pos: Vec2,
        size: FontSize,
        color: Color,
        anchor: Anchor,
    },
    Image {
        image: Rc<SlideImage>,
        center: Vec2,
    },
}

/// One frame's draw list
pub struct Frame<'m> {
    commands: Vec<DrawCmd>,
    metrics: &'m dyn TextMetrics,
}

impl<'m> Frame<'m> {
    pub fn new(metrics: &'m dyn TextMetrics) -> Self {
        Self {
            commands: Vec::with_capacity(256),
            metrics,
        }
    }

    pub fn metrics(&self) -> &'m dyn TextMetrics {
        self.metrics
    }

    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCmd> {
        self.commands
    }

    pub fn push(&mut self, cmd: DrawCmd) {
        self.commands.push(cmd);
    }

    pub fn clear(&mut self, color: Color) {
        self.push(DrawCmd::Clear(color));
    }

    pub fn circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.push(DrawCmd::Circle { center, radius, color });
    }

    pub fn ring(&mut self, center: Vec2, radius: f32, thickness: f32, color: Color) {
        self.push(DrawCmd::Ring {
            center,
            radius,
            thickness,
            color,
        });
    }

    pub fn rect(&mut self, rect: Rect, color: Color) {
        self.push(DrawCmd::Rect { rect, color });
    }

    pub fn rect_outline(&mut self, rect: Rect, thickness: f32, color: Color) {
        self.push(DrawCmd::RectOutline { rect, thickness, color });
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Color) {
        self.push(DrawCmd::Line {
            from,
            to,
            thickness,
            color,
        });
    }

    pub fn text(&mut self, text: impl Into<String>, pos: Vec2, size: FontSize, color: Color, anchor: Anchor) {
        self.push(DrawCmd::Text {
            text: text.into(),
            pos,
            size,
            color,
            anchor,
        });
    }

    pub fn image(&mut self, image: Rc<SlideImage>, center: Vec2) {
        self.push(DrawCmd::Image { image, center });
    }

    /// All text strings drawn so far, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCmd::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monospace_scales_with_size() {
        let metrics = MonospaceMetrics::new(10.0);
        assert_eq!(metrics.text_width("abcd", FontSize::Small), 40.0);
        assert_eq!(metrics.text_width("abcd", FontSize::Large), 80.0);
        assert_eq!(metrics.text_width("ăâî", FontSize::Small), 30.0);
    }

    #[test]
    fn test_frame_keeps_order() {
        let metrics = MonospaceMetrics::new(10.0);
        let mut frame = Frame::new(&metrics);
        frame.clear(palette::SPACE_BLUE);
        frame.text("a", Vec2::ZERO, FontSize::Small, palette::WHITE, Anchor::TopLeft);
        frame.circle(Vec2::ZERO, 1.0, palette::WHITE);
        frame.text("b", Vec2::ZERO, FontSize::Small, palette::WHITE, Anchor::TopLeft);

        assert!(matches!(frame.commands()[0], DrawCmd::Clear(_)));
        assert_eq!(frame.texts().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(frame.into_commands().len(), 4);
    }
}
