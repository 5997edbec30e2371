//! macroquad backend: replays draw lists and rasterizes text

use std::collections::HashMap;
use std::rc::Rc;

use macroquad::color::Color as MqColor;
use macroquad::shapes::{draw_circle, draw_circle_lines, draw_line, draw_rectangle, draw_rectangle_lines};
use macroquad::text::{Font, TextParams, draw_text_ex, load_ttf_font, measure_text};
use macroquad::texture::{Texture2D, draw_texture};
use macroquad::window::clear_background;

use super::palette::Color;
use super::{Anchor, DrawCmd, FontSize, TextMetrics};
use crate::settings::{FontSizes, Settings};
use crate::sim::SlideImage;

fn to_mq(color: Color) -> MqColor {
    MqColor::new(color[0], color[1], color[2], color[3])
}

/// Loaded font plus the pixel size behind each `FontSize`
pub struct TextStyle {
    font: Option<Font>,
    sizes: FontSizes,
}

impl TextStyle {
    /// Try each configured font in order, then fall back to the built-in one
    pub async fn load(settings: &Settings) -> Self {
        for path in &settings.font_paths {
            let Some(path_str) = path.to_str() else {
                continue;
            };
            match load_ttf_font(path_str).await {
                Ok(font) => {
                    log::info!("Using font {}", path.display());
                    return Self {
                        font: Some(font),
                        sizes: settings.font_sizes,
                    };
                }
                Err(e) => log::debug!("Font {} unavailable: {e}", path.display()),
            }
        }
        log::warn!("No configured font could be loaded; using the built-in font");
        Self {
            font: None,
            sizes: settings.font_sizes,
        }
    }

    fn px(&self, size: FontSize) -> u16 {
        match size {
            FontSize::Large => self.sizes.large,
            FontSize::Medium => self.sizes.medium,
            FontSize::Small => self.sizes.small,
        }
    }

    fn draw(&self, text: &str, x: f32, y: f32, size: FontSize, color: Color, anchor: Anchor) {
        let font_size = self.px(size);
        let dims = measure_text(text, self.font.as_ref(), font_size, 1.0);
        // macroquad places text by its baseline
        let (x, y) = match anchor {
            Anchor::TopLeft => (x, y + dims.offset_y),
            Anchor::TopCenter => (x - dims.width / 2.0, y + dims.offset_y),
            Anchor::Center => (x - dims.width / 2.0, y - dims.height / 2.0 + dims.offset_y),
        };
        draw_text_ex(
            text,
            x,
            y,
            TextParams {
                font: self.font.as_ref(),
                font_size,
                color: to_mq(color),
                ..Default::default()
            },
        );
    }
}

impl TextMetrics for TextStyle {
    fn text_width(&self, text: &str, size: FontSize) -> f32 {
        measure_text(text, self.font.as_ref(), self.px(size), 1.0).width
    }
}

pub struct Backend {
    pub text: TextStyle,
    /// One texture per slide image drawn in the previous frame
    textures: HashMap<*const SlideImage, Texture2D>,
}

impl Backend {
    pub async fn new(settings: &Settings) -> Self {
        Self {
            text: TextStyle::load(settings).await,
            textures: HashMap::new(),
        }
    }

    fn texture_for(&mut self, image: &Rc<SlideImage>) -> Texture2D {
        self.textures
            .entry(Rc::as_ptr(image))
            .or_insert_with(|| {
                let width = u16::try_from(image.width).unwrap_or(u16::MAX);
                let height = u16::try_from(image.height).unwrap_or(u16::MAX);
                log::debug!("Uploading {width}x{height} slide texture");
                Texture2D::from_rgba8(width, height, &image.pixels)
            })
            .clone()
    }

    /// Draw a frame's commands in order
    pub fn present(&mut self, commands: &[DrawCmd]) {
        let mut drawn_images = Vec::new();

        for cmd in commands {
            match cmd {
                DrawCmd::Clear(color) => clear_background(to_mq(*color)),
                DrawCmd::Circle { center, radius, color } => {
                    draw_circle(center.x, center.y, *radius, to_mq(*color));
                }
                DrawCmd::Ring {
                    center,
                    radius,
                    thickness,
                    color,
                } => draw_circle_lines(center.x, center.y, *radius, *thickness, to_mq(*color)),
                DrawCmd::Rect { rect, color } => draw_rectangle(rect.x, rect.y, rect.w, rect.h, to_mq(*color)),
                DrawCmd::RectOutline { rect, thickness, color } => {
                    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, *thickness, to_mq(*color));
                }
                DrawCmd::Line {
                    from,
                    to,
                    thickness,
                    color,
                } => draw_line(from.x, from.y, to.x, to.y, *thickness, to_mq(*color)),
                DrawCmd::Text {
                    text,
                    pos,
                    size,
                    color,
                    anchor,
                } => self.text.draw(text, pos.x, pos.y, *size, *color, *anchor),
                DrawCmd::Image { image, center } => {
                    let texture = self.texture_for(image);
                    let x = center.x - image.width as f32 / 2.0;
                    let y = center.y - image.height as f32 / 2.0;
                    draw_texture(&texture, x, y, macroquad::color::WHITE);
                    drawn_images.push(Rc::as_ptr(image));
                }
            }
        }

        // Slides from a closed slideshow are dropped with their textures
        self.textures.retain(|ptr, _| drawn_images.contains(ptr));
    }
}
