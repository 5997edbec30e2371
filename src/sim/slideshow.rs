//! "Hai sa invatam" image slideshow

use std::path::{Path, PathBuf};
use std::rc::Rc;

use glam::Vec2;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::AssetError;
use crate::layout::{CLOSE_BUTTON, SLIDE_NEXT_BUTTON, SLIDE_PREV_BUTTON};

pub const SLIDE_COUNT: usize = 4;
/// Images are scaled to fit the screen minus this much on each axis
pub const SLIDE_MARGIN: f32 = 200.0;
pub const PLACEHOLDER_SIZE: (u32, u32) = (600, 400);
pub const PLACEHOLDER_GRAY: u8 = 100;

/// Decoded RGBA8 pixels, ready to upload
#[derive(Debug, Clone, PartialEq)]
pub struct SlideImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl SlideImage {
    pub fn placeholder() -> Self {
        let (width, height) = PLACEHOLDER_SIZE;
        let image = RgbaImage::from_pixel(
            width,
            height,
            Rgba([PLACEHOLDER_GRAY, PLACEHOLDER_GRAY, PLACEHOLDER_GRAY, 255]),
        );
        Self::from_rgba(image)
    }

    fn from_rgba(image: RgbaImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            pixels: image.into_raw(),
        }
    }

    /// Decode, flatten onto white and scale to fit the screen
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        let decoded = image::open(path).map_err(|source| AssetError::Image {
            path: path.to_path_buf(),
            source,
        })?;
        let mut rgba = decoded.to_rgba8();
        if rgba.width() == 0 || rgba.height() == 0 {
            return Err(AssetError::Empty {
                path: path.to_path_buf(),
            });
        }

        flatten_on_white(&mut rgba);

        let (w, h) = fit_size(rgba.width(), rgba.height());
        let scaled = imageops::resize(&rgba, w, h, FilterType::Lanczos3);
        log::info!(
            "Loaded slide {} ({}x{} -> {}x{})",
            path.display(),
            rgba.width(),
            rgba.height(),
            w,
            h
        );
        Ok(Self::from_rgba(scaled))
    }
}

/// Composite partially transparent pixels over a white background
fn flatten_on_white(image: &mut RgbaImage) {
    for pixel in image.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        let alpha = a as u32;
        let blend = |c: u8| ((c as u32 * alpha + 255 * (255 - alpha)) / 255) as u8;
        *pixel = Rgba([blend(r), blend(g), blend(b), 255]);
    }
}

/// Largest size with the same aspect ratio that fits inside the slide area
pub fn fit_size(width: u32, height: u32) -> (u32, u32) {
    let scale = ((SCREEN_WIDTH - SLIDE_MARGIN) / width as f32).min((SCREEN_HEIGHT - SLIDE_MARGIN) / height as f32);
    let w = ((width as f32 * scale).round() as u32).max(1);
    let h = ((height as f32 * scale).round() as u32).max(1);
    (w, h)
}

/// One page of the slideshow
#[derive(Debug, Clone)]
pub struct Slide {
    pub source: PathBuf,
    pub image: Rc<SlideImage>,
    /// Why the placeholder is shown, if it is
    pub fault: Option<Rc<AssetError>>,
}

impl Slide {
    pub fn load(path: &Path) -> Self {
        match SlideImage::load(path) {
            Ok(image) => Self {
                source: path.to_path_buf(),
                image: Rc::new(image),
                fault: None,
            },
            Err(e) => {
                log::warn!("{e}; showing placeholder");
                Self {
                    source: path.to_path_buf(),
                    image: Rc::new(SlideImage::placeholder()),
                    fault: Some(Rc::new(e)),
                }
            }
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.fault.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct Slideshow {
    slides: Vec<Slide>,
    current: usize,
    closed: bool,
}

impl Slideshow {
    /// Load every slide up front. Failed loads become placeholders.
    pub fn load(paths: &[PathBuf]) -> Self {
        let slides: Vec<Slide> = paths.iter().map(|p| Slide::load(p)).collect();
        let failed = slides.iter().filter(|s| s.is_placeholder()).count();
        log::info!("Slideshow ready: {} slides, {} placeholders", slides.len(), failed);
        Self::from_slides(slides)
    }

    pub fn from_slides(slides: Vec<Slide>) -> Self {
        Self {
            slides,
            current: 0,
            closed: false,
        }
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&Slide> {
        self.slides.get(self.current)
    }

    pub fn has_previous(&self) -> bool {
        self.current > 0
    }

    pub fn has_next(&self) -> bool {
        self.current + 1 < self.slides.len()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Slides that fell back to the placeholder
    pub fn faults(&self) -> impl Iterator<Item = &AssetError> {
        self.slides.iter().filter_map(|s| s.fault.as_deref())
    }

    pub fn previous_slide(&mut self) {
        if self.has_previous() {
            self.current -= 1;
        }
    }

    pub fn next_slide(&mut self) {
        if self.has_next() {
            self.current += 1;
        }
    }

    /// Close, previous, next; the first region hit wins
    pub fn handle_pointer(&mut self, pos: Vec2) {
        if CLOSE_BUTTON.contains(pos) {
            self.closed = true;
        } else if self.has_previous() && SLIDE_PREV_BUTTON.contains(pos) {
            self.previous_slide();
        } else if self.has_next() && SLIDE_NEXT_BUTTON.contains(pos) {
            self.next_slide();
        }
    }
}
