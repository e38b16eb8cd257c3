//! File name labels drawn beneath placed images

use crate::io::configuration::LABEL_LUMINANCE_THRESHOLD;
use crate::render::canvas::luminance_at;
use ab_glyph::{FontVec, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_text_mut;
use tracing::warn;
use std::path::Path;

/// Loaded font plus size, ready to draw labels
pub struct LabelFont {
    font: FontVec,
    scale: PxScale,
}

impl LabelFont {
    /// Load a TrueType or OpenType font file
    ///
    /// Returns `None` (after logging a warning) if the file cannot be read
    /// or parsed; labels are then skipped for the whole run.
    pub fn load(path: &Path, size: u32) -> Option<Self> {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!("Cannot load font '{}': {err}", path.display());
                return None;
            }
        };
        match FontVec::try_from_vec(bytes) {
            Ok(font) => Some(Self {
                font,
                scale: PxScale::from(size as f32),
            }),
            Err(err) => {
                warn!("Cannot load font '{}': {err}", path.display());
                None
            }
        }
    }

    /// Draw `text` with its top-left at `(x, y)`
    ///
    /// The fill is black over light canvas pixels and white over dark ones,
    /// judged at the anchor. Returns `false` when the anchor lies outside
    /// the canvas and nothing was drawn.
    pub fn draw(&self, canvas: &mut RgbImage, text: &str, x: u32, y: u32) -> bool {
        let Some(luminance) = luminance_at(canvas, x, y) else {
            return false;
        };
        draw_text_mut(
            canvas,
            label_color(luminance),
            x as i32,
            y as i32,
            self.scale,
            &self.font,
            text,
        );
        true
    }
}

/// Text color for a background of the given mean RGB value
pub const fn label_color(luminance: u32) -> Rgb<u8> {
    if luminance > LABEL_LUMINANCE_THRESHOLD {
        Rgb([0, 0, 0])
    } else {
        Rgb([255, 255, 255])
    }
}
