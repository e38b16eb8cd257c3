//! Draws a prepared instance onto a canvas

use crate::io::configuration::LABEL_OFFSET;
use crate::io::error::Result;
use crate::layout::geometry::{Size, crop_box, fill_size, fit_placement};
use crate::render::canvas::{blend, blend_rect, box_blur, crop, new_canvas, paste, resize};
use crate::render::label::LabelFont;
use crate::render::source::ImageLoader;
use crate::session::options::{ImageEntry, MontageOptions};
use crate::session::state::RunState;
use image::RgbImage;
use tracing::warn;
use std::path::Path;

/// Renders run states with one loader and (optionally) one label font
pub struct Compositor<'a, L: ImageLoader> {
    options: &'a MontageOptions,
    loader: &'a L,
    font: Option<LabelFont>,
}

impl<'a, L: ImageLoader> Compositor<'a, L> {
    /// Create a compositor, loading the label font if labels are enabled
    pub fn new(options: &'a MontageOptions, loader: &'a L) -> Self {
        let font = if options.label.is_enabled() {
            LabelFont::load(Path::new(&options.label.font), options.label.size)
        } else {
            None
        };
        Self {
            options,
            loader,
            font,
        }
    }

    /// Render one instance
    ///
    /// # Errors
    ///
    /// Returns an error if the background or any placed image cannot be loaded
    pub fn compose(&self, run: &mut RunState) -> Result<RgbImage> {
        let options = self.options;
        run.say(format!(
            "Creating new image (canvas size = {} x {} pixels).",
            options.canvas.width, options.canvas.height
        ));

        let mut canvas = new_canvas(options.canvas, options.background.rgb());

        if let Some(ImageEntry::File(path)) = run.background.clone() {
            self.draw_background(&mut canvas, &path, run)?;
        }

        let placements = run.placements.clone();
        let mut next_image = 0;
        for placement in &placements {
            let entry = match &placement.pinned {
                Some(entry) => entry.clone(),
                None => {
                    let Some(entry) = run.images.get(next_image).cloned() else {
                        continue;
                    };
                    next_image += 1;
                    entry
                }
            };

            let ImageEntry::File(path) = &entry else {
                run.say("Skip placement.");
                continue;
            };

            run.say(format!("Placing image '{}'", path.display()));
            let source = self.loader.load(path)?;
            let fitted = fit_placement(
                Size::new(source.width(), source.height()),
                placement.rect,
                options.zoom,
                options.border_width,
            );

            if let Some(border) = fitted.border {
                blend_rect(
                    &mut canvas,
                    border,
                    options.border.rgb(),
                    options.border.alpha(),
                );
            }

            if fitted.target.size().is_empty() {
                run.say(format!(
                    "WARNING: No room left for '{}' inside its border.",
                    path.display()
                ));
                continue;
            }

            let resized = resize(&source, fitted.resize_to);
            let drawn = match fitted.crop {
                Some(region) => crop(&resized, region),
                None => resized,
            };
            paste(&mut canvas, &drawn, fitted.target.x, fitted.target.y);

            if let Some(font) = &self.font {
                let label_x = placement.rect.x;
                let label_y = fitted.target.y
                    + fitted.target.height
                    + options.border_width
                    + LABEL_OFFSET;
                if !font.draw(&mut canvas, &entry.label(), label_x, label_y) {
                    warn!(
                        "Cannot place label. Try increasing 'padding' and/or 'margin' values."
                    );
                }
            }
        }

        Ok(canvas)
    }

    fn draw_background(&self, canvas: &mut RgbImage, path: &Path, run: &mut RunState) -> Result<()> {
        let options = self.options;
        run.say(format!("Adding background image '{}'", path.display()));

        let source = self.loader.load(path)?;
        let original = Size::new(source.width(), source.height());
        run.note(format!(
            "(original) bg_image.size=({}, {})",
            original.width, original.height
        ));

        let zoom_size = fill_size(original, options.canvas);
        run.note(format!("zoom_size=({}, {})", zoom_size.width, zoom_size.height));
        let resized = resize(&source, zoom_size);

        let region = crop_box(zoom_size, options.canvas);
        run.note(format!(
            "crop_box=({}, {}, {}, {})",
            region.x1, region.y1, region.x2, region.y2
        ));
        let cropped = crop(&resized, region);

        if cropped.dimensions() != (options.canvas.width, options.canvas.height) {
            run.say(format!(
                "WARNING: bg_image.size=({}, {}) but canvas_size=({}, {}).",
                cropped.width(),
                cropped.height(),
                options.canvas.width,
                options.canvas.height
            ));
        }

        let blurred = box_blur(&cropped, options.background_blur);
        blend(canvas, &blurred, 0, 0, options.background.alpha());
        Ok(())
    }
}
