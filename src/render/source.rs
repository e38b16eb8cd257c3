//! Source image loading with EXIF orientation applied

use crate::io::error::{MontageError, Result};
use crate::io::settings::expand_home;
use image::{DynamicImage, RgbImage, imageops};
use tracing::debug;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Loads source images for the compositor
///
/// Implementations return upright pixels: any orientation stored in image
/// metadata is already applied.
pub trait ImageLoader {
    /// Load the image at `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be read or decoded
    fn load(&self, path: &Path) -> Result<RgbImage>;

    /// Whether `path` can be offered to [`ImageLoader::load`]
    fn exists(&self, path: &Path) -> bool {
        expand_home(path).exists()
    }
}

/// Reads images from disk with the `image` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct FileLoader;

impl ImageLoader for FileLoader {
    fn load(&self, path: &Path) -> Result<RgbImage> {
        let path = &expand_home(path);
        let decoded = image::ImageReader::open(path)
            .map_err(|e| MontageError::ImageLoad {
                path: path.to_path_buf(),
                source: image::ImageError::IoError(e),
            })?
            .with_guessed_format()
            .map_err(|e| MontageError::ImageLoad {
                path: path.to_path_buf(),
                source: image::ImageError::IoError(e),
            })?
            .decode()
            .map_err(|e| MontageError::ImageLoad {
                path: path.to_path_buf(),
                source: e,
            })?;

        let orientation = read_orientation(path).unwrap_or(1);
        Ok(apply_orientation(&decoded, orientation))
    }
}

/// In-memory images keyed by path, for tests and generated content
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    images: HashMap<PathBuf, RgbImage>,
}

impl MemoryLoader {
    /// Create an empty loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `image` under `path`
    pub fn insert(&mut self, path: impl Into<PathBuf>, image: RgbImage) {
        self.images.insert(path.into(), image);
    }
}

impl ImageLoader for MemoryLoader {
    fn load(&self, path: &Path) -> Result<RgbImage> {
        self.images
            .get(path)
            .cloned()
            .ok_or_else(|| MontageError::ImageLoad {
                path: path.to_path_buf(),
                source: image::ImageError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "image not registered",
                )),
            })
    }

    fn exists(&self, path: &Path) -> bool {
        self.images.contains_key(path)
    }
}

fn read_orientation(path: &Path) -> Option<u32> {
    let file = File::open(path).ok()?;
    let mut reader = BufReader::new(file);
    let exif = exif::Reader::new().read_from_container(&mut reader).ok()?;
    let field = exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)?;
    let value = field.value.get_uint(0)?;
    debug!("exif orientation {} for {}", value, path.display());
    Some(value)
}

/// Rotate or flip `image` according to an EXIF orientation value
///
/// Values outside 2..=8 leave the image as stored.
pub fn apply_orientation(image: &DynamicImage, orientation: u32) -> RgbImage {
    let rgb = image.to_rgb8();
    match orientation {
        2 => imageops::flip_horizontal(&rgb),
        3 => imageops::rotate180(&rgb),
        4 => imageops::flip_vertical(&rgb),
        // transpose
        5 => imageops::flip_horizontal(&imageops::rotate90(&rgb)),
        6 => imageops::rotate90(&rgb),
        // transverse
        7 => imageops::flip_horizontal(&imageops::rotate270(&rgb)),
        8 => imageops::rotate270(&rgb),
        _ => rgb,
    }
}
