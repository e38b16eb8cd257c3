//! Output file naming and montage export

use crate::io::configuration::OPTIONS_SUFFIX;
use crate::io::error::{MontageError, Result, WithPath};
use crate::io::settings::expand_home;
use crate::session::options::{MontageOptions, StampMode};
use chrono::{DateTime, Local};
use image::RgbImage;
use std::path::{Path, PathBuf};

/// Builds the output path for each instance of one invocation
#[derive(Clone, Debug)]
pub struct OutputNamer {
    dir: PathBuf,
    file: PathBuf,
    numbered: bool,
    stamp: StampMode,
    started: DateTime<Local>,
}

impl OutputNamer {
    /// Namer for `options`, stamping with the current local time
    pub fn new(options: &MontageOptions) -> Self {
        Self::at(options, Local::now())
    }

    /// Namer for `options` with a fixed invocation time
    pub fn at(options: &MontageOptions, started: DateTime<Local>) -> Self {
        let dir = options
            .output_dir
            .as_deref()
            .map_or_else(PathBuf::new, expand_home);
        Self {
            dir,
            file: PathBuf::from(&options.output_file),
            numbered: options.montage_count() > 1,
            stamp: options.stamp,
            started,
        }
    }

    /// Output path for the 1-based `instance`
    pub fn path_for(&self, instance: usize) -> PathBuf {
        let stem = self.file.with_extension("");
        let mut name = stem.to_string_lossy().to_string();

        if self.numbered {
            name = format!("{name}-{instance:03}");
        }

        match self.stamp {
            StampMode::None => {}
            StampMode::Left | StampMode::LeftMicros => name = format!("{}_{name}", self.stamp()),
            StampMode::Right | StampMode::RightMicros => name = format!("{name}_{}", self.stamp()),
        }

        let mut path = PathBuf::from(name);
        if let Some(extension) = self.file.extension() {
            path.set_extension(extension);
        }
        self.dir.join(path)
    }

    fn stamp(&self) -> String {
        let format = match self.stamp {
            StampMode::LeftMicros | StampMode::RightMicros => "%Y%m%d_%H%M%S_%6f",
            _ => "%Y%m%d_%H%M%S",
        };
        self.started.format(format).to_string()
    }
}

/// Path of the settings dump written next to `image_path`
pub fn options_path(image_path: &Path) -> PathBuf {
    let stem = image_path.with_extension("");
    PathBuf::from(format!("{}{OPTIONS_SUFFIX}.txt", stem.display()))
}

/// Save a composed montage; the format follows the file extension
///
/// # Errors
///
/// Returns an error if the output directory does not exist or encoding fails
pub fn save_canvas(canvas: &RgbImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.is_dir() {
            return Err(std::io::Error::from(std::io::ErrorKind::NotFound))
                .with_path(parent, "find output directory");
        }
    }

    canvas
        .save(path)
        .map_err(|source| MontageError::ImageExport {
            path: path.to_path_buf(),
            source,
        })
}
