//! Resolved montage options, read-only for the duration of a run

use crate::io::configuration::{
    DEFAULT_BACKGROUND_BLUR, DEFAULT_BACKGROUND_RGBA, DEFAULT_BORDER_RGBA, DEFAULT_CANVAS_HEIGHT,
    DEFAULT_CANVAS_WIDTH, DEFAULT_COLUMNS, DEFAULT_MARGIN, DEFAULT_OUTPUT_FILE, DEFAULT_PADDING,
    DEFAULT_ROWS, MAX_SHUFFLE_COUNT, SKIP_MARKER,
};
use crate::layout::feature::FeatureSpec;
use crate::layout::geometry::Size;
use std::fmt;
use std::path::{Path, PathBuf};

/// One entry of an image list
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ImageEntry {
    /// A source image file
    File(PathBuf),
    /// Leave the slot empty
    Skip,
}

impl ImageEntry {
    /// Interpret a raw list entry, recognizing the skip marker
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed == SKIP_MARKER {
            Self::Skip
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }

    /// Path of a file entry
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            Self::Skip => None,
        }
    }

    /// Base file name used for labels
    pub fn label(&self) -> String {
        match self {
            Self::File(path) => path
                .file_name()
                .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().to_string()),
            Self::Skip => SKIP_MARKER.to_string(),
        }
    }
}

impl fmt::Display for ImageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Skip => f.write_str(SKIP_MARKER),
        }
    }
}

/// Color with alpha, as `[r, g, b, a]`
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    /// Color channels without alpha
    pub const fn rgb(&self) -> [u8; 3] {
        [self.0[0], self.0[1], self.0[2]]
    }

    /// Alpha channel
    pub const fn alpha(&self) -> u8 {
        self.0[3]
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0;
        write!(f, "{r},{g},{b},{a}")
    }
}

/// Which aspects of a montage are randomized per instance
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ShuffleMode {
    /// `i`: shuffle image order
    pub images: bool,
    /// `b`: pick the background image at random
    pub background: bool,
    /// `c`: pick the column count at random
    pub columns: bool,
    /// `r`: pick the row count at random
    pub rows: bool,
    /// `f`: shuffle each feature's file list
    pub feature_files: bool,
    /// `n`: stop filling cells once the pool has been used up
    pub no_wrap: bool,
}

impl ShuffleMode {
    /// Parse the flag letters; case is ignored and unknown letters skipped
    pub fn parse(flags: &str) -> Self {
        let flags = flags.to_lowercase();
        Self {
            images: flags.contains('i'),
            background: flags.contains('b'),
            columns: flags.contains('c'),
            rows: flags.contains('r'),
            feature_files: flags.contains('f'),
            no_wrap: flags.contains('n'),
        }
    }
}

impl fmt::Display for ShuffleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters = [
            (self.images, 'i'),
            (self.background, 'b'),
            (self.columns, 'c'),
            (self.rows, 'r'),
            (self.feature_files, 'f'),
            (self.no_wrap, 'n'),
        ];
        for (set, letter) in letters {
            if set {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

/// Date-time stamp added to output file names
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum StampMode {
    /// No stamp
    #[default]
    None,
    /// Stamp before the file name
    Left,
    /// Stamp after the file name
    Right,
    /// Stamp with microseconds before the file name
    LeftMicros,
    /// Stamp with microseconds after the file name
    RightMicros,
}

impl StampMode {
    /// Map the numeric mode 0..=4; other values are `None`
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::None),
            1 => Some(Self::Left),
            2 => Some(Self::Right),
            3 => Some(Self::LeftMicros),
            4 => Some(Self::RightMicros),
            _ => None,
        }
    }

    /// Numeric mode as used on the command line and in settings files
    pub const fn code(&self) -> u32 {
        match self {
            Self::None => 0,
            Self::Left => 1,
            Self::Right => 2,
            Self::LeftMicros => 3,
            Self::RightMicros => 4,
        }
    }
}

/// File name labels drawn under each image
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelOptions {
    /// Font file; empty disables labels
    pub font: String,
    /// Point size; 0 disables labels
    pub size: u32,
}

impl LabelOptions {
    /// Both a font and a positive size are configured
    pub const fn is_enabled(&self) -> bool {
        !self.font.is_empty() && self.size > 0
    }
}

/// Secondary image list and its cadence
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InsertedOptions {
    /// The secondary images
    pub images: Vec<ImageEntry>,
    /// First 1-based instance that may receive one
    pub start: usize,
    /// Repeating instance intervals
    pub frequency: Vec<usize>,
    /// 1-based positions, cycled across instances; empty mixes them in
    pub positions: Vec<usize>,
}

impl Default for InsertedOptions {
    fn default() -> Self {
        Self {
            images: Vec::new(),
            start: 1,
            frequency: vec![1],
            positions: Vec::new(),
        }
    }
}

/// Fully resolved options for one invocation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MontageOptions {
    /// Output file name (stem and extension)
    pub output_file: String,
    /// Directory for output files; `None` is the working directory
    pub output_dir: Option<PathBuf>,
    /// Canvas dimensions
    pub canvas: Size,
    /// Column count candidates
    pub columns: Vec<u32>,
    /// Row count candidates
    pub rows: Vec<u32>,
    /// Outer gutter in pixels
    pub margin: u32,
    /// Per-cell inset in pixels
    pub padding: u32,
    /// Canvas fill; its alpha is the background image opacity
    pub background: Rgba,
    /// Box blur radius for background images
    pub background_blur: u32,
    /// Border width in pixels; 0 draws none
    pub border_width: u32,
    /// Border color; its alpha is the border opacity
    pub border: Rgba,
    /// Fill-and-crop instead of fit-and-center
    pub zoom: bool,
    /// Featured regions
    pub features: Vec<FeatureSpec<ImageEntry>>,
    /// Primary image list
    pub images: Vec<ImageEntry>,
    /// Secondary image list
    pub inserted: InsertedOptions,
    /// Background image candidates
    pub background_images: Vec<ImageEntry>,
    /// Randomization flags
    pub shuffle: ShuffleMode,
    /// Requested number of instances
    pub shuffle_count: usize,
    /// Output name stamping
    pub stamp: StampMode,
    /// Write a settings dump next to every output
    pub write_options: bool,
    /// File name labels
    pub label: LabelOptions,
    /// Seed for reproducible shuffles
    pub seed: Option<u64>,
}

impl Default for MontageOptions {
    fn default() -> Self {
        Self {
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            output_dir: None,
            canvas: Size::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT),
            columns: DEFAULT_COLUMNS.to_vec(),
            rows: DEFAULT_ROWS.to_vec(),
            margin: DEFAULT_MARGIN,
            padding: DEFAULT_PADDING,
            background: Rgba(DEFAULT_BACKGROUND_RGBA),
            background_blur: DEFAULT_BACKGROUND_BLUR,
            border_width: 0,
            border: Rgba(DEFAULT_BORDER_RGBA),
            zoom: false,
            features: Vec::new(),
            images: Vec::new(),
            inserted: InsertedOptions::default(),
            background_images: Vec::new(),
            shuffle: ShuffleMode::default(),
            shuffle_count: 1,
            stamp: StampMode::None,
            write_options: false,
            label: LabelOptions::default(),
            seed: None,
        }
    }
}

impl MontageOptions {
    /// Number of instances this invocation renders
    pub fn montage_count(&self) -> usize {
        self.shuffle_count.clamp(1, MAX_SHUFFLE_COUNT)
    }
}
