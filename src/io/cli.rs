//! Command-line interface and option resolution
//!
//! Values come from three layers: the settings file, then the command line
//! on top of it, then built-in defaults for anything still unset.

use crate::io::configuration::{
    APP_TITLE, DEFAULT_BACKGROUND_BLUR, DEFAULT_BACKGROUND_RGBA, DEFAULT_BORDER_RGBA,
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_COLUMNS, DEFAULT_ERROR_LOG,
    DEFAULT_MARGIN, DEFAULT_OUTPUT_FILE, DEFAULT_PADDING, DEFAULT_ROWS, MAX_FEATURED_IMAGES,
};
use crate::io::error::{ErrorLog, Result, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::settings::{SettingsFile, expand_list, parse_feature_arg, parse_int_list, parse_rgba};
use crate::layout::feature::FeatureSpec;
use crate::layout::geometry::Size;
use crate::render::FileLoader;
use crate::session::create_montages;
use crate::session::options::{
    ImageEntry, InsertedOptions, LabelOptions, MontageOptions, Rgba, ShuffleMode, StampMode,
};
use clap::{ArgAction, Parser};
use tracing::{info, warn};
use std::path::{Path, PathBuf};

const COMMAND_LINE: &str = "<command line>";

#[derive(Parser, Debug, Default)]
#[command(name = "make-montage")]
#[command(version, about = "Create an image montage given a list of image files")]
/// Command-line arguments for the montage tool
// Mirrors the settings file, which has several independent on/off switches
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Image files to include; `@FILE` reads names from FILE
    #[arg(value_name = "IMAGES")]
    pub images: Vec<String>,

    /// Settings file to load before applying other arguments
    #[arg(short, long, value_name = "FILE")]
    pub settings_file: Option<PathBuf>,

    /// Output file name; the extension picks the image format
    #[arg(short, long)]
    pub output_file: Option<String>,

    /// Directory for output files
    #[arg(short = 'd', long)]
    pub output_dir: Option<String>,

    /// Canvas width in pixels
    #[arg(short = 'x', long)]
    pub canvas_width: Option<u32>,

    /// Canvas height in pixels
    #[arg(short = 'y', long)]
    pub canvas_height: Option<u32>,

    /// Column counts, comma separated; one is picked per montage
    #[arg(short, long, value_name = "LIST")]
    pub columns: Option<String>,

    /// Row counts, comma separated; one is picked per montage
    #[arg(short, long, value_name = "LIST")]
    pub rows: Option<String>,

    /// Outer margin in pixels
    #[arg(short, long)]
    pub margin: Option<u32>,

    /// Padding inside each cell in pixels
    #[arg(short, long)]
    pub padding: Option<u32>,

    /// Canvas color as r,g,b or r,g,b,a (alpha sets background image opacity)
    #[arg(short = 'b', long, value_name = "RGBA")]
    pub background_rgba: Option<String>,

    /// Border width in pixels
    #[arg(long)]
    pub border_width: Option<u32>,

    /// Border color as r,g,b or r,g,b,a
    #[arg(long, value_name = "RGBA")]
    pub border_rgba: Option<String>,

    /// Background image, added ahead of any listed in the settings file
    #[arg(short = 'g', long)]
    pub background_image: Option<String>,

    /// Blur radius for the background image (0 = none)
    #[arg(long)]
    pub background_blur: Option<u32>,

    /// First featured image as "(col,ncols,row,nrows,file)"
    #[arg(long = "feature-1", value_name = "ATTRS")]
    pub feature_1: Option<String>,

    /// Second featured image as "(col,ncols,row,nrows,file)"
    #[arg(long = "feature-2", value_name = "ATTRS")]
    pub feature_2: Option<String>,

    /// Letters selecting what to randomize: i=images, b=background,
    /// c=columns, r=rows, f=feature files, n=no wrap
    #[arg(long)]
    pub shuffle_mode: Option<String>,

    /// Number of montages to create
    #[arg(long)]
    pub shuffle_count: Option<usize>,

    /// Date-time stamp in output names: 0=none, 1=left, 2=right,
    /// 3=left with microseconds, 4=right with microseconds
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=4))]
    pub stamp_mode: Option<u32>,

    /// Zoom images to fill their cells, cropping the overflow
    #[arg(short = 'z', long = "zoom")]
    pub zoom: bool,

    /// Error log file (default: montage-errors.txt)
    #[arg(long, value_name = "FILE")]
    pub error_log: Option<PathBuf>,

    /// Do not write an error log
    #[arg(long)]
    pub no_log: bool,

    /// Write a settings dump next to each output image
    #[arg(long)]
    pub write_opts: bool,

    /// TrueType font for file name labels
    #[arg(long, value_name = "FILE")]
    pub label_font: Option<String>,

    /// Label size in points (0 = no labels)
    #[arg(long)]
    pub label_size: Option<u32>,

    /// Seed for reproducible shuffling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Only report warnings and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// More detail (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Load the settings file, if any, and resolve all options
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file cannot be read or any value
    /// cannot be interpreted
    pub fn to_options(&self) -> Result<MontageOptions> {
        let settings = match &self.settings_file {
            Some(path) => SettingsFile::load(path)?,
            None => SettingsFile::default(),
        };
        self.resolve_options(settings)
    }

    /// Resolve options from already loaded settings
    ///
    /// # Errors
    ///
    /// Returns an error if a list value is not numeric, the stamp mode is
    /// unknown, too many features are given, or an `@` list cannot be read
    pub fn resolve_options(&self, settings: SettingsFile) -> Result<MontageOptions> {
        let command_line = Path::new(COMMAND_LINE);

        let columns = match &self.columns {
            Some(raw) => Some(parse_int_list::<u32>(raw, command_line)?),
            None => settings.columns,
        }
        .filter(|list| !list.is_empty())
        .unwrap_or_else(|| DEFAULT_COLUMNS.to_vec());

        let rows = match &self.rows {
            Some(raw) => Some(parse_int_list::<u32>(raw, command_line)?),
            None => settings.rows,
        }
        .filter(|list| !list.is_empty())
        .unwrap_or_else(|| DEFAULT_ROWS.to_vec());

        let stamp_code = self.stamp_mode.or(settings.stamp_mode).unwrap_or(0);
        let stamp = StampMode::from_code(stamp_code)
            .ok_or_else(|| invalid_parameter("stamp_mode", &stamp_code, &"expected 0 to 4"))?;

        let background = self
            .background_rgba
            .clone()
            .or(settings.background_rgba)
            .map_or(Rgba(DEFAULT_BACKGROUND_RGBA), |raw| {
                parse_rgba(&raw, Rgba(DEFAULT_BACKGROUND_RGBA))
            });
        let border = self
            .border_rgba
            .clone()
            .or(settings.border_rgba)
            .map_or(Rgba(DEFAULT_BORDER_RGBA), |raw| {
                parse_rgba(&raw, Rgba(DEFAULT_BORDER_RGBA))
            });

        let mut features = settings.features;
        for raw in [&self.feature_1, &self.feature_2].into_iter().flatten() {
            if let Some(feature) = parse_feature_arg(raw)? {
                features.push(feature);
            }
        }
        if features.len() > MAX_FEATURED_IMAGES {
            return Err(invalid_parameter(
                "features",
                &features.len(),
                &format!("at most {MAX_FEATURED_IMAGES} featured images are supported"),
            ));
        }

        let cli_images: Vec<String> =
            self.images.iter().filter(|i| !i.is_empty()).cloned().collect();
        let mut images = expand_list(&cli_images)?;
        images.extend(settings.images);

        let mut background_images = Vec::new();
        if let Some(raw) = self.background_image.as_ref().filter(|s| !s.is_empty()) {
            background_images.extend(expand_list(std::slice::from_ref(raw))?);
        }
        background_images.extend(settings.background_images);

        let shuffle = ShuffleMode::parse(
            self.shuffle_mode
                .as_deref()
                .or(settings.shuffle_mode.as_deref())
                .unwrap_or_default(),
        );

        Ok(MontageOptions {
            output_file: self
                .output_file
                .clone()
                .or(settings.output_file)
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_string()),
            output_dir: self
                .output_dir
                .clone()
                .or(settings.output_dir)
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
            canvas: Size::new(
                self.canvas_width
                    .or(settings.canvas_width)
                    .unwrap_or(DEFAULT_CANVAS_WIDTH),
                self.canvas_height
                    .or(settings.canvas_height)
                    .unwrap_or(DEFAULT_CANVAS_HEIGHT),
            ),
            columns,
            rows,
            margin: self.margin.or(settings.margin).unwrap_or(DEFAULT_MARGIN),
            padding: self.padding.or(settings.padding).unwrap_or(DEFAULT_PADDING),
            background,
            background_blur: self
                .background_blur
                .or(settings.background_blur)
                .unwrap_or(DEFAULT_BACKGROUND_BLUR),
            border_width: self.border_width.or(settings.border_width).unwrap_or(0),
            border,
            zoom: self.zoom || settings.do_zoom.unwrap_or(false),
            features: features.into_iter().map(to_entries).collect(),
            images: entries(&images),
            inserted: InsertedOptions {
                images: entries(&settings.images1),
                start: settings.img1_start.unwrap_or(1),
                frequency: settings
                    .img1_freq
                    .filter(|f| !f.is_empty())
                    .unwrap_or_else(|| vec![1]),
                positions: settings.img1_pos.unwrap_or_default(),
            },
            background_images: entries(&background_images),
            shuffle,
            shuffle_count: self.shuffle_count.or(settings.shuffle_count).unwrap_or(1),
            stamp,
            write_options: self.write_opts || settings.write_opts.unwrap_or(false),
            label: LabelOptions {
                font: self
                    .label_font
                    .clone()
                    .or(settings.label_font)
                    .unwrap_or_default(),
                size: self.label_size.or(settings.label_size).unwrap_or(0),
            },
            seed: self.seed,
        })
    }
}

fn entries(raw: &[String]) -> Vec<ImageEntry> {
    raw.iter().map(|s| ImageEntry::parse(s)).collect()
}

fn to_entries(feature: FeatureSpec<String>) -> FeatureSpec<ImageEntry> {
    FeatureSpec::new(feature.area, entries(&feature.files))
}

/// Runs one invocation and reports a failure to the error log
pub struct MontageProcessor {
    cli: Cli,
}

impl MontageProcessor {
    /// Create a processor for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Resolve options and create every montage
    ///
    /// # Errors
    ///
    /// Returns an error if the error log location is invalid, the options
    /// cannot be resolved or validated, or rendering fails. Failures after
    /// the log location is known are also appended to the log.
    pub fn process(&self) -> Result<Vec<PathBuf>> {
        let error_log =
            ErrorLog::resolve(self.cli.error_log.as_deref(), self.cli.no_log, DEFAULT_ERROR_LOG)?;

        let result = self.run();
        if let Err(error) = &result {
            if let ErrorLog::File(path) = &error_log {
                info!("Writing '{}'.", path.display());
            }
            if let Err(log_error) = error_log.append(APP_TITLE, error) {
                warn!("{log_error}");
            }
        }
        result
    }

    fn run(&self) -> Result<Vec<PathBuf>> {
        info!("{APP_TITLE}");
        let options = self.cli.to_options()?;

        let count = options.montage_count();
        let progress =
            (self.cli.should_show_progress() && count > 1).then(|| ProgressManager::new(count));

        let written = create_montages(&options, &FileLoader, progress.as_ref());

        if let Some(pm) = &progress {
            if written.is_err() {
                warn!("Stopped after {} of {count} montages.", pm.completed());
            }
            pm.finish();
        }
        written
    }
}
