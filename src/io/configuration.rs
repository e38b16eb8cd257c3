//! Default option values and fixed limits

/// Name and version written into settings dumps and the error log
pub const APP_TITLE: &str = concat!("make-montage (v", env!("CARGO_PKG_VERSION"), ")");

// Output settings
/// Output file name used when none is given
pub const DEFAULT_OUTPUT_FILE: &str = "output.jpg";
/// Suffix appended to an output stem for its settings dump
pub const OPTIONS_SUFFIX: &str = "_options";
/// Error log written in the working directory unless overridden
pub const DEFAULT_ERROR_LOG: &str = "montage-errors.txt";

// Canvas and grid
/// Canvas width in pixels
pub const DEFAULT_CANVAS_WIDTH: u32 = 640;
/// Canvas height in pixels
pub const DEFAULT_CANVAS_HEIGHT: u32 = 480;
/// Outer gutter around the whole grid
pub const DEFAULT_MARGIN: u32 = 10;
/// Inset applied inside every cell
pub const DEFAULT_PADDING: u32 = 10;
/// Column count candidates
pub const DEFAULT_COLUMNS: &[u32] = &[2];
/// Row count candidates
pub const DEFAULT_ROWS: &[u32] = &[2];

// Colors
/// Canvas fill color
pub const DEFAULT_BACKGROUND_RGBA: [u8; 4] = [255, 255, 255, 255];
/// Border color
pub const DEFAULT_BORDER_RGBA: [u8; 4] = [0, 0, 0, 255];
/// Box blur radius applied to a background image
pub const DEFAULT_BACKGROUND_BLUR: u32 = 3;

// Limits
/// Upper bound on montage instances per invocation
///
/// The zero-padded instance number in output names is sized to match.
pub const MAX_SHUFFLE_COUNT: usize = 999;
/// Feature sections read from a settings file
pub const MAX_FEATURED_IMAGES: usize = 4;

/// File name placeholder meaning "leave this slot empty"
pub const SKIP_MARKER: &str = "(skip)";

// Labels
/// Vertical gap between a placed image (or its border) and its label
pub const LABEL_OFFSET: u32 = 3;
/// Mean RGB above which labels are drawn in black instead of white
pub const LABEL_LUMINANCE_THRESHOLD: u32 = 128;
