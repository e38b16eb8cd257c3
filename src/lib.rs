//! Image montage builder
//!
//! Arranges source images on a grid of cells over a canvas, with optional
//! featured images spanning several cells, a blurred background image,
//! borders, and file name labels. One invocation can render many montage
//! instances, cycling through the image list across them.

#![forbid(unsafe_code)]

/// Command line, settings files, output files, and error handling
pub mod io;
/// Grid, feature, and per-image geometry
pub mod layout;
/// Image loading and drawing
pub mod render;
/// Image, grid, and background choice across instances
pub mod selection;
/// Options, session state, and the run loop
pub mod session;

pub use io::error::{MontageError, Result};
