//! Rendering: loading sources and drawing montage instances
//!
//! This module contains:
//! - The image loading seam and EXIF orientation handling
//! - Pixel-level canvas primitives
//! - File name labels
//! - The compositor that walks an instance's placements

/// Fill, paste, blend, and blur primitives
pub mod canvas;
/// Placement-by-placement rendering of one instance
pub mod compositor;
/// Font loading and label drawing
pub mod label;
/// Source image loaders
pub mod source;

pub use compositor::Compositor;
pub use source::{FileLoader, ImageLoader, MemoryLoader};
