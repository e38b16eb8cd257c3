/// Featured multi-cell regions and bounds clamping
pub mod feature;
/// Scale, center, crop, and border arithmetic
pub mod geometry;
/// Cell geometry and placement planning
pub mod grid;

pub use geometry::{Rect, Size};
pub use grid::{GridSpec, Placement};
