//! Grid placement: cell geometry and the ordered list of placements
//!
//! Features are emitted first, one placement each with their pinned
//! image. Remaining cells follow in row-major order without a pinned image
//! and are filled from the pool in emission order.

use crate::layout::feature::{FeatureArea, outside_features};
use crate::layout::geometry::{Rect, Size};

/// One rectangle to be filled with an image
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement<T> {
    /// Padded rectangle on the canvas
    pub rect: Rect,
    /// Image fixed to this placement; `None` draws from the pool
    pub pinned: Option<T>,
}

/// Grid parameters for one montage instance
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GridSpec {
    /// Canvas dimensions
    pub canvas: Size,
    /// Column count chosen for this instance
    pub columns: u32,
    /// Row count chosen for this instance
    pub rows: u32,
    /// Outer gutter in pixels
    pub margin: u32,
    /// Per-cell inset in pixels
    pub padding: u32,
}

impl GridSpec {
    /// Size of one grid cell before padding
    pub const fn cell_size(&self) -> Size {
        let usable_w = self.canvas.width.saturating_sub(self.margin * 2);
        let usable_h = self.canvas.height.saturating_sub(self.margin * 2);
        Size::new(
            usable_w / nonzero(self.columns),
            usable_h / nonzero(self.rows),
        )
    }

    /// Usable area inside one cell after padding
    pub const fn inner_size(&self) -> Size {
        let cell = self.cell_size();
        Size::new(
            cell.width.saturating_sub(self.padding * 2),
            cell.height.saturating_sub(self.padding * 2),
        )
    }

    /// Total cells in the grid
    pub const fn cell_count(&self) -> u32 {
        self.columns * self.rows
    }

    /// Padded rectangle of the 0-based cell `(col, row)`
    pub const fn cell_rect(&self, col: u32, row: u32) -> Rect {
        let cell = self.cell_size();
        let inner = self.inner_size();
        Rect::new(
            self.margin + col * cell.width + self.padding,
            self.margin + row * cell.height + self.padding,
            inner.width,
            inner.height,
        )
    }

    /// Pixel rectangle of a clamped feature area
    pub const fn feature_rect(&self, area: &FeatureArea) -> Rect {
        let cell = self.cell_size();
        area.to_rect(self.margin, self.padding, cell.width, cell.height)
    }
}

const fn nonzero(value: u32) -> u32 {
    if value == 0 { 1 } else { value }
}

/// Compute every placement for one instance
///
/// `features` pairs each already-clamped area with its pinned image.
/// Inactive areas and features without an image produce no placement, and
/// only active areas reserve cells.
pub fn plan_placements<T: Clone>(
    grid: &GridSpec,
    features: &[(FeatureArea, Option<T>)],
) -> Vec<Placement<T>> {
    let mut placements = Vec::with_capacity(grid.cell_count() as usize);

    let mut reserved = Vec::with_capacity(features.len());
    for (area, pinned) in features {
        if !area.is_active() {
            continue;
        }
        reserved.push(*area);
        if let Some(file) = pinned {
            placements.push(Placement {
                rect: grid.feature_rect(area),
                pinned: Some(file.clone()),
            });
        }
    }

    for row in 0..grid.rows {
        for col in 0..grid.columns {
            if outside_features(col + 1, row + 1, &reserved) {
                placements.push(Placement {
                    rect: grid.cell_rect(col, row),
                    pinned: None,
                });
            }
        }
    }

    placements
}
