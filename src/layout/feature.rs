//! Featured regions: multi-cell rectangles reserved for specific images
//!
//! A feature is requested in 1-based grid coordinates against the grid the
//! user had in mind. When an instance draws a smaller grid the request is
//! pulled back toward the origin and then shrunk until it fits.

use crate::layout::geometry::Rect;

/// Requested feature rectangle in 1-based grid coordinates
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct FeatureArea {
    /// First column (1-based)
    pub col: u32,
    /// Number of columns spanned
    pub ncols: u32,
    /// First row (1-based)
    pub row: u32,
    /// Number of rows spanned
    pub nrows: u32,
}

impl FeatureArea {
    /// Create a new area
    pub const fn new(col: u32, ncols: u32, row: u32, nrows: u32) -> Self {
        Self {
            col,
            ncols,
            row,
            nrows,
        }
    }

    /// A feature with a zero span reserves nothing and draws nothing
    pub const fn is_active(&self) -> bool {
        self.ncols > 0 && self.nrows > 0
    }

    /// Cells reserved by this area
    pub const fn cell_count(&self) -> u32 {
        self.ncols * self.nrows
    }

    /// Whether the 1-based cell `(col, row)` lies inside this area
    pub const fn covers(&self, col: u32, row: u32) -> bool {
        self.is_active()
            && col >= self.col
            && col < self.col + self.ncols
            && row >= self.row
            && row < self.row + self.nrows
    }

    /// Clamp the area to a grid of `grid_cols` × `grid_rows`
    ///
    /// The start is shifted toward 1 first; the span is reduced only if the
    /// area still does not fit. Inactive areas are returned unchanged.
    pub const fn clamp_to_grid(self, grid_cols: u32, grid_rows: u32) -> Self {
        if !self.is_active() {
            return self;
        }
        let (col, ncols) = clamp_axis(self.col, self.ncols, grid_cols);
        let (row, nrows) = clamp_axis(self.row, self.nrows, grid_rows);
        Self {
            col,
            ncols,
            row,
            nrows,
        }
    }

    /// Pixel rectangle of this area inside its padded cells
    pub const fn to_rect(&self, margin: u32, padding: u32, cell_width: u32, cell_height: u32) -> Rect {
        Rect {
            x: margin + (self.col.saturating_sub(1)) * cell_width + padding,
            y: margin + (self.row.saturating_sub(1)) * cell_height + padding,
            width: (self.ncols * cell_width).saturating_sub(padding * 2),
            height: (self.nrows * cell_height).saturating_sub(padding * 2),
        }
    }
}

const fn clamp_axis(start: u32, span: u32, grid: u32) -> (u32, u32) {
    let mut start = start;
    while start > 1 && grid < (start - 1) + span {
        start -= 1;
    }
    let mut span = span;
    while span > 0 && grid < span {
        span -= 1;
    }
    (start, span)
}

/// Whether the 1-based cell is free of every active feature
pub fn outside_features(col: u32, row: u32, areas: &[FeatureArea]) -> bool {
    !areas.iter().any(|area| area.covers(col, row))
}

/// One configured feature: requested area plus its candidate images
///
/// The file list keeps the raw entries; the session owns the cursor that
/// picks one entry per montage instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureSpec<T> {
    /// Requested area before clamping
    pub area: FeatureArea,
    /// Candidate images, one used per instance in cyclic order
    pub files: Vec<T>,
}

impl<T> FeatureSpec<T> {
    /// Create a new feature specification
    pub const fn new(area: FeatureArea, files: Vec<T>) -> Self {
        Self { area, files }
    }

    /// Any, but not all, of the coordinates are zero
    pub const fn is_partially_set(&self) -> bool {
        let a = &self.area;
        let any_set = a.col > 0 || a.ncols > 0 || a.row > 0 || a.nrows > 0;
        let any_unset = a.col == 0 || a.ncols == 0 || a.row == 0 || a.nrows == 0;
        any_set && any_unset
    }
}

/// Cyclic cursor over a feature's candidate list
#[derive(Debug, Clone, Default)]
pub struct FeatureCursor {
    next: usize,
}

impl FeatureCursor {
    /// Create a cursor positioned at the first candidate
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    /// Index of the candidate to use now, advancing for the next instance
    ///
    /// Returns `None` for an empty list without moving.
    pub const fn advance(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        if self.next >= len {
            self.next = 0;
        }
        let index = self.next;
        self.next += 1;
        Some(index)
    }
}
