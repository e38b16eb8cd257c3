//! Integer pixel geometry for fitting images into cells
//!
//! Every size computed here truncates fractional pixels. Scaled sizes are
//! derived with integer cross-multiplication so the constraining axis lands
//! on the bound exactly instead of drifting by a pixel through float error.

/// Width × height in pixels
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Size {
    /// Create a new size
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Axis-aligned rectangle in canvas pixel coordinates
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left edge
    pub x: u32,
    /// Top edge
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Rect {
    /// Create a new rect
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Dimensions of the rect
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Shrink the rect by `inset` on every side
    ///
    /// Dimensions saturate at zero when the inset exceeds half the size.
    pub const fn inset(&self, inset: u32) -> Self {
        Self {
            x: self.x + inset,
            y: self.y + inset,
            width: self.width.saturating_sub(inset * 2),
            height: self.height.saturating_sub(inset * 2),
        }
    }
}

/// Crop rectangle as `(x1, y1)` inclusive to `(x2, y2)` exclusive
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CropBox {
    /// Left edge
    pub x1: u32,
    /// Top edge
    pub y1: u32,
    /// Right edge (exclusive)
    pub x2: u32,
    /// Bottom edge (exclusive)
    pub y2: u32,
}

impl CropBox {
    /// Size of the region kept by this crop
    pub const fn size(&self) -> Size {
        Size::new(
            self.x2.saturating_sub(self.x1),
            self.y2.saturating_sub(self.y1),
        )
    }
}

/// Scale factor that fits `source` entirely inside `bounds`
pub fn scale_to_fit(source: Size, bounds: Size) -> f64 {
    let scale_w = f64::from(bounds.width) / f64::from(source.width.max(1));
    let scale_h = f64::from(bounds.height) / f64::from(source.height.max(1));
    scale_w.min(scale_h)
}

/// Scale factor that makes `source` cover `bounds` entirely
pub fn scale_to_fill(source: Size, bounds: Size) -> f64 {
    let scale_w = f64::from(bounds.width) / f64::from(source.width.max(1));
    let scale_h = f64::from(bounds.height) / f64::from(source.height.max(1));
    scale_w.max(scale_h)
}

/// Size of `source` scaled by [`scale_to_fit`]
///
/// Both dimensions are at most the bound and the constraining one equals it.
pub fn fit_size(source: Size, bounds: Size) -> Size {
    let (sw, sh) = (u64::from(source.width.max(1)), u64::from(source.height.max(1)));
    let (bw, bh) = (u64::from(bounds.width), u64::from(bounds.height));

    // bw/sw <= bh/sh means width constrains
    if bw * sh <= bh * sw {
        Size::new(bounds.width, (sh * bw / sw) as u32)
    } else {
        Size::new((sw * bh / sh) as u32, bounds.height)
    }
}

/// Size of `source` scaled by [`scale_to_fill`]
///
/// Both dimensions are at least the bound and the constraining one equals it.
pub fn fill_size(source: Size, bounds: Size) -> Size {
    let (sw, sh) = (u64::from(source.width.max(1)), u64::from(source.height.max(1)));
    let (bw, bh) = (u64::from(bounds.width), u64::from(bounds.height));

    if bw * sh >= bh * sw {
        Size::new(bounds.width, (sh * bw / sw) as u32)
    } else {
        Size::new((sw * bh / sh) as u32, bounds.height)
    }
}

/// Offset that centers `scaled` within `bounds`
///
/// Axes where the scaled size already reaches the bound get no offset.
/// The odd leftover pixel is dropped.
pub const fn center_offset(scaled: Size, bounds: Size) -> (u32, u32) {
    let dx = if scaled.width < bounds.width {
        (bounds.width - scaled.width) / 2
    } else {
        0
    };
    let dy = if scaled.height < bounds.height {
        (bounds.height - scaled.height) / 2
    } else {
        0
    };
    (dx, dy)
}

/// Centered crop that trims `current` down to `target`
///
/// The odd leftover pixel is trimmed from the trailing edge. Axes that are
/// not larger than the target keep their full extent.
pub const fn crop_box(current: Size, target: Size) -> CropBox {
    let (x1, x2) = crop_axis(current.width, target.width);
    let (y1, y2) = crop_axis(current.height, target.height);
    CropBox { x1, y1, x2, y2 }
}

const fn crop_axis(current: u32, target: u32) -> (u32, u32) {
    if target < current {
        let diff = current - target;
        let lead = diff / 2;
        let odd = diff % 2;
        (lead, current - (lead + odd))
    } else {
        (0, current)
    }
}

/// How one source image is drawn into its placement
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Fitted {
    /// Filled border rectangle drawn behind the image, if any
    pub border: Option<Rect>,
    /// Size the source is resized to before any crop
    pub resize_to: Size,
    /// Crop applied after resizing (zoom mode only)
    pub crop: Option<CropBox>,
    /// Where the final pixels are pasted on the canvas
    pub target: Rect,
}

/// Compute the drawing geometry for `source` placed in `cell`
///
/// In zoom mode the image is scaled to fill the whole cell and the
/// overflow is cropped; a border occupies the outer ring of the cell and
/// the image is cropped to the inner area. In fit mode the image is scaled
/// to fit and centered; a border wraps the scaled image and the image is
/// shrunk to sit inside it.
pub fn fit_placement(source: Size, cell: Rect, zoom: bool, border_width: u32) -> Fitted {
    if zoom {
        let resize_to = fill_size(source, cell.size());
        let (border, target) = if border_width > 0 {
            (Some(cell), cell.inset(border_width))
        } else {
            (None, cell)
        };
        Fitted {
            border,
            resize_to,
            crop: Some(crop_box(resize_to, target.size())),
            target,
        }
    } else {
        let scaled = fit_size(source, cell.size());
        let (dx, dy) = center_offset(scaled, cell.size());
        let placed = Rect::new(cell.x + dx, cell.y + dy, scaled.width, scaled.height);
        let (border, target) = if border_width > 0 {
            (Some(placed), placed.inset(border_width))
        } else {
            (None, placed)
        };
        Fitted {
            border,
            resize_to: target.size(),
            crop: None,
            target,
        }
    }
}
