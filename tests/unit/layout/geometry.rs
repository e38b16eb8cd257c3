//! Tests for fit/fill sizing, centering, cropping, and placement geometry

#[cfg(test)]
mod tests {
    use montage::layout::geometry::{
        CropBox, Rect, Size, center_offset, crop_box, fill_size, fit_placement, fit_size,
        scale_to_fill, scale_to_fit,
    };

    // Tests fit and fill scale factors for a landscape source in a square
    // Verified by swapping min and max in the scale functions
    #[test]
    fn test_scale_factors() {
        let source = Size::new(400, 300);
        let bounds = Size::new(300, 300);

        assert!((scale_to_fit(source, bounds) - 0.75).abs() < f64::EPSILON);
        assert!((scale_to_fill(source, bounds) - 1.0).abs() < f64::EPSILON);
    }

    // Tests the constraining axis of a fitted size equals the bound exactly
    // Verified by computing sizes through the float scale factor
    #[test]
    fn test_fit_size_hits_bound() {
        assert_eq!(fit_size(Size::new(400, 300), Size::new(300, 300)), Size::new(300, 225));
        assert_eq!(fit_size(Size::new(300, 400), Size::new(300, 300)), Size::new(225, 300));
        assert_eq!(fit_size(Size::new(1000, 333), Size::new(290, 210)), Size::new(290, 96));
    }

    // Tests a filled size covers the bound on both axes
    // Verified by using the fit comparison in fill_size
    #[test]
    fn test_fill_size_covers_bound() {
        let filled = fill_size(Size::new(400, 300), Size::new(300, 300));
        assert_eq!(filled, Size::new(400, 300));

        let filled = fill_size(Size::new(300, 900), Size::new(640, 480));
        assert_eq!(filled.width, 640);
        assert!(filled.height >= 480);
    }

    // Tests centering drops the odd pixel and ignores full axes
    // Verified by rounding the offset up
    #[test]
    fn test_center_offset() {
        assert_eq!(center_offset(Size::new(300, 225), Size::new(300, 300)), (0, 37));
        assert_eq!(center_offset(Size::new(99, 100), Size::new(100, 100)), (0, 0));
        assert_eq!(center_offset(Size::new(120, 120), Size::new(100, 100)), (0, 0));
    }

    // Tests centered crop trims the odd pixel from the trailing edge
    // Verified by adding the odd pixel to the leading offset
    #[test]
    fn test_crop_box_odd_difference() {
        let even = crop_box(Size::new(400, 300), Size::new(300, 300));
        assert_eq!(
            even,
            CropBox {
                x1: 50,
                y1: 0,
                x2: 350,
                y2: 300
            }
        );

        let odd = crop_box(Size::new(401, 300), Size::new(300, 300));
        assert_eq!(odd.x1, 50);
        assert_eq!(odd.x2, 350);
        assert_eq!(odd.size(), Size::new(300, 300));
    }

    // Tests axes smaller than the target keep their full extent
    // Verified by returning an empty range for small axes
    #[test]
    fn test_crop_box_small_axis() {
        let region = crop_box(Size::new(200, 100), Size::new(300, 300));
        assert_eq!(region.size(), Size::new(200, 100));
        assert_eq!((region.x1, region.y1), (0, 0));
    }

    // Tests inset saturates instead of underflowing
    // Verified by replacing saturating_sub with plain subtraction
    #[test]
    fn test_rect_inset_saturates() {
        let inset = Rect::new(0, 0, 4, 4).inset(3);
        assert_eq!((inset.x, inset.y), (3, 3));
        assert!(inset.size().is_empty());
    }

    // Tests fit mode centers the image and wraps the border around it
    // Verified by drawing the border around the whole cell
    #[test]
    fn test_fit_placement_with_border() {
        let cell = Rect::new(10, 10, 100, 100);
        let fitted = fit_placement(Size::new(200, 100), cell, false, 5);

        assert_eq!(fitted.border, Some(Rect::new(10, 35, 100, 50)));
        assert_eq!(fitted.target, Rect::new(15, 40, 90, 40));
        assert_eq!(fitted.resize_to, Size::new(90, 40));
        assert!(fitted.crop.is_none());
    }

    // Tests fit mode without a border places the scaled image directly
    // Verified by skipping the center offset
    #[test]
    fn test_fit_placement_without_border() {
        let cell = Rect::new(0, 0, 100, 100);
        let fitted = fit_placement(Size::new(50, 100), cell, false, 0);

        assert!(fitted.border.is_none());
        assert_eq!(fitted.target, Rect::new(25, 0, 50, 100));
    }

    // Tests zoom mode fills the cell and crops to the area inside the border
    // Verified by cropping to the full cell size
    #[test]
    fn test_zoom_placement_crops_inside_border() {
        let cell = Rect::new(10, 10, 100, 100);
        let fitted = fit_placement(Size::new(200, 100), cell, true, 5);

        assert_eq!(fitted.border, Some(cell));
        assert_eq!(fitted.resize_to, Size::new(200, 100));
        assert_eq!(fitted.target, Rect::new(15, 15, 90, 90));
        assert_eq!(
            fitted.crop,
            Some(CropBox {
                x1: 55,
                y1: 5,
                x2: 145,
                y2: 95
            })
        );
    }

    // Tests zoom output always matches the target size
    // Verified by sizing the crop from the resized image instead of target
    #[test]
    fn test_zoom_crop_matches_target() {
        for (w, h) in [(333, 777), (1920, 1080), (5, 3), (100, 100)] {
            let cell = Rect::new(0, 0, 290, 210);
            let fitted = fit_placement(Size::new(w, h), cell, true, 0);
            let crop = fitted.crop.unwrap_or(CropBox {
                x1: 0,
                y1: 0,
                x2: 0,
                y2: 0,
            });
            assert_eq!(crop.size(), fitted.target.size(), "source {w}x{h}");
        }
    }

    // Tests fitted sizes stay inside the bound and track the float scale
    // Verified by rounding the free axis up instead of down
    #[test]
    fn test_fit_size_sweep() {
        for sw in 1..40 {
            for sh in 1..40 {
                for bw in 1..40 {
                    for bh in 1..40 {
                        let (source, bounds) = (Size::new(sw, sh), Size::new(bw, bh));
                        let fitted = fit_size(source, bounds);
                        let scale = scale_to_fit(source, bounds);

                        assert!(
                            fitted.width <= bw && fitted.height <= bh,
                            "{source:?} in {bounds:?}"
                        );
                        assert!(
                            fitted.width == bw || fitted.height == bh,
                            "{source:?} in {bounds:?}"
                        );
                        assert!((f64::from(fitted.width) - f64::from(sw) * scale).abs() < 1.0);
                        assert!((f64::from(fitted.height) - f64::from(sh) * scale).abs() < 1.0);
                    }
                }
            }
        }
    }

    // Tests filling then cropping always lands on the exact bound
    // Verified by trimming the odd pixel from both edges
    #[test]
    fn test_fill_then_crop_sweep() {
        for sw in 1..40 {
            for sh in 1..40 {
                for bw in 1..40 {
                    for bh in 1..40 {
                        let bounds = Size::new(bw, bh);
                        let filled = fill_size(Size::new(sw, sh), bounds);

                        assert!(filled.width >= bw && filled.height >= bh, "{filled:?}");
                        assert_eq!(crop_box(filled, bounds).size(), bounds, "{sw}x{sh}");
                    }
                }
            }
        }
    }
}
