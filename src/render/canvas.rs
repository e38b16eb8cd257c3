//! Canvas primitives: fill, paste, uniform-alpha blend, box blur

use crate::layout::geometry::{CropBox, Rect, Size};
use image::{GrayImage, Rgb, RgbImage, imageops};
use imageproc::filter::box_filter;

/// New canvas of `size` filled with `color`
pub fn new_canvas(size: Size, color: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(size.width, size.height, Rgb(color))
}

/// Resize `image` to exactly `size`
pub fn resize(image: &RgbImage, size: Size) -> RgbImage {
    imageops::resize(
        image,
        size.width.max(1),
        size.height.max(1),
        imageops::FilterType::CatmullRom,
    )
}

/// Copy out the region described by `crop`
pub fn crop(image: &RgbImage, crop: CropBox) -> RgbImage {
    let size = crop.size();
    imageops::crop_imm(image, crop.x1, crop.y1, size.width, size.height).to_image()
}

/// Paste `image` with its top-left corner at `(x, y)`
///
/// Pixels falling outside the canvas are dropped.
pub fn paste(canvas: &mut RgbImage, image: &RgbImage, x: u32, y: u32) {
    imageops::replace(canvas, image, i64::from(x), i64::from(y));
}

/// Blend `image` over the canvas at `(x, y)` with one alpha for every pixel
///
/// `alpha` 255 replaces, 0 leaves the canvas untouched.
pub fn blend(canvas: &mut RgbImage, image: &RgbImage, x: u32, y: u32, alpha: u8) {
    let (cw, ch) = canvas.dimensions();
    for (ix, iy, src) in image.enumerate_pixels() {
        let (cx, cy) = (x + ix, y + iy);
        if cx >= cw || cy >= ch {
            continue;
        }
        let dst = canvas.get_pixel_mut(cx, cy);
        *dst = mix(*dst, *src, alpha);
    }
}

/// Fill `rect` with `color` at uniform opacity `alpha`
pub fn blend_rect(canvas: &mut RgbImage, rect: Rect, color: [u8; 3], alpha: u8) {
    let (cw, ch) = canvas.dimensions();
    let x_end = (rect.x + rect.width).min(cw);
    let y_end = (rect.y + rect.height).min(ch);
    for cy in rect.y..y_end {
        for cx in rect.x..x_end {
            let dst = canvas.get_pixel_mut(cx, cy);
            *dst = mix(*dst, Rgb(color), alpha);
        }
    }
}

fn mix(dst: Rgb<u8>, src: Rgb<u8>, alpha: u8) -> Rgb<u8> {
    let a = u32::from(alpha);
    let inv = 255 - a;
    Rgb([
        ((u32::from(src[0]) * a + u32::from(dst[0]) * inv + 127) / 255) as u8,
        ((u32::from(src[1]) * a + u32::from(dst[1]) * inv + 127) / 255) as u8,
        ((u32::from(src[2]) * a + u32::from(dst[2]) * inv + 127) / 255) as u8,
    ])
}

/// Box blur each channel over a `(2 * radius + 1)` square window
pub fn box_blur(image: &RgbImage, radius: u32) -> RgbImage {
    if radius == 0 {
        return image.clone();
    }
    let (width, height) = image.dimensions();
    let channels: Vec<GrayImage> = (0..3)
        .map(|c| {
            let plane = GrayImage::from_fn(width, height, |x, y| {
                image::Luma([image.get_pixel(x, y)[c]])
            });
            box_filter(&plane, radius, radius)
        })
        .collect();

    RgbImage::from_fn(width, height, |x, y| {
        let mut px = [0u8; 3];
        for (out, plane) in px.iter_mut().zip(&channels) {
            *out = plane.get_pixel(x, y)[0];
        }
        Rgb(px)
    })
}

/// Mean of the RGB channels at `(x, y)`, or `None` outside the canvas
pub fn luminance_at(canvas: &RgbImage, x: u32, y: u32) -> Option<u32> {
    let px = canvas.get_pixel_checked(x, y)?;
    Some((u32::from(px[0]) + u32::from(px[1]) + u32::from(px[2])) / 3)
}
