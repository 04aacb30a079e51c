//! Circle rasterizer.
//!
//! Draws a filled, anti-aliased circle onto a transparent square canvas,
//! and derives smaller renditions of it for multi-resolution containers.

use image::imageops::{self, FilterType};
use image::{Rgba, Rgba32FImage, RgbaImage};

use crate::types::Colour;

/// Default canvas edge length in pixels.
pub const DEFAULT_SIZE: u32 = 32;

/// Default gap between the circle and each canvas edge.
pub const DEFAULT_MARGIN: u32 = 4;

/// Default edge length of the secondary ICO entry.
pub const DEFAULT_SMALL_SIZE: u32 = 16;

/// Sub-pixel samples per axis used for edge coverage.
const SUBSAMPLES: u32 = 4;

/// Render a circle of `colour` inscribed in `[margin, size - margin]`.
///
/// Fully covered pixels carry `colour` unchanged (alpha included); edge
/// pixels keep the RGB and scale alpha by coverage. Everything else is
/// `[0, 0, 0, 0]`.
pub fn rasterize_circle(colour: Colour, size: u32, margin: u32) -> RgbaImage {
    let mut canvas = RgbaImage::new(size, size);
    if margin.saturating_mul(2) >= size {
        return canvas;
    }

    let centre = size as f32 / 2.0;
    let radius = (size - 2 * margin) as f32 / 2.0;
    let radius_sq = radius * radius;
    let total = SUBSAMPLES * SUBSAMPLES;

    for (x, y, px) in canvas.enumerate_pixels_mut() {
        let mut covered = 0;
        for sy in 0..SUBSAMPLES {
            let dy = y as f32 + (sy as f32 + 0.5) / SUBSAMPLES as f32 - centre;
            for sx in 0..SUBSAMPLES {
                let dx = x as f32 + (sx as f32 + 0.5) / SUBSAMPLES as f32 - centre;
                if dx * dx + dy * dy <= radius_sq {
                    covered += 1;
                }
            }
        }

        if covered == 0 {
            continue;
        }

        let alpha = if covered == total {
            colour.a
        } else {
            ((colour.a as u32 * covered + total / 2) / total) as u8
        };
        *px = colour.with_alpha(alpha).into();
    }

    canvas
}

/// Resample a canvas to `size x size` with a Lanczos3 filter.
///
/// Resampling runs on premultiplied alpha so fully transparent pixels do not
/// bleed black into the circle's edge.
pub fn downscale(canvas: &RgbaImage, size: u32) -> RgbaImage {
    if canvas.width() == size && canvas.height() == size {
        return canvas.clone();
    }

    let premultiplied = Rgba32FImage::from_fn(canvas.width(), canvas.height(), |x, y| {
        let [r, g, b, a] = canvas.get_pixel(x, y).0;
        let alpha = a as f32 / 255.0;
        Rgba([
            r as f32 / 255.0 * alpha,
            g as f32 / 255.0 * alpha,
            b as f32 / 255.0 * alpha,
            alpha,
        ])
    });

    let resized = imageops::resize(&premultiplied, size, size, FilterType::Lanczos3);

    RgbaImage::from_fn(size, size, |x, y| unpremultiply(resized.get_pixel(x, y).0))
}

fn unpremultiply([r, g, b, a]: [f32; 4]) -> Rgba<u8> {
    let a = a.clamp(0.0, 1.0);
    let alpha = (a * 255.0).round();
    if alpha < 1.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |c: f32| ((c / a) * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgba([channel(r), channel(g), channel(b), alpha as u8])
}
