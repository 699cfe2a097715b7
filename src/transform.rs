//! Scale-to-cover resize followed by a center crop.
//!
//! The source is scaled uniformly so that both sides reach at least the
//! target edge, resampled with Lanczos3, then cut down to an exact square.
//! Crop offsets use truncating division, so an odd excess leaves the extra
//! row/column on the bottom/right.
//!
//! Resampling runs on premultiplied alpha so the color of fully transparent
//! pixels never bleeds into visible edges.

use image::imageops::{self, FilterType};
use image::{Rgba, Rgba32FImage, RgbaImage};

/// Geometry for one output size, computed before touching any pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropPlan {
    pub size: u32,
    pub scale: f64,
    pub resized_width: u32,
    pub resized_height: u32,
    pub left: u32,
    pub top: u32,
}

impl CropPlan {
    /// Plan the transform of a `width` x `height` source into a `size` square.
    pub fn new(width: u32, height: u32, size: u32) -> Self {
        let target = f64::from(size);
        let scale = f64::max(target / f64::from(width), target / f64::from(height));

        let resized_width = scaled_edge(width, scale).max(size);
        let resized_height = scaled_edge(height, scale).max(size);

        Self {
            size,
            scale,
            resized_width,
            resized_height,
            left: (resized_width - size) / 2,
            top: (resized_height - size) / 2,
        }
    }

    pub fn needs_resize(&self, width: u32, height: u32) -> bool {
        (self.resized_width, self.resized_height) != (width, height)
    }
}

// Half-way values round to even.
fn scaled_edge(edge: u32, scale: f64) -> u32 {
    (f64::from(edge) * scale).round_ties_even() as u32
}

/// Produce a `size` x `size` icon from `source`.
pub fn scale_and_crop(source: &RgbaImage, size: u32) -> RgbaImage {
    let (width, height) = source.dimensions();
    let plan = CropPlan::new(width, height, size);
    log::debug!(
        "icon {}: {}x{} -> {}x{} (scale {:.4}), crop at ({}, {})",
        size,
        width,
        height,
        plan.resized_width,
        plan.resized_height,
        plan.scale,
        plan.left,
        plan.top
    );

    if plan.needs_resize(width, height) {
        let resized = imageops::resize(
            &premultiply(source),
            plan.resized_width,
            plan.resized_height,
            FilterType::Lanczos3,
        );
        let cropped = imageops::crop_imm(&resized, plan.left, plan.top, size, size).to_image();
        unpremultiply(&cropped)
    } else {
        imageops::crop_imm(source, plan.left, plan.top, size, size).to_image()
    }
}

/// RGBA8 to premultiplied RGBA in `0.0..=1.0`.
fn premultiply(image: &RgbaImage) -> Rgba32FImage {
    Rgba32FImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0.map(|c| f32::from(c) / 255.0);
        Rgba([r * a, g * a, b * a, a])
    })
}

/// Back to straight RGBA8. Pixels that end up fully transparent become `[0, 0, 0, 0]`.
fn unpremultiply(image: &Rgba32FImage) -> RgbaImage {
    RgbaImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0;
        let alpha = to_channel(a);
        if alpha == 0 {
            return Rgba([0, 0, 0, 0]);
        }
        Rgba([to_channel(r / a), to_channel(g / a), to_channel(b / a), alpha])
    })
}

fn to_channel(value: f32) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
