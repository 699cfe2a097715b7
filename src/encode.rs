use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::RgbaImage;
use png::{AdaptiveFilterType, BitDepth, ColorType, Compression, Encoder};

use crate::error::{IconError, Result};

/// Encode an RGBA8 image as PNG with the smallest-output settings.
pub fn encode_png<W: Write>(image: &RgbaImage, writer: W) -> Result<()> {
    let (width, height) = image.dimensions();
    let mut enc = Encoder::new(writer, width, height);
    enc.set_color(ColorType::Rgba);
    enc.set_depth(BitDepth::Eight);
    enc.set_compression(Compression::Best);
    enc.set_adaptive_filter(AdaptiveFilterType::Adaptive);

    let mut writer = enc.write_header()?;
    writer.write_image_data(image.as_raw())?;
    writer.finish()?;
    Ok(())
}

/// Write `image` to `path` as an optimized PNG, replacing any existing file.
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| IconError::io(path, e))?;
    let mut out = BufWriter::new(file);
    encode_png(image, &mut out)?;
    out.flush().map_err(|e| IconError::io(path, e))?;
    Ok(())
}
