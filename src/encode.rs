use std::{io::Cursor, path::Path};

use image::codecs::{jpeg::JpegEncoder, png::PngEncoder};

use crate::{
    composition::model::OutputFormat,
    foundation::error::{BannerError, BannerResult},
    render::canvas::Canvas,
};

pub const JPEG_QUALITY: u8 = 100;

/// Encode `canvas` fully in memory.
pub fn encode_canvas(canvas: &Canvas, format: OutputFormat) -> BannerResult<Vec<u8>> {
    let rgba = canvas.to_rgba_image();
    let mut buf = Vec::new();
    match format {
        OutputFormat::Png => {
            rgba.write_with_encoder(PngEncoder::new(Cursor::new(&mut buf)))
                .map_err(|e| BannerError::encode(format!("png: {e}")))?;
        }
        OutputFormat::Jpeg => {
            // JPEG carries no alpha channel.
            let rgb = image::DynamicImage::ImageRgba8(rgba).to_rgb8();
            rgb.write_with_encoder(JpegEncoder::new_with_quality(
                Cursor::new(&mut buf),
                JPEG_QUALITY,
            ))
            .map_err(|e| BannerError::encode(format!("jpeg: {e}")))?;
        }
    }
    Ok(buf)
}

/// Encode `canvas` and write it to `path` in one step.
///
/// Nothing touches the filesystem until encoding succeeded.
pub fn write_canvas(
    canvas: &Canvas,
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> BannerResult<()> {
    let path = path.as_ref();
    let bytes = encode_canvas(canvas, format)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| BannerError::io(parent, e))?;
    }
    std::fs::write(path, &bytes).map_err(|e| BannerError::io(path, e))?;

    tracing::debug!(path = %path.display(), ?format, bytes = bytes.len(), "wrote image");
    Ok(())
}
