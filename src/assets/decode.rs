use std::{path::Path, sync::Arc};

use crate::{
    assets::loader::RasterImage,
    foundation::{
        core::premultiply_rgba8_in_place,
        error::{BannerError, BannerResult},
    },
};

/// Decode encoded image bytes (format sniffed) and convert to premultiplied RGBA8.
pub fn decode_image(bytes: &[u8]) -> Result<RasterImage, image::ImageError> {
    let dyn_img = image::load_from_memory(bytes)?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(RasterImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

/// Read and decode one image file.
pub fn decode_file(path: impl AsRef<Path>) -> BannerResult<RasterImage> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| BannerError::io(path, e))?;
    decode_image(&bytes).map_err(|e| BannerError::decode(path, e))
}
