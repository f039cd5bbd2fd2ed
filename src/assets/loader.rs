use std::sync::Arc;

use anyhow::anyhow;
use image::imageops::FilterType;

use crate::{
    assets::decode,
    composition::model::{CompositionRequest, IconDescriptor, ImageDescriptor},
    foundation::{
        core::{PremulRgba8, premultiply_rgba8_in_place, unpremultiply_rgba8_in_place},
        error::BannerResult,
    },
};

/// Decoded raster image in premultiplied RGBA8 form. Never mutated after decode.
#[derive(Clone, Debug)]
pub struct RasterImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

impl RasterImage {
    pub fn pixel(&self, x: u32, y: u32) -> Option<PremulRgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = &self.rgba8_premul[i..i + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Resample to exactly `width` x `height` with a Lanczos3 filter.
    ///
    /// Filtering runs on straight alpha; the result is premultiplied again.
    pub fn resized(&self, width: u32, height: u32) -> BannerResult<RasterImage> {
        if width == self.width && height == self.height {
            return Ok(self.clone());
        }
        let mut straight = self.rgba8_premul.to_vec();
        unpremultiply_rgba8_in_place(&mut straight);
        let src = image::RgbaImage::from_raw(self.width, self.height, straight).ok_or_else(|| {
            anyhow!(
                "raster buffer does not match {}x{}",
                self.width,
                self.height
            )
        })?;

        let out = image::imageops::resize(&src, width, height, FilterType::Lanczos3);
        let mut data = out.into_raw();
        premultiply_rgba8_in_place(&mut data);
        Ok(RasterImage {
            width,
            height,
            rgba8_premul: Arc::new(data),
        })
    }
}

/// The fixed triple drawn before the icon rows.
#[derive(Clone, Debug)]
pub struct BaseLayers {
    pub background: RasterImage,
    pub primary: RasterImage,
    pub secondary: RasterImage,
}

/// Everything the compositor draws, in draw order.
#[derive(Clone, Debug)]
pub struct LoadedAssets {
    pub base: BaseLayers,
    pub top_icons: Vec<RasterImage>,
    pub bottom_icons: Vec<RasterImage>,
}

/// Decode every image the request references. The first failure aborts loading.
#[tracing::instrument(skip(req))]
pub fn load_assets(req: &CompositionRequest) -> BannerResult<LoadedAssets> {
    let background = load_base("background", &req.background)?;
    let primary = load_base("like", &req.primary_overlay)?;
    let secondary = load_base("dislike", &req.secondary_overlay)?;

    let top_icons = load_icons("likeIcon", &req.top_icons)?;
    let bottom_icons = load_icons("dislikeIcon", &req.bottom_icons)?;

    tracing::info!(
        top = top_icons.len(),
        bottom = bottom_icons.len(),
        "decoded base layers and icons"
    );

    Ok(LoadedAssets {
        base: BaseLayers {
            background,
            primary,
            secondary,
        },
        top_icons,
        bottom_icons,
    })
}

fn load_base(role: &str, desc: &ImageDescriptor) -> BannerResult<RasterImage> {
    let img = decode::decode_file(&desc.file)?;
    tracing::debug!(
        role,
        name = desc.name.as_deref().unwrap_or("-"),
        file = %desc.file,
        width = img.width,
        height = img.height,
        "decoded image"
    );

    let declared = (desc.width, desc.height);
    if declared != (0, 0) && declared != (img.width, img.height) {
        tracing::warn!(
            role,
            file = %desc.file,
            "declared size {}x{} differs from decoded size {}x{}",
            desc.width,
            desc.height,
            img.width,
            img.height
        );
    }
    Ok(img)
}

fn load_icons(list: &str, icons: &[IconDescriptor]) -> BannerResult<Vec<RasterImage>> {
    icons
        .iter()
        .enumerate()
        .map(|(i, icon)| -> BannerResult<RasterImage> {
            let img = decode::decode_file(&icon.file)?;
            tracing::debug!(
                list,
                index = i,
                name = icon.name.as_deref().unwrap_or("-"),
                file = %icon.file,
                width = img.width,
                height = img.height,
                "decoded icon"
            );
            Ok(img)
        })
        .collect()
}
