use crate::{
    assets::loader::RasterImage,
    foundation::core::{PremulRgba8, Rgba8, unpremultiply_rgba8_in_place},
    render::blend::{self, BlitMode},
};

/// Mutable premultiplied RGBA8 pixel buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Canvas {
    /// Fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width as usize * height as usize * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<PremulRgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x, y);
        let px = &self.data[i..i + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Paint rows `[y0, y1)` with a solid color, clamped to the canvas.
    pub fn fill_rows(&mut self, y0: u32, y1: u32, color: Rgba8) {
        let y1 = y1.min(self.height);
        if y0 >= y1 {
            return;
        }
        let px = color.to_premul();
        let start = self.offset(0, y0);
        let end = self.offset(0, y1);
        for d in self.data[start..end].chunks_exact_mut(4) {
            d.copy_from_slice(&px);
        }
    }

    /// Draw `src` with its top-left corner at `(x, y)`.
    ///
    /// Parts of `src` falling outside the canvas are clipped.
    pub fn blit(&mut self, src: &RasterImage, x: i64, y: i64, mode: BlitMode) {
        let dst_x0 = x.max(0);
        let dst_y0 = y.max(0);
        let dst_x1 = (x + i64::from(src.width)).min(i64::from(self.width));
        let dst_y1 = (y + i64::from(src.height)).min(i64::from(self.height));
        if dst_x0 >= dst_x1 || dst_y0 >= dst_y1 {
            return;
        }

        let span = (dst_x1 - dst_x0) as usize * 4;
        let src_x0 = (dst_x0 - x) as usize;
        for dy in dst_y0..dst_y1 {
            let sy = (dy - y) as usize;
            let s = (sy * src.width as usize + src_x0) * 4;
            let d = self.offset(dst_x0 as u32, dy as u32);
            let src_row = &src.rgba8_premul[s..s + span];
            let dst_row = &mut self.data[d..d + span];
            match mode {
                BlitMode::Replace => dst_row.copy_from_slice(src_row),
                BlitMode::Over => blend::over_in_place(dst_row, src_row),
            }
        }
    }

    /// Straight-alpha copy suitable for encoders.
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        let mut data = self.data.clone();
        unpremultiply_rgba8_in_place(&mut data);
        image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            let i = (y as usize * self.width as usize + x as usize) * 4;
            image::Rgba([data[i], data[i + 1], data[i + 2], data[i + 3]])
        })
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }
}
