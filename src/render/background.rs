use std::path::Path;

use crate::{
    composition::model::{BandColors, OutputFormat},
    encode,
    foundation::{core::SPLIT_ROW, error::BannerResult},
    render::canvas::Canvas,
};

/// Fill a `width` x `height` canvas with two horizontal bands split at `split_row`.
///
/// The split is a fixed row, not a fraction of `height`. A canvas shorter than
/// the split gets only the top band.
pub fn render_bands(width: u32, height: u32, colors: BandColors, split_row: u32) -> Canvas {
    let mut canvas = Canvas::new(width, height);
    canvas.fill_rows(0, split_row, colors.top);
    canvas.fill_rows(split_row, height, colors.bottom);
    canvas
}

/// Render the background artifact and persist it as PNG.
#[tracing::instrument(skip(colors, path), fields(path = %path.as_ref().display()))]
pub fn write_background(
    width: u32,
    height: u32,
    colors: BandColors,
    path: impl AsRef<Path>,
) -> BannerResult<Canvas> {
    let canvas = render_bands(width, height, colors, SPLIT_ROW);
    encode::write_canvas(&canvas, path.as_ref(), OutputFormat::Png)?;
    tracing::info!("background written");
    Ok(canvas)
}
