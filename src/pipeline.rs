use std::path::PathBuf;

use crate::{
    assets::loader::load_assets,
    composition::model::CompositionRequest,
    encode,
    foundation::error::BannerResult,
    render::{background::write_background, compositor::compose},
};

/// Summary of a completed run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineReport {
    pub background_path: PathBuf,
    pub output_path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub top_icons: usize,
    pub bottom_icons: usize,
}

/// Run every stage in order. The first error stops the run.
///
/// The background band artifact is written to `background.file` before assets
/// load, so that same file is then read back as the base layer.
#[tracing::instrument(skip(req), fields(output = %req.output.file))]
pub fn run(req: &CompositionRequest) -> BannerResult<PipelineReport> {
    req.validate()?;
    let format = req.output.output_format()?;

    write_background(
        req.background.width,
        req.background.height,
        req.background_colors,
        &req.background.file,
    )?;

    let assets = load_assets(req)?;
    let canvas = compose(&assets)?;

    encode::write_canvas(&canvas, &req.output.file, format)?;
    tracing::info!(?format, "composite written");

    Ok(PipelineReport {
        background_path: PathBuf::from(&req.background.file),
        output_path: PathBuf::from(&req.output.file),
        width: canvas.width(),
        height: canvas.height(),
        top_icons: assets.top_icons.len(),
        bottom_icons: assets.bottom_icons.len(),
    })
}
