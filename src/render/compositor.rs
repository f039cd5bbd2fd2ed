use std::borrow::Cow;

use crate::{
    assets::loader::{LoadedAssets, RasterImage},
    foundation::{core::SPLIT_ROW, error::BannerResult},
    render::{
        blend::BlitMode,
        canvas::Canvas,
        layout::{RowSpec, plan_row},
    },
};

/// Build the final composite from decoded assets.
///
/// The canvas takes the decoded background's bounds, not the configured size.
#[tracing::instrument(skip(assets))]
pub fn compose(assets: &LoadedAssets) -> BannerResult<Canvas> {
    let base = &assets.base;
    let mut canvas = Canvas::new(base.background.width, base.background.height);

    canvas.blit(&base.background, 0, 0, BlitMode::Replace);
    canvas.blit(&base.primary, 0, 0, BlitMode::Over);
    canvas.blit(&base.secondary, 0, i64::from(SPLIT_ROW), BlitMode::Over);

    draw_row(&mut canvas, RowSpec::TOP, &assets.top_icons)?;
    draw_row(&mut canvas, RowSpec::BOTTOM, &assets.bottom_icons)?;

    tracing::info!(
        width = canvas.width(),
        height = canvas.height(),
        "composite ready"
    );
    Ok(canvas)
}

/// Draw one icon row over the canvas in list order.
pub fn draw_row(canvas: &mut Canvas, spec: RowSpec, icons: &[RasterImage]) -> BannerResult<()> {
    let placements = plan_row(spec, icons.len());
    if let Some(edge) = placements.first().and_then(|p| p.resize_to) {
        tracing::debug!(count = icons.len(), edge, y = spec.y, "packing icon row");
    }

    for (icon, place) in icons.iter().zip(&placements) {
        let icon = match place.resize_to {
            Some(edge) => Cow::Owned(icon.resized(edge, edge)?),
            None => Cow::Borrowed(icon),
        };
        canvas.blit(&icon, place.x, place.y, BlitMode::Over);
    }
    Ok(())
}
