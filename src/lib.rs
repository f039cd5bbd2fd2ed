#![forbid(unsafe_code)]

pub mod assets;
pub mod composition;
pub mod encode;
pub mod foundation;
pub mod pipeline;
pub mod render;

pub use assets::loader::{BaseLayers, LoadedAssets, RasterImage, load_assets};
pub use composition::model::{
    BandColors, CompositionRequest, IconDescriptor, ImageDescriptor, OutputDescriptor,
    OutputFormat,
};
pub use foundation::core::{Rgba8, SPLIT_ROW};
pub use foundation::error::{BannerError, BannerResult};
pub use pipeline::{PipelineReport, run};
pub use render::{
    background::{render_bands, write_background},
    canvas::Canvas,
    compositor::compose,
    layout::{PackedSize, Placement, RowSpec, calc_size, plan_row},
};
