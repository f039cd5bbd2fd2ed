//! Icon row layout.
//!
//! A row holds up to [`NATIVE_ROW_CAPACITY`] icons at native size on a fixed
//! step. Longer rows are shrunk to a shared square edge and repacked so they
//! stay inside the row's horizontal budget.

use crate::foundation::core::SPLIT_ROW;

/// Most icons a row draws at native size.
pub const NATIVE_ROW_CAPACITY: usize = 4;

/// Horizontal advance between native-size icons.
pub const NATIVE_STEP: i64 = 230;

/// Horizontal budget of a packed row before its adjustment is applied.
pub const PACKED_BASE_WIDTH: i64 = 1064;

/// Fixed placement parameters for one icon row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowSpec {
    pub start_x: i64,
    pub y: i64,
    /// Added to [`PACKED_BASE_WIDTH`] for packed rows.
    pub adjustment: i64,
}

impl RowSpec {
    pub const TOP: RowSpec = RowSpec {
        start_x: 520,
        y: 0,
        adjustment: 0,
    };

    pub const BOTTOM: RowSpec = RowSpec {
        start_x: 550,
        y: SPLIT_ROW as i64,
        adjustment: -30,
    };
}

/// Shared step and square edge for a packed row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PackedSize {
    pub step: i64,
    pub edge: u32,
}

/// Size of each slot when `n` icons share a row budget of `1064 + adjustment`.
///
/// The edge is the step less its 15% margin, i.e. `floor(step / 115 * 100)`.
pub fn calc_size(n: usize, adjustment: i64) -> PackedSize {
    let base = (PACKED_BASE_WIDTH + adjustment) as f64;
    let step = (base / n.max(1) as f64).floor();
    let edge = (step / 115.0 * 100.0).floor().max(0.0);
    PackedSize {
        step: step as i64,
        edge: edge as u32,
    }
}

/// Where one icon lands and whether it is resized first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub x: i64,
    pub y: i64,
    /// Square edge to resize to; `None` keeps the native size.
    pub resize_to: Option<u32>,
}

/// Lay out `count` icons left to right along `spec`.
pub fn plan_row(spec: RowSpec, count: usize) -> Vec<Placement> {
    let (step, resize_to) = if count <= NATIVE_ROW_CAPACITY {
        (NATIVE_STEP, None)
    } else {
        let packed = calc_size(count, spec.adjustment);
        (packed.step, Some(packed.edge))
    };

    (0..count)
        .map(|i| Placement {
            x: spec.start_x + step * i as i64,
            y: spec.y,
            resize_to,
        })
        .collect()
}
