//! Brush tools that mutate the heightfield within a falloff radius

pub mod falloff;
pub mod paint;
pub mod params;
pub mod sculpt;

pub use falloff::falloff;
pub use paint::{Material, PaintTool};
pub use params::{PaintParamUpdate, PaintParams, SculptMode, SculptParamUpdate, SculptParams};
pub use sculpt::SculptTool;

use std::ops::RangeInclusive;

use crate::terrain::Heightfield;

/// Scalar linear interpolation
pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Index window of grid vertices whose x/z fall inside the brush's bounding
/// square. The exact radius check still runs per vertex; this skips the rest
/// of a large grid up front. None when the brush is entirely off the mesh.
pub(crate) fn vertex_window(
    heightfield: &Heightfield,
    center_x: f32,
    center_z: f32,
    radius: f32,
) -> Option<(RangeInclusive<usize>, RangeInclusive<usize>)> {
    let (min_x, min_z) = heightfield.min_corner();
    let last = heightfield.vertices_per_side() as isize - 1;

    let lo = |center: f32, min: f32, spacing: f32| -> isize {
        (((center - radius) - min) / spacing).ceil() as isize
    };
    let hi = |center: f32, min: f32, spacing: f32| -> isize {
        (((center + radius) - min) / spacing).floor() as isize
    };

    let i_lo = lo(center_x, min_x, heightfield.spacing_x()).max(0);
    let i_hi = hi(center_x, min_x, heightfield.spacing_x()).min(last);
    let j_lo = lo(center_z, min_z, heightfield.spacing_z()).max(0);
    let j_hi = hi(center_z, min_z, heightfield.spacing_z()).min(last);

    if i_lo > i_hi || j_lo > j_hi {
        return None;
    }
    Some((i_lo as usize..=i_hi as usize, j_lo as usize..=j_hi as usize))
}
