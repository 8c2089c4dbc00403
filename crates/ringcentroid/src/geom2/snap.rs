//! Snapping centroids to a display grid.
//!
//! The centroid routines return full-precision coordinates; label placement on a
//! pixel or cell grid is a separate, caller-invoked step.

use nalgebra::Vector2;

use super::centroid::compound_centroid_with;
use super::error::GeometryError;
use super::types::CentroidCfg;

/// Round each coordinate to the nearest multiple of `step` (halves away from zero).
///
/// `step = 1.0` gives whole numbers. A non-positive or non-finite step is a no-op.
#[inline]
pub fn snap_to_grid(p: Vector2<f64>, step: f64) -> Vector2<f64> {
    if !(step.is_finite() && step > 0.0) {
        return p;
    }
    p.map(|c| (c / step).round() * step)
}

/// Label anchor of a compound shape: its centroid snapped to a grid of `step`.
pub fn label_point<R: AsRef<[Vector2<f64>]>>(
    rings: &[R],
    step: f64,
) -> Result<Vector2<f64>, GeometryError> {
    label_point_with(rings, step, CentroidCfg::default())
}

pub fn label_point_with<R: AsRef<[Vector2<f64>]>>(
    rings: &[R],
    step: f64,
    cfg: CentroidCfg,
) -> Result<Vector2<f64>, GeometryError> {
    let c = compound_centroid_with(rings, cfg)?;
    Ok(snap_to_grid(c.center, step))
}
