//! Ring and compound centroids via triangle fans.
//!
//! Model
//! - Each ring is decomposed into triangles sharing its first vertex. Triangle
//!   areas come from the 2D cross product and triangle centroids are vertex
//!   averages, so the ring centroid is the area-weighted mean of the fan.
//! - Coordinates are taken relative to the first vertex before accumulating,
//!   which keeps rings far from the origin well conditioned.
//! - Compound shapes superpose the per-ring results weighted by signed area,
//!   so counter-clockwise holes subtract from clockwise outer rings.
//!
//! Code cross-refs: `ring::Ring`, `types::{RingCentroid, CentroidCfg}`

use nalgebra::Vector2;

use super::error::GeometryError;
use super::ring::Ring;
use super::types::{CentroidCfg, Orientation, RingCentroid, WeightedCenter};

/// Signed area and centroid of one pre-closed ring, with default tolerances.
pub fn ring_centroid_and_area(points: &[Vector2<f64>]) -> Result<RingCentroid, GeometryError> {
    ring_centroid_and_area_with(points, CentroidCfg::default())
}

/// Signed area and centroid of one pre-closed ring.
///
/// Pre: `points` is closed (last == first) with at least 3 corners.
/// Post: `area` is positive for clockwise rings; `center` is in world coordinates.
/// Both are finite; an overflowing area fails with `NonFiniteResult`.
pub fn ring_centroid_and_area_with(
    points: &[Vector2<f64>],
    cfg: CentroidCfg,
) -> Result<RingCentroid, GeometryError> {
    let ring = Ring::new(points)?;
    let fan = fan_moments(&ring);
    if cfg.is_degenerate(fan.area) {
        return Err(GeometryError::DegenerateGeometry { area: fan.area });
    }
    let center = fan.moment / (3.0 * fan.area) + ring.base();
    RingCentroid::new(center, fan.area).checked()
}

/// Accumulate the fan relative to the base vertex. The moment is left scaled by 3
/// (sum of `(prev + cur) * tri_area`); callers divide by `3 * area`.
fn fan_moments(ring: &Ring<'_>) -> WeightedCenter {
    let pts = ring.points();
    let base = ring.base();
    let n = pts.len();
    let mut acc = WeightedCenter::default();
    let mut prev = pts[1] - base;
    for p in &pts[2..n - 1] {
        let cur = p - base;
        let tri_area = 0.5 * (cur.x * prev.y - cur.y * prev.x);
        acc.area += tri_area;
        acc.moment += (prev + cur) * tri_area;
        prev = cur;
    }
    acc
}

/// Area-weighted centroid of several rings, with default tolerances.
pub fn compound_centroid<R: AsRef<[Vector2<f64>]>>(
    rings: &[R],
) -> Result<RingCentroid, GeometryError> {
    compound_centroid_with(rings, CentroidCfg::default())
}

/// Area-weighted centroid of several rings (outer boundaries and holes).
///
/// Rings are visited last to first; the weighted sum does not depend on order.
/// The first failing ring aborts with `GeometryError::Part`.
pub fn compound_centroid_with<R: AsRef<[Vector2<f64>]>>(
    rings: &[R],
    cfg: CentroidCfg,
) -> Result<RingCentroid, GeometryError> {
    if rings.is_empty() {
        return Err(GeometryError::EmptyShape);
    }
    let mut acc = WeightedCenter::default();
    for (part, ring) in rings.iter().enumerate().rev() {
        let rc = ring_centroid_and_area_with(ring.as_ref(), cfg).map_err(|e| e.in_part(part))?;
        acc += &rc;
    }
    acc.resolve(&cfg)
}

/// Signed area of a pre-closed ring (clockwise positive).
pub fn ring_signed_area(points: &[Vector2<f64>]) -> Result<f64, GeometryError> {
    let ring = Ring::new(points)?;
    Ok(fan_moments(&ring).area)
}

/// Winding of a pre-closed ring. Zero-area rings have no orientation.
pub fn ring_orientation(points: &[Vector2<f64>]) -> Result<Orientation, GeometryError> {
    let area = ring_signed_area(points)?;
    Orientation::from_signed_area(area).ok_or(GeometryError::DegenerateGeometry { area })
}
