//! Closed rings: validation and the closing-vertex convention.
//!
//! Convention
//! - A ring is stored pre-closed: the last vertex repeats the first. The triangle
//!   fan skips that duplicate. Open inputs are rejected rather than reinterpreted;
//!   `close_ring` converts them explicitly.
//!
//! Code cross-refs: `centroid::ring_centroid_and_area`, `error::GeometryError`

use nalgebra::Vector2;

use super::error::GeometryError;

/// Minimum number of vertices besides the closing duplicate.
pub const MIN_RING_VERTICES: usize = 3;

/// Validated, borrowed view of a pre-closed ring.
///
/// Invariants:
/// - All coordinates finite.
/// - `points.first() == points.last()`.
/// - At least `MIN_RING_VERTICES` corners once consecutive repeats are collapsed.
#[derive(Clone, Copy, Debug)]
pub struct Ring<'a> {
    points: &'a [Vector2<f64>],
    corners: usize,
}

impl<'a> Ring<'a> {
    pub fn new(points: &'a [Vector2<f64>]) -> Result<Self, GeometryError> {
        let (first, last) = match (points.first(), points.last()) {
            (Some(f), Some(l)) => (*f, *l),
            _ => return Err(GeometryError::InsufficientVertices { found: 0 }),
        };
        if let Some(index) = points
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(GeometryError::NonFiniteCoordinate { index });
        }
        if first != last {
            return Err(GeometryError::RingNotClosed);
        }
        let found = count_corners(points);
        if found < MIN_RING_VERTICES {
            return Err(GeometryError::InsufficientVertices { found });
        }
        Ok(Self {
            points,
            corners: found,
        })
    }

    /// Stored vertices, closing duplicate included.
    #[inline]
    pub fn points(&self) -> &'a [Vector2<f64>] {
        self.points
    }

    /// Number of corners, closing duplicate and consecutive repeats excluded.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.corners
    }

    /// First vertex; the fan apex.
    #[inline]
    pub fn base(&self) -> Vector2<f64> {
        self.points[0]
    }
}

/// Edges of non-zero length in a closed ring, i.e. its corners with consecutive
/// repeats collapsed. The closing duplicate contributes no edge.
fn count_corners(points: &[Vector2<f64>]) -> usize {
    points.windows(2).filter(|w| w[0] != w[1]).count()
}

/// Append the first vertex if the sequence is not already closed.
///
/// Empty input stays empty.
pub fn close_ring(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    let mut out = points.to_vec();
    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        if first != last {
            out.push(*first);
        }
    }
    out
}

/// Reverse the winding, keeping the same base vertex in front.
pub fn reverse_ring(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    let mut out = points.to_vec();
    out.reverse();
    out
}

/// Translate every vertex by `offset`.
pub fn translate_ring(points: &[Vector2<f64>], offset: Vector2<f64>) -> Vec<Vector2<f64>> {
    points.iter().map(|p| p + offset).collect()
}
