//! 2D ring centroids for label placement.
//!
//! Purpose
//! - Compute signed area and area-weighted centroid of closed polygon rings and
//!   of compound shapes (outer boundaries plus holes, multi-part polygons).
//! - Keep computation and display snapping apart: centroids are full precision,
//!   `snap_to_grid` rounds on request.
//!
//! Conventions
//! - Rings are pre-closed (last vertex repeats the first).
//! - Clockwise rings have positive signed area, counter-clockwise negative.
//! - Zero area is an error (`GeometryError::DegenerateGeometry`) and overflow is
//!   `GeometryError::NonFiniteResult`; results are never `inf`/`NaN`.
//!
//! Code cross-refs: `Ring`, `RingCentroid`, `CentroidCfg`, `GeometryError`

mod centroid;
mod error;
pub mod rand;
mod ring;
mod snap;
mod types;

pub use centroid::{
    compound_centroid, compound_centroid_with, ring_centroid_and_area,
    ring_centroid_and_area_with, ring_orientation, ring_signed_area,
};
pub use error::GeometryError;
pub use ring::{close_ring, reverse_ring, translate_ring, Ring, MIN_RING_VERTICES};
pub use snap::{label_point, label_point_with, snap_to_grid};
pub use types::{CentroidCfg, Orientation, RingCentroid};
