//! Curated API for callers.
//!
//! Prefer these re-exports over deep module paths; internal layout may change.

// Centroids
pub use crate::geom2::{
    compound_centroid, compound_centroid_with, ring_centroid_and_area,
    ring_centroid_and_area_with, ring_orientation, ring_signed_area, CentroidCfg, GeometryError,
    Orientation, RingCentroid,
};
// Rings
pub use crate::geom2::{close_ring, reverse_ring, translate_ring, Ring, MIN_RING_VERTICES};
// Display snapping
pub use crate::geom2::{label_point, label_point_with, snap_to_grid};
// Random rings
pub use crate::geom2::rand::{
    draw_ring_radial, regular_ring, RadialCfg, ReplayToken as RingReplay, VertexCount,
};
