//! Polygon ring centroids and areas.
//!
//! API Policy
//! - `api` is the curated surface for callers (CLI, benches). Module paths below
//!   it may move between versions.

pub mod api;
pub mod geom2;
pub mod geometry;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geometry::parallelogram_area;
pub use nalgebra::Vector2 as Vec2;

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_ring_radial, regular_ring, RadialCfg, ReplayToken, VertexCount};
    pub use crate::geom2::{
        close_ring, compound_centroid, label_point, ring_centroid_and_area, snap_to_grid,
        CentroidCfg, GeometryError, Orientation, RingCentroid,
    };
    pub use nalgebra::Vector2 as Vec2;
}
