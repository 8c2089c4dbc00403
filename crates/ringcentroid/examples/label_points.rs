//! Print label anchors for a few random shapes.
//!
//! Usage:
//!   cargo run -p ringcentroid --example label_points -- [grid-step]
//!
//! Each shape is an outer ring with a smaller hole around an offset center.

use ringcentroid::prelude::*;

fn main() {
    let step: f64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(1.0);
    for i in 0..5u64 {
        let center = Vec2::new(100.0 * i as f64, 50.0);
        let outer = draw_ring_radial(
            RadialCfg {
                base_radius: 40.0,
                center,
                ..RadialCfg::default()
            },
            ReplayToken { seed: 2025, index: i },
        );
        let hole = regular_ring(8, 10.0, center + Vec2::new(12.0, 0.0));
        let hole: Vec<Vec2<f64>> = hole.into_iter().rev().collect();
        let rings = [outer, hole];
        match (compound_centroid(&rings), label_point(&rings, step)) {
            (Ok(c), Ok(label)) => println!(
                "shape {i}: area={:.2} centroid=({:.3}, {:.3}) label=({}, {})",
                c.area, c.center.x, c.center.y, label.x, label.y
            ),
            (Err(e), _) | (_, Err(e)) => println!("shape {i}: {e}"),
        }
    }
}
