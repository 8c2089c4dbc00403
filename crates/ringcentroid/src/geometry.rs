use nalgebra::{Matrix2, Vector2};

/// Pre: `a` and `b` are 2D column vectors.
/// Post: returns the signed area of the parallelogram spanned by (a,b),
/// positive for a→b counterclockwise.
///
/// The fan triangle area of the centroid routines is `-0.5 * parallelogram_area(prev, cur)`.
pub fn parallelogram_area(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    // determinant of [a b]
    let m = Matrix2::from_columns(&[a, b]);
    m.determinant()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::ring_signed_area;
    use nalgebra::vector;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn area_axis_aligned() {
        let a = vector![1.0, 0.0];
        let b = vector![0.0, 2.5];
        assert!((parallelogram_area(a, b) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn triangle_ring_matches_half_parallelogram() {
        let mut rng = StdRng::seed_from_u64(42);
        let a = Vector2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
        let b = Vector2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
        let o = Vector2::zeros();
        let ring = [o, a, b, o];
        let expected = -0.5 * parallelogram_area(a, b);
        assert!((ring_signed_area(&ring).unwrap() - expected).abs() < 1e-12);
    }
}
