//! Basic 2D types and tolerances used by the centroid routines.
//!
//! - `CentroidCfg`: centralizes the zero-area tolerance.
//! - `RingCentroid`: area-weighted center plus signed area, composable by `+`/`Sum`.
//! - `Orientation`: winding of a closed ring.
//!
//! Code cross-refs: `centroid::{ring_centroid_and_area, compound_centroid}`, `snap::label_point`

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use nalgebra::Vector2;

use super::error::GeometryError;

/// Centroid configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct CentroidCfg {
    /// Rings (and compound shapes) with `|area| <= eps_area` are rejected as degenerate.
    /// The default `0.0` only rejects an exactly vanishing area.
    pub eps_area: f64,
}

impl Default for CentroidCfg {
    fn default() -> Self {
        Self { eps_area: 0.0 }
    }
}

impl CentroidCfg {
    #[inline]
    pub(crate) fn is_degenerate(&self, area: f64) -> bool {
        !(area.abs() > self.eps_area.max(0.0))
    }
}

/// Centroid and signed area of a ring or compound shape.
///
/// Sign convention: clockwise rings carry positive area, counter-clockwise
/// rings negative area (shapefile outer rings vs. holes).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingCentroid {
    pub center: Vector2<f64>,
    pub area: f64,
}

impl RingCentroid {
    #[inline]
    pub fn new(center: Vector2<f64>, area: f64) -> Self {
        Self { center, area }
    }

    /// `None` for a zero or `NaN` area, which only the unchecked `Add`/`Sum` path produces.
    #[inline]
    pub fn orientation(&self) -> Option<Orientation> {
        Orientation::from_signed_area(self.area)
    }

    /// Reject non-finite area or center (overflow on huge but finite input).
    pub(crate) fn checked(self) -> Result<Self, GeometryError> {
        let finite = self.area.is_finite() && self.center.iter().all(|c| c.is_finite());
        if finite {
            Ok(self)
        } else {
            Err(GeometryError::NonFiniteResult { area: self.area })
        }
    }

    #[inline]
    pub(crate) fn weighted(&self) -> WeightedCenter {
        WeightedCenter {
            moment: self.center * self.area,
            area: self.area,
        }
    }
}

/// Running sum of `center * area` and `area`; the numerator/denominator pair of a
/// superposition before the final division.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct WeightedCenter {
    pub moment: Vector2<f64>,
    pub area: f64,
}

impl Default for WeightedCenter {
    fn default() -> Self {
        Self {
            moment: Vector2::zeros(),
            area: 0.0,
        }
    }
}

impl WeightedCenter {
    /// Divide out the area, rejecting degenerate or non-finite totals.
    pub fn resolve(&self, cfg: &CentroidCfg) -> Result<RingCentroid, GeometryError> {
        if cfg.is_degenerate(self.area) {
            return Err(GeometryError::DegenerateGeometry { area: self.area });
        }
        RingCentroid::new(self.moment / self.area, self.area).checked()
    }
}

impl AddAssign<&RingCentroid> for WeightedCenter {
    #[inline]
    fn add_assign(&mut self, rhs: &RingCentroid) {
        let w = rhs.weighted();
        self.moment += w.moment;
        self.area += w.area;
    }
}

impl Add for RingCentroid {
    type Output = RingCentroid;
    /// Superpose two parts. A vanishing total area yields a non-finite center;
    /// use `compound_centroid` for the checked path.
    fn add(self, rhs: RingCentroid) -> Self::Output {
        let mut acc = WeightedCenter::default();
        acc += &self;
        acc += &rhs;
        RingCentroid::new(acc.moment / acc.area, acc.area)
    }
}

impl AddAssign for RingCentroid {
    #[inline]
    fn add_assign(&mut self, rhs: RingCentroid) {
        *self = *self + rhs;
    }
}

impl Sum for RingCentroid {
    fn sum<I: Iterator<Item = RingCentroid>>(iter: I) -> Self {
        let mut acc = WeightedCenter::default();
        for it in iter {
            acc += &it;
        }
        RingCentroid::new(acc.moment / acc.area, acc.area)
    }
}

/// Winding direction of a closed ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
}

impl Orientation {
    /// Positive area is clockwise; zero and `NaN` have no winding.
    #[inline]
    pub fn from_signed_area(area: f64) -> Option<Self> {
        if area > 0.0 {
            Some(Self::Clockwise)
        } else if area < 0.0 {
            Some(Self::CounterClockwise)
        } else {
            None
        }
    }
}
