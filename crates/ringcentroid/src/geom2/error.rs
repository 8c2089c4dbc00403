use std::fmt;

/// Errors surfaced by ring validation and centroid composition.
///
/// All failures are local and deterministic; no partial result is produced.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Fewer than 3 corners besides the closing duplicate and consecutive repeats.
    InsufficientVertices { found: usize },
    /// The last stored vertex does not repeat the first.
    RingNotClosed,
    /// A coordinate is NaN or infinite.
    NonFiniteCoordinate { index: usize },
    /// The (total) signed area vanishes, so the centroid is undefined.
    DegenerateGeometry { area: f64 },
    /// Finite input whose area or centroid overflowed to `inf`/`NaN`.
    NonFiniteResult { area: f64 },
    /// A compound shape without rings.
    EmptyShape,
    /// A ring of a compound shape failed; `part` is its index in the input.
    Part {
        part: usize,
        source: Box<GeometryError>,
    },
}

impl GeometryError {
    pub(crate) fn in_part(self, part: usize) -> Self {
        Self::Part {
            part,
            source: Box::new(self),
        }
    }

    /// Innermost error, skipping `Part` wrappers.
    pub fn root(&self) -> &GeometryError {
        match self {
            Self::Part { source, .. } => source.root(),
            other => other,
        }
    }
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientVertices { found } => write!(
                f,
                "ring has {found} vertices besides the closing one, need at least 3"
            ),
            Self::RingNotClosed => write!(f, "ring is not closed (last vertex != first vertex)"),
            Self::NonFiniteCoordinate { index } => {
                write!(f, "non-finite coordinate at vertex {index}")
            }
            Self::DegenerateGeometry { area } => {
                write!(f, "degenerate geometry: signed area {area} is zero")
            }
            Self::NonFiniteResult { area } => {
                write!(f, "centroid is not finite (signed area {area}); coordinates too large")
            }
            Self::EmptyShape => write!(f, "shape has no rings"),
            Self::Part { part, .. } => write!(f, "ring {part} is invalid"),
        }
    }
}

impl std::error::Error for GeometryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Part { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
