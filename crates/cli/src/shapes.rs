//! Shape input/output for the `centroid` command.
//!
//! Inputs
//! - JSON: `{"shapes": [{"id": "a", "rings": [[[x, y], ...], ...]}]}`
//! - CSV: columns `shape`, `ring`, `x`, `y`; rows grouped by shape then ring in
//!   order of first appearance.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use ringcentroid::api::{compound_centroid_with, snap_to_grid, CentroidCfg};
use ringcentroid::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeIn {
    pub id: String,
    pub rings: Vec<Vec<[f64; 2]>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeSet {
    pub shapes: Vec<ShapeIn>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeOut {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub centroid: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    pub shapes: Vec<ShapeOut>,
}

impl ShapeIn {
    pub fn rings(&self) -> Vec<Vec<Vec2<f64>>> {
        self.rings
            .iter()
            .map(|r| r.iter().map(|&[x, y]| Vec2::new(x, y)).collect())
            .collect()
    }
}

/// Per-run options shared by all shapes.
#[derive(Debug, Clone, Copy)]
pub struct EvalOpts {
    pub cfg: CentroidCfg,
    /// Grid step for the label anchor; `None` skips the label.
    pub grid: Option<f64>,
    /// Report failing shapes in the output instead of aborting.
    pub skip_invalid: bool,
}

/// Dispatch on the file extension (`.json` or `.csv`).
pub fn load_shapes(path: &Path) -> Result<ShapeSet> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_json(path),
        Some("csv") => load_csv(path),
        _ => bail!("unsupported input {} (expected .json or .csv)", path.display()),
    }
}

fn load_json(path: &Path) -> Result<ShapeSet> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

fn load_csv(path: &Path) -> Result<ShapeSet> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    let shape = df.column("shape")?.cast(&DataType::String)?;
    let ring = df.column("ring")?.cast(&DataType::Int64)?;
    let x = df.column("x")?.cast(&DataType::Float64)?;
    let y = df.column("y")?.cast(&DataType::Float64)?;
    let rows = shape
        .str()?
        .into_iter()
        .zip(ring.i64()?.into_iter())
        .zip(x.f64()?.into_iter())
        .zip(y.f64()?.into_iter());

    let mut out: Vec<ShapeIn> = Vec::new();
    // (shape index, ring id) -> ring index, and shape id -> shape index
    let mut shape_index: HashMap<String, usize> = HashMap::new();
    let mut ring_index: HashMap<(usize, i64), usize> = HashMap::new();
    for (row, (((s, r), x), y)) in rows.enumerate() {
        let (Some(s), Some(r), Some(x), Some(y)) = (s, r, x, y) else {
            bail!("row {row}: missing value in shape/ring/x/y");
        };
        let si = match shape_index.get(s) {
            Some(&i) => i,
            None => {
                out.push(ShapeIn {
                    id: s.to_string(),
                    rings: Vec::new(),
                });
                shape_index.insert(s.to_string(), out.len() - 1);
                out.len() - 1
            }
        };
        let rings = &mut out[si].rings;
        let ri = *ring_index.entry((si, r)).or_insert_with(|| {
            rings.push(Vec::new());
            rings.len() - 1
        });
        rings[ri].push([x, y]);
    }
    Ok(ShapeSet { shapes: out })
}

/// Compute centroid, area and (optionally) the snapped label of every shape.
pub fn evaluate(set: &ShapeSet, opts: EvalOpts) -> Result<ResultSet> {
    let mut shapes = Vec::with_capacity(set.shapes.len());
    for sh in &set.shapes {
        let rings = sh.rings();
        match compound_centroid_with(&rings, opts.cfg) {
            Ok(c) => {
                let label = opts.grid.map(|step| {
                    let p = snap_to_grid(c.center, step);
                    [p.x, p.y]
                });
                shapes.push(ShapeOut {
                    id: sh.id.clone(),
                    centroid: Some([c.center.x, c.center.y]),
                    area: Some(c.area),
                    label,
                    error: None,
                });
            }
            Err(e) if opts.skip_invalid => {
                tracing::warn!(id = %sh.id, error = %e, cause = %e.root(), "skipping shape");
                shapes.push(ShapeOut {
                    id: sh.id.clone(),
                    centroid: None,
                    area: None,
                    label: None,
                    error: Some(format!("{e}: {}", e.root())),
                });
            }
            Err(e) => {
                return Err(anyhow::Error::new(e).context(format!("shape {}", sh.id)));
            }
        }
    }
    Ok(ResultSet { shapes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn opts() -> EvalOpts {
        EvalOpts {
            cfg: CentroidCfg::default(),
            grid: Some(1.0),
            skip_invalid: false,
        }
    }

    #[test]
    fn json_roundtrip_through_evaluate() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shapes.json");
        fs::write(
            &path,
            r#"{"shapes": [{"id": "tri", "rings": [[[0,0],[4,0],[0,3],[0,0]]]}]}"#,
        )
        .unwrap();
        let set = load_shapes(&path).unwrap();
        let res = evaluate(&set, opts()).unwrap();
        let out = &res.shapes[0];
        assert_eq!(out.id, "tri");
        let c = out.centroid.unwrap();
        assert!((c[0] - 4.0 / 3.0).abs() < 1e-12 && (c[1] - 1.0).abs() < 1e-12);
        assert!((out.area.unwrap() + 6.0).abs() < 1e-12);
        assert_eq!(out.label, Some([1.0, 1.0]));
    }

    #[test]
    fn csv_groups_rows_by_shape_and_ring() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shapes.csv");
        let mut csv = String::from("shape,ring,x,y\n");
        for (ring, x0) in [(0, 0.0), (1, 10.0)] {
            for (x, y) in [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)] {
                csv.push_str(&format!("a,{ring},{},{}\n", x + x0, y));
            }
        }
        csv.push_str("b,0,0,0\nb,0,4,0\nb,0,0,3\nb,0,0,0\n");
        fs::write(&path, csv).unwrap();
        let set = load_shapes(&path).unwrap();
        assert_eq!(set.shapes.len(), 2);
        assert_eq!(set.shapes[0].rings.len(), 2);
        assert_eq!(set.shapes[1].rings[0].len(), 4);
        assert_eq!(set.shapes[0].id, "a");
        assert_eq!(set.shapes[1].id, "b");
        let res = evaluate(&set, opts()).unwrap();
        let a = res.shapes[0].centroid.unwrap();
        assert!((a[0] - 5.5).abs() < 1e-12 && (a[1] - 0.5).abs() < 1e-12);
        assert!((res.shapes[0].area.unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn csv_interleaved_rows_join_first_seen_shape_and_ring() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shapes.csv");
        fs::write(
            &path,
            "shape,ring,x,y\n\
             b,7,0,0\n\
             a,3,5,5\n\
             b,7,4,0\n\
             a,1,9,9\n\
             b,7,0,3\n\
             a,3,6,6\n\
             b,7,0,0\n",
        )
        .unwrap();
        let set = load_shapes(&path).unwrap();
        let ids: Vec<&str> = set.shapes.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
        assert_eq!(set.shapes[0].rings, vec![vec![[0.0, 0.0], [4.0, 0.0], [0.0, 3.0], [0.0, 0.0]]]);
        assert_eq!(
            set.shapes[1].rings,
            vec![vec![[5.0, 5.0], [6.0, 6.0]], vec![[9.0, 9.0]]]
        );
    }

    #[test]
    fn invalid_shape_aborts_or_is_reported() {
        let set = ShapeSet {
            shapes: vec![ShapeIn {
                id: "line".into(),
                rings: vec![vec![[0.0, 0.0], [1.0, 0.0], [0.0, 0.0]]],
            }],
        };
        let err = evaluate(&set, opts()).unwrap_err();
        assert!(format!("{err:#}").contains("shape line"));

        let res = evaluate(
            &set,
            EvalOpts {
                skip_invalid: true,
                ..opts()
            },
        )
        .unwrap();
        let out = &res.shapes[0];
        assert!(out.centroid.is_none());
        assert!(out.error.as_deref().unwrap().contains("need at least 3"));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        assert!(load_shapes(Path::new("shapes.txt")).is_err());
    }
}
