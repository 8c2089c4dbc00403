//! Provenance record written next to every centroid result.
//!
//! `<out-stem>.provenance.json` carries the code revision, the settings the
//! shapes were evaluated with, the input it came from and a per-run summary of
//! the results, so a label file can be traced back without rerunning.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::panic::Location;
use std::path::{Path, PathBuf};

use crate::shapes::{EvalOpts, ResultSet, ShapeSet};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    pub code_rev: String,
    pub lib_version: String,
    pub callsite: String,
    pub tags: Vec<String>,
    pub input: InputInfo,
    pub settings: Settings,
    pub summary: Summary,
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputInfo {
    pub path: String,
    pub bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub grid: Option<f64>,
    pub eps_area: f64,
    pub skip_invalid: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub shapes: usize,
    pub rings: usize,
    /// Signed area summed over the shapes that resolved.
    pub total_area: f64,
    pub failed: Vec<String>,
}

impl From<&EvalOpts> for Settings {
    fn from(opts: &EvalOpts) -> Self {
        Self {
            grid: opts.grid,
            eps_area: opts.cfg.eps_area,
            skip_invalid: opts.skip_invalid,
        }
    }
}

impl Summary {
    pub fn of(set: &ShapeSet, results: &ResultSet) -> Self {
        Self {
            shapes: set.shapes.len(),
            rings: set.shapes.iter().map(|s| s.rings.len()).sum(),
            total_area: results.shapes.iter().filter_map(|s| s.area).sum(),
            failed: results
                .shapes
                .iter()
                .filter(|s| s.error.is_some())
                .map(|s| s.id.clone())
                .collect(),
        }
    }
}

impl Provenance {
    /// Snapshot a finished run. The callsite is the caller of this function.
    #[track_caller]
    pub fn for_run(
        input: &Path,
        opts: &EvalOpts,
        summary: Summary,
        output: &Path,
        tag: Option<String>,
    ) -> Result<Self> {
        let bytes = std::fs::metadata(input)
            .with_context(|| format!("stat {}", input.display()))?
            .len();
        let callsite = Location::caller();
        Ok(Self {
            code_rev: code_rev(),
            lib_version: ringcentroid::VERSION.to_string(),
            callsite: format!("{}:{}", callsite.file(), callsite.line()),
            tags: tag.into_iter().collect(),
            input: InputInfo {
                path: input.display().to_string(),
                bytes,
            },
            settings: Settings::from(opts),
            summary,
            output: output.display().to_string(),
        })
    }

    /// Write the record next to `output` and return its path.
    pub fn write_beside(&self, output: &Path) -> Result<PathBuf> {
        let path = sidecar_path(output);
        std::fs::write(&path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

/// `labels.json` -> `labels.provenance.json`.
pub fn sidecar_path(output: &Path) -> PathBuf {
    output.with_extension("provenance.json")
}

/// Revision baked in at build time, else taken from the environment.
pub fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
