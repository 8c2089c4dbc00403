use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ringcentroid::api::CentroidCfg;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod shapes;

use provenance::{code_rev, Provenance, Summary};
use shapes::{evaluate, load_shapes, EvalOpts};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Polygon centroids and label anchors")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute centroid, area and label anchor for every shape in a JSON or CSV file
    Centroid {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Snap label anchors to this grid step (1.0 = whole units)
        #[arg(long)]
        grid: Option<f64>,
        /// Areas with |area| <= eps are treated as degenerate
        #[arg(long, default_value_t = 0.0)]
        eps_area: f64,
        /// Report invalid shapes in the output instead of failing the run
        #[arg(long)]
        skip_invalid: bool,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Centroid {
            input,
            out,
            grid,
            eps_area,
            skip_invalid,
        } => {
            let opts = EvalOpts {
                cfg: CentroidCfg { eps_area },
                grid,
                skip_invalid,
            };
            centroid(&input, &out, opts, cmd.tag)
        }
        Action::Report => report(cmd.tag),
    }
}

fn centroid(input: &Path, out: &Path, opts: EvalOpts, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), tag = ?tag, "centroid");
    let set = load_shapes(input)?;
    let results = evaluate(&set, opts)?;
    let failed = results.shapes.iter().filter(|s| s.error.is_some()).count();
    tracing::info!(shapes = results.shapes.len(), failed, "evaluated");

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&results)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let prov = Provenance::for_run(input, &opts, Summary::of(&set, &results), out, tag)?
        .write_beside(out)?;
    tracing::info!(provenance = %prov.display(), "wrote");
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": code_rev(),
        "lib_version": ringcentroid::VERSION,
        "tags": tag.into_iter().collect::<Vec<_>>(),
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
