//! `harx run <paths>...` – run recipes over archives into an output directory.

use anyhow::{bail, Result};
use harx_core::config::HarxConfig;
use harx_core::driver::{collect_inputs, process_batch};
use harx_core::recipe;
use harx_core::sink::DirectorySink;
use std::path::PathBuf;

/// Recipe names from the command line, else from config.
pub(crate) fn recipe_names(cfg: &HarxConfig, requested: &[String]) -> Vec<String> {
    if requested.is_empty() {
        cfg.recipes.clone()
    } else {
        requested.to_vec()
    }
}

pub fn run_extract(
    cfg: &HarxConfig,
    paths: &[PathBuf],
    requested: &[String],
    output_dir: Option<PathBuf>,
) -> Result<()> {
    let names = recipe_names(cfg, requested);
    if names.is_empty() {
        bail!("no recipe selected; pass --recipe or set `recipes` in the config");
    }
    let recipes = recipe::select(&names, cfg)?;

    let inputs = collect_inputs(paths)?;
    if inputs.is_empty() {
        bail!("no HAR files found in the given paths");
    }

    let out_dir = match output_dir.or_else(|| cfg.output_dir.clone()) {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let mut sink = DirectorySink::create(&out_dir)?;
    tracing::info!(archives = inputs.len(), recipes = ?names, out = %out_dir.display(), "starting run");

    let summary = process_batch(&inputs, &recipes, &mut sink);
    for (path, err) in &summary.failed {
        eprintln!("skipped {}: {}", path.display(), err);
    }
    let totals = summary.totals();
    println!(
        "Processed {} of {} archive(s): {} record(s), {} media file(s) -> {}",
        summary.processed.len(),
        inputs.len(),
        totals.records,
        totals.binaries,
        out_dir.display()
    );

    if summary.all_failed() {
        bail!("all {} archive(s) failed", summary.failed.len());
    }
    Ok(())
}
