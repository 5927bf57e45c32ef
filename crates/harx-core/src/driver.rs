//! Runs recipes over archive files and feeds their output to a sink.
//!
//! Archives are processed one after another. Within an archive every item is
//! written as soon as a recipe yields it. A failure aborts only the archive it
//! happened in; the batch carries on with the next file.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{HarxError, Result};
use crate::har::load_archive;
use crate::output::OutputKind;
use crate::recipe::Recipe;
use crate::sink::Sink;

/// File extension picked up when a directory is given as input.
pub const HAR_EXTENSION: &str = "har";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputCounts {
    pub records: usize,
    pub binaries: usize,
    pub singles: usize,
}

impl OutputCounts {
    fn count(&mut self, kind: OutputKind) {
        match kind {
            OutputKind::Stream => self.records += 1,
            OutputKind::Binary => self.binaries += 1,
            OutputKind::Single => self.singles += 1,
        }
    }

    fn absorb(&mut self, other: OutputCounts) {
        self.records += other.records;
        self.binaries += other.binaries;
        self.singles += other.singles;
    }

    pub fn total(&self) -> usize {
        self.records + self.binaries + self.singles
    }
}

#[derive(Debug)]
pub struct ArchiveSummary {
    pub path: PathBuf,
    pub counts: OutputCounts,
}

#[derive(Debug, Default)]
pub struct BatchSummary {
    pub processed: Vec<ArchiveSummary>,
    pub failed: Vec<(PathBuf, HarxError)>,
}

impl BatchSummary {
    pub fn totals(&self) -> OutputCounts {
        let mut totals = OutputCounts::default();
        for archive in &self.processed {
            totals.absorb(archive.counts);
        }
        totals
    }

    /// True when inputs were given and none of them could be processed.
    pub fn all_failed(&self) -> bool {
        self.processed.is_empty() && !self.failed.is_empty()
    }
}

/// Runs each recipe over an already parsed archive.
pub fn run_recipes(
    archive: &Value,
    recipes: &[Box<dyn Recipe>],
    sink: &mut dyn Sink,
) -> Result<OutputCounts> {
    let mut counts = OutputCounts::default();
    for recipe in recipes {
        let _span = tracing::info_span!("recipe", name = recipe.name()).entered();
        for output in recipe.run(archive)? {
            let output = output?;
            tracing::trace!(?output, "emit");
            sink.write(&output)?;
            counts.count(output.kind());
        }
    }
    Ok(counts)
}

/// Loads `path` and runs the recipes over it.
pub fn process_archive(
    path: &Path,
    recipes: &[Box<dyn Recipe>],
    sink: &mut dyn Sink,
) -> Result<ArchiveSummary> {
    let archive = load_archive(path)?;
    let counts = run_recipes(&archive, recipes, sink)?;
    tracing::info!(
        path = %path.display(),
        records = counts.records,
        binaries = counts.binaries,
        "archive processed"
    );
    Ok(ArchiveSummary {
        path: path.to_path_buf(),
        counts,
    })
}

/// Processes every path; failures are logged and collected, never fatal.
pub fn process_batch(
    paths: &[PathBuf],
    recipes: &[Box<dyn Recipe>],
    sink: &mut dyn Sink,
) -> BatchSummary {
    let mut summary = BatchSummary::default();
    for path in paths {
        match process_archive(path, recipes, sink) {
            Ok(archive) => summary.processed.push(archive),
            Err(err) => {
                tracing::error!(path = %path.display(), %err, "archive failed");
                summary.failed.push((path.clone(), err));
            }
        }
    }
    summary
}

/// Expands directories into their `*.har` files (sorted, non-recursive);
/// other paths are passed through unchanged.
pub fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut inputs = Vec::new();
    for path in paths {
        if !path.is_dir() {
            inputs.push(path.clone());
            continue;
        }
        let mut found: Vec<PathBuf> = fs::read_dir(path)
            .map_err(|e| HarxError::io(path, e))?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.is_file())
            .filter(|p| p.extension().and_then(|s| s.to_str()) == Some(HAR_EXTENSION))
            .collect();
        found.sort();
        if found.is_empty() {
            tracing::warn!(dir = %path.display(), "no .har files in directory");
        }
        inputs.extend(found);
    }
    Ok(inputs)
}
