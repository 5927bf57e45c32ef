//! `harx entries <path>` – inspect which entries a predicate selects.

use anyhow::Result;
use harx_core::extract::{entries, extract};
use harx_core::har::{self, load_archive};
use harx_core::predicate::Predicate;
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Default)]
pub struct EntryFilter {
    pub mime: Option<String>,
    pub url: Option<String>,
    pub method: Option<String>,
}

impl EntryFilter {
    pub fn predicate(&self) -> Predicate {
        Predicate {
            mime: self.mime.clone(),
            url: self.url.clone(),
            method: self.method.clone(),
        }
    }
}

pub fn run_entries(path: &Path, filter: &EntryFilter) -> Result<()> {
    let archive = load_archive(path)?;
    let predicate = filter.predicate();
    // An empty predicate matches nothing; without filters list everything.
    let selected: Vec<&Value> = if predicate.is_empty() {
        entries(&archive)?.iter().collect()
    } else {
        extract(&archive, &predicate)?
    };

    println!("{:<7} {:<32} {}", "METHOD", "MIME", "URL");
    for entry in &selected {
        println!(
            "{:<7} {:<32} {}",
            har::request_method(entry).unwrap_or("-"),
            har::mime_type(entry).unwrap_or("-"),
            har::request_url(entry).unwrap_or("-")
        );
    }
    println!("{} matching entr{}", selected.len(), if selected.len() == 1 { "y" } else { "ies" });
    Ok(())
}
