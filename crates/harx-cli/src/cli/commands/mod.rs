//! CLI command handlers, one per file.

mod completions;
mod entries;
mod recipes;
mod run;

pub use completions::run_completions;
pub use entries::{run_entries, EntryFilter};
pub use recipes::run_recipes;
pub use run::run_extract;
