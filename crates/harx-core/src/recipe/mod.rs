//! Site-specific extraction pipelines.
//!
//! A recipe turns one parsed archive into a lazy, one-shot stream of
//! [`Output`]s. Recipes do no I/O of their own; the driver owns the archive
//! and hands each item to a sink as soon as it is produced.

mod reels;

pub use reels::Reels;

use serde_json::Value;

use crate::config::HarxConfig;
use crate::error::{HarxError, Result};
use crate::output::Output;

/// Stream of items for one archive. Recoverable failures are logged and
/// skipped inside the recipe; an `Err` item means the archive is unusable.
pub type Outputs<'a> = Box<dyn Iterator<Item = Result<Output>> + 'a>;

pub trait Recipe {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Starts the recipe over `archive`. Fails up front if the archive has no
    /// `log.entries`.
    fn run<'a>(&'a self, archive: &'a Value) -> Result<Outputs<'a>>;
}

/// Every recipe known to harx, configured from `config`.
pub fn registry(config: &HarxConfig) -> Vec<Box<dyn Recipe>> {
    vec![Box::new(Reels::new(&config.reels.api_fragment))]
}

/// Looks up a recipe by name.
pub fn find(name: &str, config: &HarxConfig) -> Result<Box<dyn Recipe>> {
    registry(config)
        .into_iter()
        .find(|r| r.name() == name)
        .ok_or_else(|| HarxError::UnknownRecipe(name.to_string()))
}

/// Resolves several names, keeping their order.
pub fn select(names: &[String], config: &HarxConfig) -> Result<Vec<Box<dyn Recipe>>> {
    names.iter().map(|name| find(name, config)).collect()
}
