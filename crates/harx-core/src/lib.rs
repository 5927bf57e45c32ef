//! harx core: pull records and media out of HAR captures.
//!
//! The engine is small: [`access`] walks paths through JSON, [`predicate`]
//! filters log entries, [`extract`] applies a predicate to an archive and
//! [`pluck`] projects records. [`recipe`]s compose those into per-site
//! pipelines, and the [`driver`] runs recipes over files into a [`sink`].

pub mod access;
pub mod config;
pub mod driver;
pub mod error;
pub mod extract;
pub mod har;
pub mod logging;
pub mod output;
pub mod pluck;
pub mod predicate;
pub mod recipe;
pub mod sink;
pub mod url_model;

pub use error::{AccessError, HarxError};
