//! Deep access into nested JSON by path.
//!
//! A path is a list of steps. Each step is either a literal key/index or a
//! computed [`Selector`] that inspects the current container and returns the
//! key to follow. Missing mapping keys resolve to "absent" (`Ok(None)`);
//! mis-indexed sequences are errors.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::AccessError;

/// Key into a container: mapping key or sequence index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Name(String),
    Index(usize),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Name(name) => write!(f, "{name}"),
            Key::Index(index) => write!(f, "[{index}]"),
        }
    }
}

type SelectFn = dyn Fn(&Value) -> Result<Key, AccessError> + Send + Sync;

/// Data-dependent path step: computes a key from the container it is applied to.
#[derive(Clone)]
pub struct Selector {
    name: &'static str,
    func: Arc<SelectFn>,
}

impl Selector {
    pub fn new<F>(name: &'static str, func: F) -> Self
    where
        F: Fn(&Value) -> Result<Key, AccessError> + Send + Sync + 'static,
    {
        Selector {
            name,
            func: Arc::new(func),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn select(&self, container: &Value) -> Result<Key, AccessError> {
        (self.func)(container)
    }

    /// Picks the element whose numeric `field` is largest.
    ///
    /// On a sequence returns the element's index; on a mapping returns the key
    /// of the winning value. Ties keep the earliest maximum. Fails on an empty
    /// container or when an element lacks a numeric `field`.
    pub fn max_by(field: &'static str) -> Self {
        Selector::new("max_by", move |container| {
            let fail = |reason: String| AccessError::Selector {
                selector: "max_by",
                reason,
            };
            let elements: Vec<(Key, &Value)> = match container {
                Value::Array(items) => items
                    .iter()
                    .enumerate()
                    .map(|(i, v)| (Key::Index(i), v))
                    .collect(),
                Value::Object(map) => map
                    .iter()
                    .map(|(k, v)| (Key::Name(k.clone()), v))
                    .collect(),
                _ => return Err(fail("container is neither a mapping nor a sequence".into())),
            };

            let mut best: Option<(Key, f64)> = None;
            for (key, element) in elements {
                let measure = element
                    .get(field)
                    .and_then(Value::as_f64)
                    .ok_or_else(|| fail(format!("element {key} has no numeric `{field}`")))?;
                let taller = best.as_ref().map_or(true, |(_, top)| measure > *top);
                if taller {
                    best = Some((key, measure));
                }
            }
            best.map(|(key, _)| key)
                .ok_or_else(|| fail("container is empty".into()))
        })
    }
}

impl fmt::Debug for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Selector({})", self.name)
    }
}

/// One step of a path.
#[derive(Debug, Clone)]
pub enum PathStep {
    Literal(Key),
    Computed(Selector),
}

impl From<&str> for PathStep {
    fn from(name: &str) -> Self {
        PathStep::Literal(Key::Name(name.to_string()))
    }
}

impl From<String> for PathStep {
    fn from(name: String) -> Self {
        PathStep::Literal(Key::Name(name))
    }
}

impl From<usize> for PathStep {
    fn from(index: usize) -> Self {
        PathStep::Literal(Key::Index(index))
    }
}

impl From<Key> for PathStep {
    fn from(key: Key) -> Self {
        PathStep::Literal(key)
    }
}

impl From<Selector> for PathStep {
    fn from(selector: Selector) -> Self {
        PathStep::Computed(selector)
    }
}

pub type Path = Vec<PathStep>;

/// Builds a [`Path`] from anything convertible into a [`PathStep`].
///
/// ```
/// use harx_core::access::Selector;
/// use harx_core::path;
///
/// let p = path!["image_versions2", "candidates", Selector::max_by("height"), "url"];
/// assert_eq!(p.len(), 4);
/// ```
#[macro_export]
macro_rules! path {
    ($($step:expr),* $(,)?) => {
        vec![$($crate::access::PathStep::from($step)),*]
    };
}

/// Resolves `path` against `data`.
///
/// Returns `Ok(None)` as soon as a missing mapping key, a scalar or `null` is
/// reached. Indexing a sequence out of range, or with a name key, is an error.
pub fn access<'a>(data: &'a Value, path: &[PathStep]) -> Result<Option<&'a Value>, AccessError> {
    let mut current = data;
    for step in path {
        if !(current.is_object() || current.is_array()) {
            return Ok(None);
        }
        let next = match step {
            PathStep::Literal(key) => lookup(current, key)?,
            PathStep::Computed(selector) => {
                let key = selector.select(current)?;
                lookup(current, &key)?
            }
        };
        match next {
            Some(value) => current = value,
            None => return Ok(None),
        }
    }
    Ok(Some(current))
}

/// Like [`access`], but only yields string values.
pub fn access_str<'a>(data: &'a Value, path: &[PathStep]) -> Result<Option<&'a str>, AccessError> {
    Ok(access(data, path)?.and_then(Value::as_str))
}

fn lookup<'a>(container: &'a Value, key: &Key) -> Result<Option<&'a Value>, AccessError> {
    match (container, key) {
        (Value::Object(map), Key::Name(name)) => Ok(map.get(name)),
        // JSON object keys are strings; an index never matches.
        (Value::Object(_), Key::Index(_)) => Ok(None),
        (Value::Array(items), Key::Index(index)) => {
            items
                .get(*index)
                .map(Some)
                .ok_or(AccessError::IndexOutOfRange {
                    index: *index,
                    len: items.len(),
                })
        }
        (Value::Array(_), Key::Name(name)) => Err(AccessError::NotAnIndex(name.clone())),
        _ => Ok(None),
    }
}
