//! Projecting nested JSON into flat records.

use serde_json::{Map, Value};

use crate::access::{access, Path};
use crate::error::AccessError;

/// Flat output record: field name to value, `null` where nothing was found.
pub type Record = Map<String, Value>;

/// Named paths to pluck, in output order.
#[derive(Debug, Clone, Default)]
pub struct FieldSpec {
    fields: Vec<(String, Path)>,
}

impl FieldSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: impl Into<String>, path: Path) -> Self {
        self.fields.push((name.into(), path));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.fields.iter().map(|(name, path)| (name.as_str(), path))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Path)> for FieldSpec {
    fn from_iter<I: IntoIterator<Item = (S, Path)>>(iter: I) -> Self {
        FieldSpec {
            fields: iter.into_iter().map(|(n, p)| (n.into(), p)).collect(),
        }
    }
}

/// Resolves every path of `spec` against `record`.
///
/// Absent values are kept as `null` so consumers can tell a missing field from
/// a misspelled one. Accessor errors propagate.
pub fn pluck(record: &Value, spec: &FieldSpec) -> Result<Record, AccessError> {
    spec.iter()
        .map(|(name, path)| {
            let value = access(record, path)?.cloned().unwrap_or(Value::Null);
            Ok((name.to_string(), value))
        })
        .collect()
}
