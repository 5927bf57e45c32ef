//! Output sinks.
//!
//! `DirectorySink` lays items out under one directory: records are appended
//! as JSON Lines to `<dir>/<sink>`, binaries and single documents are written
//! to `<dir>/<sink>.part` and renamed into place once complete.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{HarxError, Result};
use crate::output::Output;
use crate::url_model::sanitize_filename_for_linux;

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Destination for recipe output.
pub trait Sink {
    fn write(&mut self, output: &Output) -> Result<()>;
}

/// Collects outputs in memory.
impl Sink for Vec<Output> {
    fn write(&mut self, output: &Output) -> Result<()> {
        self.push(output.clone());
        Ok(())
    }
}

/// Writes outputs as files under a directory.
///
/// A record stream is truncated the first time this sink touches it and
/// appended to afterwards, so rerunning over the same archives does not
/// duplicate lines.
pub struct DirectorySink {
    root: PathBuf,
    /// Open record streams, keyed by their sanitized target path.
    streams: HashMap<PathBuf, File>,
}

impl DirectorySink {
    /// Creates `root` (and parents) if needed.
    pub fn create(root: &Path) -> Result<Self> {
        fs::create_dir_all(root).map_err(|e| HarxError::io(root, e))?;
        Ok(DirectorySink {
            root: root.to_path_buf(),
            streams: HashMap::new(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn target(&self, sink: &str) -> PathBuf {
        let name = sanitize_filename_for_linux(sink);
        let name = if name.is_empty() { "unnamed".to_string() } else { name };
        self.root.join(name)
    }

    fn append_record(&mut self, sink: &str, line: &[u8]) -> Result<()> {
        let path = self.target(sink);
        let file = match self.streams.entry(path.clone()) {
            Entry::Occupied(open) => open.into_mut(),
            Entry::Vacant(slot) => {
                let file = File::create(&path).map_err(|e| HarxError::io(&path, e))?;
                tracing::debug!(path = %path.display(), "opened record stream");
                slot.insert(file)
            }
        };
        file.write_all(line)
            .and_then(|()| file.write_all(b"\n"))
            .map_err(|e| HarxError::io(&path, e))
    }

    fn write_whole(&self, sink: &str, bytes: &[u8]) -> Result<()> {
        let final_path = self.target(sink);
        let part = temp_path(&final_path);
        fs::write(&part, bytes).map_err(|e| HarxError::io(&part, e))?;
        fs::rename(&part, &final_path).map_err(|e| HarxError::io(&final_path, e))?;
        tracing::debug!(path = %final_path.display(), bytes = bytes.len(), "wrote file");
        Ok(())
    }
}

impl Sink for DirectorySink {
    fn write(&mut self, output: &Output) -> Result<()> {
        match output {
            Output::Record { sink, record } => {
                let line = serde_json::to_vec(record).map_err(|source| HarxError::Encode {
                    what: format!("record for {sink}"),
                    source,
                })?;
                self.append_record(sink, &line)
            }
            Output::Binary { sink, content, .. } => self.write_whole(sink, content),
            Output::Single { sink, value } => {
                let bytes = serde_json::to_vec_pretty(value).map_err(|source| HarxError::Encode {
                    what: format!("document for {sink}"),
                    source,
                })?;
                self.write_whole(sink, &bytes)
            }
        }
    }
}

/// Path for the temp file: appends `.part` (e.g. `a.jpg` → `a.jpg.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}
