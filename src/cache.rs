//! Session-scoped dataset cache: a single entry keyed by input path,
//! replaced when a different path is loaded. Owned by the calling
//! application layer, not the analytics core.

use crate::classify::classify;
use crate::error::LoadError;
use crate::parser::{BinetflowReader, Dataset};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Default)]
pub struct DatasetCache {
    entry: Option<(PathBuf, Arc<Dataset>)>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached dataset for `path`, parsing and classifying it on a
    /// miss. Loading a different path evicts the previous entry.
    pub fn load(&mut self, path: &Path) -> Result<Arc<Dataset>, LoadError> {
        if let Some((cached_path, dataset)) = &self.entry {
            if cached_path == path {
                return Ok(Arc::clone(dataset));
            }
        }
        let mut dataset = BinetflowReader::load(path)?;
        classify(&mut dataset);
        let dataset = Arc::new(dataset);
        self.entry = Some((path.to_path_buf(), Arc::clone(&dataset)));
        Ok(dataset)
    }

    /// Drop the cached entry, forcing a re-read on the next load.
    pub fn clear(&mut self) {
        self.entry = None;
    }
}
