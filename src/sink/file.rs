// src/sink/file.rs
// =============================================================================
// This module persists the final result collection.
//
// Format: one URL per line, in collection (discovery) order, truncating any
// previous contents. Called exactly once, after the crawl has fully drained.
//
// Unlike the per-URL network errors, a persistence failure propagates to the
// caller as a hard failure - without the file, the run's result is lost.
// =============================================================================

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("failed to write {path}: {source}")]
pub struct PersistError {
    path: PathBuf,
    source: io::Error,
}

// Writes the collected URLs to `path`, one per line, overwriting any prior
// output
pub fn persist(path: &Path, urls: &[String]) -> Result<(), PersistError> {
    let wrap = |source: io::Error| PersistError {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(wrap)?;
    let mut writer = BufWriter::new(file);

    for url in urls {
        writeln!(writer, "{}", url).map_err(wrap)?;
    }

    writer.flush().map_err(wrap)
}
