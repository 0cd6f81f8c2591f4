//! Reading puzzle input from disk
use std::fs;
use std::path::Path;

use crate::errors::LoadError;
use crate::grid::Grid;

/// Reads the whole file at `path` into a string.
///
/// The file is closed again before this returns, on success and on error.
pub fn read_input<P: AsRef<Path>>(path: P) -> Result<String, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read input");
    Ok(text)
}

impl Grid {
    /// Reads the file at `path` and builds a grid from its contents. See [`Grid::build`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Grid, LoadError> {
        let text = read_input(path)?;
        Ok(Grid::build(&text)?)
    }
}
