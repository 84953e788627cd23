//! Source root resolution and source file discovery.

use crate::bundler::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Extension of compilable source files.
pub const SOURCE_EXTENSION: &str = "java";

/// Resolves the directory whose tree is compiled.
///
/// A directory is used as is. Anything else is replaced by its parent
/// directory, so naming one file compiles every source next to it. A bare
/// file name resolves to the current directory.
///
/// # Errors
///
/// [`Error::InvalidSourceRoot`] if the resolved path is not a directory.
pub fn resolve_source_root(source: &Path) -> Result<PathBuf> {
    let root = if source.is_dir() {
        source.to_path_buf()
    } else {
        match source.parent() {
            Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
            Some(parent) => parent.to_path_buf(),
            None => source.to_path_buf(),
        }
    };

    if !root.is_dir() {
        return Err(Error::InvalidSourceRoot { path: root });
    }

    if root != source {
        log::debug!(
            "{} is not a directory, compiling {} instead",
            source.display(),
            root.display()
        );
    }
    Ok(root)
}

/// Recursively collects every `.java` file under `root`, sorted by path.
pub fn discover_sources(root: &Path) -> Result<Vec<PathBuf>> {
    let mut sources = Vec::new();
    for entry in walkdir::WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && has_source_extension(entry.path()) {
            sources.push(entry.into_path());
        }
    }
    Ok(sources)
}

fn has_source_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == SOURCE_EXTENSION)
}
