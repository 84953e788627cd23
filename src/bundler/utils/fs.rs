//! File system utilities for the output directory and archive path.

use crate::{
    bail,
    bundler::error::{Error, ErrorExt, Result},
};
use path_absolutize::Absolutize;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Fails if `output_dir` is, or contains, the source root or any source file.
///
/// Must run before [`prepare_output_dir`], which would delete them.
pub fn ensure_sources_outside(
    output_dir: &Path,
    source_root: &Path,
    sources: &[PathBuf],
) -> Result<()> {
    let output_dir = output_dir
        .absolutize()
        .fs_context("resolving output directory", output_dir)?;

    for source in std::iter::once(source_root).chain(sources.iter().map(PathBuf::as_path)) {
        let absolute = source
            .absolutize()
            .fs_context("resolving source path", source)?;
        if absolute.starts_with(&output_dir) {
            return Err(Error::OutputContainsSources {
                output_dir: output_dir.into_owned(),
                source: source.to_path_buf(),
            });
        }
    }
    Ok(())
}

/// Empties `path` if it exists, creates it (with parents) otherwise.
///
/// The directory itself is kept so that anything holding it open, or a
/// symlink pointing at it, stays valid.
pub fn prepare_output_dir(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => clean_dir(path),
        Ok(_) => bail!(
            "output path {} exists and is not a directory",
            path.display()
        ),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            fs::create_dir_all(path).fs_context("creating output directory", path)
        }
        Err(e) => Err(e).fs_context("inspecting output directory", path),
    }
}

/// Removes every entry inside `path` without removing `path` itself.
pub fn clean_dir(path: &Path) -> Result<()> {
    for entry in fs::read_dir(path).fs_context("listing output directory", path)? {
        let entry = entry.fs_context("reading output directory entry", path)?;
        let entry_path = entry.path();
        let file_type = entry
            .file_type()
            .fs_context("inspecting output entry", &entry_path)?;

        if file_type.is_dir() {
            fs::remove_dir_all(&entry_path)
                .fs_context("removing stale output directory", &entry_path)?;
        } else {
            fs::remove_file(&entry_path).fs_context("removing stale output file", &entry_path)?;
        }
    }
    log::debug!("Cleaned output directory {}", path.display());
    Ok(())
}

/// Creates the parent directory of `path` if it has one.
pub fn create_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).fs_context("creating archive directory", parent)
        }
        _ => Ok(()),
    }
}
