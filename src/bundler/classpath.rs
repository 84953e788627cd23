//! Classpath assembly.
//!
//! Each classpath directory contributes the absolute paths of its immediate
//! entries, in the order the filesystem lists them. Contributions are joined
//! in input order with the platform path separator.

use crate::bundler::error::{Error, ErrorExt, Result};
use path_absolutize::Absolutize;
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

/// Separator between classpath entries (`;` on Windows, `:` elsewhere).
#[cfg(windows)]
pub const CLASSPATH_SEPARATOR: char = ';';

/// Separator between classpath entries (`;` on Windows, `:` elsewhere).
#[cfg(not(windows))]
pub const CLASSPATH_SEPARATOR: char = ':';

/// Builds the classpath string for the given directories.
///
/// Returns `None` when `directories` is empty, meaning the compiler must be
/// invoked without a `-classpath` option at all. Any non-empty input yields
/// `Some`, even when every directory is empty.
///
/// # Errors
///
/// [`Error::DirectoryNotFound`] if any path is missing or not a directory.
/// No directory is listed until every path has been checked.
pub fn assemble_classpath<P: AsRef<Path>>(directories: &[P]) -> Result<Option<OsString>> {
    if directories.is_empty() {
        log::info!("No classpath directories given");
        return Ok(None);
    }

    for dir in directories {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(Error::DirectoryNotFound {
                path: dir.to_path_buf(),
            });
        }
    }

    let mut classpath = OsString::new();
    for dir in directories {
        for entry in directory_entries(dir.as_ref())? {
            if !classpath.is_empty() {
                classpath.push(CLASSPATH_SEPARATOR.to_string());
            }
            classpath.push(entry);
        }
    }

    log::info!(
        "Including the following libraries in classpath: {}",
        classpath.to_string_lossy()
    );
    Ok(Some(classpath))
}

/// Lists the absolute paths of a directory's immediate entries, unsorted.
pub fn directory_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let base = dir
        .absolutize()
        .fs_context("resolving classpath directory", dir)?
        .into_owned();

    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir).fs_context("listing classpath directory", dir)? {
        let entry = entry.fs_context("reading classpath entry", dir)?;
        entries.push(base.join(entry.file_name()));
    }

    log::debug!(
        "Classpath directory {} contributes {} entr{}",
        dir.display(),
        entries.len(),
        if entries.len() == 1 { "y" } else { "ies" }
    );
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn split(classpath: &OsString) -> Vec<PathBuf> {
        std::env::split_paths(classpath).collect()
    }

    #[test]
    fn empty_input_means_no_classpath() {
        let none: &[PathBuf] = &[];
        assert_eq!(assemble_classpath(none).unwrap(), None);
    }

    #[test]
    fn expands_immediate_entries_to_absolute_paths() {
        let lib = tempfile::tempdir().unwrap();
        fs::write(lib.path().join("a.jar"), b"").unwrap();
        fs::write(lib.path().join("b.jar"), b"").unwrap();
        fs::create_dir(lib.path().join("nested")).unwrap();
        fs::write(lib.path().join("nested/deep.jar"), b"").unwrap();

        let classpath = assemble_classpath(&[lib.path()]).unwrap().unwrap();
        let mut entries = split(&classpath);
        entries.sort();

        assert_eq!(
            entries,
            vec![
                lib.path().join("a.jar"),
                lib.path().join("b.jar"),
                lib.path().join("nested"),
            ]
        );
        assert!(entries.iter().all(|p| p.is_absolute()));
    }

    #[test]
    fn keeps_directory_order() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        fs::write(first.path().join("one.jar"), b"").unwrap();
        fs::write(second.path().join("two.jar"), b"").unwrap();

        let forward = assemble_classpath(&[first.path(), second.path()])
            .unwrap()
            .unwrap();
        let backward = assemble_classpath(&[second.path(), first.path()])
            .unwrap()
            .unwrap();

        assert_eq!(
            split(&forward),
            vec![first.path().join("one.jar"), second.path().join("two.jar")]
        );
        assert_eq!(
            split(&backward),
            vec![second.path().join("two.jar"), first.path().join("one.jar")]
        );
    }

    #[test]
    fn empty_directory_still_yields_some() {
        let empty = tempfile::tempdir().unwrap();
        assert_eq!(
            assemble_classpath(&[empty.path()]).unwrap(),
            Some(OsString::new())
        );
    }

    #[test]
    fn empty_directory_adds_no_stray_separator() {
        let empty = tempfile::tempdir().unwrap();
        let lib = tempfile::tempdir().unwrap();
        fs::write(lib.path().join("x.jar"), b"").unwrap();

        let classpath = assemble_classpath(&[empty.path(), lib.path()])
            .unwrap()
            .unwrap();
        assert_eq!(split(&classpath), vec![lib.path().join("x.jar")]);
    }

    #[test]
    fn missing_directory_fails() {
        let lib = tempfile::tempdir().unwrap();
        let missing = lib.path().join("missing");

        let err = assemble_classpath(&[lib.path().to_path_buf(), missing.clone()]).unwrap_err();
        match err {
            Error::DirectoryNotFound { path } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn file_is_not_a_classpath_directory() {
        let lib = tempfile::tempdir().unwrap();
        let file = lib.path().join("a.jar");
        fs::write(&file, b"").unwrap();

        assert!(matches!(
            assemble_classpath(&[file]),
            Err(Error::DirectoryNotFound { .. })
        ));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_entry_names_survive() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        let lib = tempfile::tempdir().unwrap();
        let name = OsStr::from_bytes(b"lib-\xff.jar");
        fs::write(lib.path().join(name), b"").unwrap();

        let classpath = assemble_classpath(&[lib.path()]).unwrap().unwrap();
        assert_eq!(split(&classpath), vec![lib.path().join(name)]);
    }
}
