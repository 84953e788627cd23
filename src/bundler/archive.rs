//! Jar archive construction.
//!
//! Every regular file under the output directory becomes one entry named by
//! its path relative to that directory, with `/` separators on every host.
//! A `META-INF/MANIFEST.MF` entry is always written first.

use crate::bundler::{
    error::{Error, ErrorExt, Result},
    settings::ArchiveSettings,
    utils::fs::create_parent_dir,
};
use path_absolutize::Absolutize;
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};
use zip::{ZipWriter, write::SimpleFileOptions};

/// Name of the manifest entry.
pub const MANIFEST_PATH: &str = "META-INF/MANIFEST.MF";

/// A file on disk and the name it gets inside the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// File to read.
    pub source: PathBuf,
    /// Forward-slash relative name.
    pub name: String,
}

/// Walks `dir` and returns one entry per regular file, sorted by name.
///
/// Directories are not recorded. `exclude` (typically the archive being
/// written) is skipped if it lives inside `dir`.
pub fn collect_entries(dir: &Path, exclude: Option<&Path>) -> Result<Vec<ArchiveEntry>> {
    let exclude = match exclude {
        Some(path) => Some(
            path.absolutize()
                .fs_context("resolving archive path", path)?
                .into_owned(),
        ),
        None => None,
    };

    let mut entries = Vec::new();
    for entry in walkdir::WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }

        if let Some(exclude) = &exclude {
            let absolute = entry
                .path()
                .absolutize()
                .fs_context("resolving output file", entry.path())?;
            if *absolute == *exclude {
                log::debug!("Skipping archive itself: {}", entry.path().display());
                continue;
            }
        }

        let relative = entry
            .path()
            .strip_prefix(dir)
            .map_err(|e| Error::GenericError(format!("{}: {}", entry.path().display(), e)))?;
        entries.push(ArchiveEntry {
            name: entry_name(relative),
            source: entry.into_path(),
        });
    }
    Ok(entries)
}

/// Converts a relative path into an archive entry name.
///
/// Components are joined with `/` and any remaining backslash is turned into
/// `/` as well, so names are identical on Windows and Unix hosts.
pub fn entry_name(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
        .replace('\\', "/")
}

/// Renders the manifest.
pub fn manifest(settings: &ArchiveSettings) -> String {
    let mut manifest = String::from("Manifest-Version: 1.0\r\n");
    manifest.push_str(&format!(
        "Created-By: {} {}\r\n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    ));
    if let Some(main_class) = &settings.main_class {
        manifest.push_str(&format!("Main-Class: {}\r\n", main_class));
    }
    manifest.push_str("\r\n");
    manifest
}

/// Packages every file under `dir` into a jar at `archive_path`.
///
/// Returns the entry names in write order, manifest first.
///
/// # Errors
///
/// - [`Error::EmptyOutput`] if `dir` holds no files; no archive is created.
/// - [`Error::ArchiveWrite`] on any failure while writing. A partial file
///   may remain at `archive_path`.
pub fn create_jar(
    dir: &Path,
    archive_path: &Path,
    settings: &ArchiveSettings,
) -> Result<Vec<String>> {
    log::info!("Creating JAR file {}", archive_path.display());

    let entries = collect_entries(dir, Some(archive_path))?;
    if entries.is_empty() {
        return Err(Error::EmptyOutput {
            path: dir.to_path_buf(),
        });
    }

    create_parent_dir(archive_path)?;
    write_jar(archive_path, &entries, settings)
}

/// Writes the manifest and `entries` into a new archive, replacing any
/// existing file.
pub fn write_jar(
    archive_path: &Path,
    entries: &[ArchiveEntry],
    settings: &ArchiveSettings,
) -> Result<Vec<String>> {
    let fail = |reason: String| Error::ArchiveWrite {
        path: archive_path.to_path_buf(),
        reason,
    };

    let file = File::create(archive_path).map_err(|e| fail(format!("creating archive: {}", e)))?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default().compression_method(settings.compression.method());

    let mut written = Vec::with_capacity(entries.len() + 1);

    zip.start_file(MANIFEST_PATH, options)
        .map_err(|e| fail(format!("adding {}: {}", MANIFEST_PATH, e)))?;
    zip.write_all(manifest(settings).as_bytes())
        .map_err(|e| fail(format!("writing {}: {}", MANIFEST_PATH, e)))?;
    written.push(MANIFEST_PATH.to_string());

    for entry in entries {
        log::info!(
            "Adding file {} to JAR file {}",
            entry.name,
            archive_path.display()
        );

        zip.start_file(entry.name.as_str(), options)
            .map_err(|e| fail(format!("adding {}: {}", entry.name, e)))?;
        let mut input = File::open(&entry.source)
            .map_err(|e| fail(format!("opening {}: {}", entry.source.display(), e)))?;
        io::copy(&mut input, &mut zip)
            .map_err(|e| fail(format!("copying {}: {}", entry.source.display(), e)))?;
        written.push(entry.name.clone());
    }

    let mut out = zip
        .finish()
        .map_err(|e| fail(format!("finishing archive: {}", e)))?;
    out.flush()
        .map_err(|e| fail(format!("flushing archive: {}", e)))?;

    Ok(written)
}
