//! Core Settings struct and implementations.

use super::{ArchiveSettings, CompilerSettings};
use crate::bundler::error::{Context, Result};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Archive file extension.
pub const JAR_EXTENSION: &str = "jar";

/// Default working directory for compiled classes.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Settings for one compile-and-package run.
///
/// Constructed via [`SettingsBuilder`](super::SettingsBuilder). Immutable once built.
///
/// # Examples
///
/// ```no_run
/// use jar_bundler::bundler::SettingsBuilder;
///
/// # fn example() -> jar_bundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .source("proj/Main.java")
///     .output_dir("output")
///     .classpath_dir("lib")
///     .build()?;
///
/// assert_eq!(settings.archive_path(), std::path::Path::new("output/Main.jar"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// Source directory, or a file whose parent directory is compiled.
    source: PathBuf,

    /// Working directory for compiled classes.
    ///
    /// Emptied before compilation, never removed afterwards.
    output_dir: PathBuf,

    /// Where the jar is written.
    archive_path: PathBuf,

    /// Directories whose immediate entries form the classpath, in order.
    classpath_dirs: Vec<PathBuf>,

    compiler: CompilerSettings,

    archive: ArchiveSettings,
}

impl Settings {
    pub(super) fn new(
        source: PathBuf,
        output_dir: PathBuf,
        archive_path: PathBuf,
        classpath_dirs: Vec<PathBuf>,
        compiler: CompilerSettings,
        archive: ArchiveSettings,
    ) -> Self {
        Self {
            source,
            output_dir,
            archive_path,
            classpath_dirs,
            compiler,
            archive,
        }
    }

    /// Returns the source path exactly as given.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Returns the output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Returns the archive path.
    pub fn archive_path(&self) -> &Path {
        &self.archive_path
    }

    /// Returns the classpath directories in input order.
    pub fn classpath_dirs(&self) -> &[PathBuf] {
        &self.classpath_dirs
    }

    /// Returns the compiler settings.
    pub fn compiler(&self) -> &CompilerSettings {
        &self.compiler
    }

    /// Returns the archive settings.
    pub fn archive(&self) -> &ArchiveSettings {
        &self.archive
    }
}

/// Derives `<output_dir>/<base name without extension>.jar` from the source path.
///
/// `proj/Main.java` becomes `Main.jar`, `proj/src` becomes `src.jar`. Paths
/// without a final component (such as `.`) are made absolute first.
pub fn default_archive_path(source: &Path, output_dir: &Path) -> Result<PathBuf> {
    let stem = match source.file_stem() {
        Some(stem) => stem.to_os_string(),
        None => source
            .absolutize()?
            .file_stem()
            .map(|s| s.to_os_string())
            .context(format!(
                "cannot derive an archive name from {}",
                source.display()
            ))?,
    };

    let mut file_name = stem;
    file_name.push(".");
    file_name.push(JAR_EXTENSION);
    Ok(output_dir.join(file_name))
}
