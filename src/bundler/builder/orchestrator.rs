//! Compile-and-package orchestration.
//!
//! This module provides the [`JarBundler`] orchestrator that runs the
//! pipeline steps strictly in order, each one a precondition for the next.

use crate::bundler::{
    BundledArchive, Result, Settings, SettingsBuilder,
    archive::create_jar,
    classpath::assemble_classpath,
    compiler::{CompileRequest, Compiler, Javac},
    error::ErrorExt,
    source::{discover_sources, resolve_source_root},
    utils::fs::{ensure_sources_outside, prepare_output_dir},
};
use std::path::{Path, PathBuf};

use super::checksum::calculate_sha256;

/// Main compile-and-package orchestrator.
///
/// Single-threaded and blocking: compilation finishes before archiving
/// starts. The output directory must not be shared with a concurrent run.
///
/// # Examples
///
/// ```no_run
/// use jar_bundler::bundler::{JarBundler, SettingsBuilder};
///
/// # fn example() -> jar_bundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .source("proj/Main.java")
///     .output_dir("output")
///     .build()?;
///
/// let archive = JarBundler::new(settings).bundle()?;
/// println!("Created {} ({} bytes)", archive.path.display(), archive.size);
/// println!("SHA256: {}", archive.checksum);
/// # Ok(())
/// # }
/// ```
pub struct JarBundler {
    settings: Settings,
    compiler: Option<Box<dyn Compiler>>,
}

impl std::fmt::Debug for JarBundler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JarBundler")
            .field("settings", &self.settings)
            .field("compiler", &self.compiler.as_ref().map(|_| "<Compiler>"))
            .finish()
    }
}

impl JarBundler {
    /// Creates a bundler that locates `javac` when it is first needed.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            compiler: None,
        }
    }

    /// Creates a bundler that compiles with `compiler`.
    pub fn with_compiler(settings: Settings, compiler: impl Compiler + 'static) -> Self {
        Self {
            settings,
            compiler: Some(Box::new(compiler)),
        }
    }

    /// Returns a reference to the bundler settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Compiles the source tree and writes the archive.
    ///
    /// # Steps
    ///
    /// 1. Resolve the effective source root
    /// 2. Discover `.java` files under it
    /// 3. Assemble the classpath
    /// 4. Empty the output directory and compile into it
    /// 5. Archive every file in the output directory
    ///
    /// # Errors
    ///
    /// The first failing step aborts the run; see [`Error`](crate::bundler::Error).
    /// On error the filesystem state must not be treated as a usable archive.
    pub fn bundle(&self) -> Result<BundledArchive> {
        let settings = &self.settings;

        let source_root = resolve_source_root(settings.source())?;

        let sources = discover_sources(&source_root)?;
        log::info!("Compiling {} Java file(s)", sources.len());

        let classpath = assemble_classpath(settings.classpath_dirs())?;

        ensure_sources_outside(settings.output_dir(), &source_root, &sources)?;
        prepare_output_dir(settings.output_dir())?;
        let request = CompileRequest {
            sources: &sources,
            output_dir: settings.output_dir(),
            classpath: classpath.as_deref(),
            settings: settings.compiler(),
        };
        match &self.compiler {
            Some(compiler) => compiler.compile(&request)?,
            None => Javac::locate(settings.compiler())?.compile(&request)?,
        }

        let archive_path = settings.archive_path();
        let entries = create_jar(settings.output_dir(), archive_path, settings.archive())?;

        let size = std::fs::metadata(archive_path)
            .fs_context("reading archive metadata", archive_path)?
            .len();
        let checksum = calculate_sha256(archive_path)?;

        log::info!(
            "✓ Created {} ({} entries, {} bytes)",
            archive_path.display(),
            entries.len(),
            size
        );

        Ok(BundledArchive {
            path: archive_path.to_path_buf(),
            entries,
            size,
            checksum,
            source_count: sources.len(),
        })
    }
}

/// Compiles everything under `source_root` and packages it at `archive_path`.
///
/// `source_root` may name a file, in which case its whole parent directory is
/// compiled. `javac` is located through `JAVA_HOME` or `PATH`.
pub fn compile_and_package<P: AsRef<Path>>(
    source_root: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    archive_path: impl AsRef<Path>,
    classpath_dirs: &[P],
) -> Result<()> {
    let settings = SettingsBuilder::new()
        .source(source_root)
        .output_dir(output_dir)
        .archive_path(archive_path)
        .classpath_dirs(
            classpath_dirs
                .iter()
                .map(|p| p.as_ref().to_path_buf())
                .collect::<Vec<PathBuf>>(),
        )
        .build()?;

    JarBundler::new(settings).bundle().map(|_| ())
}
