//! Error types for the compile-and-package pipeline.
//!
//! Every variant carries enough context (step, path, cause) to diagnose a
//! failure without re-running. Nothing in the pipeline is retried.

use std::{
    fmt::Display,
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while assembling the classpath, compiling, or archiving.
#[derive(Error, Debug)]
pub enum Error {
    /// A classpath entry does not exist or is not a directory.
    #[error("classpath directory not found: {}", path.display())]
    DirectoryNotFound {
        /// Offending path as given by the caller
        path: PathBuf,
    },

    /// The effective source root is not a directory.
    #[error("{} is not a directory", path.display())]
    InvalidSourceRoot {
        /// Effective source root after file-to-parent resolution
        path: PathBuf,
    },

    /// The compiler reported a failure. Diagnostics are passed through verbatim.
    #[error("there was an error compiling the Java code:\n{diagnostics}")]
    Compilation {
        /// Compiler stderr followed by stdout
        diagnostics: String,
    },

    /// Compilation succeeded but left nothing to archive.
    #[error("failed to create jar file: no files were found in directory {}", path.display())]
    EmptyOutput {
        /// Output directory that was walked
        path: PathBuf,
    },

    /// The output directory would be emptied with sources still inside it.
    #[error(
        "output directory {} contains source {}; it is emptied before compiling",
        output_dir.display(),
        source.display()
    )]
    OutputContainsSources {
        /// Output directory, absolute
        output_dir: PathBuf,
        /// Source root or source file found inside it
        source: PathBuf,
    },

    /// Writing the archive failed part way through.
    #[error("error creating jar file {}: {reason}", path.display())]
    ArchiveWrite {
        /// Archive being written
        path: PathBuf,
        /// Underlying cause
        reason: String,
    },

    /// No usable compiler could be located.
    #[error("java compiler not found: {reason}")]
    CompilerNotFound {
        /// Where we looked
        reason: String,
    },

    /// An external command could not be started.
    #[error("failed to run `{command}`: {error}")]
    CommandFailed {
        /// Command that failed to spawn
        command: String,
        /// Spawn error
        #[source]
        error: io::Error,
    },

    /// Configuration file could not be read or parsed.
    #[error("invalid configuration {}: {reason}", path.display())]
    Config {
        /// Configuration file path
        path: PathBuf,
        /// Parse or read error
        reason: String,
    },

    /// Filesystem failure with the operation and path that caused it.
    #[error("{context} {}: {error}", path.display())]
    Io {
        /// What we were doing
        context: String,
        /// Path involved
        path: PathBuf,
        /// Underlying error
        #[source]
        error: io::Error,
    },

    /// Filesystem failure without further context.
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Directory traversal failure.
    #[error("directory walk failed: {0}")]
    WalkError(#[from] walkdir::Error),

    /// Anything else.
    #[error("{0}")]
    GenericError(String),
}

/// Attaches a description and path to filesystem errors.
pub trait ErrorExt<T> {
    /// Wraps the error in [`Error::Io`] with `context` and `path`.
    fn fs_context(self, context: &str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|error| Error::Io {
            context: context.to_string(),
            path: path.as_ref().to_path_buf(),
            error,
        })
    }
}

/// Converts a missing value into [`Error::GenericError`].
pub trait Context<T> {
    /// Returns the value or an error carrying `msg`.
    fn context<C: Display>(self, msg: C) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context<C: Display>(self, msg: C) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(msg.to_string()))
    }
}

/// Returns early with an [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($($arg)*)))
    };
}
