//! Top-level error types for the command line front end.
//!
//! Pipeline failures come from [`crate::bundler::Error`]; this module adds
//! argument errors and suggestions for the user.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type for all CLI operations
#[derive(Error, Debug)]
pub enum BundlerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// Writing the result to stdout failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Pipeline errors
    #[error("{0}")]
    Bundler(#[from] crate::bundler::Error),

    /// Errors with caller context, printed with their whole cause chain
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Missing required argument
    #[error("Missing required argument: {argument}")]
    MissingArgument {
        /// Argument name
        argument: String,
    },
}

impl BundlerError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        use crate::bundler::Error as E;

        match self {
            Self::Bundler(E::DirectoryNotFound { .. }) => {
                vec!["Check that every classpath entry is an existing directory".to_string()]
            }
            Self::Bundler(E::InvalidSourceRoot { .. }) => {
                vec!["Pass a source directory, or a file inside one".to_string()]
            }
            Self::Bundler(E::Compilation { .. }) => {
                vec!["Fix the compiler errors reported above and run again".to_string()]
            }
            Self::Bundler(E::EmptyOutput { .. }) => vec![
                "Make sure the source directory contains .java files that declare classes"
                    .to_string(),
            ],
            Self::Bundler(E::CompilerNotFound { .. }) => vec![
                "Install a JDK and set JAVA_HOME, or pass --javac <PATH>".to_string(),
            ],
            Self::Bundler(E::OutputContainsSources { .. }) => vec![
                "Pass --output-dir pointing outside the source tree".to_string(),
            ],
            Self::Anyhow(e) if matches!(e.downcast_ref::<E>(), Some(E::Config { .. })) => vec![
                "Valid keys: output_dir, javac, encoding, release, main_class, compression"
                    .to_string(),
            ],
            Self::Cli(CliError::MissingArgument { .. }) => vec![
                "Expected: [-classpath <DIR>...] -source <PATH> [FILE...]".to_string(),
            ],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
