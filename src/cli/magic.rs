//! Notebook-magic token form.
//!
//! Notebook kernels hand over a flat token list:
//!
//! ```text
//! [-classpath <DIR>...] -source <PATH> [FILE...]
//! ```
//!
//! `-classpath` is optional and must come first. Tokens after the source
//! path are accepted for compatibility and ignored: the whole source root is
//! always compiled.

use crate::error::{CliError, Result};
use std::path::PathBuf;

const CLASSPATH_FLAG: &str = "-classpath";
const SOURCE_FLAG: &str = "-source";

/// Parsed magic invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagicArgs {
    /// Classpath directories in the order given.
    pub classpath_dirs: Vec<PathBuf>,
    /// Source directory or file.
    pub source: PathBuf,
    /// Trailing tokens after the source path.
    pub extra_files: Vec<String>,
}

impl MagicArgs {
    /// Parses a token list.
    ///
    /// # Errors
    ///
    /// [`CliError::MissingArgument`] if `-source` or its path is missing.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        let tokens: Vec<&str> = tokens.iter().map(|t| t.as_ref()).collect();
        let mut pos = 0;
        let mut classpath_dirs = Vec::new();

        if tokens.first() == Some(&CLASSPATH_FLAG) {
            pos += 1;
            while pos < tokens.len() && tokens[pos] != SOURCE_FLAG {
                classpath_dirs.push(PathBuf::from(tokens[pos]));
                pos += 1;
            }
        }

        if tokens.get(pos) != Some(&SOURCE_FLAG) {
            return Err(CliError::MissingArgument {
                argument: SOURCE_FLAG.to_string(),
            }
            .into());
        }
        pos += 1;

        let source = tokens.get(pos).ok_or_else(|| CliError::MissingArgument {
            argument: format!("{} <PATH>", SOURCE_FLAG),
        })?;

        let extra_files: Vec<String> = tokens[pos + 1..].iter().map(|s| s.to_string()).collect();
        if !extra_files.is_empty() {
            log::debug!(
                "Ignoring {} trailing token(s); the whole source root is compiled: {:?}",
                extra_files.len(),
                extra_files
            );
        }

        Ok(Self {
            classpath_dirs,
            source: PathBuf::from(*source),
            extra_files,
        })
    }
}
