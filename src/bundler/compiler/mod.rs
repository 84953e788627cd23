//! Source-to-bytecode compilation.
//!
//! The pipeline talks to the compiler through the [`Compiler`] trait so the
//! external `javac` process ([`Javac`]) can be swapped out.
//!
//! - [`javac`] - `javac` process invocation
//! - [`tool_detection`] - locating a usable `javac`

mod javac;
mod tool_detection;

pub use javac::Javac;
pub use tool_detection::{JAVAC_ON_PATH, locate_javac};

use crate::bundler::{Result, settings::CompilerSettings};
use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

/// Everything one compiler invocation needs.
#[derive(Debug, Clone, Copy)]
pub struct CompileRequest<'a> {
    /// Source files, already discovered.
    pub sources: &'a [PathBuf],
    /// Directory receiving compiled classes.
    pub output_dir: &'a Path,
    /// Assembled classpath; `None` means no `-classpath` option.
    pub classpath: Option<&'a OsStr>,
    /// Encoding and release options.
    pub settings: &'a CompilerSettings,
}

/// A blocking compiler.
pub trait Compiler {
    /// Compiles `request.sources` into `request.output_dir`.
    ///
    /// Must return [`Error::Compilation`](crate::bundler::Error::Compilation)
    /// with the compiler's own diagnostics when compilation fails.
    fn compile(&self, request: &CompileRequest<'_>) -> Result<()>;
}
