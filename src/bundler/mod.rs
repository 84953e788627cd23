//! Compile-then-archive pipeline.
//!
//! Compiles a Java source tree with an external compiler and packages the
//! compiled classes into a jar.
//!
//! # Example
//!
//! ```no_run
//! use jar_bundler::bundler::{assemble_classpath, compile_and_package};
//!
//! # fn example() -> jar_bundler::bundler::Result<()> {
//! let classpath = assemble_classpath(&["lib"])?;
//! println!("classpath: {:?}", classpath);
//!
//! compile_and_package("proj/Main.java", "output", "output/Main.jar", &["lib"])?;
//! # Ok(())
//! # }
//! ```

pub mod archive;
pub mod builder;
pub mod classpath;
pub mod compiler;
pub mod error;
pub mod settings;
pub mod source;
pub mod utils;

pub use builder::{JarBundler, calculate_sha256, compile_and_package};
pub use classpath::{CLASSPATH_SEPARATOR, assemble_classpath};
pub use compiler::{CompileRequest, Compiler, Javac};
pub use error::{Error, Result};
pub use settings::{
    ArchiveSettings, CompilerSettings, Compression, FileConfig, Settings, SettingsBuilder,
};

use std::path::PathBuf;

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundledArchive {
    /// Where the archive was written.
    pub path: PathBuf,
    /// Entry names in write order, manifest first.
    pub entries: Vec<String>,
    /// Archive size in bytes.
    pub size: u64,
    /// Hex SHA-256 of the archive.
    pub checksum: String,
    /// Number of source files handed to the compiler.
    pub source_count: usize,
}
