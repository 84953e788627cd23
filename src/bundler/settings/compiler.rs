//! Compiler invocation settings.

use std::path::PathBuf;

/// Default source encoding passed to `javac -encoding`.
pub const DEFAULT_ENCODING: &str = "UTF-8";

/// Options forwarded to the Java compiler.
///
/// # Example
///
/// ```toml
/// javac = "/usr/lib/jvm/java-21/bin/javac"
/// encoding = "UTF-8"
/// release = 17
/// ```
#[derive(Debug, Clone)]
pub struct CompilerSettings {
    /// Explicit compiler executable.
    ///
    /// Default: None (looked up through `JAVA_HOME`, then `PATH`)
    pub javac: Option<PathBuf>,

    /// Source file encoding.
    ///
    /// Default: `UTF-8`
    pub encoding: String,

    /// Target platform release (`javac --release`).
    ///
    /// Default: None (compiler default)
    pub release: Option<u32>,
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            javac: None,
            encoding: DEFAULT_ENCODING.to_string(),
            release: None,
        }
    }
}
