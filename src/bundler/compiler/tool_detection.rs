//! Java compiler discovery.
//!
//! Lookup order: an explicitly configured executable, then
//! `$JAVA_HOME/bin/javac`, then `javac` on `PATH`.

use crate::bundler::error::{Error, Result};
use std::{path::PathBuf, sync::LazyLock};

#[cfg(windows)]
const JAVAC_BINARY: &str = "javac.exe";

#[cfg(not(windows))]
const JAVAC_BINARY: &str = "javac";

/// `javac` found on `PATH` that answered `-version`.
///
/// Cached result to avoid repeated subprocess calls.
pub static JAVAC_ON_PATH: LazyLock<Option<PathBuf>> = LazyLock::new(probe_path_javac);

fn probe_path_javac() -> Option<PathBuf> {
    let path = match which::which("javac") {
        Ok(path) => path,
        Err(e) => {
            log::debug!("javac not found in PATH: {}", e);
            return None;
        }
    };
    log::debug!("Found javac at: {}", path.display());

    // javac prints its version on stdout since JDK 9, stderr before that
    match std::process::Command::new(&path).arg("-version").output() {
        Ok(output) if output.status.success() => {
            let version = if output.stdout.is_empty() {
                String::from_utf8_lossy(&output.stderr).into_owned()
            } else {
                String::from_utf8_lossy(&output.stdout).into_owned()
            };
            log::info!("✓ javac available: {}", version.trim());
            Some(path)
        }
        Ok(output) => {
            log::warn!(
                "javac found at {} but -version check failed (exit code: {:?}). Stderr: {}",
                path.display(),
                output.status.code(),
                String::from_utf8_lossy(&output.stderr)
            );
            None
        }
        Err(e) => {
            log::warn!(
                "javac found at {} but failed to execute: {}. Check file permissions.",
                path.display(),
                e
            );
            None
        }
    }
}

/// Returns the compiler executable to use.
///
/// # Errors
///
/// [`Error::CompilerNotFound`] if an explicit path does not resolve to an
/// executable, or if neither `JAVA_HOME` nor `PATH` provides one.
pub fn locate_javac(explicit: Option<&PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return which::which(path).map_err(|e| Error::CompilerNotFound {
            reason: format!("{} is not executable: {}", path.display(), e),
        });
    }

    if let Some(java_home) = std::env::var_os("JAVA_HOME") {
        let candidate = PathBuf::from(java_home).join("bin").join(JAVAC_BINARY);
        if candidate.is_file() {
            log::debug!("Using javac from JAVA_HOME: {}", candidate.display());
            return Ok(candidate);
        }
        log::debug!(
            "JAVA_HOME is set but {} does not exist, falling back to PATH",
            candidate.display()
        );
    }

    (*JAVAC_ON_PATH).clone().ok_or_else(|| Error::CompilerNotFound {
        reason: "set JAVA_HOME, put javac on PATH, or configure `javac`".to_string(),
    })
}
