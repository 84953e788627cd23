//! Optional TOML configuration file.
//!
//! Every key is optional. Values given on the command line take precedence
//! over values read here.
//!
//! ```toml
//! output_dir = "build/jar"
//! javac = "/opt/jdk/bin/javac"
//! encoding = "UTF-8"
//! release = 17
//! main_class = "com.example.Main"
//! compression = "store"
//! ```

use super::Compression;
use crate::bundler::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable consulted for the configuration file path.
pub const CONFIG_ENV: &str = "JAR_BUNDLER_CONFIG";

/// Contents of a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Working directory for compiled classes.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Compiler executable.
    #[serde(default)]
    pub javac: Option<PathBuf>,

    /// Source encoding.
    #[serde(default)]
    pub encoding: Option<String>,

    /// `javac --release` value.
    #[serde(default)]
    pub release: Option<u32>,

    /// `Main-Class` manifest attribute.
    #[serde(default)]
    pub main_class: Option<String>,

    /// Entry compression.
    #[serde(default)]
    pub compression: Option<Compression>,
}

impl FileConfig {
    /// Reads and parses a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            reason: format!("failed to read: {}", e),
        })?;
        Self::parse(path, &contents)
    }

    /// Returns `self` with every value set in `overrides` replaced.
    pub fn overlay(self, overrides: FileConfig) -> Self {
        Self {
            output_dir: overrides.output_dir.or(self.output_dir),
            javac: overrides.javac.or(self.javac),
            encoding: overrides.encoding.or(self.encoding),
            release: overrides.release.or(self.release),
            main_class: overrides.main_class.or(self.main_class),
            compression: overrides.compression.or(self.compression),
        }
    }

    fn parse(path: &Path, contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        log::debug!("Loaded configuration from {}: {:?}", path.display(), config);
        Ok(config)
    }
}
