//! Builder for constructing Settings.

use super::{
    ArchiveSettings, CompilerSettings, DEFAULT_ENCODING, FileConfig, Settings,
    core::DEFAULT_OUTPUT_DIR, default_archive_path,
};
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// # Examples
///
/// ```no_run
/// use jar_bundler::bundler::{SettingsBuilder, ArchiveSettings};
///
/// # fn example() -> jar_bundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .source("src/main/java")
///     .output_dir("build/classes")
///     .archive_path("build/app.jar")
///     .classpath_dirs(vec!["lib".into(), "vendor".into()])
///     .archive_settings(ArchiveSettings {
///         main_class: Some("com.example.Main".into()),
///         ..Default::default()
///     })
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    source: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    archive_path: Option<PathBuf>,
    classpath_dirs: Vec<PathBuf>,
    compiler: Option<CompilerSettings>,
    archive: Option<ArchiveSettings>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the source directory or file.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn source<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the working directory for compiled classes.
    ///
    /// Default: `output`
    pub fn output_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the archive path.
    ///
    /// Default: `<output_dir>/<source stem>.jar`
    pub fn archive_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.archive_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Replaces the classpath directories.
    pub fn classpath_dirs(mut self, dirs: Vec<PathBuf>) -> Self {
        self.classpath_dirs = dirs;
        self
    }

    /// Appends one classpath directory.
    pub fn classpath_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.classpath_dirs.push(dir.as_ref().to_path_buf());
        self
    }

    /// Sets compiler options.
    pub fn compiler_settings(mut self, settings: CompilerSettings) -> Self {
        self.compiler = Some(settings);
        self
    }

    /// Sets manifest and compression options.
    pub fn archive_settings(mut self, settings: ArchiveSettings) -> Self {
        self.archive = Some(settings);
        self
    }

    /// Fills every value not yet set from a configuration file.
    ///
    /// Call after the explicit setters so that they take precedence. Values
    /// passed through [`compiler_settings`](Self::compiler_settings) or
    /// [`archive_settings`](Self::archive_settings) count as set, even when
    /// they equal the defaults; only their `None` fields are filled.
    pub fn with_config(mut self, config: &FileConfig) -> Self {
        if self.output_dir.is_none() {
            self.output_dir = config.output_dir.clone();
        }

        self.compiler = Some(match self.compiler.take() {
            Some(explicit) => CompilerSettings {
                javac: explicit.javac.or_else(|| config.javac.clone()),
                release: explicit.release.or(config.release),
                ..explicit
            },
            None => CompilerSettings {
                javac: config.javac.clone(),
                encoding: config
                    .encoding
                    .clone()
                    .unwrap_or_else(|| DEFAULT_ENCODING.to_string()),
                release: config.release,
            },
        });

        self.archive = Some(match self.archive.take() {
            Some(explicit) => ArchiveSettings {
                main_class: explicit.main_class.or_else(|| config.main_class.clone()),
                ..explicit
            },
            None => ArchiveSettings {
                main_class: config.main_class.clone(),
                compression: config.compression.unwrap_or_default(),
            },
        });
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `source` is missing or no archive name can be
    /// derived from it.
    pub fn build(self) -> crate::bundler::Result<Settings> {
        use crate::bundler::error::Context;

        let source = self.source.context("source is required")?;
        let output_dir = self
            .output_dir
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
        let archive_path = match self.archive_path {
            Some(path) => path,
            None => default_archive_path(&source, &output_dir)?,
        };

        Ok(Settings::new(
            source,
            output_dir,
            archive_path,
            self.classpath_dirs,
            self.compiler.unwrap_or_default(),
            self.archive.unwrap_or_default(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::settings::Compression;

    #[test]
    fn source_is_required() {
        assert!(SettingsBuilder::new().output_dir("o").build().is_err());
    }

    #[test]
    fn defaults() {
        let settings = SettingsBuilder::new().source("proj/Main.java").build().unwrap();
        assert_eq!(settings.output_dir(), Path::new("output"));
        assert_eq!(settings.archive_path(), Path::new("output/Main.jar"));
        assert!(settings.classpath_dirs().is_empty());
        assert_eq!(settings.compiler().encoding, "UTF-8");
        assert_eq!(settings.archive().compression, Compression::Deflate);
    }

    #[test]
    fn classpath_order_is_kept() {
        let settings = SettingsBuilder::new()
            .source("src")
            .classpath_dir("b")
            .classpath_dir("a")
            .build()
            .unwrap();
        assert_eq!(
            settings.classpath_dirs(),
            &[PathBuf::from("b"), PathBuf::from("a")]
        );
    }

    #[test]
    fn explicit_values_beat_config() {
        let config = FileConfig {
            output_dir: Some("from-config".into()),
            main_class: Some("config.Main".into()),
            release: Some(11),
            compression: Some(Compression::Store),
            ..Default::default()
        };
        let settings = SettingsBuilder::new()
            .source("src")
            .output_dir("from-cli")
            .with_config(&config)
            .build()
            .unwrap();

        assert_eq!(settings.output_dir(), Path::new("from-cli"));
        assert_eq!(settings.archive_path(), Path::new("from-cli/src.jar"));
        assert_eq!(settings.archive().main_class.as_deref(), Some("config.Main"));
        assert_eq!(settings.compiler().release, Some(11));
        assert_eq!(settings.archive().compression, Compression::Store);
    }

    #[test]
    fn explicit_defaults_beat_config() {
        let config = FileConfig {
            encoding: Some("ISO-8859-1".into()),
            compression: Some(Compression::Store),
            release: Some(11),
            main_class: Some("config.Main".into()),
            ..Default::default()
        };
        let settings = SettingsBuilder::new()
            .source("src")
            .compiler_settings(CompilerSettings {
                encoding: DEFAULT_ENCODING.into(),
                ..Default::default()
            })
            .archive_settings(ArchiveSettings {
                compression: Compression::Deflate,
                ..Default::default()
            })
            .with_config(&config)
            .build()
            .unwrap();

        assert_eq!(settings.compiler().encoding, "UTF-8");
        assert_eq!(settings.archive().compression, Compression::Deflate);
        assert_eq!(settings.compiler().release, Some(11));
        assert_eq!(settings.archive().main_class.as_deref(), Some("config.Main"));
    }

    #[test]
    fn config_fills_unset_encoding() {
        let config = FileConfig {
            encoding: Some("ISO-8859-1".into()),
            ..Default::default()
        };
        let settings = SettingsBuilder::new()
            .source("src")
            .with_config(&config)
            .build()
            .unwrap();
        assert_eq!(settings.compiler().encoding, "ISO-8859-1");
        assert_eq!(settings.archive().compression, Compression::Deflate);
    }
}
