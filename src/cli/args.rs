//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap. Options shared by
//! both subcommands map one-to-one onto [`FileConfig`] keys and override the
//! configuration file.

use crate::bundler::{Compression, FileConfig, settings::CONFIG_ENV};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Compile a Java source tree and package it into a jar
#[derive(Parser, Debug)]
#[command(
    name = "jar_bundler",
    version,
    about = "Compile a Java source tree and package it into a jar",
    long_about = "Compiles every .java file under a source directory with javac and packages the compiled classes into a jar.

If the source path names a file, its whole parent directory is compiled.
The output directory (default: output) is emptied before compiling.

Usage:
  jar_bundler bundle --source proj/Main.java
  jar_bundler bundle --source src --classpath lib --classpath vendor --archive dist/app.jar
  jar_bundler magic -classpath lib -source proj/Main.java

Exit code 0 = archive guaranteed to exist at the reported path."
)]
pub struct Args {
    /// TOML configuration file
    #[arg(long, global = true, env = CONFIG_ENV, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Working directory for compiled classes (emptied before compiling)
    #[arg(long, global = true, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Archive path (default: <OUTPUT_DIR>/<source name>.jar)
    #[arg(long, global = true, value_name = "PATH")]
    pub archive: Option<PathBuf>,

    /// Java compiler executable (default: $JAVA_HOME/bin/javac, then PATH)
    #[arg(long, global = true, value_name = "PATH")]
    pub javac: Option<PathBuf>,

    /// Source file encoding
    #[arg(long, global = true, value_name = "CHARSET")]
    pub encoding: Option<String>,

    /// Target Java release passed to javac --release
    #[arg(long, global = true, value_name = "N")]
    pub release: Option<u32>,

    /// Main-Class manifest attribute
    #[arg(long, global = true, value_name = "CLASS")]
    pub main_class: Option<String>,

    /// Entry compression: deflate or store
    #[arg(long, global = true, value_name = "METHOD")]
    pub compression: Option<Compression>,

    #[command(subcommand)]
    pub command: Command,
}

/// What to run.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile and package using named flags
    Bundle {
        /// Source directory, or a file whose directory is compiled
        #[arg(short = 's', long, value_name = "PATH")]
        source: PathBuf,

        /// Classpath directory; every entry inside it joins the classpath (repeatable, order kept)
        #[arg(short = 'c', long = "classpath", value_name = "DIR")]
        classpath: Vec<PathBuf>,
    },

    /// Compile and package from notebook-magic tokens: [-classpath DIR...] -source PATH [FILE...]
    Magic {
        /// Raw tokens
        #[arg(
            required = true,
            num_args = 1..,
            allow_hyphen_values = true,
            trailing_var_arg = true,
            value_name = "TOKENS"
        )]
        tokens: Vec<String>,
    },
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if let Command::Bundle { source, .. } = &self.command {
            if source.as_os_str().is_empty() {
                return Err("Source cannot be empty".to_string());
            }
        }

        if let Some(encoding) = &self.encoding {
            if encoding.trim().is_empty() {
                return Err("Encoding cannot be empty".to_string());
            }
        }

        if let Some(main_class) = &self.main_class {
            if main_class.contains(['/', '\\']) || main_class.ends_with(".class") {
                return Err(format!(
                    "Invalid main class: {}. Use a binary name such as com.example.Main",
                    main_class
                ));
            }
        }

        Ok(())
    }

    /// Options given on the command line, in configuration-file form.
    pub fn overrides(&self) -> FileConfig {
        FileConfig {
            output_dir: self.output_dir.clone(),
            javac: self.javac.clone(),
            encoding: self.encoding.clone(),
            release: self.release,
            main_class: self.main_class.clone(),
            compression: self.compression,
        }
    }
}
