//! Command line interface for the jar bundler.
//!
//! Turns parsed arguments (flag form or notebook-magic tokens) plus an
//! optional configuration file into [`Settings`] and runs the pipeline.

mod args;
mod magic;

pub use args::{Args, Command};
pub use magic::MagicArgs;

use crate::bundler::{
    BundledArchive, FileConfig, JarBundler, Settings, SettingsBuilder, settings::CONFIG_ENV,
};
use crate::error::{CliError, Result};
use anyhow::Context as _;
use std::{
    io::{self, Write},
    path::PathBuf,
};

/// Main CLI entry point
pub fn run() -> Result<i32> {
    let args = Args::parse_args();
    let archive = execute(&args)?;

    writeln!(io::stdout().lock(), "{}", archive.path.display())?;
    log::info!("SHA256: {}", archive.checksum);
    Ok(0)
}

/// Runs the pipeline for already-parsed arguments.
pub fn execute(args: &Args) -> Result<BundledArchive> {
    let settings = settings_from_args(args)?;
    Ok(JarBundler::new(settings).bundle()?)
}

/// Builds pipeline settings from arguments and the configuration file.
pub fn settings_from_args(args: &Args) -> Result<Settings> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let (source, classpath_dirs) = match &args.command {
        Command::Bundle { source, classpath } => (source.clone(), classpath.clone()),
        Command::Magic { tokens } => {
            let magic = MagicArgs::parse(tokens)?;
            (magic.source, magic.classpath_dirs)
        }
    };

    let config = load_config(args.config.as_ref())?.overlay(args.overrides());

    let mut builder = SettingsBuilder::new()
        .source(source)
        .classpath_dirs(classpath_dirs)
        .with_config(&config);
    if let Some(archive) = &args.archive {
        builder = builder.archive_path(archive);
    }
    Ok(builder.build()?)
}

fn load_config(path: Option<&PathBuf>) -> Result<FileConfig> {
    match path {
        Some(path) => {
            log::debug!("Reading configuration from {}", path.display());
            let config = FileConfig::load(path)
                .with_context(|| format!("loading the --config file (or ${})", CONFIG_ENV))?;
            Ok(config)
        }
        None => Ok(FileConfig::default()),
    }
}
