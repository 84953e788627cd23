//! Configuration structures for compile-and-package runs.
//!
//! [`Settings`] is built once per invocation through [`SettingsBuilder`],
//! optionally seeded from a TOML [`FileConfig`].

mod archive;
mod builder;
mod compiler;
mod config;
mod core;

pub use archive::{ArchiveSettings, Compression};
pub use builder::SettingsBuilder;
pub use compiler::{CompilerSettings, DEFAULT_ENCODING};
pub use config::{CONFIG_ENV, FileConfig};
pub use core::{DEFAULT_OUTPUT_DIR, JAR_EXTENSION, Settings, default_archive_path};
