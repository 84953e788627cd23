//! Java compile-and-package library.
//!
//! This library compiles a Java source tree with an external `javac` and
//! packages the compiled classes into a jar:
//! - [`bundler::assemble_classpath`] builds the classpath from library directories
//! - [`bundler::compile_and_package`] runs the whole pipeline
//! - [`bundler::JarBundler`] runs it with explicit [`bundler::Settings`]
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
