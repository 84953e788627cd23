//! Pipeline orchestration.
//!
//! This module provides the main [`JarBundler`] orchestrator that runs the
//! compile-then-archive pipeline.
//!
//! # Overview
//!
//! The bundler:
//! 1. Reads configuration from [`Settings`](crate::bundler::Settings)
//! 2. Resolves the source root and discovers sources
//! 3. Assembles the classpath and runs the compiler
//! 4. Packages the compiled output into a jar
//! 5. Returns a [`BundledArchive`](crate::bundler::BundledArchive) with size and checksum
//!
//! # Module Organization
//!
//! - [`checksum`] - SHA256 checksum calculation for the archive
//! - [`orchestrator`] - Main [`JarBundler`] struct and [`compile_and_package`]

mod checksum;
mod orchestrator;

pub use checksum::calculate_sha256;
pub use orchestrator::{JarBundler, compile_and_package};
