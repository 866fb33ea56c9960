//! Build pipeline for compiling JVM sources and packaging jar artifacts.
//!
//! This crate turns a project descriptor into an ordered sequence of build
//! stages:
//!
//! - **Compile** - `javac` invoked as an external black box
//! - **Descriptor sync** - the project descriptor copied into the packaged tree
//! - **Jar** - the archive writer streams `classes/` behind a manifest header
//! - **Uber** - dependency archives and the primary jar exploded into a
//!   staging tree and re-archived as one standalone jar
//!
//! # Architecture
//!
//! ```text
//! project.toml ──> BuildContext
//!                      │
//!   clean ──> compile ──> descriptor ──> jar ──> uber
//!                                         │        │
//!                          <lib>-<ver>.jar         └──> <lib>-<ver>-standalone.jar
//! ```
//!
//! Path collisions during the uber merge are reported and resolved
//! last-writer-wins. The primary artifact is exploded last, so its files
//! always take precedence over same-named dependency files.
//!
//! # Example
//!
//! ```rust,ignore
//! use jar_builder::build::config::load_project;
//! use jar_builder::pipeline::run_pipeline;
//! use jar_builder::stages::UBER_STAGES;
//! use std::path::Path;
//!
//! let ctx = load_project(Path::new("project.toml"))?;
//! run_pipeline(ctx, UBER_STAGES)?;
//! ```

pub mod artifact;
pub mod build;
pub mod pipeline;
pub mod preflight;
pub mod stages;

pub use artifact::ArtifactError;
pub use build::compiler::CompileError;
pub use build::context::{BuildContext, ConfigError};
pub use pipeline::{run_pipeline, Stage};
