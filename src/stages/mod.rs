//! Build pipeline stages.
//!
//! Stages run in order: clean, compile, descriptor sync, jar, uber. The
//! `build` pipeline stops after the primary jar; `uber` appends the
//! standalone merge.

pub mod s00_clean;
pub mod s01_compile;
pub mod s02_descriptor;
pub mod s03_jar;
pub mod s04_uber;

use crate::pipeline::Stage;

/// Stages for `clean`: reset the target directory only.
pub const CLEAN_STAGES: &[(&str, Stage)] = &[("s00_clean", s00_clean::run)];

/// Stages for `build`: compile and package the primary jar.
pub const BUILD_STAGES: &[(&str, Stage)] = &[
    ("s00_clean", s00_clean::run),
    ("s01_compile", s01_compile::run),
    ("s02_descriptor", s02_descriptor::run),
    ("s03_jar", s03_jar::run),
];

/// Stages for `uber`: everything in `build`, then the standalone merge.
pub const UBER_STAGES: &[(&str, Stage)] = &[
    ("s00_clean", s00_clean::run),
    ("s01_compile", s01_compile::run),
    ("s02_descriptor", s02_descriptor::run),
    ("s03_jar", s03_jar::run),
    ("s04_uber", s04_uber::run),
];
