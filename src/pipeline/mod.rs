//! Pipeline driver.
//!
//! A build is an ordered list of named stages folded over a
//! [`BuildContext`]. Each stage returns `Some(context)` to continue or
//! `None` to terminate the pipeline early; any error halts the remaining
//! stages immediately. Execution is purely sequential.

use anyhow::{Context, Result};

use crate::build::context::BuildContext;

/// A single pipeline stage.
pub type Stage = fn(BuildContext) -> Result<Option<BuildContext>>;

/// Run `stages` in order over `ctx`.
///
/// Returns the final context, or `None` when a stage requested termination.
pub fn run_pipeline(ctx: BuildContext, stages: &[(&str, Stage)]) -> Result<Option<BuildContext>> {
    let mut current = ctx;
    for (name, stage) in stages {
        match stage(current).with_context(|| format!("stage '{name}' failed"))? {
            Some(next) => current = next,
            None => {
                println!("[jar:{name}] pipeline stopped");
                return Ok(None);
            }
        }
    }
    Ok(Some(current))
}
