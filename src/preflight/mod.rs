//! Preflight checks for build validation.
//!
//! Validates that the host has the required toolchain before a build starts.
//! This prevents cryptic errors halfway through the pipeline.

use anyhow::{bail, Result};

/// Required host tools for compiling and packaging.
///
/// Each tuple is (command_name, provider hint).
pub const REQUIRED_TOOLS: &[(&str, &str)] = &[("javac", "a JDK, 17 or newer")];

/// Check if a command exists on the host PATH.
pub fn command_exists(cmd: &str) -> bool {
    which::which(cmd).is_ok()
}

/// Check that specific tools are available.
///
/// # Returns
///
/// * `Ok(())` if all tools are found
/// * `Err` listing the missing tools and where to get them
pub fn check_required_tools(tools: &[(&str, &str)]) -> Result<()> {
    let mut missing = Vec::new();

    for (tool, provider) in tools {
        if !command_exists(tool) {
            missing.push((*tool, *provider));
        }
    }

    if !missing.is_empty() {
        let msg = missing
            .iter()
            .map(|(t, p)| format!("  {} (install: {})", t, p))
            .collect::<Vec<_>>()
            .join("\n");
        bail!("Missing required host tools:\n{}", msg);
    }

    Ok(())
}

/// Check all tools in [`REQUIRED_TOOLS`].
pub fn check_host_tools() -> Result<()> {
    check_required_tools(REQUIRED_TOOLS)
}
