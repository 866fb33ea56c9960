use std::path::Path;

use anyhow::{bail, Result};
use jar_builder::build::config::load_project;
use jar_builder::pipeline::{run_pipeline, Stage};
use jar_builder::preflight::check_host_tools;
use jar_builder::stages::{BUILD_STAGES, CLEAN_STAGES, UBER_STAGES};

const DEFAULT_DESCRIPTOR: &str = "project.toml";

fn usage() -> &'static str {
    "Usage:\n  jar-builder build [project.toml]\n  jar-builder uber [project.toml]\n  jar-builder clean [project.toml]"
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.as_slice() {
        [command] => run_command(command, Path::new(DEFAULT_DESCRIPTOR)),
        [command, descriptor] => run_command(command, Path::new(descriptor)),
        _ => bail!(usage()),
    }
}

fn run_command(command: &str, descriptor: &Path) -> Result<()> {
    match command {
        "build" => run_stages(descriptor, BUILD_STAGES, true),
        "uber" => run_stages(descriptor, UBER_STAGES, true),
        "clean" => run_stages(descriptor, CLEAN_STAGES, false),
        other => bail!("unknown command '{}'\n{}", other, usage()),
    }
}

fn run_stages(descriptor: &Path, stages: &[(&str, Stage)], needs_compiler: bool) -> Result<()> {
    if needs_compiler {
        check_host_tools()?;
    }
    let ctx = load_project(descriptor)?;
    run_pipeline(ctx, stages)?;
    Ok(())
}
