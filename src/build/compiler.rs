//! External source compiler, behind a narrow interface.
//!
//! The compiler is a black box: a source set, a classpath and a destination
//! directory go in; loadable compiled units come out. Nothing in the archive
//! engine depends on compiler internals.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;

/// Compiler command looked up on PATH.
pub const COMPILER: &str = "javac";

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("compiler '{0}' not found on PATH (install a JDK)")]
    CompilerMissing(&'static str),

    #[error("spawning compiler")]
    Spawn(#[source] io::Error),

    #[error("compilation failed ({status}):\n{stderr}")]
    Failed { status: ExitStatus, stderr: String },
}

/// Compile `sources` into `dest_dir` against `classpath`.
///
/// An empty source set is a no-op success: a project with nothing to compile
/// still packages its resources.
pub fn compile(
    sources: &[PathBuf],
    classpath: &[PathBuf],
    dest_dir: &Path,
    options: &[String],
) -> Result<(), CompileError> {
    if sources.is_empty() {
        return Ok(());
    }
    let compiler = which::which(COMPILER).map_err(|_| CompileError::CompilerMissing(COMPILER))?;

    let output = Command::new(compiler)
        .args(compiler_args(sources, classpath, dest_dir, options))
        .output()
        .map_err(CompileError::Spawn)?;

    if !output.status.success() {
        return Err(CompileError::Failed {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }
    Ok(())
}

/// Argument list for one compiler invocation.
fn compiler_args(
    sources: &[PathBuf],
    classpath: &[PathBuf],
    dest_dir: &Path,
    options: &[String],
) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["-d".into(), dest_dir.as_os_str().to_os_string()];
    if !classpath.is_empty() {
        args.push("-cp".into());
        args.push(join_classpath(classpath));
    }
    for option in options {
        args.push(option.into());
    }
    for source in sources {
        args.push(source.as_os_str().to_os_string());
    }
    args
}

fn join_classpath(paths: &[PathBuf]) -> OsString {
    let mut joined = OsString::new();
    for (index, path) in paths.iter().enumerate() {
        if index > 0 {
            joined.push(":");
        }
        joined.push(path);
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_set_is_a_no_op() {
        compile(&[], &[], Path::new("/nowhere"), &[]).unwrap();
    }

    #[test]
    fn argument_order_is_dest_classpath_options_sources() {
        let sources = vec![PathBuf::from("src/A.java"), PathBuf::from("src/B.java")];
        let classpath = vec![PathBuf::from("libs/a.jar"), PathBuf::from("libs/b.jar")];
        let options = vec!["-Xlint:all".to_string()];

        let args = compiler_args(&sources, &classpath, Path::new("target/classes"), &options);
        let args: Vec<String> = args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();

        assert_eq!(
            args,
            vec![
                "-d",
                "target/classes",
                "-cp",
                "libs/a.jar:libs/b.jar",
                "-Xlint:all",
                "src/A.java",
                "src/B.java",
            ]
        );
    }

    #[test]
    fn classpath_flag_is_omitted_when_empty() {
        let args = compiler_args(&[PathBuf::from("A.java")], &[], Path::new("out"), &[]);
        let args: Vec<String> = args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(args, vec!["-d", "out", "A.java"]);
    }
}
