//! Build context threaded through the pipeline stages.

use std::collections::BTreeMap;
use std::path::PathBuf;

use thiserror::Error;

/// A build parameter problem detected before any work runs.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required build parameter '{0}'")]
    MissingParameter(&'static str),

    #[error("invalid build parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Parameters for one build invocation.
///
/// Owned by the pipeline driver and passed through each stage; stages return
/// a (possibly updated) replacement rather than mutating shared state.
#[derive(Debug, Clone)]
pub struct BuildContext {
    /// Directory the project descriptor lives in; relative paths resolve
    /// against it.
    pub project_root: PathBuf,
    /// Output directory for all build artifacts.
    pub target_dir: PathBuf,
    /// Library coordinate (artifact name).
    pub lib: String,
    /// Artifact version.
    pub version: String,
    /// Entry point recorded as `Main-Class` when configured.
    pub main_class: Option<String>,
    /// Directories holding compilable sources.
    pub src_dirs: Vec<PathBuf>,
    /// Directories whose contents are copied into `classes/` verbatim.
    pub resource_dirs: Vec<PathBuf>,
    /// Extra options passed through to the compiler.
    pub compiler_options: Vec<String>,
    /// Resolved dependency id -> ordered file paths (archives, directories
    /// or plain files). Resolution itself happens outside this crate.
    pub dependencies: BTreeMap<String, Vec<PathBuf>>,
}

impl BuildContext {
    /// `target/classes` - compiled and copied contents.
    pub fn classes_dir(&self) -> PathBuf {
        self.target_dir.join("classes")
    }

    /// `target/<lib>-<version>.jar` - the primary artifact.
    pub fn jar_path(&self) -> PathBuf {
        self.target_dir.join(format!("{}-{}.jar", self.lib, self.version))
    }

    /// `target/uber` - the disposable merge staging tree.
    pub fn uber_staging_dir(&self) -> PathBuf {
        self.target_dir.join("uber")
    }

    /// `target/<lib>-<version>-standalone.jar` - the merged output.
    pub fn uber_jar_path(&self) -> PathBuf {
        self.target_dir
            .join(format!("{}-{}-standalone.jar", self.lib, self.version))
    }

    /// Dependency paths flattened in deterministic order: sorted by
    /// dependency id, each id's paths in their declared order.
    pub fn classpath(&self) -> Vec<PathBuf> {
        self.dependencies.values().flatten().cloned().collect()
    }

    /// The configured entry point, or a configuration error when absent.
    pub fn require_main_class(&self) -> Result<&str, ConfigError> {
        self.main_class
            .as_deref()
            .ok_or(ConfigError::MissingParameter("main-class"))
    }

    /// Validate parameters that every pipeline needs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lib.is_empty() {
            return Err(ConfigError::MissingParameter("lib"));
        }
        if self.version.is_empty() {
            return Err(ConfigError::MissingParameter("version"));
        }
        if let Some(main) = &self.main_class {
            if main.is_empty() || main.chars().any(char::is_whitespace) {
                return Err(ConfigError::InvalidParameter {
                    name: "main-class",
                    reason: format!("'{main}' is not a class name"),
                });
            }
        }
        Ok(())
    }
}
