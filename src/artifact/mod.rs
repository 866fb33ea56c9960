//! Archive assembly and merge engine.
//!
//! This module provides:
//! - [`collect`] - Recursive file collection under a root
//! - [`manifest`] - Manifest header construction and parsing
//! - [`jar`] - Streaming a directory tree into a jar container
//! - [`explode`] - Materializing archives and plain inputs into a staging tree
//! - [`uber`] - Merging dependency archives with the primary artifact
//! - [`checksum`] - SHA-256 sidecar files for produced artifacts

pub mod checksum;
pub mod collect;
pub mod explode;
pub mod jar;
pub mod manifest;
pub mod uber;

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use zip::result::ZipError;

/// Failures of the archive engine.
///
/// A path collision during a merge is not an error: it is reported as a
/// status line and the build continues, last writer wins.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// An attribute name containing separators or other non-token characters.
    #[error("invalid manifest attribute name '{0}'")]
    InvalidAttributeName(String),

    /// A manifest that does not parse as attribute lines.
    #[error("malformed manifest: {0}")]
    MalformedManifest(String),

    /// A container that cannot be opened or iterated.
    #[error("reading archive '{path}'")]
    ArchiveRead {
        path: PathBuf,
        #[source]
        source: ZipError,
    },

    /// A failure while streaming entries out.
    #[error("writing archive '{path}'")]
    ArchiveWrite {
        path: PathBuf,
        #[source]
        source: ZipError,
    },

    /// A plain filesystem failure.
    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl ArtifactError {
    pub(crate) fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}
