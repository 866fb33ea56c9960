//! Uber assembler: merges a primary archive and its dependency archives into
//! one self-contained standalone jar.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use zip::result::ZipError;
use zip::ZipArchive;

use super::explode::explode;
use super::jar::write_jar;
use super::manifest::{Manifest, MANIFEST_PATH};
use super::ArtifactError;

/// Read the manifest header out of an archive.
pub fn read_manifest(archive_path: &Path) -> Result<Manifest, ArtifactError> {
    let file = File::open(archive_path).map_err(|e| {
        ArtifactError::io(format!("opening archive '{}'", archive_path.display()), e)
    })?;
    let mut archive = ZipArchive::new(file).map_err(|e| read_error(archive_path, e))?;
    let mut entry = archive
        .by_name(MANIFEST_PATH)
        .map_err(|e| read_error(archive_path, e))?;
    let mut text = String::new();
    entry.read_to_string(&mut text).map_err(|e| {
        ArtifactError::io(
            format!("reading manifest from '{}'", archive_path.display()),
            e,
        )
    })?;
    Manifest::parse(&text)
}

/// Explode `dependencies` and `primary` into `staging`, then archive the
/// merged tree as `output`, reusing the primary archive's manifest verbatim.
///
/// The primary is exploded last so that, under the exploder's overwrite
/// policy, its files win any collision against same-named dependency files.
/// Among the dependencies, the last one explored wins. This is an explicit
/// tie-break rule, not a traversal accident.
///
/// Any failure aborts the assembly. The staging tree is left on disk for
/// inspection; the output file is absent or partial and the caller re-runs
/// the full `clean -> build -> uber` sequence to recover.
pub fn assemble(
    primary: &Path,
    dependencies: &[PathBuf],
    staging: &Path,
    output: &Path,
) -> Result<(), ArtifactError> {
    let manifest = read_manifest(primary)?;

    for dependency in dependencies {
        explode(dependency, staging)?;
    }
    explode(primary, staging)?;

    write_jar(output, &manifest, staging)
}

fn read_error(path: &Path, source: ZipError) -> ArtifactError {
    ArtifactError::ArchiveRead {
        path: path.to_path_buf(),
        source,
    }
}
