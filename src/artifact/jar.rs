//! Archive writer: streams a directory tree into a single jar container.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use zip::result::ZipError;
use zip::write::FileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use super::collect::walk_tree;
use super::manifest::{Manifest, MANIFEST_PATH};
use super::ArtifactError;

/// Entry options shared by everything this writer emits.
///
/// Timestamps are pinned to the zip epoch so identical trees produce
/// byte-identical archives.
fn entry_options() -> FileOptions {
    FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
}

/// Stream `root` into a jar at `output`, headed by `manifest`.
///
/// The manifest is written as the very first entry. Directories become
/// `path/` entries; file contents are copied byte-for-byte. Entries are
/// written in collector traversal order with no deduplication. The root
/// itself is never written, and a `META-INF/MANIFEST.MF` already present
/// under `root` is skipped: the header is always the single leading
/// manifest entry.
///
/// On failure the output file is left partially written; callers must treat
/// partial output as unusable and rebuild.
pub fn write_jar(output: &Path, manifest: &Manifest, root: &Path) -> Result<(), ArtifactError> {
    let file = File::create(output)
        .map_err(|e| ArtifactError::io(format!("creating archive '{}'", output.display()), e))?;
    let mut zip = ZipWriter::new(file);
    let options = entry_options();

    zip.start_file(MANIFEST_PATH, options)
        .map_err(|e| write_error(output, e))?;
    zip.write_all(&manifest.to_bytes())
        .map_err(|e| write_error(output, e.into()))?;

    for entry in walk_tree(root) {
        let name = entry_name(&entry.rel, entry.is_dir);
        if name.is_empty() || name == MANIFEST_PATH {
            continue;
        }
        if entry.is_dir {
            zip.add_directory(name, options)
                .map_err(|e| write_error(output, e))?;
        } else {
            zip.start_file(name, options)
                .map_err(|e| write_error(output, e))?;
            let mut src = File::open(&entry.path).map_err(|e| {
                ArtifactError::io(format!("reading '{}'", entry.path.display()), e)
            })?;
            io::copy(&mut src, &mut zip).map_err(|e| write_error(output, e.into()))?;
        }
    }

    zip.finish().map_err(|e| write_error(output, e))?;
    Ok(())
}

/// Archive-internal entry name: forward slashes, trailing `/` on directories.
fn entry_name(rel: &Path, is_dir: bool) -> String {
    let mut name = rel.to_string_lossy().replace('\\', "/");
    if is_dir && !name.ends_with('/') {
        name.push('/');
    }
    name
}

fn write_error(path: &Path, source: ZipError) -> ArtifactError {
    ArtifactError::ArchiveWrite {
        path: path.to_path_buf(),
        source,
    }
}
