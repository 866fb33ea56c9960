//! Archive exploder: materializes archives and plain inputs into a staging
//! directory.
//!
//! An existing file at a target path gets a collision notice and is then
//! overwritten; the last input to touch a path wins. The staging tree is
//! disposable and rebuilt per invocation, so a mid-stream failure leaves it
//! partially populated with no rollback.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use zip::result::ZipError;
use zip::ZipArchive;

use super::collect::walk_tree;
use super::ArtifactError;

/// Suffixes recognized as compressed containers.
const ARCHIVE_SUFFIXES: &[&str] = &["jar", "zip"];

/// Returns true when `path` looks like a compressed container.
pub fn is_archive(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ARCHIVE_SUFFIXES.iter().any(|s| ext.eq_ignore_ascii_case(s)))
        .unwrap_or(false)
}

/// Materialize `source` under `out_dir`.
///
/// Archives are streamed entry-by-entry in the container's index order.
/// A plain directory has its contents merged into `out_dir`; a plain file
/// is copied in under its file name. All shapes share the collision policy.
pub fn explode(source: &Path, out_dir: &Path) -> Result<(), ArtifactError> {
    if is_archive(source) {
        explode_archive(source, out_dir)
    } else if source.is_dir() {
        copy_tree_into(source, out_dir)
    } else {
        copy_file_into(source, out_dir)
    }
}

fn explode_archive(source: &Path, out_dir: &Path) -> Result<(), ArtifactError> {
    let file = File::open(source)
        .map_err(|e| ArtifactError::io(format!("opening archive '{}'", source.display()), e))?;
    let mut archive = ZipArchive::new(file).map_err(|e| read_error(source, e))?;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).map_err(|e| read_error(source, e))?;
        let rel = match entry.enclosed_name() {
            Some(path) => path.to_path_buf(),
            None => {
                return Err(read_error(
                    source,
                    ZipError::InvalidArchive("entry path escapes the staging directory"),
                ))
            }
        };
        let target = out_dir.join(&rel);

        if entry.is_dir() {
            fs::create_dir_all(&target).map_err(|e| {
                ArtifactError::io(format!("creating directory '{}'", target.display()), e)
            })?;
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ArtifactError::io(format!("creating directory '{}'", parent.display()), e)
            })?;
        }
        if target.exists() {
            report_collision(&rel);
        }
        let mut out = File::create(&target)
            .map_err(|e| ArtifactError::io(format!("creating '{}'", target.display()), e))?;
        io::copy(&mut entry, &mut out).map_err(|e| {
            ArtifactError::io(format!("extracting '{}' from '{}'", rel.display(), source.display()), e)
        })?;
    }

    Ok(())
}

/// Merge the contents of `source` into `out_dir`, collision policy applied
/// per file.
fn copy_tree_into(source: &Path, out_dir: &Path) -> Result<(), ArtifactError> {
    for entry in walk_tree(source) {
        let target = out_dir.join(&entry.rel);
        if entry.is_dir {
            fs::create_dir_all(&target).map_err(|e| {
                ArtifactError::io(format!("creating directory '{}'", target.display()), e)
            })?;
            continue;
        }
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ArtifactError::io(format!("creating directory '{}'", parent.display()), e)
            })?;
        }
        if target.exists() {
            report_collision(&entry.rel);
        }
        fs::copy(&entry.path, &target).map_err(|e| {
            ArtifactError::io(
                format!("copying '{}' to '{}'", entry.path.display(), target.display()),
                e,
            )
        })?;
    }
    Ok(())
}

fn copy_file_into(source: &Path, out_dir: &Path) -> Result<(), ArtifactError> {
    let name = source.file_name().ok_or_else(|| {
        ArtifactError::io(
            format!("input '{}' has no file name", source.display()),
            io::Error::new(io::ErrorKind::InvalidInput, "missing file name"),
        )
    })?;
    fs::create_dir_all(out_dir)
        .map_err(|e| ArtifactError::io(format!("creating directory '{}'", out_dir.display()), e))?;

    let target = out_dir.join(name);
    if target.exists() {
        report_collision(Path::new(name));
    }
    fs::copy(source, &target).map_err(|e| {
        ArtifactError::io(
            format!("copying '{}' to '{}'", source.display(), target.display()),
            e,
        )
    })?;
    Ok(())
}

fn report_collision(rel: &Path) {
    println!("  Conflict: {}", rel.display());
}

fn read_error(path: &Path, source: ZipError) -> ArtifactError {
    ArtifactError::ArchiveRead {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::jar::write_jar;
    use crate::artifact::manifest::Manifest;
    use std::fs;
    use tempfile::TempDir;

    fn jar_with(temp: &TempDir, name: &str, rel: &str, bytes: &[u8]) -> std::path::PathBuf {
        let root = temp.path().join(format!("{name}-root"));
        let file = root.join(rel);
        fs::create_dir_all(file.parent().unwrap()).unwrap();
        fs::write(&file, bytes).unwrap();
        let jar = temp.path().join(name);
        write_jar(&jar, &Manifest::standard(None).unwrap(), &root).unwrap();
        jar
    }

    #[test]
    fn recognizes_container_suffixes() {
        assert!(is_archive(Path::new("dep.jar")));
        assert!(is_archive(Path::new("dep.ZIP")));
        assert!(!is_archive(Path::new("dep.txt")));
        assert!(!is_archive(Path::new("classes")));
    }

    #[test]
    fn write_then_explode_round_trips_content_and_paths() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("root");
        fs::create_dir_all(root.join("lib")).unwrap();
        fs::create_dir_all(root.join("empty")).unwrap();
        fs::write(root.join("lib/Util.class"), [0xAA, 0xBB]).unwrap();
        fs::write(root.join("top.txt"), "top").unwrap();

        let jar = temp.path().join("out.jar");
        write_jar(&jar, &Manifest::standard(None).unwrap(), &root).unwrap();

        let out = temp.path().join("exploded");
        explode(&jar, &out).unwrap();

        assert_eq!(fs::read(out.join("lib/Util.class")).unwrap(), vec![0xAA, 0xBB]);
        assert_eq!(fs::read_to_string(out.join("top.txt")).unwrap(), "top");
        assert!(out.join("empty").is_dir());
        assert!(out.join("META-INF/MANIFEST.MF").is_file());
    }

    #[test]
    fn later_input_overwrites_earlier_on_collision() {
        let temp = TempDir::new().unwrap();
        let first = jar_with(&temp, "first.jar", "lib/Util.class", &[0xAA]);
        let second = jar_with(&temp, "second.jar", "lib/Util.class", &[0xBB]);

        let out = temp.path().join("staging");
        explode(&first, &out).unwrap();
        explode(&second, &out).unwrap();

        assert_eq!(fs::read(out.join("lib/Util.class")).unwrap(), vec![0xBB]);
    }

    #[test]
    fn plain_directory_contents_are_merged_in() {
        let temp = TempDir::new().unwrap();
        let dep = temp.path().join("dep-classes");
        fs::create_dir_all(dep.join("lib")).unwrap();
        fs::write(dep.join("lib/Extra.class"), [0x01]).unwrap();

        let out = temp.path().join("staging");
        explode(&dep, &out).unwrap();

        assert_eq!(fs::read(out.join("lib/Extra.class")).unwrap(), vec![0x01]);
    }

    #[test]
    fn plain_file_is_copied_under_its_name() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("notes.properties");
        fs::write(&file, "k=v").unwrap();

        let out = temp.path().join("staging");
        explode(&file, &out).unwrap();

        assert_eq!(
            fs::read_to_string(out.join("notes.properties")).unwrap(),
            "k=v"
        );
    }

    #[test]
    fn malformed_archive_is_a_read_error() {
        let temp = TempDir::new().unwrap();
        let bogus = temp.path().join("bogus.jar");
        fs::write(&bogus, "this is not a zip").unwrap();

        let err = explode(&bogus, &temp.path().join("out")).unwrap_err();
        assert!(matches!(err, ArtifactError::ArchiveRead { .. }));
    }
}
