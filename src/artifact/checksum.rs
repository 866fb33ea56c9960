//! SHA-256 sidecar checksums for produced artifacts.
//!
//! Checksums are written in the standard `"<hash>  <filename>"` format
//! (two spaces, filename only) so users can verify with:
//!   cd target && sha256sum -c my-lib-1.0.jar.sha256

use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use super::ArtifactError;

/// Hash a file's contents as lowercase hex SHA-256.
pub fn hash_file(path: &Path) -> Result<String, ArtifactError> {
    let file = File::open(path)
        .map_err(|e| ArtifactError::io(format!("opening '{}'", path.display()), e))?;
    let mut reader = BufReader::new(file);
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 64 * 1024];
    loop {
        let read = reader
            .read(&mut buffer)
            .map_err(|e| ArtifactError::io(format!("reading '{}'", path.display()), e))?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }
    let digest = hasher.finalize();
    Ok(digest.iter().map(|b| format!("{b:02x}")).collect())
}

/// Write `<artifact>.sha256` next to `artifact`.
///
/// Returns the path of the checksum file.
pub fn write_checksum(artifact: &Path) -> Result<PathBuf, ArtifactError> {
    let hash = hash_file(artifact)?;
    let filename = artifact
        .file_name()
        .ok_or_else(|| {
            ArtifactError::io(
                format!("artifact '{}' has no file name", artifact.display()),
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "missing file name"),
            )
        })?
        .to_string_lossy()
        .into_owned();

    let checksum_path = PathBuf::from(format!("{}.sha256", artifact.display()));
    let content = format!("{hash}  {filename}\n");
    fs::write(&checksum_path, content)
        .map_err(|e| ArtifactError::io(format!("writing '{}'", checksum_path.display()), e))?;

    println!("  SHA256: {}...{}", &hash[..8], &hash[hash.len() - 8..]);
    println!("  Wrote: {}", checksum_path.display());

    Ok(checksum_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn hashes_known_content() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("data");
        fs::write(&file, "hello").unwrap();

        assert_eq!(
            hash_file(&file).unwrap(),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn writes_sidecar_in_verifiable_format() {
        let temp = TempDir::new().unwrap();
        let artifact = temp.path().join("my-lib-1.0.jar");
        fs::write(&artifact, "hello").unwrap();

        let checksum_path = write_checksum(&artifact).unwrap();
        assert_eq!(
            checksum_path.file_name().unwrap().to_str().unwrap(),
            "my-lib-1.0.jar.sha256"
        );

        let content = fs::read_to_string(&checksum_path).unwrap();
        assert_eq!(
            content,
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824  my-lib-1.0.jar\n"
        );
    }
}
