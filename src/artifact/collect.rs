//! Recursive file collection for archive writing and compilation.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// A single item found under a collection root.
#[derive(Debug, Clone)]
pub struct TreeEntry {
    /// Path on disk, rooted where the walk started.
    pub path: PathBuf,
    /// Path relative to the collection root.
    pub rel: PathBuf,
    /// Whether the item is a directory.
    pub is_dir: bool,
}

/// Walk a directory tree, yielding every file and directory below `root`.
///
/// Paths are reported relative to `root`; the root itself is never yielded.
/// Entries come out in a deterministic (name-sorted) order. An empty or
/// non-existent root produces an empty sequence rather than an error, which
/// keeps downstream callers (archive writing, compiler invocation) simple.
pub fn walk_tree(root: &Path) -> impl Iterator<Item = TreeEntry> {
    let root = root.to_path_buf();
    WalkDir::new(&root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .map(move |entry| {
            let rel = entry
                .path()
                .strip_prefix(&root)
                .unwrap_or_else(|_| entry.path())
                .to_path_buf();
            TreeEntry {
                path: entry.path().to_path_buf(),
                is_dir: entry.file_type().is_dir(),
                rel,
            }
        })
}

/// Collect files under `root` whose name ends with `suffix`, as paths
/// relative to `root`.
pub fn files_with_suffix(root: &Path, suffix: &str) -> impl Iterator<Item = PathBuf> {
    let suffix = suffix.to_string();
    walk_tree(root)
        .filter(move |entry| {
            !entry.is_dir
                && entry
                    .path
                    .file_name()
                    .map(|name| name.to_string_lossy().ends_with(&suffix))
                    .unwrap_or(false)
        })
        .map(|entry| entry.rel)
}
