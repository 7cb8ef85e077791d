//! Content directory enumeration.
//!
//! The content layout is flat: one file per project directly under the
//! content root. Hidden files are skipped and `.gitignore` rules are not
//! consulted, since the content directory is usually its own checkout.
//! Symlinks are followed; a dangling link is skipped like a missing file.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};
use ignore::WalkBuilder;

use crate::error::IndexError;

/// Compile the file-name filter for `extension` (given without the dot).
pub fn extension_matcher(extension: &str) -> Result<GlobMatcher, IndexError> {
    Ok(Glob::new(&format!("*.{extension}"))?.compile_matcher())
}

/// List content files directly under `root` whose name matches `matcher`.
///
/// Paths are returned sorted so callers see a stable order.
pub fn list_content_files(root: &Path, matcher: &GlobMatcher) -> Result<Vec<PathBuf>, IndexError> {
    std::fs::read_dir(root).map_err(|source| IndexError::ContentUnreadable {
        path: root.to_path_buf(),
        source,
    })?;

    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false);
    builder.hidden(true);
    builder.max_depth(Some(1));
    builder.follow_links(true);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) if is_dangling_link(&error) => {
                tracing::debug!(%error, "skipping dangling symlink");
                continue;
            }
            Err(source) => {
                return Err(IndexError::Walk {
                    path: root.to_path_buf(),
                    source,
                });
            }
        };
        if entry.depth() == 0 || !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        if matcher.is_match(entry.file_name()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

fn is_dangling_link(error: &ignore::Error) -> bool {
    error
        .io_error()
        .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn create_fixture(dir: &Path) {
        fs::create_dir_all(dir.join("nested")).expect("mkdir should succeed");
        let files = [
            ("b.mdx", "---\nvenue: ICML\n---\n"),
            ("a.mdx", "---\nvenue: CVPR\n---\n"),
            ("notes.md", "# not a project"),
            (".draft.mdx", "hidden"),
            ("nested/deep.mdx", "too deep"),
            (".gitignore", "a.mdx\n"),
        ];
        for (path, content) in &files {
            fs::write(dir.join(path), content).expect("write should succeed");
        }
    }

    fn names(files: &[PathBuf], root: &Path) -> Vec<String> {
        files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn lists_flat_matching_files_sorted() {
        let tmp = tempfile::tempdir().unwrap();
        create_fixture(tmp.path());

        let matcher = extension_matcher("mdx").unwrap();
        let files = list_content_files(tmp.path(), &matcher).unwrap();

        // .gitignore is not honored, hidden and nested files are skipped.
        assert_eq!(names(&files, tmp.path()), vec!["a.mdx", "b.mdx"]);
    }

    #[test]
    fn extension_is_configurable() {
        let tmp = tempfile::tempdir().unwrap();
        create_fixture(tmp.path());

        let matcher = extension_matcher("md").unwrap();
        let files = list_content_files(tmp.path(), &matcher).unwrap();
        assert_eq!(names(&files, tmp.path()), vec!["notes.md"]);
    }

    #[test]
    fn missing_directory_is_unreadable() {
        let tmp = tempfile::tempdir().unwrap();
        let matcher = extension_matcher("mdx").unwrap();
        let err = list_content_files(&tmp.path().join("absent"), &matcher).unwrap_err();
        assert!(matches!(err, IndexError::ContentUnreadable { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn follows_symlinks_and_skips_dangling_ones() {
        let tmp = tempfile::tempdir().unwrap();
        let shared = tempfile::tempdir().unwrap();
        fs::write(shared.path().join("shared.mdx"), "---\nvenue: CVPR\n---\n").unwrap();
        fs::write(tmp.path().join("own.mdx"), "---\nvenue: ICML\n---\n").unwrap();
        std::os::unix::fs::symlink(shared.path().join("shared.mdx"), tmp.path().join("linked.mdx"))
            .unwrap();
        std::os::unix::fs::symlink(tmp.path().join("gone.mdx"), tmp.path().join("dangling.mdx"))
            .unwrap();

        let matcher = extension_matcher("mdx").unwrap();
        let files = list_content_files(tmp.path(), &matcher).unwrap();
        assert_eq!(names(&files, tmp.path()), vec!["linked.mdx", "own.mdx"]);
    }

    #[test]
    fn empty_directory_lists_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let matcher = extension_matcher("mdx").unwrap();
        assert!(list_content_files(tmp.path(), &matcher).unwrap().is_empty());
    }
}
