//! Deterministic traversal of the source tree.
//!
//! Entries come back depth-first, sorted by file name within each
//! directory. Symlinks are not descended into; every entry that is not a
//! directory itself (regular files, symlinks, other special files) is
//! yielded, and opening it later follows any link.

use crate::error::Result;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Non-directory entries under `root`, in walk order. The first traversal
/// error ends the iteration.
pub fn files(root: &Path) -> impl Iterator<Item = Result<PathBuf>> {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) if !e.file_type().is_dir() => Some(Ok(e.into_path())),
            Ok(_) => None,
            Err(e) => Some(Err(e.into())),
        })
}

/// True when the final extension of `path` is exactly `ext` (case-sensitive).
pub fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension() == Some(OsStr::new(ext))
}

/// Mirror `file` (found under `root`) into `restore`, dropping its final
/// extension.
pub fn restore_path(root: &Path, file: &Path, restore: &Path) -> PathBuf {
    let rel = match file.strip_prefix(root) {
        Ok(r) if !r.as_os_str().is_empty() => r,
        // root was the file itself
        _ => Path::new(file.file_name().unwrap_or(file.as_os_str())),
    };
    restore.join(rel).with_extension("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn extension_match_is_exact() {
        assert!(has_extension(Path::new("a/b/log.txt.gz"), "gz"));
        assert!(!has_extension(Path::new("a/b/log.GZ"), "gz"));
        assert!(!has_extension(Path::new("a/b/log.tgz"), "gz"));
        assert!(!has_extension(Path::new("a/b/gz"), "gz"));
        assert!(!has_extension(Path::new("a/b/.gz"), "gz"));
    }

    #[test]
    fn restore_path_mirrors_relative_layout() {
        let p = restore_path(
            Path::new("/src"),
            Path::new("/src/x/y/data.tar.gz"),
            Path::new("/dst"),
        );
        assert_eq!(p, PathBuf::from("/dst/x/y/data.tar"));
    }

    #[test]
    fn restore_path_for_top_level_file() {
        let p = restore_path(Path::new("src"), Path::new("src/a.gz"), Path::new("dst"));
        assert_eq!(p, PathBuf::from("dst/a"));
    }

    #[test]
    fn restore_path_when_root_is_the_file() {
        let p = restore_path(
            Path::new("/in/one.json.gz"),
            Path::new("/in/one.json.gz"),
            Path::new("/out"),
        );
        assert_eq!(p, PathBuf::from("/out/one.json"));
    }

    #[test]
    fn files_are_sorted_and_skip_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("b/inner")).unwrap();
        fs::create_dir_all(root.join("a")).unwrap();
        fs::write(root.join("b/inner/z.gz"), b"").unwrap();
        fs::write(root.join("a/y.txt"), b"").unwrap();
        fs::write(root.join("c.gz"), b"").unwrap();

        let got: Vec<PathBuf> = files(root)
            .map(|r| r.unwrap().strip_prefix(root).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            got,
            vec![
                PathBuf::from("a/y.txt"),
                PathBuf::from("b/inner/z.gz"),
                PathBuf::from("c.gz"),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_yielded_but_not_descended() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("root");
        let elsewhere = tmp.path().join("elsewhere");
        fs::create_dir_all(&root).unwrap();
        fs::create_dir_all(&elsewhere).unwrap();
        fs::write(elsewhere.join("hidden.gz"), b"").unwrap();
        std::os::unix::fs::symlink(&elsewhere, root.join("dirlink")).unwrap();
        std::os::unix::fs::symlink(elsewhere.join("hidden.gz"), root.join("filelink.gz")).unwrap();

        let got: Vec<PathBuf> = files(&root)
            .map(|r| r.unwrap().strip_prefix(&root).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            got,
            vec![PathBuf::from("dirlink"), PathBuf::from("filelink.gz")]
        );
    }

    #[test]
    fn missing_root_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope");
        let mut it = files(&missing);
        assert!(matches!(it.next(), Some(Err(crate::error::GzError::Walk(_)))));
    }
}
