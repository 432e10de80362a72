//! One-level child counting for directory entries.

use std::io;
use std::path::Path;

use super::ignore::IgnoreFilter;

/// Immediate child counts of a directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChildCounts {
    /// Number of immediate child directories.
    pub dirs: usize,
    /// Number of immediate child files.
    pub files: usize,
}

/// Count the immediate children of `path`, one level deep.
///
/// Ignored names are skipped, and so are entries whose type cannot be
/// read (best-effort counting, not an aggregate failure). Fails only when
/// the directory itself cannot be enumerated.
pub fn count_children(path: &Path, filter: &IgnoreFilter) -> io::Result<ChildCounts> {
    let mut counts = ChildCounts::default();

    for entry in std::fs::read_dir(path)? {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        let name = entry.file_name().to_string_lossy().to_string();
        if filter.is_ignored(&name) {
            continue;
        }

        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(_) => continue,
        };

        if file_type.is_dir() {
            counts.dirs += 1;
        } else {
            counts.files += 1;
        }
    }

    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn counts_files_and_dirs() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();
        fs::write(temp_dir.path().join("b.txt"), "b").unwrap();
        fs::create_dir(temp_dir.path().join("sub")).unwrap();

        let counts = count_children(temp_dir.path(), &IgnoreFilter::default()).unwrap();

        assert_eq!(counts, ChildCounts { dirs: 1, files: 2 });
    }

    #[test]
    fn empty_directory() {
        let temp_dir = TempDir::new().unwrap();

        let counts = count_children(temp_dir.path(), &IgnoreFilter::default()).unwrap();

        assert_eq!(counts, ChildCounts::default());
    }

    #[test]
    fn ignored_names_do_not_count() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".DS_Store"), "junk").unwrap();
        fs::create_dir(temp_dir.path().join(".Trash")).unwrap();
        fs::write(temp_dir.path().join("kept.txt"), "kept").unwrap();

        let counts = count_children(temp_dir.path(), &IgnoreFilter::default()).unwrap();

        assert_eq!(counts, ChildCounts { dirs: 0, files: 1 });
    }

    #[test]
    fn counting_is_one_level_deep() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("outer/inner")).unwrap();
        fs::write(temp_dir.path().join("outer/inner/deep.txt"), "x").unwrap();

        let counts = count_children(temp_dir.path(), &IgnoreFilter::default()).unwrap();

        // Only `outer` is visible; nothing below it is counted.
        assert_eq!(counts, ChildCounts { dirs: 1, files: 0 });
    }

    #[test]
    fn missing_path_fails() {
        let temp_dir = TempDir::new().unwrap();

        let result = count_children(
            &temp_dir.path().join("nonexistent"),
            &IgnoreFilter::default(),
        );

        assert!(result.is_err());
    }

    #[test]
    fn file_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("plain.txt");
        fs::write(&file, "x").unwrap();

        assert!(count_children(&file, &IgnoreFilter::default()).is_err());
    }

    #[test]
    fn repeated_invocation_is_stable() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".DS_Store"), "junk").unwrap();
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();

        let filter = IgnoreFilter::default();
        let first = count_children(temp_dir.path(), &filter).unwrap();
        let second = count_children(temp_dir.path(), &filter).unwrap();

        assert_eq!(first, second);
        assert_eq!(first, ChildCounts { dirs: 0, files: 1 });
    }
}
