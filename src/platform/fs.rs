// email-icons - platform/fs.rs
//
// Filesystem helpers used by the jobs. Directory listing goes through
// `walkdir` so ordering is deterministic and errors carry the failing path.

use std::path::{Path, PathBuf};

/// A non-directory entry (regular file or symlink) found directly inside a
/// listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedFile {
    pub path: PathBuf,
    pub file_name: String,
}

/// List the entries directly inside `dir` whose names match at least one of
/// `include_patterns` (an empty list matches everything).
///
/// Entries are returned sorted by file name. Only directories are left out;
/// symlinks are listed as themselves, not their targets, so renaming one moves
/// the link. Entries with non-UTF-8 names are skipped with a debug record.
pub fn list_files(dir: &Path, include_patterns: &[&str]) -> Result<Vec<ListedFile>, walkdir::Error> {
    let patterns = compile_patterns(include_patterns);

    let walker = walkdir::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }

        let Some(file_name) = entry.file_name().to_str() else {
            tracing::debug!(path = %entry.path().display(), "Skipping non-UTF-8 filename");
            continue;
        };

        if !is_included(file_name, &patterns) {
            tracing::trace!(file = file_name, "Not matched by include patterns");
            continue;
        }

        files.push(ListedFile {
            path: entry.path().to_path_buf(),
            file_name: file_name.to_string(),
        });
    }

    tracing::debug!(dir = %dir.display(), files = files.len(), "Directory listed");
    Ok(files)
}

/// Compile glob pattern strings; patterns that fail to compile are logged and
/// skipped.
fn compile_patterns(patterns: &[&str]) -> Vec<glob::Pattern> {
    patterns
        .iter()
        .filter_map(|p| match glob::Pattern::new(p) {
            Ok(compiled) => Some(compiled),
            Err(e) => {
                tracing::warn!(pattern = p, error = %e, "Invalid glob pattern, skipping");
                None
            }
        })
        .collect()
}

fn is_included(file_name: &str, patterns: &[glob::Pattern]) -> bool {
    patterns.is_empty() || patterns.iter().any(|p| p.matches(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_lists_matching_files_sorted() {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path();
        fs::write(root.join("b_light_2.png"), b"b").expect("write");
        fs::write(root.join("a_light_1.png"), b"a").expect("write");
        fs::write(root.join("notes.txt"), b"n").expect("write");
        fs::create_dir(root.join("nested.png")).expect("mkdir");
        fs::write(root.join("nested.png").join("c_light_3.png"), b"c").expect("write");

        let files = list_files(root, &["*.png"]).unwrap();
        let names: Vec<_> = files.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["a_light_1.png", "b_light_2.png"]);
        assert_eq!(files[0].path, root.join("a_light_1.png"));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_file_is_listed() {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path();
        let target = root.join("export.bin");
        fs::write(&target, b"png").expect("write");
        std::os::unix::fs::symlink(&target, root.join("hero_lock_light_1.png")).expect("symlink");

        let files = list_files(root, &["*.png"]).unwrap();
        let names: Vec<_> = files.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["hero_lock_light_1.png"]);
    }

    #[test]
    fn test_empty_patterns_include_everything() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("x.txt"), b"x").expect("write");
        fs::write(dir.path().join("y.png"), b"y").expect("write");

        let files = list_files(dir.path(), &[]).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_glob_is_case_sensitive() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("UPPER_light_1.PNG"), b"x").expect("write");

        let files = list_files(dir.path(), &["*.png"]).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_missing_directory_is_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = list_files(&dir.path().join("absent"), &["*.png"]);
        assert!(result.is_err());
    }
}
