use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

/// Result of scanning files.
pub struct ScanResult {
    /// Matching files, sorted.
    pub files: Vec<PathBuf>,
    /// Directory entries that could not be accessed.
    pub skipped_count: usize,
}

/// Collect source files below `base_dir`.
///
/// Keeps regular files whose extension is in `extensions` and drops any
/// whose path relative to `base_dir` matches one of `ignore_patterns`.
/// A missing `base_dir` yields no files.
pub fn scan_files(
    base_dir: &Path,
    extensions: &[String],
    ignore_patterns: &[String],
    verbose: bool,
) -> ScanResult {
    let mut files: Vec<PathBuf> = Vec::new();
    let mut skipped_count = 0;

    let mut glob_patterns: Vec<Pattern> = Vec::new();
    for p in ignore_patterns {
        match Pattern::new(p) {
            Ok(pattern) => glob_patterns.push(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
            }
        }
    }

    if !base_dir.exists() {
        if verbose {
            eprintln!(
                "{} Source root does not exist: {}",
                "warning:".bold().yellow(),
                base_dir.display()
            );
        }
        return ScanResult {
            files,
            skipped_count,
        };
    }

    for entry in WalkDir::new(base_dir) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() || !is_scannable_file(path, extensions) {
            continue;
        }

        let relative = path.strip_prefix(base_dir).unwrap_or(path);
        if glob_patterns.iter().any(|p| p.matches_path(relative)) {
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    ScanResult {
        files,
        skipped_count,
    }
}

fn is_scannable_file(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}
