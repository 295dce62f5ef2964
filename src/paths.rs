use anyhow::{Context, Result};
use std::path::Path;
use walkdir::WalkDir;

use crate::config::Config;

/// A file to scan, plus the prefix stripped from its path when printing
/// matches. The prefix is the searched root directory, or empty for
/// single-file scans.
#[derive(Debug, Clone)]
pub struct ScanTarget {
    pub path: String,
    pub display_prefix: String,
}

impl ScanTarget {
    /// Path as printed in match output: the full path with the searched
    /// root's prefix removed.
    pub fn display_path(&self) -> &str {
        self.path
            .strip_prefix(&self.display_prefix)
            .unwrap_or(&self.path)
    }
}

/// Recurse through a directory and return all source files whose name ends
/// in one of the configured suffixes (`.py` and `.pyi` by default).
pub fn collect_paths(root: &str, config: &Config) -> Result<Vec<String>> {
    let suffixes: Vec<String> = config
        .extensions
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect();

    let mut ret = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.with_context(|| format!("walk {}", root))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if suffixes.iter().any(|s| name.ends_with(s.as_str())) {
            tracing::debug!("queued {}", entry.path().display());
            ret.push(entry.path().to_string_lossy().to_string());
        }
    }
    Ok(ret)
}

/// Resolve a user-supplied path into scan targets. A single file is scanned
/// as-is regardless of extension, with nothing stripped from its printed
/// path; a directory is walked recursively and its own path becomes the
/// display prefix.
pub fn resolve_pathspec(pathspec: &str, config: &Config) -> Result<Vec<ScanTarget>> {
    if Path::new(pathspec).is_file() {
        return Ok(vec![ScanTarget {
            path: pathspec.to_string(),
            display_prefix: String::new(),
        }]);
    }

    let targets = collect_paths(pathspec, config)?
        .into_iter()
        .map(|path| ScanTarget {
            path,
            display_prefix: pathspec.to_string(),
        })
        .collect();
    Ok(targets)
}
