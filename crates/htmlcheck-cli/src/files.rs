//! HTML file discovery
//!
//! Expands directories to the HTML files beneath them and returns an
//! ordered, de-duplicated list. Paths under a dependency cache
//! (`node_modules`) are never considered, and `--exclude` substrings
//! drop further candidates.

use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::Result;

/// Dependency-cache directory never scanned for candidates
const DEPENDENCY_CACHE: &str = "node_modules";

/// Resolve the files to validate.
///
/// Each root that is a directory expands recursively to the `*.html`
/// files beneath it; plain paths are taken as given. With no roots, the
/// current directory is scanned. The result is sorted and de-duplicated.
pub fn discover(roots: &[PathBuf], excludes: &[String]) -> Result<Vec<PathBuf>> {
    let mut found = BTreeSet::new();
    if roots.is_empty() {
        collect_html(Path::new("."), &mut found)?;
    } else {
        for root in roots {
            if root.is_dir() {
                collect_html(root, &mut found)?;
            } else {
                found.insert(root.clone());
            }
        }
    }

    let filenames: Vec<PathBuf> = found
        .into_iter()
        .filter(|path| keep(path, excludes))
        .collect();
    debug!(count = filenames.len(), "discovered files");
    Ok(filenames)
}

/// Walk one directory tree, collecting HTML files
fn collect_html(root: &Path, found: &mut BTreeSet<PathBuf>) -> Result<()> {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| entry.file_name() != DEPENDENCY_CACHE);
    for entry in walker {
        let entry = entry.map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        if entry.file_type().is_file() && is_html(entry.path()) {
            found.insert(entry.path().to_path_buf());
        }
    }
    Ok(())
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("html"))
        .unwrap_or(false)
}

fn keep(path: &Path, excludes: &[String]) -> bool {
    let text = path.to_string_lossy();
    !text.contains(DEPENDENCY_CACHE)
        && !excludes.iter().any(|exclude| text.contains(exclude.as_str()))
}
