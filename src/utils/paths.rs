use std::path::{Path, PathBuf};

use crate::config::OUTPUT_PREFIX;
use crate::error::{IconError, Result};

/// Resolve `path` against the working directory. The path does not need to exist.
pub fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}

/// Directory the icons are written to: the one holding the source.
pub fn output_dir(source: &Path) -> PathBuf {
    match source.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// `<dir>/icon_<size>.png`
pub fn output_path(dir: &Path, size: u32) -> PathBuf {
    dir.join(format!("{}_{}.png", OUTPUT_PREFIX, size))
}

/// Create `dir` and any missing parents. Succeeds if it already exists.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| IconError::io(dir, e))
}
