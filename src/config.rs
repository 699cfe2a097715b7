//! Fixed job settings.
//!
//! The tool takes no flags: the source location and the produced sizes are
//! compiled in. Log verbosity is the only thing read from the environment
//! (`RUST_LOG`, see `main.rs`).

use std::path::{Path, PathBuf};

/// Source icon, relative to the working directory.
pub const SOURCE_PATH: &str = "resources/icon.png";

/// Square edge lengths to produce, in output order.
pub const ICON_SIZES: [u32; 4] = [16, 32, 48, 128];

/// File name prefix for produced icons (`icon_<size>.png`).
pub const OUTPUT_PREFIX: &str = "icon";

/// One resize run: a source image and the sizes cut from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconJob {
    source: PathBuf,
    sizes: &'static [u32],
}

impl IconJob {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            sizes: &ICON_SIZES,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn sizes(&self) -> &'static [u32] {
        self.sizes
    }
}

impl Default for IconJob {
    fn default() -> Self {
        Self::new(SOURCE_PATH)
    }
}
