use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while producing icon sizes.
#[derive(Debug, Error)]
pub enum IconError {
    /// The source image is not where the job expects it.
    #[error("icon not found: {}", path.display())]
    MissingSource { path: PathBuf },

    #[error("failed to decode source image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("failed to encode PNG: {0}")]
    Encode(#[from] png::EncodingError),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IconError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, IconError>;
