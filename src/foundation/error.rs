use std::path::{Path, PathBuf};

/// Convenience result type used across bannerkit.
pub type BannerResult<T> = Result<T, BannerError>;

/// Error taxonomy for every pipeline stage.
#[derive(thiserror::Error, Debug)]
pub enum BannerError {
    /// Missing, unreadable or malformed composition request.
    #[error("config error: {0}")]
    Config(String),

    /// File open/read/write failure on an image or output path.
    #[error("io error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Unrecognized or corrupt image data.
    #[error("decode error on '{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Output format tag outside the recognized set.
    #[error("unsupported output format '{0}' (expected png, jpg or jpeg)")]
    UnsupportedFormat(String),

    /// Encoder failure while producing output bytes.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BannerError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn decode(path: impl AsRef<Path>, source: image::ImageError) -> Self {
        Self::Decode {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn unsupported_format(tag: impl Into<String>) -> Self {
        Self::UnsupportedFormat(tag.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}
