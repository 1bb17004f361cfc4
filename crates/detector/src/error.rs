use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DetectorError {
    #[error("Input image not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Unsupported pixel layout: {0}")]
    UnsupportedLayout(String),

    #[error("Invalid range '{input}': {reason}")]
    RangeParse { input: String, reason: String },

    #[error("Invalid area range ({min}, {max}): lower bound must be >= 0 and below the upper bound")]
    InvalidAreaRange { min: f64, max: f64 },

    #[error("Failed to write image {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DetectorError>;
