use std::path::PathBuf;
use thiserror::Error;

/// Failures while decoding the digit atlas
#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("failed to read digit atlas {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode digit atlas: {0}")]
    Decode(#[from] image::ImageError),

    /// The strip must hold 11 glyphs of at least one pixel each
    #[error("digit atlas has unusable dimensions {width}x{height}")]
    Dimensions { width: u32, height: u32 },
}

/// Rejected layout inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("degenerate viewport {width}x{height}")]
    DegenerateViewport { width: u32, height: u32 },
}

/// Failures while loading or validating the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config value for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}
