//! Error types for trap construction and configuration.
//!
//! Only configuration problems are errors. Everything that can go wrong with a
//! submission is folded into the boolean returned by validation.

use std::path::PathBuf;

/// Fatal configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum TrapError {
    /// No server secret configured.
    #[error("no honeypot secret configured (set HONEYTRAP_SECRET or `secret` in the config file)")]
    MissingSecret,

    /// Pinned decoy count outside the supported range.
    #[error("decoy count {count} out of range ({min}..={max})")]
    InvalidDecoyCount { count: u8, min: u8, max: u8 },

    /// An environment variable carried a value that could not be parsed.
    #[error("invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },

    /// Config file could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file could not be parsed.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Result type for trap construction.
pub type TrapResult<T> = Result<T, TrapError>;
