//! Bootstrap errors
//!
//! The simulation itself cannot fail; only loading a session (config files,
//! scripted input) can.

use std::path::PathBuf;

/// Errors raised while setting up a session
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read config {path}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config JSON")]
    ConfigParse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("bad key script entry {entry:?}: {reason}")]
    Script { entry: String, reason: &'static str },
}
