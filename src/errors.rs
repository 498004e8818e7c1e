// errors.rs
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the county registry.
///
/// `Configuration` is fatal for a run. `MalformedRow` only ever describes a
/// single skipped row and is reported through the log.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read county registry {path:?}: {source}")]
    Configuration {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed registry row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },
}
