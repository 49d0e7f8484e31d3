//! Errors raised while loading the fixture repository.

use std::path::PathBuf;

use thiserror::Error;

/// A fault in the fixture repository itself.
///
/// These are configuration errors, not expectation mismatches: they are
/// raised before any compiler process runs.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: invalid manifest: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },

    #[error("{path}: fixture '{id}': unknown category '{value}' (expected one of: {valid})")]
    UnknownCategory {
        path: PathBuf,
        id: String,
        value: String,
        valid: String,
    },

    #[error("{path}: duplicate fixture id '{id}'")]
    DuplicateId { path: PathBuf, id: String },

    #[error(
        "{path}: fixture '{id}' must declare exactly one of `source` (inline) or `file` (sidecar)"
    )]
    AmbiguousSource { path: PathBuf, id: String },

    #[error(
        "{path}: invalid fixture id '{id}' \
         (ids become scratch file names: letters, digits, '.', '_', '-' only)"
    )]
    InvalidId { path: PathBuf, id: String },

    #[error("{path}: manifest declares no fixtures")]
    EmptyManifest { path: PathBuf },
}
