//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use slides_core::model::DeckError;

/// Errors emitted while loading deck content.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("failed to read deck file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("deck content is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors emitted while building a `Location`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LocationError {
    #[error("invalid location `{raw}`: {source}")]
    Invalid {
        raw: String,
        #[source]
        source: url::ParseError,
    },
}
