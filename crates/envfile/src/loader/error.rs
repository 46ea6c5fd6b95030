//! Error types for loading.
//!
//! Invariants:
//! - Every variant names the source path it came from.
//! - Write failures carry the key and the raw (pre-expansion) value.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::parser::ParseError;
use crate::store::StoreError;

/// Errors that can occur while loading sources into a store.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A listed source does not exist.
    ///
    /// Only surfaced when `require_files` is enabled; otherwise the source
    /// is skipped.
    #[error("env file {path:?} does not exist")]
    NotFound { path: PathBuf },

    /// A source exists but could not be read.
    #[error("reading env file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A source contained a line that is not a `KEY=VALUE` assignment.
    #[error("parsing env file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// The destination store rejected a write.
    #[error("setting {key}={value:?} from {path:?}")]
    Store {
        path: PathBuf,
        key: String,
        value: String,
        #[source]
        source: StoreError,
    },
}
