//! Merge loader for `.env`-style sources.
//!
//! Responsibilities:
//! - Orchestrate parsing of each source, strictly in the order given.
//! - Apply first-wins / override precedence against the destination store.
//! - Expand `${NAME}` references in values before writing.
//!
//! Does NOT handle:
//! - Line-level parsing (see `parser`).
//! - Store semantics (see `store`).
//!
//! Invariants / Assumptions:
//! - Without override, the first writer for a key (including pre-existing
//!   destination values) wins; with override, the last writer wins, within
//!   a single source as well as across sources.
//! - A load stops at the first error; keys already written stay written.

mod ambient;
mod error;
mod expand;

#[cfg(test)]
mod tests;

pub use ambient::{load, load_from, read, read_from, set_override, set_require_files};
pub use error::LoadError;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_ENV_FILE;
use crate::parser::{self, Pair};
use crate::store::{EnvMap, EnvStore};

/// Loads `.env`-style sources into an [`EnvStore`].
///
/// Both policies default to off: the first writer for a key wins and
/// missing sources are skipped silently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnvLoader {
    override_existing: bool,
    require_files: bool,
}

impl EnvLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a loader from the process-wide ambient toggles.
    pub fn from_ambient() -> Self {
        Self::new()
            .with_override(ambient::override_enabled())
            .with_require_files(ambient::require_files_enabled())
    }

    /// Make later sources (and later lines) replace earlier values.
    pub fn with_override(mut self, enabled: bool) -> Self {
        self.override_existing = enabled;
        self
    }

    /// Fail with [`LoadError::NotFound`] when a listed source is missing.
    pub fn with_require_files(mut self, enabled: bool) -> Self {
        self.require_files = enabled;
        self
    }

    /// Load every source, in order, into `store`.
    ///
    /// With no `paths` the conventional `.env` file is loaded. Paths may use
    /// forward slashes on any platform.
    ///
    /// # Errors
    ///
    /// Returns the first [`LoadError`] encountered. Keys written before the
    /// failure stay written; there is no rollback.
    pub fn load<S, I, P>(&self, store: &mut S, paths: I) -> Result<(), LoadError>
    where
        S: EnvStore,
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut paths: Vec<PathBuf> = paths
            .into_iter()
            .map(|path| normalize_separators(path.as_ref()))
            .collect();
        if paths.is_empty() {
            paths.push(PathBuf::from(DEFAULT_ENV_FILE));
        }

        for path in &paths {
            match self.load_source(store, path) {
                Err(LoadError::NotFound { path }) if !self.require_files => {
                    tracing::debug!(path = %path.display(), "skipping missing env file");
                }
                other => other?,
            }
        }
        Ok(())
    }

    /// Resolve every source into a map without touching the process
    /// environment.
    ///
    /// Pre-existing process variables are visible to `${NAME}` expansion but
    /// never block a write; precedence applies between the sources
    /// themselves.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`EnvLoader::load`].
    pub fn read<I, P>(&self, paths: I) -> Result<HashMap<String, String>, LoadError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut store = EnvMap::new();
        self.load(&mut store, paths)?;
        Ok(store.into_inner())
    }

    fn load_source<S: EnvStore>(&self, store: &mut S, path: &Path) -> Result<(), LoadError> {
        let pairs = parse_source(path)?;
        tracing::debug!(path = %path.display(), pairs = pairs.len(), "parsed env file");

        for pair in pairs {
            if !self.override_existing && store.has(&pair.key) {
                continue;
            }
            let expanded = expand::expand(&pair.value, |name| store.get(name));
            if let Err(source) = store.set(&pair.key, &expanded) {
                return Err(LoadError::Store {
                    path: path.to_path_buf(),
                    key: pair.key,
                    value: pair.value,
                    source,
                });
            }
        }
        Ok(())
    }
}

/// Read and parse one source file.
fn parse_source(path: &Path) -> Result<Vec<Pair>, LoadError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            return Err(LoadError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(LoadError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    parser::parse_str(&text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Rewrite forward-slash separators to the host separator.
#[cfg(windows)]
fn normalize_separators(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(text) => PathBuf::from(text.replace('/', "\\")),
        None => path.to_path_buf(),
    }
}

#[cfg(not(windows))]
fn normalize_separators(path: &Path) -> PathBuf {
    path.to_path_buf()
}
