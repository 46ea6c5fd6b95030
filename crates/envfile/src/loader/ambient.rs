//! Process-wide convenience layer.
//!
//! Responsibilities:
//! - Hold the two ambient toggles (override, require-files) as atomics with
//!   set-once-read-many semantics.
//! - Provide the crate-root `load`/`read` helpers that combine the ambient
//!   toggles with the process-environment and map destinations.
//!
//! Does NOT handle:
//! - Merge logic; everything funnels into [`EnvLoader`].
//!
//! Invariants / Assumptions:
//! - Toggles are set during single-threaded startup (or per test, behind a
//!   lock). Concurrent loads with stable toggle values are fine; mutating a
//!   toggle while another thread is loading is a caller error.

use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use super::{EnvLoader, LoadError};
use crate::store::ProcessEnv;

static OVERRIDE: AtomicBool = AtomicBool::new(false);
static REQUIRE_FILES: AtomicBool = AtomicBool::new(false);

/// Make subsequent ambient loads replace existing values.
pub fn set_override(enabled: bool) {
    OVERRIDE.store(enabled, Ordering::Relaxed);
}

/// Make subsequent ambient loads fail when a listed source is missing.
pub fn set_require_files(enabled: bool) {
    REQUIRE_FILES.store(enabled, Ordering::Relaxed);
}

pub(super) fn override_enabled() -> bool {
    OVERRIDE.load(Ordering::Relaxed)
}

pub(super) fn require_files_enabled() -> bool {
    REQUIRE_FILES.load(Ordering::Relaxed)
}

/// Load the conventional `.env` file into the process environment.
///
/// Honors the ambient toggles. See [`ProcessEnv`] for the
/// concurrent-access contract.
///
/// # Errors
///
/// Same failure modes as [`EnvLoader::load`].
pub fn load() -> Result<(), LoadError> {
    load_from(std::iter::empty::<&Path>())
}

/// Load the given sources, in order, into the process environment.
///
/// Honors the ambient toggles. See [`ProcessEnv`] for the
/// concurrent-access contract.
///
/// # Errors
///
/// Same failure modes as [`EnvLoader::load`].
pub fn load_from<I, P>(paths: I) -> Result<(), LoadError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    EnvLoader::from_ambient().load(&mut ProcessEnv, paths)
}

/// Resolve the conventional `.env` file into a map.
///
/// Honors the ambient toggles.
///
/// # Errors
///
/// Same failure modes as [`EnvLoader::load`].
pub fn read() -> Result<HashMap<String, String>, LoadError> {
    read_from(std::iter::empty::<&Path>())
}

/// Resolve the given sources, in order, into a map.
///
/// Honors the ambient toggles.
///
/// # Errors
///
/// Same failure modes as [`EnvLoader::load`].
pub fn read_from<I, P>(paths: I) -> Result<HashMap<String, String>, LoadError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    EnvLoader::from_ambient().read(paths)
}
