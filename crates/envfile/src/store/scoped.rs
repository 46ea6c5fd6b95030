//! Scoped process-environment store.

use std::collections::HashMap;
use std::ffi::OsString;

use super::{EnvStore, ProcessEnv, StoreError};

/// Writes variables into the process environment and restores every touched
/// key to its prior state when dropped.
///
/// Each key's original value (or absence) is recorded on first write, so a
/// test can load freely and rely on the guard to revert. Same contract as
/// [`ProcessEnv`] regarding concurrent environment access.
#[derive(Debug, Default)]
pub struct ScopedEnv {
    inner: ProcessEnv,
    saved: HashMap<String, Option<OsString>>,
}

impl ScopedEnv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EnvStore for ScopedEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn has(&self, key: &str) -> bool {
        self.inner.has(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.saved
            .entry(key.to_string())
            .or_insert_with(|| std::env::var_os(key));
        self.inner.set(key, value)
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (key, prior) in self.saved.drain() {
            match prior {
                // SAFETY: same single-threaded contract as `ProcessEnv::set`.
                Some(value) => unsafe { std::env::set_var(&key, value) },
                None => unsafe { std::env::remove_var(&key) },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_restores_prior_value_and_absence() {
        let _lock = crate::test_util::global_test_lock().lock().unwrap();

        let existing = "_ENVFILE_SCOPED_EXISTING";
        let fresh = "_ENVFILE_SCOPED_FRESH";
        // SAFETY: the global test lock serializes environment access.
        unsafe { std::env::set_var(existing, "before") };

        {
            let mut scoped = ScopedEnv::new();
            scoped.set(existing, "during").unwrap();
            scoped.set(fresh, "during").unwrap();
            assert_eq!(std::env::var(existing).as_deref(), Ok("during"));
            assert_eq!(std::env::var(fresh).as_deref(), Ok("during"));
        }

        assert_eq!(std::env::var(existing).as_deref(), Ok("before"));
        assert!(std::env::var_os(fresh).is_none());

        // SAFETY: the global test lock serializes environment access.
        unsafe { std::env::remove_var(existing) };
    }

    #[test]
    fn repeated_writes_keep_the_first_saved_state() {
        let _lock = crate::test_util::global_test_lock().lock().unwrap();

        let key = "_ENVFILE_SCOPED_REPEATED";
        {
            let mut scoped = ScopedEnv::new();
            scoped.set(key, "first").unwrap();
            scoped.set(key, "second").unwrap();
        }
        assert!(std::env::var_os(key).is_none());
    }
}
