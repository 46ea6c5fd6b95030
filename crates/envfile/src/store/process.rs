//! Live process-environment store.

use super::{EnvStore, StoreError, check_assignment};

/// Writes variables into the process environment.
///
/// Process-environment mutation is not synchronized: callers must ensure no
/// other thread reads or writes the environment for the duration of a load,
/// which in practice means loading during single-threaded startup.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvStore for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn has(&self, key: &str) -> bool {
        std::env::var_os(key).is_some()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        check_assignment(key, value)?;
        // SAFETY: the documented contract of this store is that no other
        // thread accesses the process environment during a load.
        unsafe { std::env::set_var(key, value) };
        Ok(())
    }
}
