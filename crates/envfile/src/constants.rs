//! Centralized constants for the envfile workspace.

/// Conventional source file name, used when a load call receives no paths.
pub const DEFAULT_ENV_FILE: &str = ".env";
