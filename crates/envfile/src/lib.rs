//! Load `KEY=VALUE` pairs from `.env`-style files.
//!
//! This crate parses dotenv-style text sources and merges the resulting
//! pairs into a destination store: the live process environment, a scoped
//! environment that reverts itself when dropped, or an in-memory map.
//!
//! The explicit API is [`EnvLoader`], which carries its merge policies as
//! fields. The crate-root functions ([`load`], [`load_from`], [`read`],
//! [`read_from`]) are a convenience layer over process-wide toggles
//! ([`set_override`], [`set_require_files`]) for hosts that want a single
//! ambient configuration set once at startup.

pub mod constants;
mod loader;
mod parser;
pub mod store;

pub use constants::DEFAULT_ENV_FILE;
pub use loader::{
    EnvLoader, LoadError, load, load_from, read, read_from, set_override, set_require_files,
};
pub use parser::{Pair, ParseError, parse_reader, parse_str};
pub use store::{EnvMap, EnvStore, ProcessEnv, ScopedEnv, StoreError};
