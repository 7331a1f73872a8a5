mod config;
mod invariant;

pub use self::config::{ConfigError, ConfigErrorExt};
pub use self::invariant::{InvariantError, InvariantErrorExt};
