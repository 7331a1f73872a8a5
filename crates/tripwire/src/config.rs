//! Layered loading of [`GuardConfig`].
//!
//! 1. **Defaults**: [`GuardConfig::default`].
//! 2. **File** (optional): any format the `config` crate recognises by extension.
//! 3. **Environment**: variables prefixed with `TRIPWIRE__`, e.g.
//!    `TRIPWIRE__MODE=production` or `TRIPWIRE__WARNING_LABEL="[dev]"`.

use crate::error::{ConfigError, ConfigErrorExt};
use crate::guards::GuardConfig;
use ::config::{Config, Environment, File, Map};
use std::path::Path;
use tracing::info;

/// Prefix of environment overrides.
pub const ENV_PREFIX: &str = "TRIPWIRE";

/// Loads a [`GuardConfig`] from an optional file plus `TRIPWIRE__*` overrides.
///
/// # Errors
/// Returns [`ConfigError::Config`] when `path` is given but can't be read or
/// parsed, and [`ConfigError::InvalidMode`] (wrapped) for an unknown mode name.
///
/// # Example
/// ```rust
/// use tripwire::config::load_config;
///
/// let config = load_config(None::<&str>).unwrap();
/// assert!(!config.warning_label.is_empty());
/// ```
pub fn load_config(path: Option<impl AsRef<Path>>) -> Result<GuardConfig, ConfigError> {
    load(path.as_ref().map(AsRef::<Path>::as_ref), None)
}

pub(crate) fn load(
    path: Option<&Path>,
    env: Option<Map<String, String>>,
) -> Result<GuardConfig, ConfigError> {
    let mut builder = Config::builder();

    if let Some(path) = path {
        info!("Loading guard config from {}", path.display());
        builder = builder.add_source(File::from(path).required(true));
    }

    builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__").source(env));

    let config = builder
        .build()
        .context("Failed to build guard config")?
        .try_deserialize::<GuardConfig>()
        .context("Failed to deserialize guard config")?;

    info!(mode = %config.mode, "Guard config loaded");

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::BuildMode;
    use std::fs;
    use tempfile::tempdir;

    fn env(pairs: &[(&str, &str)]) -> Map<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
    }

    #[test]
    fn defaults_without_sources() {
        let config = load(None, Some(Map::new())).unwrap();
        assert_eq!(config, GuardConfig::default());
    }

    #[test]
    fn reads_toml_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("guards.toml");
        fs::write(&path, "mode = \"production\"\nwarning_label = \"[warn]\"\n")?;

        let config = load(Some(path.as_path()), Some(Map::new()))?;
        assert_eq!(config.mode, BuildMode::Production);
        assert_eq!(config.warning_label, "[warn]");
        assert_eq!(config.invariant_label, "Invariant violation");
        Ok(())
    }

    #[test]
    fn environment_overrides_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("guards.toml");
        fs::write(&path, "mode = \"production\"\n")?;

        let config = load(Some(path.as_path()), Some(env(&[("TRIPWIRE__MODE", "dev")])))?;
        assert_eq!(config.mode, BuildMode::Development);
        Ok(())
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load(Some(Path::new("does/not/exist.toml")), Some(Map::new())).unwrap_err();
        assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let err = load(None, Some(env(&[("TRIPWIRE__MODE", "staging")]))).unwrap_err();
        assert!(err.to_string().contains("staging"));
    }
}
