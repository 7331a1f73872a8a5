use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selects verbose diagnostics (development) or a minimal footprint (production).
///
/// Every mode-dependent helper receives the mode explicitly; nothing in this
/// crate reads a process-wide flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    /// `Development` for builds with `debug_assertions`, `Production` otherwise.
    #[must_use]
    pub const fn from_build() -> Self {
        if cfg!(debug_assertions) { Self::Development } else { Self::Production }
    }

    #[must_use]
    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }

    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl Default for BuildMode {
    fn default() -> Self {
        Self::from_build()
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(ConfigError::InvalidMode { value: s.to_owned(), context: None }),
        }
    }
}

impl TryFrom<String> for BuildMode {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
