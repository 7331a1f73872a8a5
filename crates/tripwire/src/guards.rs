use crate::error::InvariantError;
use crate::invariant::{INVARIANT_LABEL, invariant_labelled};
use crate::mode::BuildMode;
use crate::sink::{DiagnosticSink, TracingSink};
use crate::truthy::{Narrow, Truthy};
use crate::warning::{WARNING_LABEL, warning_labelled};
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;

/// Settings shared by every guard: the mode and the labels it prints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    pub mode: BuildMode,
    pub warning_label: String,
    pub invariant_label: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            mode: BuildMode::from_build(),
            warning_label: WARNING_LABEL.to_owned(),
            invariant_label: INVARIANT_LABEL.to_owned(),
        }
    }
}

impl GuardConfig {
    #[must_use]
    pub fn with_mode(mode: BuildMode) -> Self {
        Self { mode, ..Self::default() }
    }
}

/// A [`GuardConfig`] paired with a [`DiagnosticSink`].
///
/// Hand one of these to the code that needs guards instead of threading a
/// mode flag through every call. Clones share the sink.
#[derive(Clone)]
pub struct Guards {
    config: Arc<GuardConfig>,
    sink: Arc<dyn DiagnosticSink>,
}

impl Guards {
    /// Guards that warn through `tracing` ([`TracingSink`]).
    ///
    /// Warnings are only visible with a subscriber installed, such as
    /// `tripwire_logger::Logger`; use [`Guards::builder`] with another
    /// [`DiagnosticSink`] to send them elsewhere.
    #[must_use]
    pub fn new(config: GuardConfig) -> Self {
        Self { config: Arc::new(config), sink: Arc::new(TracingSink) }
    }

    #[must_use = "The builder must be built to produce guards."]
    pub fn builder() -> GuardsBuilder {
        GuardsBuilder::default()
    }

    #[must_use]
    pub fn mode(&self) -> BuildMode {
        self.config.mode
    }

    #[must_use]
    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// [`crate::invariant`] using the configured mode and label.
    ///
    /// # Errors
    /// Returns [`InvariantError::Violation`] when `value` is falsy.
    pub fn invariant<T: Narrow>(
        &self,
        value: T,
        message: Option<&str>,
    ) -> Result<T::Narrowed, InvariantError> {
        invariant_labelled(value, &self.config.invariant_label, message, self.config.mode)
    }

    /// [`crate::warning`] using the configured mode, label and sink.
    pub fn warning<T: Truthy>(&self, value: T, message: &str) {
        warning_labelled(value, &self.config.warning_label, message, self.config.mode, &*self.sink);
    }
}

impl Default for Guards {
    fn default() -> Self {
        Self::new(GuardConfig::default())
    }
}

impl fmt::Debug for Guards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guards").field("config", &self.config).finish_non_exhaustive()
    }
}

/// Builder for [`Guards`]; unset fields fall back to [`GuardConfig::default`] and [`TracingSink`].
pub struct GuardsBuilder {
    config: GuardConfig,
    sink: Arc<dyn DiagnosticSink>,
}

impl Default for GuardsBuilder {
    fn default() -> Self {
        Self { config: GuardConfig::default(), sink: Arc::new(TracingSink) }
    }
}

impl GuardsBuilder {
    /// Replaces the whole configuration, e.g. one produced by `config::load_config`.
    #[must_use = "The builder must be built to produce guards."]
    pub fn config(mut self, config: GuardConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use = "The builder must be built to produce guards."]
    pub const fn mode(mut self, mode: BuildMode) -> Self {
        self.config.mode = mode;
        self
    }

    #[must_use = "The builder must be built to produce guards."]
    pub fn warning_label(mut self, label: impl Into<String>) -> Self {
        self.config.warning_label = label.into();
        self
    }

    #[must_use = "The builder must be built to produce guards."]
    pub fn invariant_label(mut self, label: impl Into<String>) -> Self {
        self.config.invariant_label = label.into();
        self
    }

    #[must_use = "The builder must be built to produce guards."]
    pub fn sink<S: DiagnosticSink + 'static>(mut self, sink: Arc<S>) -> Self {
        self.sink = sink;
        self
    }

    #[must_use]
    pub fn build(self) -> Guards {
        Guards { config: Arc::new(self.config), sink: self.sink }
    }
}

impl fmt::Debug for GuardsBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuardsBuilder").field("config", &self.config).finish_non_exhaustive()
    }
}
