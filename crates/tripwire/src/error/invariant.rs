use crate::invariant::INVARIANT_LABEL;
use crate::mode::BuildMode;
use std::borrow::Cow;

/// Raised when a value that must be truthy turns out falsy.
#[tripwire_derive::tripwire_error]
#[derive(Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// The checked value was falsy. `redacted` is set when the custom message
    /// was dropped because the check ran in production mode.
    #[error("{message}{}", format_context(.context))]
    Violation { message: Cow<'static, str>, redacted: bool, context: Option<Cow<'static, str>> },
}

impl InvariantError {
    /// Builds a violation with the default [`INVARIANT_LABEL`].
    #[must_use]
    pub fn violation(mode: BuildMode, message: Option<&str>) -> Self {
        Self::labelled(INVARIANT_LABEL, mode, message)
    }

    /// Builds a violation whose generic text is `label`.
    ///
    /// Development: `"{label}. {message}"`, or `"{label}."` without a message.
    /// Production: `label` alone.
    #[must_use]
    pub fn labelled(label: &str, mode: BuildMode, message: Option<&str>) -> Self {
        let message: Cow<'static, str> = match mode {
            BuildMode::Development => match message.filter(|m| !m.is_empty()) {
                Some(message) => format!("{label}. {message}").into(),
                None => format!("{label}.").into(),
            },
            BuildMode::Production if label == INVARIANT_LABEL => Cow::Borrowed(INVARIANT_LABEL),
            BuildMode::Production => label.to_owned().into(),
        };

        Self::Violation { message, redacted: mode.is_production(), context: None }
    }

    /// The message as shown to the caller, without context.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Violation { message, .. } => message,
        }
    }

    /// Whether the caller's message was discarded in favour of the generic text.
    #[must_use]
    pub const fn is_generic(&self) -> bool {
        match self {
            Self::Violation { redacted, .. } => *redacted,
        }
    }
}
