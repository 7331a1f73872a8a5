use std::borrow::Cow;

/// Errors raised while assembling a [`crate::GuardConfig`].
#[tripwire_derive::tripwire_error]
pub enum ConfigError {
    #[cfg(feature = "config")]
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: ::config::ConfigError, context: Option<Cow<'static, str>> },

    #[error("Invalid build mode{}: '{value}' (expected development or production)", format_context(.context))]
    InvalidMode { value: String, context: Option<Cow<'static, str>> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_mode_display() {
        let err = ConfigError::InvalidMode { value: "staging".to_owned(), context: None };
        assert_eq!(
            err.to_string(),
            "Invalid build mode: 'staging' (expected development or production)"
        );
    }
}
