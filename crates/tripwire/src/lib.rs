//! # Tripwire
//!
//! Small guard helpers for code paths that "cannot happen" and values that
//! "must be there". Each helper is standalone; nothing here keeps state.
//!
//! * [`assert_never`] / [`absurd`] - exhaustiveness checks for sum types.
//! * [`invariant`] / [`invariant!`] - fail with an [`InvariantError`] when a
//!   value is falsy. The custom message only survives in
//!   [`BuildMode::Development`].
//! * [`non_null`] - null/`None` predicate.
//! * [`warning`] - development-only, non-fatal diagnostic routed to a
//!   [`DiagnosticSink`] (by default `tracing` at `WARN`).
//!
//! Your own types take part via `#[derive(Truthy)]`, which makes them always
//! truthy (they are objects, after all).
//!
//! Mode-dependent helpers take the [`BuildMode`] explicitly. [`Guards`]
//! bundles a mode, labels and a sink so call sites don't have to.
//!
//! ## Example
//!
//! ```rust
//! use tripwire::{BuildMode, Guards, RecordingSink, invariant, non_null};
//! use std::sync::Arc;
//!
//! let port: Option<u16> = Some(8080);
//! assert!(non_null(&port));
//!
//! let port = invariant(port, Some("port must be configured"), BuildMode::Development).unwrap();
//! assert_eq!(port, 8080);
//!
//! let sink = Arc::new(RecordingSink::default());
//! let guards = Guards::builder().mode(BuildMode::Development).sink(sink.clone()).build();
//! guards.warning(false, "falling back to defaults");
//! assert_eq!(sink.lines(), vec!["Warning. falling back to defaults".to_owned()]);
//! ```

mod error;
mod guards;
mod invariant;
mod mode;
mod never;
mod non_null;
mod sink;
mod truthy;
mod warning;

#[cfg(feature = "config")]
pub mod config;

pub use crate::error::{ConfigError, ConfigErrorExt, InvariantError, InvariantErrorExt};
pub use crate::guards::{GuardConfig, Guards, GuardsBuilder};
pub use crate::invariant::{INVARIANT_LABEL, invariant};
pub use crate::mode::BuildMode;
pub use crate::never::{absurd, assert_never};
pub use crate::non_null::{Nullable, non_null, non_null_values};
pub use crate::sink::{DiagnosticSink, RecordingSink, TracingSink};
pub use crate::truthy::{Narrow, Truthy};
pub use tripwire_derive::Truthy;
pub use crate::warning::{WARNING_LABEL, warning};

/// Fails the enclosing function with an [`InvariantError`] when `cond` is falsy.
///
/// The error is converted with [`From`], so any error type that can be built
/// from an [`InvariantError`] (including `anyhow::Error`) works as the return
/// type. Format arguments are evaluated only when the check fails in
/// development mode.
///
/// Without an explicit `mode = ...` the mode is [`BuildMode::from_build`].
///
/// ```rust
/// use tripwire::{BuildMode, InvariantError, invariant};
///
/// fn checked_div(a: u32, b: u32) -> Result<u32, InvariantError> {
///     invariant!(mode = BuildMode::Development, b, "division of {a} by zero");
///     Ok(a / b)
/// }
///
/// assert_eq!(checked_div(6, 3).unwrap(), 2);
/// assert_eq!(checked_div(6, 0).unwrap_err().to_string(), "Invariant violation. division of 6 by zero");
/// ```
#[macro_export]
macro_rules! invariant {
    (mode = $mode:expr, $cond:expr $(,)?) => {
        if !$crate::Truthy::is_truthy(&$cond) {
            let mode: $crate::BuildMode = $mode;
            return ::core::result::Result::Err(::core::convert::From::from(
                $crate::InvariantError::violation(mode, ::core::option::Option::None),
            ));
        }
    };
    (mode = $mode:expr, $cond:expr, $($arg:tt)+) => {
        if !$crate::Truthy::is_truthy(&$cond) {
            let mode: $crate::BuildMode = $mode;
            let message = mode.is_development().then(|| ::std::format!($($arg)+));
            return ::core::result::Result::Err(::core::convert::From::from(
                $crate::InvariantError::violation(mode, message.as_deref()),
            ));
        }
    };
    ($cond:expr $(,)?) => {
        $crate::invariant!(mode = $crate::BuildMode::from_build(), $cond)
    };
    ($cond:expr, $($arg:tt)+) => {
        $crate::invariant!(mode = $crate::BuildMode::from_build(), $cond, $($arg)+)
    };
}
