use crate::error::InvariantError;
use crate::mode::BuildMode;
use crate::truthy::Narrow;

/// Generic message of every invariant violation; production errors carry nothing else.
pub const INVARIANT_LABEL: &str = "Invariant violation";

/// Ensures `value` is truthy and returns it narrowed.
///
/// On success the falsy shapes of the type are gone from the result:
/// `Option<T>` comes back as `T`, anything else as itself. On failure the
/// error message includes `message` in [`BuildMode::Development`]; in
/// [`BuildMode::Production`] it is always [`INVARIANT_LABEL`].
///
/// # Errors
/// Returns [`InvariantError::Violation`] when `value` is falsy.
///
/// # Example
/// ```rust
/// use tripwire::{BuildMode, invariant};
///
/// let user: Option<&str> = Some("ada");
/// let user = invariant(user, Some("no user in session"), BuildMode::Production).unwrap();
/// assert_eq!(user, "ada");
///
/// let err = invariant(0_u32, Some("retries exhausted"), BuildMode::Production).unwrap_err();
/// assert_eq!(err.to_string(), "Invariant violation");
/// ```
pub fn invariant<T>(
    value: T,
    message: Option<&str>,
    mode: BuildMode,
) -> Result<T::Narrowed, InvariantError>
where
    T: Narrow,
{
    value.narrow().ok_or_else(|| InvariantError::violation(mode, message))
}

/// [`invariant`] with a custom generic label instead of [`INVARIANT_LABEL`].
pub(crate) fn invariant_labelled<T>(
    value: T,
    label: &str,
    message: Option<&str>,
    mode: BuildMode,
) -> Result<T::Narrowed, InvariantError>
where
    T: Narrow,
{
    value.narrow().ok_or_else(|| InvariantError::labelled(label, mode, message))
}
