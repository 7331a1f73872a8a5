use std::convert::Infallible;
use std::fmt::Debug;

/// Marks the fallback arm of a match that should be unreachable.
///
/// Rust already rejects non-exhaustive matches, so this is for the cases the
/// compiler cannot see through: wildcard arms over `#[non_exhaustive]` enums,
/// integers decoded from the wire, tags kept in sync by convention. Reaching
/// it means an invariant elsewhere is broken, so it panics with the value's
/// debug representation.
///
/// ```rust,should_panic
/// # use tripwire::assert_never;
/// #[derive(Debug)]
/// enum Shape { Circle, Square, Hexagon }
///
/// fn corners(shape: &Shape) -> u8 {
///     match shape {
///         Shape::Circle => 0,
///         Shape::Square => 4,
///         other => assert_never(other),
///     }
/// }
///
/// corners(&Shape::Hexagon);
/// ```
#[cold]
#[track_caller]
pub fn assert_never<T: Debug>(value: T) -> ! {
    panic!("Unexpected {value:?}")
}

/// The compile-time form of [`assert_never`].
///
/// An [`Infallible`] can't be constructed, so a call to `absurd` type-checks
/// only where the compiler has proven the branch dead, and it can never run.
///
/// ```rust
/// # use tripwire::absurd;
/// use std::convert::Infallible;
///
/// fn parse(raw: &str) -> Result<String, Infallible> {
///     Ok(raw.to_owned())
/// }
///
/// let value = match parse("ok") {
///     Ok(v) => v,
///     Err(never) => absurd(never),
/// };
/// assert_eq!(value, "ok");
/// ```
#[inline]
pub const fn absurd(value: Infallible) -> ! {
    match value {}
}
