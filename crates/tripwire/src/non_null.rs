/// A type with a null (or "undefined") state.
pub trait Nullable {
    fn is_null(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nullable for *const T {
    #[inline]
    fn is_null(&self) -> bool {
        <*const T>::is_null(*self)
    }
}

impl<T: ?Sized> Nullable for *mut T {
    #[inline]
    fn is_null(&self) -> bool {
        <*mut T>::is_null(*self)
    }
}

impl<T: Nullable + ?Sized> Nullable for &T {
    #[inline]
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

#[cfg(feature = "json")]
impl Nullable for serde_json::Value {
    #[inline]
    fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Whether `value` is neither null nor undefined.
///
/// Unlike [`crate::Truthy`], falsy payloads still count: `Some(0)`, `Some("")`
/// and `Some(false)` are all non-null. To get at the payload, match on the
/// `Option` directly (`if let Some(v) = value`); `non_null` is for places that
/// only need the answer.
#[inline]
#[must_use]
pub fn non_null<T: Nullable + ?Sized>(value: &T) -> bool {
    !value.is_null()
}

/// Keeps only the present values of an iterator of options.
///
/// ```rust
/// # use tripwire::non_null_values;
/// let ids = [Some(3), None, Some(0), None];
/// assert_eq!(non_null_values(ids).collect::<Vec<_>>(), vec![3, 0]);
/// ```
pub fn non_null_values<I, T>(values: I) -> impl Iterator<Item = T>
where
    I: IntoIterator<Item = Option<T>>,
{
    values.into_iter().flatten()
}
