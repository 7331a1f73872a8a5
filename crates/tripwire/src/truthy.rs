//! Truthiness model.
//!
//! Falsy values are `false`, numeric zero (including `-0.0`), `NaN`, the
//! empty string and `None`. Everything else is truthy, including empty
//! collections, tuples and `()`.
//!
//! Types of your own are always truthy once they derive [`Truthy`](crate::Truthy)
//! (the derive macro re-exported from `tripwire-derive`).

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::rc::Rc;
use std::sync::Arc;

/// A value that can be coerced to a boolean.
pub trait Truthy {
    fn is_truthy(&self) -> bool;

    fn is_falsy(&self) -> bool {
        !self.is_truthy()
    }
}

/// A truthy check that hands back the value with its falsy shapes removed.
///
/// `Option<T>` narrows to `T`; every other type narrows to itself. `narrow`
/// returns `None` exactly when the value is falsy.
pub trait Narrow: Truthy + Sized {
    type Narrowed;

    fn narrow(self) -> Option<Self::Narrowed>;
}

macro_rules! truthy_when_nonzero {
    ($($ty:ty),* $(,)?) => {$(
        impl Truthy for $ty {
            #[inline]
            fn is_truthy(&self) -> bool {
                *self != 0
            }
        }
    )*};
}

macro_rules! truthy_float {
    ($($ty:ty),* $(,)?) => {$(
        impl Truthy for $ty {
            #[inline]
            #[allow(clippy::float_cmp)]
            fn is_truthy(&self) -> bool {
                !self.is_nan() && *self != 0.0
            }
        }
    )*};
}

macro_rules! narrows_to_self {
    ($($ty:ty),* $(,)?) => {$(
        impl Narrow for $ty {
            type Narrowed = Self;

            #[inline]
            fn narrow(self) -> Option<Self> {
                self.is_truthy().then_some(self)
            }
        }
    )*};
}

macro_rules! narrows_borrowed_to_self {
    ($($ty:ty),* $(,)?) => {$(
        impl Narrow for &$ty {
            type Narrowed = Self;

            #[inline]
            fn narrow(self) -> Option<Self> {
                self.is_truthy().then_some(self)
            }
        }
    )*};
}

// Tuples behave like arrays; `()` is the empty one.
macro_rules! always_truthy_tuple {
    ($(($($name:ident),*)),* $(,)?) => {$(
        impl<$($name),*> Truthy for ($($name,)*) {
            #[inline]
            fn is_truthy(&self) -> bool {
                true
            }
        }

        impl<$($name),*> Narrow for ($($name,)*) {
            type Narrowed = Self;

            #[inline]
            fn narrow(self) -> Option<Self> {
                Some(self)
            }
        }
    )*};
}

truthy_when_nonzero!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
truthy_float!(f32, f64);

narrows_to_self!(
    bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char, String
);

narrows_borrowed_to_self!(
    bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char
);

always_truthy_tuple!((), (A), (A, B), (A, B, C), (A, B, C, D), (A, B, C, D, E), (A, B, C, D, E, F));

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for char {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for Cow<'_, str> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Option<T>
where
    T: Truthy,
{
    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for &mut T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Box<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Rc<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Arc<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

// Collections behave like arrays and objects: always truthy, even when empty.
impl<T> Truthy for [T] {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T, const N: usize> Truthy for [T; N] {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T> Truthy for Vec<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<K, V, S> Truthy for HashMap<K, V, S> {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T, S> Truthy for HashSet<T, S> {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<K, V> Truthy for BTreeMap<K, V> {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T> Truthy for BTreeSet<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T: Truthy> Narrow for Option<T> {
    type Narrowed = T;

    #[inline]
    fn narrow(self) -> Option<T> {
        self.filter(Truthy::is_truthy)
    }
}

impl<'a, T: Truthy> Narrow for &'a Option<T> {
    type Narrowed = &'a T;

    #[inline]
    fn narrow(self) -> Option<&'a T> {
        self.as_ref().filter(|value| value.is_truthy())
    }
}

impl Narrow for &str {
    type Narrowed = Self;

    #[inline]
    fn narrow(self) -> Option<Self> {
        self.is_truthy().then_some(self)
    }
}

impl Narrow for &String {
    type Narrowed = Self;

    #[inline]
    fn narrow(self) -> Option<Self> {
        self.is_truthy().then_some(self)
    }
}

impl Narrow for Cow<'_, str> {
    type Narrowed = Self;

    #[inline]
    fn narrow(self) -> Option<Self> {
        self.is_truthy().then_some(self)
    }
}

impl<T> Narrow for &[T] {
    type Narrowed = Self;

    #[inline]
    fn narrow(self) -> Option<Self> {
        Some(self)
    }
}

impl<T, const N: usize> Narrow for [T; N] {
    type Narrowed = Self;

    #[inline]
    fn narrow(self) -> Option<Self> {
        Some(self)
    }
}

impl<T> Narrow for &Vec<T> {
    type Narrowed = Self;

    #[inline]
    fn narrow(self) -> Option<Self> {
        Some(self)
    }
}

impl<T> Narrow for Vec<T> {
    type Narrowed = Self;

    #[inline]
    fn narrow(self) -> Option<Self> {
        Some(self)
    }
}

impl<T: Truthy + ?Sized> Narrow for Box<T> {
    type Narrowed = Self;

    #[inline]
    fn narrow(self) -> Option<Self> {
        self.is_truthy().then_some(self)
    }
}

impl<T: Truthy + ?Sized> Narrow for Rc<T> {
    type Narrowed = Self;

    #[inline]
    fn narrow(self) -> Option<Self> {
        self.is_truthy().then_some(self)
    }
}

impl<T: Truthy + ?Sized> Narrow for Arc<T> {
    type Narrowed = Self;

    #[inline]
    fn narrow(self) -> Option<Self> {
        self.is_truthy().then_some(self)
    }
}

#[cfg(feature = "json")]
mod json {
    use super::{Narrow, Truthy};
    use serde_json::Value;

    impl Truthy for Value {
        fn is_truthy(&self) -> bool {
            match self {
                Self::Null => false,
                Self::Bool(b) => *b,
                Self::Number(n) => n.as_f64().is_some_and(|f| f.is_truthy()),
                Self::String(s) => !s.is_empty(),
                Self::Array(_) | Self::Object(_) => true,
            }
        }
    }

    impl Narrow for Value {
        type Narrowed = Self;

        fn narrow(self) -> Option<Self> {
            self.is_truthy().then_some(self)
        }
    }
}
