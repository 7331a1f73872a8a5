#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the tripwire crates: `#[tripwire_error]` for
//! error enums and `#[derive(Truthy)]` for always-truthy user types.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! tripwire-derive = { path = "../../infra/derive" }
//! thiserror = "2"
//! ```

mod error;
mod truthy;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Turns an enum into a `thiserror` error with context support.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]`, unless already derived.
/// * `<Name>Ext<T>` trait with `.context(..)` for `Result<T, Name>` and for
///   `Result<T, Source>` of every variant holding a source error.
/// * `From<Source>` for variants holding a source error (a field named
///   `source` or marked `#[source]`).
/// * `From<&'static str>` and `From<String>` when an `Internal { message, .. }`
///   variant exists.
/// * A private `format_context` helper for `#[error(..)]` strings, rendering
///   `" (context)"` or nothing.
///
/// # Requirements
///
/// Every variant has named fields and a `context: Option<Cow<'static, str>>`
/// field. `#[cfg(..)]` attributes on variants are carried over to every
/// generated item that mentions the variant. Use one such enum per module,
/// since each expansion defines `format_context`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[tripwire_derive::tripwire_error]
/// pub enum LoadError {
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> Result<String, LoadError> {
///     std::fs::read_to_string(path).context("reading settings")
/// }
/// ```
#[proc_macro_attribute]
pub fn tripwire_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).unwrap_or_else(syn::Error::into_compile_error).into()
}

/// Marks a type as always truthy, the way objects and arrays are.
///
/// Implements `tripwire::Truthy` (always `true`) and `tripwire::Narrow` for
/// the type and for shared references to it, so values of the type can go
/// through `invariant` and `warning`, including inside an `Option`.
///
/// ```rust,ignore
/// #[derive(Debug, tripwire::Truthy)]
/// struct User {
///     id: u64,
/// }
///
/// let user = tripwire::invariant(Some(User { id: 0 }), None, mode)?;
/// ```
#[proc_macro_derive(Truthy)]
pub fn derive_truthy(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    truthy::expand(&input).into()
}
