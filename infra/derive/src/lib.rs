#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Derive
//!
//! Procedural macros used across the front-web workspace.
//!
//! The only macro today is [`fweb_error`], which turns a plain enum into a
//! crate-level error type with context support. Consumers add it as a normal
//! dependency together with `thiserror`:
//!
//! ```toml
//! [dependencies]
//! fweb-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for crate-level error enums.
///
/// # Generated items
///
/// * `#[derive(Debug, thiserror::Error)]` unless the enum already derives them.
/// * `<Name>Ext<T>` trait with `.context(..)` for `Result<T, Name>` and for
///   `Result<T, Source>` of every variant that wraps a source error.
/// * `From<Source>` for every variant with a `source` (or `#[source]`/`#[from]`) field.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }`
///   variant exists.
/// * A module-private `format_context` helper used by the `#[error(..)]` strings.
///
/// # Requirements
///
/// Every variant must use named fields. Variants wrapping a source must also carry
/// `context: Option<Cow<'static, str>>`. Because `format_context` is emitted next to
/// the enum, keep one `#[fweb_error]` enum per module.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[fweb_derive::fweb_error]
/// pub enum StoreError {
///     #[error("I/O failure{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal store error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &std::path::Path) -> Result<String, StoreError> {
///     Ok(std::fs::read_to_string(path).context("Reading certificate chain")?)
/// }
/// ```
#[proc_macro_attribute]
pub fn fweb_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
