use fweb_compose::ComposeError;
use std::borrow::Cow;

/// Errors of the issuance slice.
///
/// Only the run-level failures abort a deployment: missing inputs, an empty
/// domain list, an empty group set and a proxy configuration that fails its
/// test. Per-group failures are reported through the run report instead.
#[fweb_derive::fweb_error]
pub enum IssuanceError {
    #[error("Required input missing{}: {message}", format_context(.context))]
    MissingInput { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("No valid domains{}: {message}", format_context(.context))]
    NoValidDomains { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("No domain groups{}: {message}", format_context(.context))]
    NoGroups { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("No proxy target{}: {message}", format_context(.context))]
    MissingProxyTarget { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// `nginx -t` rejected the configuration; the proxy was not reloaded.
    #[error("Proxy configuration test failed{}: {message}", format_context(.context))]
    ProxyConfigInvalid { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Compose error{}: {source}", format_context(.context))]
    Compose { source: ComposeError, context: Option<Cow<'static, str>> },

    #[error("HTTP client error{}: {source}", format_context(.context))]
    Http { source: reqwest::Error, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
