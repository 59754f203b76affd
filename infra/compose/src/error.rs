use std::borrow::Cow;

/// Errors from driving `docker compose`.
#[fweb_derive::fweb_error]
pub enum ComposeError {
    /// An explicit compose file was configured but does not exist.
    #[error("Compose file not found{}: {message}", format_context(.context))]
    FileMissing { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The docker binary could not be started.
    #[error("Failed to start docker{}: {source}", format_context(.context))]
    Spawn { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// The command ran and exited unsuccessfully.
    #[error("Command failed{}: {message}", format_context(.context))]
    CommandFailed { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
