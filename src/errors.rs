//! Error types.

/// Errors surfaced by ACL operations.
///
/// The two variants keep the transport and protocol layers distinguishable:
/// an `Io` error means HAProxy could not be reached (connect failure,
/// timeout, broken socket), while `CommandFailed` means HAProxy accepted the
/// connection but rejected the command. The underlying `io::Error` is never
/// reclassified, so its kind (`NotFound`, `TimedOut`, ...) is preserved for
/// the caller.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error encountered while performing socket IO.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// HAProxy rejected the command; carries the server's diagnostic text.
    #[error("command failed: {0}")]
    CommandFailed(String),
}
