use thiserror::Error;

/// Errors reported by stores, cursors and snapshots.
///
/// Every error is deterministic for its inputs; nothing is retried internally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The caller passed an argument the operation cannot accept.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The store or cursor has been closed.
    #[error("{0} has been closed")]
    Closed(&'static str),

    /// A positional cursor operation was attempted while the cursor is not
    /// positioned on an entry.
    #[error("cursor is not positioned on an entry")]
    NotValid,

    /// A snapshot was passed to a store that did not create it.
    #[error("snapshot is not owned by this store")]
    OwnershipViolation,

    /// The backend does not implement the requested feature.
    #[error("unsupported: {0}")]
    Unsupported(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn is_closed(&self) -> bool {
        matches!(self, Error::Closed(_))
    }
}
