use thiserror::Error;

/// Result type for writer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the writer.
///
/// The first two variants are usage errors: the rejected call leaves the
/// writer's depth and scope stack untouched, so the writer stays usable.
#[derive(Debug, Error)]
pub enum Error {
    /// An operation that needs an open scope was called with an empty stack.
    #[error("no scope is currently open")]
    NoOpenScope,

    /// The innermost open scope is not the kind the operation requires.
    #[error("the innermost scope is a {found}, not a {expected}")]
    ScopeKindMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// The sink rejected a write.
    #[error("failed to write to the output sink")]
    Io(#[from] std::io::Error),
}
