/// Convenience alias for results produced by this crate.
pub type GridResult<T> = Result<T, GridError>;

/// Errors surfaced by grid construction, scene reconciliation, and playback.
///
/// Both variants are unrecoverable at this layer: the contract is to fail
/// loudly and deterministically rather than silently produce a malformed
/// grid. There is nothing transient to retry.
#[derive(thiserror::Error, Debug)]
pub enum GridError {
    /// Canvas or sequence dimensions cannot produce positively sized cells.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// A collaborator was addressed outside its contract (unknown element
    /// key, conflicting root translation, empty transition target set).
    #[error("precondition violation: {0}")]
    Precondition(String),

    /// Any other error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GridError {
    /// Build an [`GridError::InvalidDimension`] from a message.
    pub fn invalid_dimension(msg: impl Into<String>) -> Self {
        Self::InvalidDimension(msg.into())
    }

    /// Build a [`GridError::Precondition`] from a message.
    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::Precondition(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
