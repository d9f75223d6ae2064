/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when manipulating a character or its inventory.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No inventory slot exists at the given index.
    #[error("no item at inventory slot {0}")]
    NoSuchItem(usize),

    /// A character or inventory violates a data-model invariant.
    #[error("validation error: {0}")]
    Validation(String),
}
