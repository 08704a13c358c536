//! Error types for the core data model.

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when constructing core values.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The character name was too short after trimming.
    #[error("character name must be at least 2 characters")]
    NameTooShort,

    /// The class label does not match any known class.
    #[error("unknown character class: \"{0}\"")]
    UnknownClass(String),
}
