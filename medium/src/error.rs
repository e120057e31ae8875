use thiserror::Error;

/// Error types for medium calculator operations
///
/// The formatter and projector are total and never produce these; they come
/// from parsing caller input and from checklist requests naming ids the
/// recipe does not contain.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MediumError {
    /// Unit mode text was not one of `auto`, `g`, `mg`, `kg`
    #[error("Unknown unit mode '{input}': expected one of auto, g, mg, kg")]
    UnknownUnitMode { input: String },
    /// Ingredient id is not part of the recipe
    #[error("Unknown ingredient '{id}'")]
    UnknownIngredient { id: String },
    /// Generic error with context
    #[error("Medium calculator error: {message}")]
    Generic { message: String },
}

/// Result type for medium calculator operations
pub type MediumResult<T> = Result<T, MediumError>;

/// Convert anyhow::Error to MediumError
impl From<anyhow::Error> for MediumError {
    fn from(err: anyhow::Error) -> Self {
        MediumError::Generic {
            message: err.to_string(),
        }
    }
}
