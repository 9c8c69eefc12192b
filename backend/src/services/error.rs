//! Error taxonomy of the materia services.

use crate::db::repository::RepositoryError;

/// Failure of a materia operation, as seen by callers of the service layer.
#[derive(Debug, thiserror::Error)]
pub enum MateriaError {
    /// User-correctable input problem; the message is shown to the client.
    #[error("{0}")]
    Validation(String),

    /// The requested id does not resolve to a materia.
    #[error("{0}")]
    NotFound(String),

    /// Opaque failure reported with a generic message (delete path).
    #[error("{0}")]
    Unexpected(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type MateriaResult<T> = Result<T, MateriaError>;

impl MateriaError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
