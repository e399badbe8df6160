use thiserror::Error;

use crate::domain::taxonomy::TaxonomyError;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Collaborator unavailable")]
    CollaboratorUnavailable,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Taxonomy error: {0}")]
    Taxonomy(#[from] TaxonomyError),

    #[error("Internal server error")]
    InternalServerError,
}
