//! Shared error types for the services crate.

use thiserror::Error;

use api::ApiError;

/// Errors emitted by `QuestionService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionServiceError {
    #[error("question text cannot be empty")]
    EmptyQuestionText,
    #[error("nothing selected for upload")]
    NoAttachments,
    #[error(transparent)]
    Api(#[from] ApiError),
}
