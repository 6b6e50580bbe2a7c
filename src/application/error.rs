use thiserror::Error;

use crate::{domain::error::DomainError, infra::error::InfraError};

/// Application-level failures surfaced to the user as transient notices.
///
/// Everything here is recoverable: the form stays editable and the worst
/// case is input the user has to correct before submitting again.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error("upload failed: {reason}")]
    UploadFailed { reason: String },
    #[error("submission failed: {reason}")]
    SubmissionFailed { reason: String },
}

impl AppError {
    pub fn upload_failed(reason: impl Into<String>) -> Self {
        Self::UploadFailed {
            reason: reason.into(),
        }
    }

    pub fn submission_failed(reason: impl Into<String>) -> Self {
        Self::SubmissionFailed {
            reason: reason.into(),
        }
    }
}
