use thiserror::Error;
use uuid::Uuid;

use crate::domain::posts::TagOption;
use crate::domain::schema::FieldViolations;
use crate::domain::types::{Field, PostStatus};

/// States of the post form, from first render to a finished submission.
#[derive(Debug, Clone, PartialEq)]
pub enum FormState {
    /// Mounted, nothing touched yet.
    Clean,
    /// At least one field touched, validity not yet resolved.
    Editing,
    /// All required fields pass the schema; submit is offered.
    Valid,
    /// At least one required field fails the schema.
    Invalid(FieldViolations),
    /// A validated snapshot is with the pipeline; edits and further submits
    /// are locked.
    Submitting,
    /// The pipeline reported a failure; fields keep their values for retry.
    SubmitFailed { reason: String },
    /// Terminal for this form instance; navigation away is expected.
    SubmitSucceeded,
}

/// A single field edit event.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Title(String),
    Slug(String),
    Content(String),
    ImageUrl(String),
    Category(Uuid),
    Status(PostStatus),
    Tags(Vec<TagOption>),
}

impl FieldEdit {
    pub fn field(&self) -> Field {
        match self {
            FieldEdit::Title(_) => Field::Title,
            FieldEdit::Slug(_) => Field::Slug,
            FieldEdit::Content(_) => Field::Content,
            FieldEdit::ImageUrl(_) => Field::ImageUrl,
            FieldEdit::Category(_) => Field::CategoryId,
            FieldEdit::Status(_) => Field::Status,
            FieldEdit::Tags(_) => Field::Tags,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditorError {
    #[error("form does not accept edits in its current state")]
    Locked,
    #[error("category is not among the offered options")]
    UnknownCategory,
}

/// Result of driving a submit through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    Rejected { reason: String },
    /// Submit was requested outside the `Valid` state and ignored.
    Ignored,
}
