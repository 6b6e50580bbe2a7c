//! Post records as edited by the admin form.
//!
//! [`PostDraft`] is the mutable working copy while the form is open;
//! [`PostRecord`] is the immutable snapshot handed to the submission
//! pipeline once the schema passes. A record can therefore only exist in
//! submittable shape.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::schema::{self, Validity};
use crate::domain::types::PostStatus;

/// A tag as offered or created in the tag selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagOption {
    pub label: String,
    pub value: String,
}

impl TagOption {
    /// Build an option from user-typed text; the value is the lower-cased
    /// form of the label. Duplicate values are not filtered here.
    pub fn create(label: impl Into<String>) -> Self {
        let label = label.into();
        let value = label.to_lowercase();
        Self { label, value }
    }
}

/// A category offered by the surrounding application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
}

/// Mutable working copy of a post while the form is mounted.
///
/// An absent `id` means a new post; a present one means an existing post is
/// being edited and stays immutable for the lifetime of the form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostDraft {
    pub id: Option<Uuid>,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub image_url: String,
    pub category_id: Option<Uuid>,
    pub tags: Vec<TagOption>,
    pub status: Option<PostStatus>,
}

/// Immutable, validated snapshot of a draft.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostRecord {
    pub id: Option<Uuid>,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub image_url: String,
    pub category_id: Uuid,
    pub tags: Vec<TagOption>,
    pub status: PostStatus,
}

impl PostRecord {
    /// Snapshot a draft that passes the schema.
    ///
    /// Fails with a validation error while any required field is missing,
    /// so callers cannot hand an unsubmittable record to the pipeline.
    pub fn from_draft(draft: &PostDraft) -> Result<Self, DomainError> {
        if let Validity::Invalid(violations) = schema::validate(draft) {
            let fields = violations
                .keys()
                .map(|field| field.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(DomainError::validation(format!(
                "draft is not submittable, missing: {fields}"
            )));
        }

        let category_id = draft
            .category_id
            .ok_or_else(|| DomainError::invariant("valid draft without a category"))?;
        let status = draft
            .status
            .ok_or_else(|| DomainError::invariant("valid draft without a status"))?;

        Ok(Self {
            id: draft.id,
            title: draft.title.clone(),
            slug: draft.slug.clone(),
            content: draft.content.clone(),
            image_url: draft.image_url.clone(),
            category_id,
            tags: draft.tags.clone(),
            status,
        })
    }
}
