//! The post form state machine.
//!
//! [`PostFormController`] owns the working draft, the offered category
//! list, the touched-field set, and the current [`FormState`]. Every
//! accepted edit re-runs the schema over the whole draft; the only
//! synthesized edit is the slug auto-fill when the title loses focus.

use std::collections::BTreeSet;

use tracing::debug;

use crate::application::editor::types::{EditorError, FieldEdit, FormState, SubmitOutcome};
use crate::application::error::AppError;
use crate::application::submit::SubmissionPipeline;
use crate::domain::posts::{Category, PostDraft, PostRecord, TagOption};
use crate::domain::schema::{self, FieldViolations, Validity};
use crate::domain::slug::generate_slug;
use crate::domain::types::{Field, PostStatus};

pub struct PostFormController {
    draft: PostDraft,
    categories: Vec<Category>,
    touched: BTreeSet<Field>,
    state: FormState,
}

impl PostFormController {
    /// Mount the form for a new post.
    pub fn new(categories: Vec<Category>) -> Self {
        Self::mount(PostDraft::default(), categories)
    }

    /// Mount the form pre-populated with an existing post.
    pub fn edit(draft: PostDraft, categories: Vec<Category>) -> Self {
        Self::mount(draft, categories)
    }

    fn mount(draft: PostDraft, categories: Vec<Category>) -> Self {
        Self {
            draft,
            categories,
            touched: BTreeSet::new(),
            state: FormState::Clean,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn draft(&self) -> &PostDraft {
        &self.draft
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Options for the status selector, in display order.
    pub fn offered_statuses(&self) -> &'static [PostStatus] {
        PostStatus::OFFERED
    }

    /// Whether the submit action is currently offered. A failed submission
    /// leaves the draft untouched and still valid, so the action re-enables
    /// without requiring an intervening edit.
    pub fn can_submit(&self) -> bool {
        matches!(
            self.state,
            FormState::Valid | FormState::SubmitFailed { .. }
        )
    }

    /// Violations for fields the user has touched. The form validates on
    /// blur, so a pristine field is never flagged even when empty.
    pub fn visible_violations(&self) -> FieldViolations {
        match &self.state {
            FormState::Invalid(violations) => violations
                .iter()
                .filter(|(field, _)| self.touched.contains(field))
                .map(|(field, message)| (*field, message.clone()))
                .collect(),
            _ => FieldViolations::new(),
        }
    }

    /// Record that a field received focus. Validity stays unresolved until
    /// the next edit.
    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
        if self.state == FormState::Clean {
            self.state = FormState::Editing;
        }
    }

    /// Apply a field edit and re-validate the whole draft.
    ///
    /// Edits are rejected while a submission is in flight or after one has
    /// succeeded. A category edit outside the offered list is rejected too.
    pub fn apply(&mut self, edit: FieldEdit) -> Result<(), EditorError> {
        self.ensure_editable()?;

        let field = edit.field();
        match edit {
            FieldEdit::Title(value) => self.draft.title = value,
            FieldEdit::Slug(value) => self.draft.slug = value,
            FieldEdit::Content(value) => self.draft.content = value,
            FieldEdit::ImageUrl(value) => self.draft.image_url = value,
            FieldEdit::Category(id) => {
                if !self.categories.iter().any(|category| category.id == id) {
                    return Err(EditorError::UnknownCategory);
                }
                self.draft.category_id = Some(id);
            }
            FieldEdit::Status(status) => self.draft.status = Some(status),
            FieldEdit::Tags(tags) => self.draft.tags = tags,
        }

        self.touched.insert(field);
        self.revalidate();
        Ok(())
    }

    /// The title lost focus: fill the slug from the title if, and only if,
    /// the slug is currently empty. A slug the user supplied or edited is
    /// never overwritten.
    pub fn title_blurred(&mut self) -> Result<(), EditorError> {
        self.ensure_editable()?;
        self.touch(Field::Title);

        if !self.draft.slug.is_empty() {
            return Ok(());
        }

        let slug = generate_slug(&self.draft.title);
        debug!(%slug, title = %self.draft.title, "slug derived from title");
        self.apply(FieldEdit::Slug(slug))
    }

    /// Create a tag from user-typed text and append it to the selection.
    /// Values are not deduplicated; that is left to the persistence side.
    pub fn create_tag(&mut self, label: &str) -> Result<(), EditorError> {
        self.ensure_editable()?;
        self.draft.tags.push(TagOption::create(label));
        self.touched.insert(Field::Tags);
        self.revalidate();
        Ok(())
    }

    /// Capture a validated snapshot and lock the form for submission.
    ///
    /// Accepted from `Valid` and from `SubmitFailed` (retry without an
    /// edit). In particular a second call while `Submitting` is ignored,
    /// which is what deduplicates an accidental double submit.
    pub fn begin_submit(&mut self) -> Option<PostRecord> {
        if !self.can_submit() {
            debug!(state = ?self.state, "submit ignored");
            return None;
        }

        match PostRecord::from_draft(&self.draft) {
            Ok(record) => {
                self.state = FormState::Submitting;
                Some(record)
            }
            Err(err) => {
                // Valid state and a failing snapshot cannot coexist; resync.
                debug!(error = %err, "revalidating after snapshot mismatch");
                self.revalidate();
                None
            }
        }
    }

    /// Record the pipeline outcome for a snapshot from [`begin_submit`].
    /// Field values are retained on failure so the user can retry.
    pub fn complete_submit(&mut self, outcome: Result<(), String>) {
        if self.state != FormState::Submitting {
            return;
        }
        self.state = match outcome {
            Ok(()) => FormState::SubmitSucceeded,
            Err(reason) => FormState::SubmitFailed { reason },
        };
    }

    /// Drive a full submit through the pipeline: capture, hand off, settle.
    pub async fn submit(&mut self, pipeline: &SubmissionPipeline) -> SubmitOutcome {
        let Some(record) = self.begin_submit() else {
            return SubmitOutcome::Ignored;
        };

        match pipeline.submit(record).await {
            Ok(()) => {
                self.complete_submit(Ok(()));
                SubmitOutcome::Submitted
            }
            Err(err) => {
                let reason = match err {
                    AppError::SubmissionFailed { reason } => reason,
                    other => other.to_string(),
                };
                self.complete_submit(Err(reason.clone()));
                SubmitOutcome::Rejected { reason }
            }
        }
    }

    fn ensure_editable(&self) -> Result<(), EditorError> {
        match self.state {
            FormState::Submitting | FormState::SubmitSucceeded => Err(EditorError::Locked),
            _ => Ok(()),
        }
    }

    fn revalidate(&mut self) {
        self.state = match schema::validate(&self.draft) {
            Validity::Valid => FormState::Valid,
            Validity::Invalid(violations) => FormState::Invalid(violations),
        };
    }
}
