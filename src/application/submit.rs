//! Submission pipeline: persist a validated record, then surface the result.
//!
//! The pipeline performs exactly one persistence call per submit. On success
//! it notifies, refreshes the current view, and navigates to the listing, in
//! that order, each step independent and non-cancelable. On failure it
//! surfaces the collaborator's reason verbatim and leaves navigation alone.
//! It does not retry and does not deduplicate; re-entrancy protection is the
//! controller's `Submitting` lock.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::error::AppError;
use crate::application::gateways::{Navigator, Notice, NoticeSink, PostsGateway};
use crate::domain::posts::PostRecord;

const SUCCESS_MESSAGE: &str = "Post created successfully";

pub struct SubmissionPipeline {
    posts: Arc<dyn PostsGateway>,
    navigator: Arc<dyn Navigator>,
    notices: Arc<dyn NoticeSink>,
    listing_path: String,
}

impl SubmissionPipeline {
    pub fn new(
        posts: Arc<dyn PostsGateway>,
        navigator: Arc<dyn Navigator>,
        notices: Arc<dyn NoticeSink>,
        listing_path: impl Into<String>,
    ) -> Self {
        Self {
            posts,
            navigator,
            notices,
            listing_path: listing_path.into(),
        }
    }

    /// Hand the record to the persistence collaborator and settle the
    /// user-visible consequences.
    pub async fn submit(&self, record: PostRecord) -> Result<(), AppError> {
        if let Ok(snapshot) = serde_json::to_string(&record) {
            debug!(%snapshot, "submitting post record");
        }

        match self.posts.create_or_update_post(&record).await {
            Ok(()) => {
                info!(slug = %record.slug, "post persisted");
                self.notices.push(Notice::success(SUCCESS_MESSAGE));
                self.navigator.refresh_current_view();
                self.navigator.go_to(&self.listing_path);
                Ok(())
            }
            Err(err) => {
                let reason = err.to_string();
                warn!(slug = %record.slug, %reason, "post submission failed");
                self.notices.push(Notice::error(reason.clone()));
                Err(AppError::submission_failed(reason))
            }
        }
    }
}
