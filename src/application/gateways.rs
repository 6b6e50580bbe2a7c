//! Collaborator traits the surrounding application must provide.
//!
//! The form core never reaches outward except through these seams: an
//! identity provider, persistence for post records, upload storage for
//! images, page navigation, and a sink for transient notices. No wire
//! format is implied; these are plain call contracts.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use url::Url;
use uuid::Uuid;

use crate::domain::posts::PostRecord;

/// Failures reported by a collaborator.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The collaborator understood the request and refused it. The message
    /// is shown to the user verbatim.
    #[error("{0}")]
    Rejected(String),
    #[error("collaborator unavailable: {0}")]
    Unavailable(String),
}

impl GatewayError {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }
}

/// Signed-in user as exposed by the identity collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub display_name: String,
}

pub trait IdentityProvider: Send + Sync {
    fn current_user(&self) -> Option<User>;

    fn sign_out(&self, redirect_path: &str);
}

#[async_trait]
pub trait PostsGateway: Send + Sync {
    /// Create the record when `id` is absent, update it otherwise. Slug
    /// uniqueness is enforced behind this call, not by the form core.
    async fn create_or_update_post(&self, record: &PostRecord) -> Result<(), GatewayError>;
}

#[async_trait]
pub trait UploadGateway: Send + Sync {
    /// Store a file payload and return its public URL.
    async fn store(&self, original_name: &str, payload: Bytes) -> Result<Url, GatewayError>;
}

pub trait Navigator: Send + Sync {
    fn go_to(&self, path: &str);

    fn refresh_current_view(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient, user-visible notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

pub trait NoticeSink: Send + Sync {
    fn push(&self, notice: Notice);
}
