//! Shared domain enumerations for the post-authoring form.

use serde::{Deserialize, Serialize};

/// Publication status offered by the form's status selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    Draft,
    Published,
}

impl PostStatus {
    /// Option list presented by the form, in display order.
    pub const OFFERED: &'static [PostStatus] = &[PostStatus::Draft, PostStatus::Published];

    pub fn as_str(self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
        }
    }
}

impl TryFrom<&str> for PostStatus {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "draft" => Ok(PostStatus::Draft),
            "published" => Ok(PostStatus::Published),
            _ => Err(()),
        }
    }
}

/// Fields of the post form, addressable by validation and touch tracking.
///
/// `Ord` keeps violation maps in a stable field order for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Title,
    Slug,
    Content,
    ImageUrl,
    CategoryId,
    Tags,
    Status,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Slug => "slug",
            Field::Content => "content",
            Field::ImageUrl => "image_url",
            Field::CategoryId => "category_id",
            Field::Tags => "tags",
            Field::Status => "status",
        }
    }

    /// Human-readable label used in violation messages.
    pub fn label(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Slug => "Slug",
            Field::Content => "Content",
            Field::ImageUrl => "Image URL",
            Field::CategoryId => "Category",
            Field::Tags => "Tags",
            Field::Status => "Status",
        }
    }
}
