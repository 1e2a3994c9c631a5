// src/modules/blog/application/ports/outgoing/post_query.rs

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

/// Fixed label used when a post has no author, or the author
/// carries neither a name nor an email.
pub const UNKNOWN_AUTHOR_LABEL: &str = "Unknown author";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostSummary {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    /// ISO 8601 UTC instant. Serialized at the query boundary so no live
    /// timestamp object leaves the read side.
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostAuthor {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostTopicItem {
    pub topic_id: Uuid,
    pub topic_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostDetailView {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    /// ISO 8601 UTC instant, same shape as [`PostSummary::created_at`].
    pub created_at: String,
    pub published: bool,
    pub author: Option<PostAuthor>,
    pub topics: Vec<PostTopicItem>,
}

impl PostDetailView {
    /// Display label for the byline: author name, else email, else the
    /// fixed unknown-author label.
    pub fn author_label(&self) -> &str {
        match &self.author {
            Some(author) => author
                .name
                .as_deref()
                .or(author.email.as_deref())
                .unwrap_or(UNKNOWN_AUTHOR_LABEL),
            None => UNKNOWN_AUTHOR_LABEL,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum PostQueryError {
    #[error("Post not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PostQuery: Send + Sync {
    /// Published posts only, newest first, capped at the listing limit.
    /// The filter, order, and cap are the query's responsibility; callers
    /// never re-sort.
    async fn list_published(&self) -> Result<Vec<PostSummary>, PostQueryError>;

    /// Exact-match lookup on the unique slug, joined with the owning author
    /// and all topic associations. Returns the record regardless of its
    /// `published` flag; the visibility gate sits in the application layer.
    async fn get_by_slug(&self, slug: &str) -> Result<PostDetailView, PostQueryError>;
}
