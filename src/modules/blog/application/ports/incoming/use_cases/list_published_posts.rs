use async_trait::async_trait;

use crate::modules::blog::application::ports::outgoing::post_query::{
    PostQueryError, PostSummary,
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListPublishedPostsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<PostQueryError> for ListPublishedPostsError {
    fn from(err: PostQueryError) -> Self {
        match err {
            PostQueryError::DatabaseError(msg) => ListPublishedPostsError::QueryFailed(msg),

            // For a listing, NotFound is not a real outcome (an empty list is
            // valid), but we still map it rather than panic.
            PostQueryError::NotFound => {
                ListPublishedPostsError::QueryFailed("Not found".to_string())
            }
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ListPublishedPostsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<PostSummary>, ListPublishedPostsError>;
}
