use async_trait::async_trait;

use crate::modules::blog::application::ports::outgoing::post_query::PostDetailView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPostBySlugError {
    /// Missing slug, missing record, and unpublished record all collapse
    /// into this one variant. Callers must not be able to tell them apart.
    #[error("Post not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetPostBySlugUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<PostDetailView, GetPostBySlugError>;
}
