use async_trait::async_trait;

use crate::modules::blog::application::ports::incoming::use_cases::{
    GetPostBySlugError, GetPostBySlugUseCase,
};
use crate::modules::blog::application::ports::outgoing::post_query::{
    PostDetailView, PostQuery, PostQueryError,
};

pub struct GetPostBySlugService<Q>
where
    Q: PostQuery,
{
    query: Q,
}

impl<Q> GetPostBySlugService<Q>
where
    Q: PostQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPostBySlugUseCase for GetPostBySlugService<Q>
where
    Q: PostQuery + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<PostDetailView, GetPostBySlugError> {
        // A blank slug can never match a record; fail closed before the
        // store is touched.
        if slug.trim().is_empty() {
            return Err(GetPostBySlugError::NotFound);
        }

        let post = self.query.get_by_slug(slug).await.map_err(|e| match e {
            PostQueryError::NotFound => GetPostBySlugError::NotFound,
            PostQueryError::DatabaseError(msg) => GetPostBySlugError::RepositoryError(msg),
        })?;

        // Unpublished posts must not leak their existence: same outcome as a
        // missing slug.
        if !post.published {
            return Err(GetPostBySlugError::NotFound);
        }

        Ok(post)
    }
}
