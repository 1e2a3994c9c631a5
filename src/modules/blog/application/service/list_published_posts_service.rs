use async_trait::async_trait;

use crate::modules::blog::application::ports::incoming::use_cases::{
    ListPublishedPostsError, ListPublishedPostsUseCase,
};
use crate::modules::blog::application::ports::outgoing::post_query::{PostQuery, PostSummary};

// ============================================================================
// Service Implementation
// ============================================================================

pub struct ListPublishedPostsService<Q>
where
    Q: PostQuery,
{
    query: Q,
}

impl<Q> ListPublishedPostsService<Q>
where
    Q: PostQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListPublishedPostsUseCase for ListPublishedPostsService<Q>
where
    Q: PostQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<PostSummary>, ListPublishedPostsError> {
        // Filter, order, and cap all live in the query itself; the service
        // passes the rows through without re-sorting.
        self.query
            .list_published()
            .await
            .map_err(ListPublishedPostsError::from)
    }
}
