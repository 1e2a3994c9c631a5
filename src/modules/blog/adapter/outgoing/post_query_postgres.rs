// src/modules/blog/adapter/outgoing/post_query_postgres.rs

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::blog::adapter::outgoing::sea_orm_entity::{
    authors, post_topics, posts, topics,
};
use crate::modules::blog::application::ports::outgoing::post_query::{
    PostAuthor, PostDetailView, PostQuery, PostQueryError, PostSummary, PostTopicItem,
};

/// Listing cap: the home page shows at most this many posts.
const LISTING_LIMIT: u64 = 20;

// ============================================================================
// Adapter Implementation
// ============================================================================

#[derive(Clone)]
pub struct PostQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn topic_items(&self, post_id: Uuid) -> Result<Vec<PostTopicItem>, PostQueryError> {
        let topic_ids = post_topics::Entity::find()
            .filter(post_topics::Column::PostId.eq(post_id))
            .select_only()
            .column(post_topics::Column::TopicId)
            .into_tuple::<Uuid>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        if topic_ids.is_empty() {
            return Ok(vec![]);
        }

        let items = topics::Entity::find()
            .filter(topics::Column::Id.is_in(topic_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|topic| PostTopicItem {
                topic_id: topic.id,
                topic_name: topic.name,
            })
            .collect();

        Ok(items)
    }
}

#[async_trait]
impl PostQuery for PostQueryPostgres {
    async fn list_published(&self) -> Result<Vec<PostSummary>, PostQueryError> {
        let rows = posts::Entity::find()
            .filter(posts::Column::Published.eq(true))
            .order_by_desc(posts::Column::CreatedAt)
            .limit(LISTING_LIMIT)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_summary).collect())
    }

    async fn get_by_slug(&self, slug: &str) -> Result<PostDetailView, PostQueryError> {
        // Exact match on the unique key; no normalization. Fixed query order
        // (post, author, associations) so mocked connections stay scriptable.
        let post = posts::Entity::find()
            .filter(posts::Column::Slug.eq(slug))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(PostQueryError::NotFound)?;

        let author = match post.author_id {
            Some(author_id) => authors::Entity::find_by_id(author_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .map(|a| PostAuthor {
                    name: a.name,
                    email: a.email,
                }),
            None => None,
        };

        let topics = self.topic_items(post.id).await?;

        Ok(PostDetailView {
            id: post.id,
            title: post.title,
            content: post.content,
            created_at: to_iso_utc(post.created_at),
            published: post.published,
            author,
            topics,
        })
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_summary(model: posts::Model) -> PostSummary {
    PostSummary {
        id: model.id,
        title: model.title,
        slug: model.slug,
        excerpt: model.excerpt,
        created_at: to_iso_utc(model.created_at),
    }
}

/// ISO 8601 absolute instant, UTC, millisecond precision, `Z` suffix.
/// Matches the wire shape the original front-end produced.
fn to_iso_utc(timestamp: sea_orm::prelude::DateTimeWithTimeZone) -> String {
    timestamp
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn map_db_err(e: DbErr) -> PostQueryError {
    PostQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use sea_orm::sea_query::Value;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::collections::BTreeMap;

    fn created_at_fixture() -> sea_orm::prelude::DateTimeWithTimeZone {
        // +02:00 on purpose: serialization must convert to UTC.
        DateTime::parse_from_rfc3339("2026-03-01T11:30:00.250+02:00").unwrap()
    }

    fn mock_post_model(
        id: Uuid,
        slug: &str,
        published: bool,
        author_id: Option<Uuid>,
    ) -> posts::Model {
        posts::Model {
            id,
            title: "On Dialogue".to_string(),
            slug: slug.to_string(),
            excerpt: Some("An essay on dialogue".to_string()),
            content: "Line one\nLine two".to_string(),
            published,
            author_id,
            created_at: created_at_fixture(),
        }
    }

    fn topic_id_row(topic_id: Uuid) -> BTreeMap<String, Value> {
        BTreeMap::from([("topic_id".to_string(), Value::Uuid(Some(Box::new(topic_id))))])
    }

    // ========================================================================
    // list_published Tests
    // ========================================================================

    #[tokio::test]
    async fn test_list_published_maps_rows_in_order() {
        let first = mock_post_model(Uuid::new_v4(), "newest", true, None);
        let second = mock_post_model(Uuid::new_v4(), "older", true, None);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![first.clone(), second.clone()]])
            .into_connection();

        let query = PostQueryPostgres::new(Arc::new(db));
        let result = query.list_published().await;

        assert!(result.is_ok());
        let summaries = result.unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].slug, "newest");
        assert_eq!(summaries[1].slug, "older");
        assert_eq!(summaries[0].excerpt.as_deref(), Some("An essay on dialogue"));
    }

    #[tokio::test]
    async fn test_list_published_serializes_created_at_as_utc_iso() {
        let post = mock_post_model(Uuid::new_v4(), "a-post", true, None);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post]])
            .into_connection();

        let query = PostQueryPostgres::new(Arc::new(db));
        let summaries = query.list_published().await.unwrap();

        // 11:30 at +02:00 is 09:30 UTC.
        assert_eq!(summaries[0].created_at, "2026-03-01T09:30:00.250Z");
    }

    #[tokio::test]
    async fn test_list_published_empty() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<posts::Model>::new()])
            .into_connection();

        let query = PostQueryPostgres::new(Arc::new(db));
        let result = query.list_published().await;

        assert!(result.is_ok());
        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_published_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection error".to_string())])
            .into_connection();

        let query = PostQueryPostgres::new(Arc::new(db));
        let result = query.list_published().await;

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            PostQueryError::DatabaseError(_)
        ));
    }

    // ========================================================================
    // get_by_slug Tests
    // ========================================================================

    #[tokio::test]
    async fn test_get_by_slug_joins_author_and_topics() {
        let post_id = Uuid::new_v4();
        let author_id = Uuid::new_v4();
        let topic_id = Uuid::new_v4();

        let post = mock_post_model(post_id, "on-dialogue", true, Some(author_id));
        let author = authors::Model {
            id: author_id,
            name: Some("Ada".to_string()),
            email: Some("a@x.com".to_string()),
        };
        let topic = topics::Model {
            id: topic_id,
            name: "Ethics".to_string(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post]]) // 1st: posts
            .append_query_results(vec![vec![author]]) // 2nd: authors
            .append_query_results(vec![vec![topic_id_row(topic_id)]]) // 3rd: topic_id projection
            .append_query_results(vec![vec![topic]]) // 4th: topics
            .into_connection();

        let query = PostQueryPostgres::new(Arc::new(db));
        let result = query.get_by_slug("on-dialogue").await;

        assert!(result.is_ok());
        let view = result.unwrap();
        assert_eq!(view.id, post_id);
        assert_eq!(view.title, "On Dialogue");
        assert_eq!(view.content, "Line one\nLine two");
        assert_eq!(view.created_at, "2026-03-01T09:30:00.250Z");
        assert_eq!(
            view.author,
            Some(PostAuthor {
                name: Some("Ada".to_string()),
                email: Some("a@x.com".to_string()),
            })
        );
        assert_eq!(
            view.topics,
            vec![PostTopicItem {
                topic_id,
                topic_name: "Ethics".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_get_by_slug_without_author_skips_author_query() {
        let post_id = Uuid::new_v4();
        let post = mock_post_model(post_id, "orphan-post", true, None);

        // Only two result sets scripted: posts, then the topic projection.
        // An unexpected author query would fail the mock.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post]])
            .append_query_results(vec![Vec::<post_topics::Model>::new()])
            .into_connection();

        let query = PostQueryPostgres::new(Arc::new(db));
        let result = query.get_by_slug("orphan-post").await;

        assert!(result.is_ok());
        let view = result.unwrap();
        assert!(view.author.is_none());
        assert!(view.topics.is_empty());
    }

    #[tokio::test]
    async fn test_get_by_slug_returns_unpublished_record() {
        // The adapter reports what is stored; hiding unpublished posts is the
        // service's job.
        let post = mock_post_model(Uuid::new_v4(), "draft-post", false, None);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post]])
            .append_query_results(vec![Vec::<post_topics::Model>::new()])
            .into_connection();

        let query = PostQueryPostgres::new(Arc::new(db));
        let result = query.get_by_slug("draft-post").await;

        assert!(result.is_ok());
        assert!(!result.unwrap().published);
    }

    #[tokio::test]
    async fn test_get_by_slug_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<posts::Model>::new()])
            .into_connection();

        let query = PostQueryPostgres::new(Arc::new(db));
        let result = query.get_by_slug("nonexistent").await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), PostQueryError::NotFound));
    }

    #[tokio::test]
    async fn test_get_by_slug_multiple_topics() {
        let post_id = Uuid::new_v4();
        let topic_a = Uuid::new_v4();
        let topic_b = Uuid::new_v4();

        let post = mock_post_model(post_id, "on-dialogue", true, None);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post]])
            .append_query_results(vec![vec![topic_id_row(topic_a), topic_id_row(topic_b)]])
            .append_query_results(vec![vec![
                topics::Model {
                    id: topic_a,
                    name: "Ethics".to_string(),
                },
                topics::Model {
                    id: topic_b,
                    name: "Logic".to_string(),
                },
            ]])
            .into_connection();

        let query = PostQueryPostgres::new(Arc::new(db));
        let view = query.get_by_slug("on-dialogue").await.unwrap();

        assert_eq!(view.topics.len(), 2);
        assert!(view.topics.iter().any(|t| t.topic_name == "Ethics"));
        assert!(view.topics.iter().any(|t| t.topic_name == "Logic"));
    }

    #[tokio::test]
    async fn test_get_by_slug_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection error".to_string())])
            .into_connection();

        let query = PostQueryPostgres::new(Arc::new(db));
        let result = query.get_by_slug("any-slug").await;

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            PostQueryError::DatabaseError(_)
        ));
    }
}
