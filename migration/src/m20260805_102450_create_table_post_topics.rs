use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create post_topics join table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(PostTopics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PostTopics::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(PostTopics::PostId).uuid().not_null())
                    .col(ColumnDef::new(PostTopics::TopicId).uuid().not_null())
                    .col(
                        ColumnDef::new(PostTopics::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // FK → posts
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_topics_post_id")
                            .from(PostTopics::Table, PostTopics::PostId)
                            .to(Posts::Table, Posts::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    // FK → topics
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_topics_topic_id")
                            .from(PostTopics::Table, PostTopics::TopicId)
                            .to(Topics::Table, Topics::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // One association per post/topic pair
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_post_topics_pair_unique
                ON post_topics (post_id, topic_id);
                "#,
            )
            .await?;

        // Fast lookup: all topics for a post
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_post_topics_post_id
                ON post_topics (post_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop indexes
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_post_topics_pair_unique;
                DROP INDEX IF EXISTS idx_post_topics_post_id;
                "#,
            )
            .await?;

        // Drop table
        manager
            .drop_table(Table::drop().table(PostTopics::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PostTopics {
    Table,
    Id,
    PostId,
    TopicId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Posts {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Topics {
    Table,
    Id,
}
