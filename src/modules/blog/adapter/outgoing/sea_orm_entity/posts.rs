use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::{authors, post_topics, topics};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    // Unique key; uniqueness is enforced by the schema, not here.
    #[sea_orm(column_type = "Text", unique)]
    pub slug: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub excerpt: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub content: String,

    pub published: bool,

    #[sea_orm(column_name = "author_id", column_type = "Uuid", nullable)]
    pub author_id: Option<Uuid>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::authors::Entity",
        from = "Column::AuthorId",
        to = "super::authors::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Authors,

    #[sea_orm(has_many = "super::post_topics::Entity")]
    PostTopics,
}

impl Related<authors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Authors.def()
    }
}

// Many-to-many: posts <-> topics via post_topics
impl Related<topics::Entity> for Entity {
    fn to() -> RelationDef {
        post_topics::Relation::Topics.def()
    }

    fn via() -> Option<RelationDef> {
        Some(post_topics::Relation::Posts.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
