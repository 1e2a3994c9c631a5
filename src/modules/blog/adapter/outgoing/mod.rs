mod post_query_postgres;
pub mod sea_orm_entity;

pub use post_query_postgres::PostQueryPostgres;
