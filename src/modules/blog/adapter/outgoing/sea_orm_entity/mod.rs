pub mod authors;
pub mod post_topics;
pub mod posts;
pub mod topics;
