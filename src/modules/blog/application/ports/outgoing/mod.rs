pub mod post_query;
