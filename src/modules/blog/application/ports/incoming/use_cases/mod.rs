mod get_post_by_slug;
mod list_published_posts;

pub use get_post_by_slug::{GetPostBySlugError, GetPostBySlugUseCase};
pub use list_published_posts::{ListPublishedPostsError, ListPublishedPostsUseCase};
