mod get_post_by_slug_service;
mod list_published_posts_service;

pub use get_post_by_slug_service::GetPostBySlugService;
pub use list_published_posts_service::ListPublishedPostsService;
