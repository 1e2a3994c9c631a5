use actix_web::http::header::ContentType;
use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::modules::blog::adapter::incoming::web::pages;
use crate::modules::blog::application::ports::incoming::use_cases::ListPublishedPostsError;
use crate::AppState;

#[get("/")]
pub async fn home_page_handler(data: web::Data<AppState>) -> impl Responder {
    match data.list_published_posts.execute().await {
        Ok(posts) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(pages::render_home(&posts)),

        Err(ListPublishedPostsError::QueryFailed(msg)) => {
            error!("Failed to list published posts: {}", msg);
            HttpResponse::InternalServerError()
                .content_type(ContentType::html())
                .body(pages::render_internal_error())
        }
    }
}
