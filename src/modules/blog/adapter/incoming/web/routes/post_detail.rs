use actix_web::http::header::ContentType;
use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::modules::blog::adapter::incoming::web::pages;
use crate::modules::blog::application::ports::incoming::use_cases::GetPostBySlugError;
use crate::AppState;

#[get("/posts/{slug}")]
pub async fn post_detail_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.get_post_by_slug.execute(&slug).await {
        Ok(post) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(pages::render_post(&post)),

        // Missing and unpublished are the same variant by design; the page
        // cannot distinguish them either.
        Err(GetPostBySlugError::NotFound) => HttpResponse::NotFound()
            .content_type(ContentType::html())
            .body(pages::render_not_found()),

        Err(GetPostBySlugError::RepositoryError(msg)) => {
            error!("Repository error fetching post slug={}: {}", slug, msg);
            HttpResponse::InternalServerError()
                .content_type(ContentType::html())
                .body(pages::render_internal_error())
        }
    }
}
