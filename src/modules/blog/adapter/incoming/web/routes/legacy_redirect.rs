use actix_web::http::header;
use actix_web::{get, web, HttpResponse, Responder};

/// Canonical path for a post. The legacy redirect is a pure function of the
/// captured segment; existence is checked only by the canonical handler.
pub fn canonical_post_path(slug: &str) -> String {
    format!("/posts/{slug}")
}

/// Legacy URL shape: `/{slug}` instead of `/posts/{slug}`.
///
/// Always a temporary redirect, never permanent, so clients re-validate on
/// every request and stale slugs stop redirecting once they become invalid.
/// Registered after every other route so it cannot shadow them.
#[get("/{slug}")]
pub async fn legacy_post_redirect_handler(path: web::Path<String>) -> impl Responder {
    let slug = path.into_inner();

    HttpResponse::TemporaryRedirect()
        .insert_header((header::LOCATION, canonical_post_path(&slug)))
        .finish()
}
