pub mod modules;
pub use modules::blog;
pub mod health;

use crate::blog::adapter::outgoing::PostQueryPostgres;
use crate::blog::application::ports::incoming::use_cases::{
    GetPostBySlugUseCase, ListPublishedPostsUseCase,
};
use crate::blog::application::service::{GetPostBySlugService, ListPublishedPostsService};

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Clone)]
pub struct AppState {
    pub list_published_posts: Arc<dyn ListPublishedPostsUseCase + Send + Sync>,
    pub get_post_by_slug: Arc<dyn GetPostBySlugUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Read-side query adapter and the two use cases built on it
    let post_query = PostQueryPostgres::new(Arc::clone(&db_arc));
    let list_published_posts = ListPublishedPostsService::new(post_query.clone());
    let get_post_by_slug = GetPostBySlugService::new(post_query);

    let state = AppState {
        list_published_posts: Arc::new(list_published_posts),
        get_post_by_slug: Arc::new(get_post_by_slug),
    };

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Blog pages
    cfg.service(crate::blog::adapter::incoming::web::routes::home_page_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::post_detail_handler);
    // Legacy single-segment URLs. Must stay last: `/{slug}` would otherwise
    // shadow every other top-level route.
    cfg.service(crate::blog::adapter::incoming::web::routes::legacy_post_redirect_handler);
}
