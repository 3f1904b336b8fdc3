//! HTTP handlers and route configuration.

mod body;
mod posts;


use actix_web::{HttpResponse, web};

use crate::middleware::error::{AppError, AppResult};

/// Configure all application routes.
///
/// Anything not matched here, including an unsupported method on a known
/// path, answers 404.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/posts")
            .route(web::get().to(posts::list_posts))
            .route(web::post().to(posts::create_post))
            .default_service(web::to(not_found)),
    )
    .service(
        web::resource("/posts/{id}")
            .route(web::get().to(posts::get_post))
            .route(web::put().to(posts::update_post))
            .route(web::delete().to(posts::delete_post))
            .default_service(web::to(not_found)),
    )
    .default_service(web::to(not_found));
}

/// Catch-all for unmatched routes.
async fn not_found() -> AppResult<HttpResponse> {
    Err(AppError::NotFound)
}
