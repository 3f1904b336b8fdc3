//! Blog post handlers.

use actix_web::{HttpResponse, web};
use serde_json::Value;
use uuid::Uuid;

use blog_core::validation::{self, REQUIRED_FIELDS};
use blog_shared::PostResponse;

use super::body::JsonBody;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(PostResponse::from).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    // A malformed id cannot name a stored post.
    let id = parse_id(&path).ok_or(AppError::NotFound)?;

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: JsonBody,
) -> AppResult<HttpResponse> {
    let payload = body.into_inner();
    let new_post = validation::new_post(&payload)?;

    let post = state.posts.insert(new_post).await?;
    tracing::info!(post_id = %post.id, "Created blog post");

    Ok(HttpResponse::Created().json(PostResponse::from(post)))
}

/// PUT /posts/{id}
///
/// Requires all of `title`, `author` and `content`, and a body `id` equal to
/// the path id. Only those three fields are written.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: JsonBody,
) -> AppResult<HttpResponse> {
    let path_id = path.into_inner();
    let payload = body.into_inner();

    validation::require_fields(&payload, &REQUIRED_FIELDS)?;

    match payload.get("id") {
        Some(Value::String(body_id)) if *body_id == path_id => {}
        other => {
            let body_id = match other {
                Some(Value::String(s)) => s.clone(),
                Some(v) => v.to_string(),
                None => "undefined".to_string(),
            };
            return Err(AppError::BadRequest(format!(
                "Request path id ({}) and request body id ({}) must match",
                path_id, body_id
            )));
        }
    }

    let changes = validation::post_changes(&payload)?;
    let id = parse_id(&path_id).ok_or(AppError::NotFound)?;

    tracing::info!("Updating blog post with id `{}`", id);
    state
        .posts
        .update(id, changes)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /posts/{id}
///
/// Idempotent: an unknown id is still answered with 204.
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let Some(id) = parse_id(&path) else {
        tracing::debug!("Ignoring delete of malformed id `{}`", path.as_str());
        return Ok(HttpResponse::NoContent().finish());
    };

    if state.posts.delete(id).await? {
        tracing::info!("Deleted blog post with id `{}`", id);
    } else {
        tracing::debug!("Blog post `{}` already absent", id);
    }

    Ok(HttpResponse::NoContent().finish())
}

fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}

