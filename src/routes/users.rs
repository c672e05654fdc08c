use crate::{error::AppError, models::UserProfile};
use actix_web::{get, web, HttpResponse, Responder};
use sqlx::PgPool;

/// Retrieves a user by id.
///
/// Returns the user's projection: identity and display fields plus the full
/// task list in append order. The credential hash is part of the stored row
/// but is never part of this response.
///
/// ## Responses:
/// - `200 OK`: Returns the `UserProfile` as JSON.
/// - `404 Not Found`: If no user with the given id exists.
/// - `500 Internal Server Error`: For database errors.
#[get("/users/{id}")]
pub async fn get_user(
    pool: web::Data<PgPool>,
    user_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    match UserProfile::fetch(pool.get_ref(), user_id.into_inner()).await? {
        Some(profile) => Ok(HttpResponse::Ok().json(profile)),
        None => Err(AppError::NotFound("User not found".into())),
    }
}
