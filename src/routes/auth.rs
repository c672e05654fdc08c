use crate::{
    auth::{hash_password, verify_password, LoginRequest, RegisterRequest},
    error::AppError,
    models::User,
};
use actix_web::{get, post, web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;
use validator::Validate;

/// Register a new user
///
/// Creates a new account with an empty task list and returns its id.
/// Email uniqueness is enforced by the store's unique index; a duplicate
/// registration surfaces as 409 rather than a generic server error.
#[post("/register")]
pub async fn register(
    pool: web::Data<PgPool>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    register_data.validate()?;

    // Hash password
    let password_hash = hash_password(&register_data.password)?;

    // Insert new user. No uniqueness pre-check: a violation of the email
    // index converts to Conflict in From<sqlx::Error>.
    let user_id = sqlx::query_scalar::<_, i32>(
        "INSERT INTO users (email, name, password_hash) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(&register_data.email)
    .bind(&register_data.name)
    .bind(&password_hash)
    .fetch_one(pool.get_ref())
    .await?;

    log::info!("user {} registered", user_id);

    Ok(HttpResponse::Ok().json(user_id))
}

/// Check whether an email is already registered
///
/// Returns an existence flag only; no user data leaves this endpoint.
/// An unknown email is `{"exists": false}`, never an error.
#[get("/checkEmail/{email}")]
pub async fn check_email(
    pool: web::Data<PgPool>,
    email: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let exists =
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email.as_str())
            .fetch_one(pool.get_ref())
            .await?;

    Ok(HttpResponse::Ok().json(json!({ "exists": exists })))
}

/// Login user
///
/// Verifies credentials. A matching password responds with the user's id;
/// a mismatch responds with the JSON literal `false` at status 200, so the
/// client can distinguish the two without treating mismatch as an error.
/// An unknown email is 404.
#[post("/login")]
pub async fn login(
    pool: web::Data<PgPool>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    login_data.validate()?;

    // Get user from database
    let user = sqlx::query_as::<_, User>(
        "SELECT id, email, name, password_hash, created_at FROM users WHERE email = $1",
    )
    .bind(&login_data.email)
    .fetch_optional(pool.get_ref())
    .await?;

    match user {
        Some(user) => {
            // Verify password
            if verify_password(&login_data.password, &user.password_hash)? {
                Ok(HttpResponse::Ok().json(user.id))
            } else {
                Ok(HttpResponse::Ok().json(false))
            }
        }
        None => Err(AppError::NotFound("User not found".into())),
    }
}
