use crate::{
    error::AppError,
    models::{TaskInput, UserProfile},
};
use actix_web::{delete, post, web, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// Appends a task to a user's list.
///
/// The append is a single row insert keyed by a fresh UUID, so two
/// concurrent appends to the same user both land; list order is insert
/// order.
///
/// ## Request Body:
/// - `task`: The task's content string (1 to 1000 characters).
///
/// ## Responses:
/// - `200 OK`: Returns the full updated `UserProfile` as JSON.
/// - `404 Not Found`: If no user with the given id exists.
/// - `422 Unprocessable Entity`: If the task text fails validation.
/// - `500 Internal Server Error`: For database errors.
#[post("/tasks/{id}")]
pub async fn add_task(
    pool: web::Data<PgPool>,
    user_id: web::Path<i32>,
    task_data: web::Json<TaskInput>,
) -> Result<impl Responder, AppError> {
    // Validate input
    task_data.validate()?;

    let user_id = user_id.into_inner();

    let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
        .bind(user_id)
        .fetch_one(pool.get_ref())
        .await?;
    if !exists {
        return Err(AppError::NotFound("User not found".into()));
    }

    sqlx::query("INSERT INTO tasks (id, user_id, text) VALUES ($1, $2, $3)")
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&task_data.task)
        .execute(pool.get_ref())
        .await?;

    // Both task mutations answer with the whole updated document.
    match UserProfile::fetch(pool.get_ref(), user_id).await? {
        Some(profile) => Ok(HttpResponse::Ok().json(profile)),
        None => Err(AppError::NotFound("User not found".into())),
    }
}

/// Removes one task from a user's list by id.
///
/// The removal is a single conditional DELETE scoped to the owning user: a
/// task id that matches nothing deletes nothing, so repeating a delete is a
/// no-op rather than an error.
///
/// ## Responses:
/// - `200 OK`: Returns the full updated `UserProfile` as JSON.
/// - `404 Not Found`: If no user with the given id exists.
/// - `500 Internal Server Error`: For database errors.
#[delete("/tasks/delete/{user_id}/{task_id}")]
pub async fn delete_task(
    pool: web::Data<PgPool>,
    path: web::Path<(i32, Uuid)>,
) -> Result<impl Responder, AppError> {
    let (user_id, task_id) = path.into_inner();

    let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
        .bind(user_id)
        .fetch_one(pool.get_ref())
        .await?;
    if !exists {
        return Err(AppError::NotFound("User not found".into()));
    }

    sqlx::query("DELETE FROM tasks WHERE id = $1 AND user_id = $2")
        .bind(task_id)
        .bind(user_id)
        .execute(pool.get_ref())
        .await?;

    match UserProfile::fetch(pool.get_ref(), user_id).await? {
        Some(profile) => Ok(HttpResponse::Ok().json(profile)),
        None => Err(AppError::NotFound("User not found".into())),
    }
}

#[cfg(test)]
mod tests {
    use crate::models::TaskInput;
    use validator::Validate; // For .validate() method

    #[test]
    fn test_task_input_bounds() {
        let empty = TaskInput {
            task: "".to_string(),
        };
        assert!(
            empty.validate().is_err(),
            "Validation should fail for empty task text."
        );

        let at_limit = TaskInput {
            task: "a".repeat(1000),
        };
        assert!(
            at_limit.validate().is_ok(),
            "Validation should pass at the length limit."
        );

        let over_limit = TaskInput {
            task: "a".repeat(1001),
        };
        assert!(
            over_limit.validate().is_err(),
            "Validation should fail past the length limit."
        );
    }
}
