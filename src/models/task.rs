use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Input structure for appending a task to a user's list.
///
/// The wire field is named `task`, matching the client's request body
/// `{"task": "..."}`.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TaskInput {
    /// The task's content string.
    /// Must be between 1 and 1000 characters.
    #[validate(length(min = 1, max = 1000))]
    pub task: String,
}

/// A single to-do item. Tasks live embedded in exactly one user's list and
/// have no lifecycle of their own.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Unique identifier for the task (UUID v4), assigned on append.
    pub id: Uuid,
    /// The task's content string.
    pub text: String,
    /// Timestamp of when the task was appended.
    pub created_at: DateTime<Utc>,
}
