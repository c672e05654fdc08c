use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use crate::models::Task;

/// A user row as stored, credential hash included.
///
/// This type never crosses the HTTP boundary; responses use `UserProfile`,
/// which carries no credential material.
#[derive(Debug, FromRow)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// The public projection of a user: identity, display data, and the owned
/// task list in append order. This is the response shape for `getUser` and
/// for both task mutations.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub tasks: Vec<Task>,
}

impl UserProfile {
    /// Loads a user's projection together with their task list.
    /// Returns `Ok(None)` when no such user exists.
    pub async fn fetch(pool: &PgPool, user_id: i32) -> Result<Option<UserProfile>, sqlx::Error> {
        let row = sqlx::query_as::<_, (i32, String, String, DateTime<Utc>)>(
            "SELECT id, email, name, created_at FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        let (id, email, name, created_at) = match row {
            Some(row) => row,
            None => return Ok(None),
        };

        let tasks = sqlx::query_as::<_, Task>(
            "SELECT id, text, created_at FROM tasks WHERE user_id = $1 ORDER BY seq",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(Some(UserProfile {
            id,
            email,
            name,
            created_at,
            tasks,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_profile_serialization_has_no_hash() {
        let profile = UserProfile {
            id: 1,
            email: "a@x.com".to_string(),
            name: "A".to_string(),
            created_at: Utc::now(),
            tasks: vec![],
        };

        let json = serde_json::to_value(&profile).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "a@x.com");
        assert!(json["tasks"].as_array().unwrap().is_empty());
    }
}
