use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `users` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub is_admin: bool,
}

/// Request body for creating or replacing a user.
///
/// `id` is accepted for compatibility with clients that echo a full record,
/// but the store assigns ids on create and the path selects the row on update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub is_admin: bool,
}

#[cfg(test)]
impl UserPayload {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, is_admin: bool) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            is_admin,
        }
    }
}

/// Response body for a successful update
#[derive(Debug, Serialize, Deserialize)]
pub struct UserUpdated {
    pub message: String,
    pub updated_user: User,
}

impl UserUpdated {
    pub fn new(user: User) -> Self {
        Self {
            message: "User updated successfully".to_string(),
            updated_user: user,
        }
    }
}

/// Response body for a successful delete, carrying the record as it was
#[derive(Debug, Serialize, Deserialize)]
pub struct UserDeleted {
    pub message: String,
    pub deleted_user: User,
}

impl UserDeleted {
    pub fn new(user: User) -> Self {
        Self {
            message: "User deleted successfully".to_string(),
            deleted_user: user,
        }
    }
}
