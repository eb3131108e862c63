//! DTOs de User

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::user::{User, UserRole, UserStatus};

/// Request para crear un usuario
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 3, max = 50))]
    pub username: String,

    #[validate(length(min = 8, max = 100))]
    pub password: String,

    pub role: UserRole,
    pub branch_id: Option<Uuid>,
}

/// Request para actualizar un usuario
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 8, max = 100))]
    pub password: Option<String>,

    pub role: Option<UserRole>,
    pub branch_id: Option<Uuid>,
    pub status: Option<UserStatus>,
}

/// Response de usuario; nunca expone el hash de contraseña
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub role: String,
    pub branch_id: Option<Uuid>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role.as_str().to_string(),
            branch_id: user.branch_id,
            status: user.status.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}
