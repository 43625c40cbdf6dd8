//! User domain models and parameters.
//!
//! Users exist only to authenticate requests; the password hash never leaves the data
//! and service layers.

use entity::sea_orm_active_enums::UserRole;

/// An authenticated principal.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Login name used as the Basic auth username.
    pub email: String,
    pub role: UserRole,
}

impl User {
    /// Converts an entity model to a user domain model, discarding the password hash.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            role: entity.role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// Parameters for creating a user or resetting an existing user's password and role.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    pub email: String,
    /// Salted hash produced by `service::auth::hash_password`.
    pub password_hash: String,
    pub role: UserRole,
}
