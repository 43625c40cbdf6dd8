//! User data repository for database operations.

use entity::sea_orm_active_enums::UserRole;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::user::{UpsertUserParam, User};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user row by email, including the password hash.
    ///
    /// Returns the entity model rather than the domain model because credential checks
    /// need the stored hash.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - User found
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Creates a user, or resets the password hash and role of the user with that email.
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated user
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<User, DbErr> {
        let entity = match self.find_by_email(&param.email).await? {
            Some(existing) => {
                let mut active_model: entity::user::ActiveModel = existing.into();
                active_model.password_hash = ActiveValue::Set(param.password_hash);
                active_model.role = ActiveValue::Set(param.role);
                active_model.update(self.db).await?
            }
            None => {
                entity::user::ActiveModel {
                    email: ActiveValue::Set(param.email),
                    password_hash: ActiveValue::Set(param.password_hash),
                    role: ActiveValue::Set(param.role),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        Ok(User::from_entity(entity))
    }

    /// Checks if any admin users exist in the database.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin user exists
    /// - `Ok(false)` - No admin users exist
    /// - `Err(DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(UserRole::Admin))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }
}
