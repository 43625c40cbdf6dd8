//! Credential verification and password hashing.
//!
//! Passwords are stored as Argon2id PHC strings (`$argon2id$v=19$...`) with a 16-byte
//! random salt.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use entity::sea_orm_active_enums::UserRole;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{UpsertUserParam, User},
};

const SALT_LEN: usize = 16;

/// Service authenticating Basic credentials against the `user` table.
pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves an email/password pair to a user.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The email exists and the password verifies
    /// - `Ok(None)` - Unknown email or wrong password
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Option<User>, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(email).await? else {
            return Ok(None);
        };

        if !verify_password(password, &user.password_hash) {
            return Ok(None);
        }

        Ok(Some(User::from_entity(user)))
    }

    /// Creates the admin account, or resets its password and role when it already exists.
    ///
    /// # Returns
    /// - `Ok(User)` - The admin user
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn ensure_admin(&self, email: &str, password: &str) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .upsert(UpsertUserParam {
                email: email.to_string(),
                password_hash: hash_password(password)?,
                role: UserRole::Admin,
            })
            .await?;

        Ok(user)
    }
}

/// Hashes a password with Argon2id and a fresh random salt.
///
/// # Returns
/// - `Ok(String)` - PHC string carrying algorithm, parameters, salt and digest
/// - `Err(AppError::PasswordHash)` - Argon2 rejected the input
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt: [u8; SALT_LEN] = rand::random();
    let salt = SaltString::encode_b64(&salt).map_err(AppError::PasswordHash)?;

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(AppError::PasswordHash)?;

    Ok(hash.to_string())
}

/// Checks a password against a PHC string produced by `hash_password`.
///
/// Malformed stored hashes never verify.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
