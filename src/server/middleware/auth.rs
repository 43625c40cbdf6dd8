use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use sea_orm::DatabaseConnection;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::User,
    service::auth::AuthService,
    state::AppState,
};

pub enum Permission {
    Admin,
}

/// Username and password decoded from an `Authorization: Basic` header.
#[derive(Debug, PartialEq)]
pub struct BasicCredentials {
    pub email: String,
    pub password: String,
}

impl BasicCredentials {
    /// Decodes `Basic base64(email:password)` from the request headers.
    ///
    /// The scheme name is matched case-insensitively. The password may itself contain
    /// `:`; only the first colon separates it from the email.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, AuthError> {
        let Some(value) = headers.get(header::AUTHORIZATION) else {
            return Err(AuthError::MissingCredentials);
        };

        let value = value
            .to_str()
            .map_err(|_| AuthError::MalformedCredentials("non-ASCII header".to_string()))?;

        let (scheme, encoded) = value
            .trim()
            .split_once(' ')
            .ok_or_else(|| AuthError::MalformedCredentials("missing scheme".to_string()))?;

        if !scheme.eq_ignore_ascii_case("basic") {
            return Err(AuthError::MalformedCredentials(format!(
                "unsupported scheme '{}'",
                scheme
            )));
        }

        let decoded = STANDARD
            .decode(encoded.trim())
            .map_err(|e| AuthError::MalformedCredentials(e.to_string()))?;

        let decoded = String::from_utf8(decoded)
            .map_err(|_| AuthError::MalformedCredentials("credentials are not UTF-8".to_string()))?;

        let (email, password) = decoded
            .split_once(':')
            .ok_or_else(|| AuthError::MalformedCredentials("missing ':' separator".to_string()))?;

        Ok(Self {
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    /// Authenticates the request and checks every permission.
    ///
    /// Must run before the handler touches any repository so rejected requests never
    /// change state.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated principal
    /// - `Err(AuthError::MissingCredentials | MalformedCredentials | InvalidCredentials)` - 401
    /// - `Err(AuthError::AccessDenied)` - 403
    /// - `Err(AppError::DbErr)` - Database error during the user lookup
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let credentials = BasicCredentials::from_headers(self.headers)?;

        let auth_service = AuthService::new(self.db);
        let Some(user) = auth_service
            .authenticate(&credentials.email, &credentials.password)
            .await?
        else {
            return Err(AuthError::InvalidCredentials(credentials.email).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "User attempted to access an admin-only car operation without the admin role".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}

/// Extractor for handlers restricted to admins.
///
/// Runs `AuthGuard` with `Permission::Admin` on the request headers. List it before
/// `Path`, `Query` and body extractors so unauthenticated requests get 401/403 before
/// any input is parsed.
pub struct AdminUser(pub User);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let user = AuthGuard::new(&state.db, &parts.headers)
            .require(&[Permission::Admin])
            .await?;

        Ok(Self(user))
    }
}
