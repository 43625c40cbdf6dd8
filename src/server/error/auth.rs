use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Challenge sent with every 401 so clients know to retry with Basic credentials.
pub const BASIC_AUTH_CHALLENGE: &str = "Basic realm=\"car-rental\", charset=\"UTF-8\"";

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carried no `Authorization` header.
    #[error("Request is missing the Authorization header")]
    MissingCredentials,

    /// The `Authorization` header is not a decodable `Basic` credential pair.
    #[error("Malformed Basic credentials: {0}")]
    MalformedCredentials(String),

    /// No user matches the email, or the password does not verify.
    #[error("Invalid credentials supplied for '{0}'")]
    InvalidCredentials(String),

    /// The user authenticated but lacks the required role.
    ///
    /// # Fields
    /// - ID of the authenticated user
    /// - Description of the denied operation
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingCredentials` / `MalformedCredentials` / `InvalidCredentials` → 401 Unauthorized
///   with a `WWW-Authenticate` challenge
/// - `AccessDenied` → 403 Forbidden
///
/// Details are logged at debug level; client-facing messages stay generic so they never
/// reveal whether an email exists.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingCredentials
            | Self::MalformedCredentials(_)
            | Self::InvalidCredentials(_) => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, BASIC_AUTH_CHALLENGE)],
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Insufficient permissions".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
