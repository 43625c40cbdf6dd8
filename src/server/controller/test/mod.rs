use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use entity::sea_orm_active_enums::UserRole;
use sea_orm::{DatabaseConnection, DbErr};
use serde_json::Value;
use test_utils::factory::user::UserFactory;
use tower::ServiceExt;

use crate::server::{router::router, service::auth::hash_password, state::AppState};


const ADMIN_EMAIL: &str = "user1@email.cz";
const ADMIN_PASSWORD: &str = "password";
const USER_EMAIL: &str = "user2@email.cz";
const USER_PASSWORD: &str = "password";

fn app(db: &DatabaseConnection) -> Router {
    router().with_state(AppState::new(db.clone()))
}

/// Inserts the admin user every authorized request logs in as.
async fn seed_admin(db: &DatabaseConnection) -> Result<(), DbErr> {
    UserFactory::new(db)
        .email(ADMIN_EMAIL)
        .password_hash(hash_password(ADMIN_PASSWORD).unwrap())
        .role(UserRole::Admin)
        .build()
        .await?;
    Ok(())
}

/// Inserts a regular user that authenticates but lacks the admin role.
async fn seed_user(db: &DatabaseConnection) -> Result<(), DbErr> {
    UserFactory::new(db)
        .email(USER_EMAIL)
        .password_hash(hash_password(USER_PASSWORD).unwrap())
        .role(UserRole::User)
        .build()
        .await?;
    Ok(())
}

fn basic_auth(email: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:{}", email, password)))
}

fn admin_auth() -> String {
    basic_auth(ADMIN_EMAIL, ADMIN_PASSWORD)
}

fn user_auth() -> String {
    basic_auth(USER_EMAIL, USER_PASSWORD)
}

fn request(method: Method, uri: &str, auth: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }

    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Sends a request through the router and returns the status and parsed JSON body.
///
/// An empty body comes back as `Value::Null`.
async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}
