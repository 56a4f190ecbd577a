//! Registration and login endpoints
//!
//! Both endpoints take `application/x-www-form-urlencoded` bodies. No session
//! or token is issued: a successful login only confirms the credential.

use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Form, MessageResponse};
use crate::infrastructure::user::RegisterRequest;

/// Create the authentication router
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Registration form
#[derive(Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login form
#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Register a new user
///
/// POST /register
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Json<MessageResponse>, ApiError> {
    let email = state
        .user_service
        .register(RegisterRequest {
            name: form.name,
            email: form.email,
            password: form.password,
        })
        .await?;

    Ok(Json(MessageResponse::new(format!("User registered: {}", email))))
}

/// Verify an email and password
///
/// POST /login
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Json<MessageResponse>, ApiError> {
    let name = state
        .user_service
        .login(&form.email, &form.password)
        .await?;

    Ok(Json(MessageResponse::new(format!("Welcome, {}!", name))))
}
