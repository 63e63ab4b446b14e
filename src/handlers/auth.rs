use axum::{extract::State, response::IntoResponse, Json};

use crate::error::AppError;
use crate::models::user::{AuthResponse, LoginRequest, RegisterRequest};
use crate::AppState;

fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::BadRequest(format!("{field} must not be empty")));
    }
    Ok(())
}

/// POST /register — create a new user.
/// The password is digested before it touches the store; the raw
/// password is never persisted.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(
        handler = "register",
        username = %body.username,
        "Handler: POST /register"
    );

    require_non_empty("username", &body.username)?;
    require_non_empty("email", &body.email)?;
    require_non_empty("password", &body.password)?;

    tracing::debug!(handler = "register", "Dispatching to service.register");
    let username = state
        .service
        .register(&body.username, &body.email, &body.password)
        .await?;

    tracing::info!(
        handler = "register",
        username = %username,
        status = 200,
        "Responding: user registered"
    );

    Ok(Json(AuthResponse {
        message: "User registered successfully".to_string(),
        username,
    }))
}

/// POST /login — verify credentials. Never mutates the store.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(
        handler = "login",
        username = %body.username,
        "Handler: POST /login"
    );

    require_non_empty("username", &body.username)?;
    require_non_empty("password", &body.password)?;

    tracing::debug!(handler = "login", "Dispatching to service.login");
    let username = state.service.login(&body.username, &body.password).await?;

    tracing::info!(
        handler = "login",
        username = %username,
        status = 200,
        "Responding: login successful"
    );

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        username,
    }))
}
