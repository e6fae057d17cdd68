use axum::{extract::State, http::StatusCode, Extension, Json};
use std::sync::Arc;

use crate::{
    auth::{is_recognised_token, issue_token},
    middleware::RequestId,
    models::{LoginInput, LoginResponse, MessageResponse, VerifyTokenInput, VerifyTokenResponse},
    state::AuthState,
};

/// POST /auth/login
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginInput,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = MessageResponse)
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<Arc<AuthState>>,
    Extension(request_id): Extension<RequestId>,
    Json(input): Json<LoginInput>,
) -> Result<Json<LoginResponse>, (StatusCode, Json<MessageResponse>)> {
    // Both fields must be present; a missing password never matches.
    let username = match (input.username, input.password) {
        (Some(username), Some(password))
            if !username.is_empty() && state.users.verify(&username, &password) =>
        {
            Some(username)
        }
        _ => None,
    };
    state.metrics.login_attempt(username.is_some());

    let Some(username) = username else {
        tracing::info!(request_id = %request_id.0, "Login rejected");
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(MessageResponse {
                message: "Invalid credentials".to_string(),
            }),
        ));
    };

    tracing::info!(request_id = %request_id.0, username = %username, "Login successful");

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token: issue_token(&username),
        username,
    }))
}

/// POST /auth/verify
#[utoipa::path(
    post,
    path = "/auth/verify",
    request_body = VerifyTokenInput,
    responses(
        (status = 200, description = "Token is valid", body = VerifyTokenResponse),
        (status = 401, description = "Invalid token", body = VerifyTokenResponse)
    ),
    tag = "auth"
)]
pub async fn verify(
    State(state): State<Arc<AuthState>>,
    Json(input): Json<VerifyTokenInput>,
) -> (StatusCode, Json<VerifyTokenResponse>) {
    let valid = input.token.as_deref().is_some_and(is_recognised_token);
    state.metrics.token_verification(valid);

    if valid {
        (
            StatusCode::OK,
            Json(VerifyTokenResponse {
                valid: true,
                message: "Token is valid".to_string(),
            }),
        )
    } else {
        tracing::debug!("Token verification failed");
        (
            StatusCode::UNAUTHORIZED,
            Json(VerifyTokenResponse {
                valid: false,
                message: "Invalid token".to_string(),
            }),
        )
    }
}
