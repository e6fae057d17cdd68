use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Input for POST /auth/login
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginInput {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub username: String,
}

/// Input for POST /auth/verify
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct VerifyTokenInput {
    pub token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VerifyTokenResponse {
    pub valid: bool,
    pub message: String,
}

/// Body of a rejected login.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
