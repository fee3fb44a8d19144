use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<LoginRequest>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let LoginRequest { username, password } = body;

    // A username that fails validation cannot belong to any stored user
    let username = Username::new(username).map_err(|e| {
        tracing::debug!(error = %e, "Login with invalid username");
        ApiError::NotFound("User not found".to_string())
    })?;

    let user = state.user_service.get_user_by_username(&username).await?;

    let claims = auth::Claims::for_user(user.username.as_str());

    let result = state
        .authenticator
        .authenticate(&password, &user.password_hash, &claims)
        .map_err(|e| match e {
            auth::AuthenticationError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            auth::AuthenticationError::PasswordError(err) => {
                ApiError::InternalServerError(format!("Password verification failed: {}", err))
            }
            auth::AuthenticationError::JwtError(err) => {
                ApiError::InternalServerError(format!("Token generation failed: {}", err))
            }
        })?;

    tracing::info!(username = %user.username, "User logged in");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            access_token: result.access_token,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseData {
    pub access_token: String,
}
