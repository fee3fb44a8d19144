pub mod professors;
pub mod users;

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use thiserror::Error;

use crate::domain::professor::errors::ProfessorError;
use crate::domain::professor::models::Professor;
use crate::domain::user::errors::PasswordError;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;

/// Successful response: status code plus the JSON-serialized payload, unwrapped.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::InternalServerError(detail) => {
                // Diagnostic stays in the logs
                tracing::error!(error = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

/// JSON body extractor whose rejections render as `ApiError`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<ProfessorError> for ApiError {
    fn from(err: ProfessorError) -> Self {
        match err {
            // An id that cannot be parsed cannot name a stored professor
            ProfessorError::InvalidProfessorId(_) | ProfessorError::NotFound(_) => {
                ApiError::NotFound("Professor not found".to_string())
            }
            ProfessorError::NameAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            ProfessorError::InvalidName(_)
            | ProfessorError::InvalidRating(_)
            | ProfessorError::InvalidRatingIndex { .. } => ApiError::BadRequest(err.to_string()),
            ProfessorError::DatabaseError(msg) => ApiError::InternalServerError(msg),
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFoundByUsername(_) => ApiError::NotFound(err.to_string()),
            UserError::UsernameAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            UserError::InvalidUsername(_) | UserError::Password(PasswordError::Empty) => {
                ApiError::BadRequest(err.to_string())
            }
            UserError::Password(PasswordError::HashingFailed(msg))
            | UserError::DatabaseError(msg) => ApiError::InternalServerError(msg),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfessorData {
    pub id: String,
    pub name: String,
    pub ratings: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Professor> for ProfessorData {
    fn from(professor: &Professor) -> Self {
        Self {
            id: professor.id.to_string(),
            name: professor.name.as_str().to_string(),
            ratings: professor
                .ratings
                .iter()
                .map(|rating| rating.as_str().to_string())
                .collect(),
            created_at: professor.created_at,
        }
    }
}

/// Public view of a user. The password hash never leaves the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}
