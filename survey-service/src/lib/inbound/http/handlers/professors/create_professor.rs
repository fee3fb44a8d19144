use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use crate::domain::professor::errors::ProfessorError;
use crate::domain::professor::models::CreateProfessorCommand;
use crate::domain::professor::models::ProfessorName;
use crate::domain::professor::ports::ProfessorServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ProfessorData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_professor(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    ApiJson(body): ApiJson<CreateProfessorRequest>,
) -> Result<ApiSuccess<ProfessorData>, ApiError> {
    let name = ProfessorName::new(body.name).map_err(ProfessorError::from)?;

    tracing::debug!(username = %auth_user.username, name = %name, "Creating professor");

    state
        .professor_service
        .create_professor(CreateProfessorCommand::new(name))
        .await
        .map_err(ApiError::from)
        .map(|ref professor| ApiSuccess::new(StatusCode::CREATED, professor.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateProfessorRequest {
    name: String,
}
