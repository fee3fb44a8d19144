use std::str::FromStr;

use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use crate::domain::professor::errors::ProfessorError;
use crate::domain::professor::models::ProfessorId;
use crate::domain::professor::models::ProfessorName;
use crate::domain::professor::models::Rating;
use crate::domain::professor::models::UpdateProfessorCommand;
use crate::domain::professor::ports::ProfessorServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ProfessorData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn update_professor(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(professor_id): Path<String>,
    ApiJson(body): ApiJson<UpdateProfessorRequest>,
) -> Result<ApiSuccess<ProfessorData>, ApiError> {
    let professor_id = ProfessorId::from_string(&professor_id).map_err(ProfessorError::from)?;
    let command = body.try_into_command()?;

    let professor = state
        .professor_service
        .update_professor(&professor_id, command)
        .await?;
    tracing::info!(username = %auth_user.username, professor_id = %professor.id, "Professor updated");

    Ok(ApiSuccess::new(StatusCode::OK, (&professor).into()))
}

/// Full replacement of the mutable professor fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateProfessorRequest {
    name: String,
    ratings: Vec<String>,
}

impl UpdateProfessorRequest {
    fn try_into_command(self) -> Result<UpdateProfessorCommand, ProfessorError> {
        let name = ProfessorName::new(self.name)?;
        let ratings = self
            .ratings
            .iter()
            .map(|rating| Rating::from_str(rating))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(UpdateProfessorCommand { name, ratings })
    }
}
