use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::professor::errors::ProfessorError;
use crate::domain::professor::models::ProfessorId;
use crate::domain::professor::ports::ProfessorServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ProfessorData;
use crate::inbound::http::router::AppState;

pub async fn get_professor(
    State(state): State<AppState>,
    Path(professor_id): Path<String>,
) -> Result<ApiSuccess<ProfessorData>, ApiError> {
    let professor_id = ProfessorId::from_string(&professor_id).map_err(ProfessorError::from)?;

    state
        .professor_service
        .get_professor(&professor_id)
        .await
        .map_err(ApiError::from)
        .map(|ref professor| ApiSuccess::new(StatusCode::OK, professor.into()))
}
