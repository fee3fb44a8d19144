use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::professor::ports::ProfessorServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ProfessorData;
use crate::inbound::http::router::AppState;

pub async fn list_professors(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<ProfessorData>>, ApiError> {
    state
        .professor_service
        .list_professors()
        .await
        .map_err(ApiError::from)
        .map(|professors| {
            ApiSuccess::new(
                StatusCode::OK,
                professors.iter().map(ProfessorData::from).collect(),
            )
        })
}
