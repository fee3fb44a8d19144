use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::professor::errors::ProfessorError;
use crate::domain::professor::models::ProfessorId;
use crate::domain::professor::ports::ProfessorServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ProfessorData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_professor(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(professor_id): Path<String>,
) -> Result<ApiSuccess<ProfessorData>, ApiError> {
    let professor_id = ProfessorId::from_string(&professor_id).map_err(ProfessorError::from)?;

    let deleted = state
        .professor_service
        .delete_professor(&professor_id)
        .await?;
    tracing::info!(username = %auth_user.username, professor_id = %deleted.id, "Professor removed");

    Ok(ApiSuccess::new(StatusCode::OK, (&deleted).into()))
}
