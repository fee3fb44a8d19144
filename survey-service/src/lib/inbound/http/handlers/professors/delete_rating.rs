use axum::body::Bytes;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use crate::domain::professor::errors::ProfessorError;
use crate::domain::professor::models::ProfessorId;
use crate::domain::professor::models::RatingRemoval;
use crate::domain::professor::ports::ProfessorServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ProfessorData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Removes one rating. The body is optional; without an `index` the most
/// recent rating is dropped.
pub async fn delete_rating(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(professor_id): Path<String>,
    body: Bytes,
) -> Result<ApiSuccess<ProfessorData>, ApiError> {
    let professor_id = ProfessorId::from_string(&professor_id).map_err(ProfessorError::from)?;

    let removal = match parse_removal(&body) {
        Some(removal) => removal,
        None => {
            // Unknown professor takes precedence over a malformed index
            state.professor_service.get_professor(&professor_id).await?;
            return Err(ApiError::BadRequest("Invalid rating index".to_string()));
        }
    };

    let professor = state
        .professor_service
        .remove_rating(&professor_id, removal)
        .await?;
    tracing::info!(
        username = %auth_user.username,
        professor_id = %professor.id,
        removal = ?removal,
        "Rating removed"
    );

    Ok(ApiSuccess::new(StatusCode::OK, (&professor).into()))
}

#[derive(Debug, Deserialize)]
struct DeleteRatingRequest {
    #[serde(default)]
    index: Option<serde_json::Value>,
}

/// `None` when the body or its index is not acceptable.
fn parse_removal(body: &[u8]) -> Option<RatingRemoval> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Some(RatingRemoval::Last);
    }

    let request: DeleteRatingRequest = serde_json::from_slice(body).ok()?;
    match request.index {
        None | Some(serde_json::Value::Null) => Some(RatingRemoval::Last),
        // 1.0 names the same slot as 1
        Some(index) => index
            .as_i64()
            .or_else(|| index.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
            .map(RatingRemoval::At),
    }
}
