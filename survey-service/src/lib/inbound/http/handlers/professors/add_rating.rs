use std::str::FromStr;

use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use crate::domain::professor::errors::ProfessorError;
use crate::domain::professor::errors::RatingError;
use crate::domain::professor::models::ProfessorId;
use crate::domain::professor::models::Rating;
use crate::domain::professor::ports::ProfessorServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ProfessorData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn add_rating(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(professor_id): Path<String>,
    ApiJson(body): ApiJson<AddRatingRequest>,
) -> Result<ApiSuccess<ProfessorData>, ApiError> {
    // Rating is validated before the professor is looked up
    let rating = body.try_into_rating().map_err(ProfessorError::from)?;
    let professor_id = ProfessorId::from_string(&professor_id).map_err(ProfessorError::from)?;

    let professor = state
        .professor_service
        .add_rating(&professor_id, rating)
        .await?;
    tracing::info!(
        username = %auth_user.username,
        professor_id = %professor.id,
        rating = %rating,
        "Rating added"
    );

    Ok(ApiSuccess::new(StatusCode::OK, (&professor).into()))
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AddRatingRequest {
    #[serde(default)]
    rating: Option<serde_json::Value>,
}

impl AddRatingRequest {
    fn try_into_rating(self) -> Result<Rating, RatingError> {
        match self.rating {
            Some(serde_json::Value::String(rating)) => Rating::from_str(&rating),
            Some(other) => Err(RatingError::Unknown(other.to_string())),
            None => Err(RatingError::Unknown(String::new())),
        }
    }
}
