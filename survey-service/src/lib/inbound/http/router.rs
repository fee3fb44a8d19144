use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::routing::MethodRouter;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::ApiError;
use super::handlers::professors::add_rating;
use super::handlers::professors::create_professor;
use super::handlers::professors::delete_professor;
use super::handlers::professors::delete_rating;
use super::handlers::professors::get_professor;
use super::handlers::professors::list_professors;
use super::handlers::professors::update_professor;
use super::handlers::users::list_users;
use super::handlers::users::login;
use super::handlers::users::signup;
use super::middleware::authenticate as auth_middleware;
use crate::domain::professor::ports::ProfessorServicePort;
use crate::domain::user::ports::UserServicePort;

/// Shared handler state. Services sit behind their ports so any repository
/// adapter can back the router.
#[derive(Clone)]
pub struct AppState {
    pub professor_service: Arc<dyn ProfessorServicePort>,
    pub user_service: Arc<dyn UserServicePort>,
    pub authenticator: Arc<Authenticator>,
}

/// Build the HTTP application.
///
/// `professor_admin_routes` mounts `PUT` and `DELETE` on `/professor/:id`.
pub fn create_router(
    professor_service: Arc<dyn ProfessorServicePort>,
    user_service: Arc<dyn UserServicePort>,
    authenticator: Arc<Authenticator>,
    professor_admin_routes: bool,
) -> Router {
    let state = AppState {
        professor_service,
        user_service,
        authenticator,
    };

    let public_routes = Router::new()
        .merge(with_and_without_slash("/professor/", get(list_professors)))
        .merge(with_and_without_slash(
            "/professor/:professor_id",
            get(get_professor),
        ))
        .merge(with_and_without_slash("/user/", get(list_users)))
        .merge(with_and_without_slash("/user/signup/", post(signup)))
        .merge(with_and_without_slash("/user/login/", post(login)));

    let mut protected_routes = Router::new()
        .merge(with_and_without_slash("/professor/", post(create_professor)))
        .merge(with_and_without_slash(
            "/professor/:professor_id/rating/",
            post(add_rating).delete(delete_rating),
        ));

    if professor_admin_routes {
        protected_routes = protected_routes.merge(with_and_without_slash(
            "/professor/:professor_id",
            put(update_professor).delete(delete_professor),
        ));
    }

    let protected_routes = protected_routes.route_layer(middleware::from_fn_with_state(
        state.authenticator.clone(),
        auth_middleware,
    ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .fallback(unknown_route)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Mount `handler` on `path` both with and without a trailing slash.
fn with_and_without_slash(path: &str, handler: MethodRouter<AppState>) -> Router<AppState> {
    let bare = path.trim_end_matches('/');
    Router::new()
        .route(bare, handler.clone())
        .route(&format!("{}/", bare), handler)
}

async fn unknown_route() -> ApiError {
    ApiError::NotFound("Not found".to_string())
}
