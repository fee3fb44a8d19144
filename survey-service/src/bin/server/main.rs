use std::sync::Arc;

use auth::Authenticator;
use sqlx::postgres::PgPoolOptions;
use survey_service::config::Config;
use survey_service::domain::professor::service::ProfessorService;
use survey_service::domain::user::service::UserService;
use survey_service::inbound::http::router::create_router;
use survey_service::outbound::repositories::PostgresProfessorRepository;
use survey_service::outbound::repositories::PostgresUserRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "survey_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "survey-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        professor_admin_routes = config.server.professor_admin_routes,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(config.jwt.secret.as_bytes()));
    let professor_repository = Arc::new(PostgresProfessorRepository::new(pg_pool.clone()));
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool));

    let professor_service = Arc::new(ProfessorService::new(professor_repository));
    let user_service = Arc::new(UserService::new(
        user_repository,
        Arc::clone(&authenticator),
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        professor_service,
        user_service,
        authenticator,
        config.server.professor_admin_routes,
    );

    axum::serve(http_listener, http_application).await?;
    tracing::info!("Server exited successfully");

    Ok(())
}
