use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Claims;
use auth::JwtHandler;
use sqlx::postgres::PgConnectOptions;
use sqlx::postgres::PgPoolOptions;
use sqlx::Connection;
use sqlx::Executor;
use sqlx::PgConnection;
use sqlx::PgPool;
use survey_service::domain::professor::errors::ProfessorError;
use survey_service::domain::professor::models::Professor;
use survey_service::domain::professor::models::ProfessorId;
use survey_service::domain::professor::models::ProfessorName;
use survey_service::domain::professor::ports::ProfessorRepository;
use survey_service::domain::professor::service::ProfessorService;
use survey_service::domain::user::errors::UserError;
use survey_service::domain::user::models::User;
use survey_service::domain::user::models::Username;
use survey_service::domain::user::ports::UserRepository;
use survey_service::domain::user::service::UserService;
use survey_service::inbound::http::router::create_router;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over in-memory storage
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
}

impl TestApp {
    /// Spawn the application with the default route table
    pub async fn spawn() -> Self {
        Self::spawn_with(false).await
    }

    /// Spawn the application with the professor administration routes mounted
    pub async fn spawn_with_admin_routes() -> Self {
        Self::spawn_with(true).await
    }

    async fn spawn_with(professor_admin_routes: bool) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let authenticator = Arc::new(Authenticator::new(TEST_SECRET));
        let professor_service = Arc::new(ProfessorService::new(Arc::new(
            InMemoryProfessorRepository::default(),
        )));
        let user_service = Arc::new(UserService::new(
            Arc::new(InMemoryUserRepository::default()),
            Arc::clone(&authenticator),
        ));

        let router = create_router(
            professor_service,
            user_service,
            authenticator,
            professor_admin_routes,
        );

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(TEST_SECRET),
        }
    }

    /// Token signed with the server secret, as issued on login
    pub fn token_for(&self, username: &str) -> String {
        self.jwt_handler
            .encode(&Claims::for_user(username))
            .expect("Failed to sign test token")
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make PUT request
    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    /// Helper to make DELETE request
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.put(path).bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.delete(path).bearer_auth(token)
    }

    /// Create a professor through the API and return its id
    pub async fn create_professor(&self, name: &str) -> String {
        let response = self
            .post_authenticated("/professor/", &self.token_for("tester"))
            .json(&serde_json::json!({ "name": name }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["id"].as_str().unwrap().to_string()
    }

    /// Add ratings one by one to an existing professor
    pub async fn rate(&self, professor_id: &str, ratings: &[&str]) {
        let token = self.token_for("tester");
        for rating in ratings {
            let response = self
                .post_authenticated(&format!("/professor/{}/rating/", professor_id), &token)
                .json(&serde_json::json!({ "rating": rating }))
                .send()
                .await
                .expect("Failed to execute request");
            assert_eq!(response.status(), reqwest::StatusCode::OK);
        }
    }
}

/// Throwaway PostgreSQL database with migrations applied
pub struct TestDb {
    pub pool: PgPool,
    pub db_name: String,
    server_url: String,
}

impl TestDb {
    /// Create a uniquely named database on the server named by `DATABASE_URL`.
    ///
    /// Returns `None` when `DATABASE_URL` is unset so the suite still runs
    /// without a database server.
    pub async fn try_new() -> Option<Self> {
        let Ok(server_url) = std::env::var("DATABASE_URL") else {
            eprintln!("DATABASE_URL not set, skipping PostgreSQL repository test");
            return None;
        };

        let db_name = format!(
            "test_survey_service_{}",
            uuid::Uuid::new_v4().to_string().replace('-', "_")
        );

        let mut conn = PgConnection::connect(&server_url)
            .await
            .expect("Failed to connect to Postgres");

        conn.execute(format!(r#"CREATE DATABASE "{}";"#, db_name).as_str())
            .await
            .expect("Failed to create test database");

        let options = server_url
            .parse::<PgConnectOptions>()
            .expect("Failed to parse DATABASE_URL")
            .database(&db_name);

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .expect("Failed to connect to test database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        Some(Self {
            pool,
            db_name,
            server_url,
        })
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        // Database cleanup happens asynchronously
        let db_name = self.db_name.clone();
        let server_url = self.server_url.clone();
        tokio::spawn(async move {
            if let Ok(mut conn) = PgConnection::connect(&server_url).await {
                let _ = conn
                    .execute(
                        format!(
                            r#"SELECT pg_terminate_backend(pid) FROM pg_stat_activity WHERE datname = '{}';"#,
                            db_name
                        )
                        .as_str(),
                    )
                    .await;

                let _ = conn
                    .execute(format!(r#"DROP DATABASE IF EXISTS "{}";"#, db_name).as_str())
                    .await;
            }
        });
    }
}

/// Professor storage kept in insertion order
#[derive(Default)]
pub struct InMemoryProfessorRepository {
    professors: Mutex<Vec<Professor>>,
}

#[async_trait]
impl ProfessorRepository for InMemoryProfessorRepository {
    async fn create(&self, professor: Professor) -> Result<Professor, ProfessorError> {
        let mut professors = self.professors.lock().unwrap();
        if professors.iter().any(|p| p.name == professor.name) {
            return Err(ProfessorError::NameAlreadyExists(
                professor.name.as_str().to_string(),
            ));
        }
        professors.push(professor.clone());
        Ok(professor)
    }

    async fn find_by_id(&self, id: &ProfessorId) -> Result<Option<Professor>, ProfessorError> {
        let professors = self.professors.lock().unwrap();
        Ok(professors.iter().find(|p| p.id == *id).cloned())
    }

    async fn find_by_name(
        &self,
        name: &ProfessorName,
    ) -> Result<Option<Professor>, ProfessorError> {
        let professors = self.professors.lock().unwrap();
        Ok(professors.iter().find(|p| p.name == *name).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Professor>, ProfessorError> {
        Ok(self.professors.lock().unwrap().clone())
    }

    async fn update(&self, professor: Professor) -> Result<Professor, ProfessorError> {
        let mut professors = self.professors.lock().unwrap();
        if professors
            .iter()
            .any(|p| p.name == professor.name && p.id != professor.id)
        {
            return Err(ProfessorError::NameAlreadyExists(
                professor.name.as_str().to_string(),
            ));
        }
        let slot = professors
            .iter_mut()
            .find(|p| p.id == professor.id)
            .ok_or(ProfessorError::NotFound(professor.id.to_string()))?;
        *slot = professor.clone();
        Ok(professor)
    }

    async fn delete(&self, id: &ProfessorId) -> Result<(), ProfessorError> {
        let mut professors = self.professors.lock().unwrap();
        let before = professors.len();
        professors.retain(|p| p.id != *id);
        if professors.len() == before {
            return Err(ProfessorError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

/// User storage kept in insertion order
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.username == user.username) {
            return Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ));
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.username == *username).cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        Ok(self.users.lock().unwrap().clone())
    }
}
