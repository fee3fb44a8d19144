use std::str::FromStr;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::professor::errors::ProfessorError;
use crate::domain::professor::models::Professor;
use crate::domain::professor::models::ProfessorId;
use crate::domain::professor::models::ProfessorName;
use crate::domain::professor::models::Rating;
use crate::domain::professor::ports::ProfessorRepository;

pub struct PostgresProfessorRepository {
    pool: PgPool,
}

impl PostgresProfessorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_professor(
        id: Uuid,
        name: String,
        ratings: Vec<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Professor, ProfessorError> {
        // Stored rows that fail validation are a storage fault, not a bad request
        let corrupt = |e: &dyn std::fmt::Display| {
            ProfessorError::DatabaseError(format!("Corrupt professor row {}: {}", id, e))
        };

        let ratings = ratings
            .iter()
            .map(|rating| Rating::from_str(rating))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| corrupt(&e))?;

        Ok(Professor {
            id: ProfessorId(id),
            name: ProfessorName::new(name).map_err(|e| corrupt(&e))?,
            ratings,
            created_at,
        })
    }

    fn ratings_to_column(professor: &Professor) -> Vec<String> {
        professor
            .ratings
            .iter()
            .map(|rating| rating.as_str().to_string())
            .collect()
    }

    fn map_write_error(e: sqlx::Error, professor: &Professor) -> ProfessorError {
        if let Some(db_err) = e.as_database_error() {
            if db_err.is_unique_violation() && db_err.constraint() == Some("professors_name_key")
            {
                return ProfessorError::NameAlreadyExists(professor.name.as_str().to_string());
            }
        }
        ProfessorError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl ProfessorRepository for PostgresProfessorRepository {
    async fn create(&self, professor: Professor) -> Result<Professor, ProfessorError> {
        sqlx::query(
            r#"
            INSERT INTO professors (id, name, ratings, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(professor.id.0)
        .bind(professor.name.as_str())
        .bind(Self::ratings_to_column(&professor))
        .bind(professor.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, &professor))?;

        Ok(professor)
    }

    async fn find_by_id(&self, id: &ProfessorId) -> Result<Option<Professor>, ProfessorError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, ratings, created_at
            FROM professors
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ProfessorError::DatabaseError(e.to_string()))?;

        match row {
            Some(r) => Ok(Some(Self::row_to_professor(
                r.get("id"),
                r.get("name"),
                r.get("ratings"),
                r.get("created_at"),
            )?)),
            None => Ok(None),
        }
    }

    async fn find_by_name(
        &self,
        name: &ProfessorName,
    ) -> Result<Option<Professor>, ProfessorError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, ratings, created_at
            FROM professors
            WHERE name = $1
            "#,
        )
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ProfessorError::DatabaseError(e.to_string()))?;

        match row {
            Some(r) => Ok(Some(Self::row_to_professor(
                r.get("id"),
                r.get("name"),
                r.get("ratings"),
                r.get("created_at"),
            )?)),
            None => Ok(None),
        }
    }

    async fn list_all(&self) -> Result<Vec<Professor>, ProfessorError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, ratings, created_at
            FROM professors
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ProfessorError::DatabaseError(e.to_string()))?;

        rows.into_iter()
            .map(|r| {
                Self::row_to_professor(
                    r.get("id"),
                    r.get("name"),
                    r.get("ratings"),
                    r.get("created_at"),
                )
            })
            .collect()
    }

    async fn update(&self, professor: Professor) -> Result<Professor, ProfessorError> {
        let result = sqlx::query(
            r#"
            UPDATE professors
            SET name = $2, ratings = $3
            WHERE id = $1
            "#,
        )
        .bind(professor.id.0)
        .bind(professor.name.as_str())
        .bind(Self::ratings_to_column(&professor))
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, &professor))?;

        if result.rows_affected() == 0 {
            return Err(ProfessorError::NotFound(professor.id.to_string()));
        }

        Ok(professor)
    }

    async fn delete(&self, id: &ProfessorId) -> Result<(), ProfessorError> {
        let result = sqlx::query(
            r#"
            DELETE FROM professors
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| ProfessorError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ProfessorError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
