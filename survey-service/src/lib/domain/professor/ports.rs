use async_trait::async_trait;

use crate::domain::professor::errors::ProfessorError;
use crate::domain::professor::models::CreateProfessorCommand;
use crate::domain::professor::models::Professor;
use crate::domain::professor::models::ProfessorId;
use crate::domain::professor::models::ProfessorName;
use crate::domain::professor::models::Rating;
use crate::domain::professor::models::RatingRemoval;
use crate::domain::professor::models::UpdateProfessorCommand;

/// Port for professor domain service operations.
#[async_trait]
pub trait ProfessorServicePort: Send + Sync + 'static {
    /// Create a professor with an empty rating list.
    ///
    /// # Errors
    /// * `NameAlreadyExists` - A professor with exactly this name exists
    /// * `DatabaseError` - Database operation failed
    async fn create_professor(
        &self,
        command: CreateProfessorCommand,
    ) -> Result<Professor, ProfessorError>;

    /// Retrieve every professor, unfiltered.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_professors(&self) -> Result<Vec<Professor>, ProfessorError>;

    /// Retrieve professor by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Professor does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_professor(&self, id: &ProfessorId) -> Result<Professor, ProfessorError>;

    /// Replace name and ratings of an existing professor.
    ///
    /// # Errors
    /// * `NotFound` - Professor does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_professor(
        &self,
        id: &ProfessorId,
        command: UpdateProfessorCommand,
    ) -> Result<Professor, ProfessorError>;

    /// Delete a professor.
    ///
    /// # Returns
    /// The professor as it was before removal
    ///
    /// # Errors
    /// * `NotFound` - Professor does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_professor(&self, id: &ProfessorId) -> Result<Professor, ProfessorError>;

    /// Append a rating to a professor.
    ///
    /// # Returns
    /// Updated professor
    ///
    /// # Errors
    /// * `NotFound` - Professor does not exist
    /// * `DatabaseError` - Database operation failed
    async fn add_rating(
        &self,
        id: &ProfessorId,
        rating: Rating,
    ) -> Result<Professor, ProfessorError>;

    /// Remove a single rating from a professor.
    ///
    /// # Returns
    /// Updated professor
    ///
    /// # Errors
    /// * `NotFound` - Professor does not exist
    /// * `InvalidRatingIndex` - Index outside `0..ratings.len()`
    /// * `DatabaseError` - Database operation failed
    async fn remove_rating(
        &self,
        id: &ProfessorId,
        removal: RatingRemoval,
    ) -> Result<Professor, ProfessorError>;
}

/// Persistence operations for professor aggregate.
#[async_trait]
pub trait ProfessorRepository: Send + Sync + 'static {
    /// Persist new professor to storage.
    ///
    /// # Errors
    /// * `NameAlreadyExists` - Name is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, professor: Professor) -> Result<Professor, ProfessorError>;

    /// Retrieve professor by identifier.
    ///
    /// # Returns
    /// Optional professor entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &ProfessorId) -> Result<Option<Professor>, ProfessorError>;

    /// Retrieve professor by exact name match.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_name(
        &self,
        name: &ProfessorName,
    ) -> Result<Option<Professor>, ProfessorError>;

    /// Retrieve all professors from storage.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Professor>, ProfessorError>;

    /// Overwrite name and ratings of a stored professor.
    ///
    /// # Errors
    /// * `NotFound` - Professor does not exist
    /// * `NameAlreadyExists` - New name is already taken
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, professor: Professor) -> Result<Professor, ProfessorError>;

    /// Remove professor from storage.
    ///
    /// # Errors
    /// * `NotFound` - Professor does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &ProfessorId) -> Result<(), ProfessorError>;
}
