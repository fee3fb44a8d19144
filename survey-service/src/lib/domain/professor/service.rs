use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::professor::errors::ProfessorError;
use crate::domain::professor::models::CreateProfessorCommand;
use crate::domain::professor::models::Professor;
use crate::domain::professor::models::ProfessorId;
use crate::domain::professor::models::Rating;
use crate::domain::professor::models::RatingRemoval;
use crate::domain::professor::models::UpdateProfessorCommand;
use crate::domain::professor::ports::ProfessorRepository;
use crate::domain::professor::ports::ProfessorServicePort;

/// Domain service implementation for professor operations.
///
/// Rating mutations are read-modify-write against the repository without a
/// lock, so two concurrent writers to one professor race and the last write wins.
pub struct ProfessorService<PR>
where
    PR: ProfessorRepository,
{
    repository: Arc<PR>,
}

impl<PR> ProfessorService<PR>
where
    PR: ProfessorRepository,
{
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }

    async fn find_existing(&self, id: &ProfessorId) -> Result<Professor, ProfessorError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProfessorError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl<PR> ProfessorServicePort for ProfessorService<PR>
where
    PR: ProfessorRepository,
{
    async fn create_professor(
        &self,
        command: CreateProfessorCommand,
    ) -> Result<Professor, ProfessorError> {
        if self.repository.find_by_name(&command.name).await?.is_some() {
            return Err(ProfessorError::NameAlreadyExists(
                command.name.as_str().to_string(),
            ));
        }

        let professor = self.repository.create(Professor::new(command.name)).await?;
        tracing::info!(professor_id = %professor.id, name = %professor.name, "Professor created");

        Ok(professor)
    }

    async fn list_professors(&self) -> Result<Vec<Professor>, ProfessorError> {
        self.repository.list_all().await
    }

    async fn get_professor(&self, id: &ProfessorId) -> Result<Professor, ProfessorError> {
        self.find_existing(id).await
    }

    async fn update_professor(
        &self,
        id: &ProfessorId,
        command: UpdateProfessorCommand,
    ) -> Result<Professor, ProfessorError> {
        let mut professor = self.find_existing(id).await?;

        professor.name = command.name;
        professor.ratings = command.ratings;

        self.repository.update(professor).await
    }

    async fn delete_professor(&self, id: &ProfessorId) -> Result<Professor, ProfessorError> {
        let professor = self.find_existing(id).await?;
        self.repository.delete(id).await?;
        tracing::info!(professor_id = %id, "Professor deleted");

        Ok(professor)
    }

    async fn add_rating(
        &self,
        id: &ProfessorId,
        rating: Rating,
    ) -> Result<Professor, ProfessorError> {
        let mut professor = self.find_existing(id).await?;
        professor.add_rating(rating);

        self.repository.update(professor).await
    }

    async fn remove_rating(
        &self,
        id: &ProfessorId,
        removal: RatingRemoval,
    ) -> Result<Professor, ProfessorError> {
        let mut professor = self.find_existing(id).await?;

        match professor.remove_rating(removal)? {
            Some(_) => self.repository.update(professor).await,
            // Popping an empty list changes nothing
            None => Ok(professor),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::domain::professor::models::ProfessorName;

    mock! {
        pub TestProfessorRepository {}

        #[async_trait]
        impl ProfessorRepository for TestProfessorRepository {
            async fn create(&self, professor: Professor) -> Result<Professor, ProfessorError>;
            async fn find_by_id(&self, id: &ProfessorId) -> Result<Option<Professor>, ProfessorError>;
            async fn find_by_name(&self, name: &ProfessorName) -> Result<Option<Professor>, ProfessorError>;
            async fn list_all(&self) -> Result<Vec<Professor>, ProfessorError>;
            async fn update(&self, professor: Professor) -> Result<Professor, ProfessorError>;
            async fn delete(&self, id: &ProfessorId) -> Result<(), ProfessorError>;
        }
    }

    fn stored_professor(ratings: Vec<Rating>) -> Professor {
        Professor {
            id: ProfessorId::new(),
            name: ProfessorName::new("Grace Hopper".to_string()).unwrap(),
            ratings,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_professor_success() {
        let mut repository = MockTestProfessorRepository::new();

        repository
            .expect_find_by_name()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_create()
            .withf(|professor| {
                professor.name.as_str() == "Grace Hopper" && professor.ratings.is_empty()
            })
            .times(1)
            .returning(|professor| Ok(professor));

        let service = ProfessorService::new(Arc::new(repository));

        let command =
            CreateProfessorCommand::new(ProfessorName::new("Grace Hopper".to_string()).unwrap());
        let professor = service.create_professor(command).await.unwrap();

        assert_eq!(professor.name.as_str(), "Grace Hopper");
        assert!(professor.ratings.is_empty());
    }

    #[tokio::test]
    async fn test_create_professor_duplicate_name() {
        let mut repository = MockTestProfessorRepository::new();

        let existing = stored_professor(vec![]);
        repository
            .expect_find_by_name()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repository.expect_create().times(0);

        let service = ProfessorService::new(Arc::new(repository));

        let command =
            CreateProfessorCommand::new(ProfessorName::new("Grace Hopper".to_string()).unwrap());
        let result = service.create_professor(command).await;

        assert!(matches!(
            result.unwrap_err(),
            ProfessorError::NameAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_get_professor_not_found() {
        let mut repository = MockTestProfessorRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = ProfessorService::new(Arc::new(repository));

        let result = service.get_professor(&ProfessorId::new()).await;
        assert!(matches!(result.unwrap_err(), ProfessorError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_add_rating_appends_and_persists() {
        let mut repository = MockTestProfessorRepository::new();

        let existing = stored_professor(vec![Rating::NotRecommended]);
        let id = existing.id;
        repository
            .expect_find_by_id()
            .withf(move |candidate| *candidate == id)
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repository
            .expect_update()
            .withf(|professor| {
                professor.ratings == vec![Rating::NotRecommended, Rating::Recommended]
            })
            .times(1)
            .returning(|professor| Ok(professor));

        let service = ProfessorService::new(Arc::new(repository));

        let professor = service.add_rating(&id, Rating::Recommended).await.unwrap();
        assert_eq!(professor.ratings.last(), Some(&Rating::Recommended));
    }

    #[tokio::test]
    async fn test_add_rating_unknown_professor() {
        let mut repository = MockTestProfessorRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_update().times(0);

        let service = ProfessorService::new(Arc::new(repository));

        let result = service
            .add_rating(&ProfessorId::new(), Rating::Recommended)
            .await;
        assert!(matches!(result.unwrap_err(), ProfessorError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_remove_rating_by_index() {
        let mut repository = MockTestProfessorRepository::new();

        let existing = stored_professor(vec![
            Rating::Recommended,
            Rating::NotRecommended,
            Rating::NotRecommended,
        ]);
        let id = existing.id;
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repository
            .expect_update()
            .withf(|professor| {
                professor.ratings == vec![Rating::NotRecommended, Rating::NotRecommended]
            })
            .times(1)
            .returning(|professor| Ok(professor));

        let service = ProfessorService::new(Arc::new(repository));

        let professor = service
            .remove_rating(&id, RatingRemoval::At(0))
            .await
            .unwrap();
        assert_eq!(professor.ratings.len(), 2);
    }

    #[tokio::test]
    async fn test_remove_rating_invalid_index_skips_write() {
        let mut repository = MockTestProfessorRepository::new();

        let existing = stored_professor(vec![Rating::Recommended, Rating::NotRecommended]);
        let id = existing.id;
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repository.expect_update().times(0);

        let service = ProfessorService::new(Arc::new(repository));

        let result = service.remove_rating(&id, RatingRemoval::At(5)).await;
        assert!(matches!(
            result.unwrap_err(),
            ProfessorError::InvalidRatingIndex { index: 5, len: 2 }
        ));
    }

    #[tokio::test]
    async fn test_remove_last_rating_on_empty_list_is_noop() {
        let mut repository = MockTestProfessorRepository::new();

        let existing = stored_professor(vec![]);
        let id = existing.id;
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repository.expect_update().times(0);

        let service = ProfessorService::new(Arc::new(repository));

        let professor = service
            .remove_rating(&id, RatingRemoval::Last)
            .await
            .unwrap();
        assert!(professor.ratings.is_empty());
    }

    #[tokio::test]
    async fn test_update_professor_replaces_fields() {
        let mut repository = MockTestProfessorRepository::new();

        let existing = stored_professor(vec![Rating::Recommended]);
        let id = existing.id;
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repository
            .expect_update()
            .withf(|professor| {
                professor.name.as_str() == "Alan Turing"
                    && professor.ratings == vec![Rating::NotRecommended]
            })
            .times(1)
            .returning(|professor| Ok(professor));

        let service = ProfessorService::new(Arc::new(repository));

        let command = UpdateProfessorCommand {
            name: ProfessorName::new("Alan Turing".to_string()).unwrap(),
            ratings: vec![Rating::NotRecommended],
        };
        let professor = service.update_professor(&id, command).await.unwrap();
        assert_eq!(professor.id, id);
    }

    #[tokio::test]
    async fn test_delete_professor_returns_removed() {
        let mut repository = MockTestProfessorRepository::new();

        let existing = stored_professor(vec![Rating::Recommended]);
        let id = existing.id;
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repository
            .expect_delete()
            .withf(move |candidate| *candidate == id)
            .times(1)
            .returning(|_| Ok(()));

        let service = ProfessorService::new(Arc::new(repository));

        let deleted = service.delete_professor(&id).await.unwrap();
        assert_eq!(deleted.ratings, vec![Rating::Recommended]);
    }

    #[tokio::test]
    async fn test_delete_professor_not_found() {
        let mut repository = MockTestProfessorRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_delete().times(0);

        let service = ProfessorService::new(Arc::new(repository));

        let result = service.delete_professor(&ProfessorId::new()).await;
        assert!(matches!(result.unwrap_err(), ProfessorError::NotFound(_)));
    }
}
