//! Training service implementation.

use crate::dto::TrainingDto;
use crate::mappers::TrainingMapper;
use crate::training_service::TrainingService;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fitness_core::{FitnessError, FitnessResult, TrainingId, UserId, ValidateExt};
use fitness_domain::{ActivityType, Training, User};
use fitness_repository::{TrainingRepository, UserRepository};
use shaku::Component;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Training service component.
#[derive(Component)]
#[shaku(interface = TrainingService)]
pub struct TrainingServiceImpl {
    #[shaku(inject)]
    training_repository: Arc<dyn TrainingRepository>,
    #[shaku(inject)]
    user_repository: Arc<dyn UserRepository>,
}

impl TrainingServiceImpl {
    /// Creates a new training service.
    #[must_use]
    pub fn new(
        training_repository: Arc<dyn TrainingRepository>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            training_repository,
            user_repository,
        }
    }

    async fn load(&self, id: TrainingId) -> FitnessResult<Training> {
        self.training_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| FitnessError::not_found("Training", id))
    }

    async fn load_user(&self, id: UserId) -> FitnessResult<User> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| FitnessError::not_found("User", id))
    }

    /// Maps one training, embedding its owner if it still exists.
    async fn present(&self, training: &Training) -> FitnessResult<TrainingDto> {
        Ok(match self.user_repository.find_by_id(training.user_id).await? {
            Some(user) => TrainingMapper::to_dto_with_user(training, &user),
            None => dangling(training),
        })
    }

    /// Maps a batch, looking each distinct owner up once.
    async fn present_all(&self, trainings: Vec<Training>) -> FitnessResult<Vec<TrainingDto>> {
        let mut owners: HashMap<UserId, Option<User>> = HashMap::new();
        let mut dtos = Vec::with_capacity(trainings.len());

        for training in &trainings {
            if !owners.contains_key(&training.user_id) {
                let owner = self.user_repository.find_by_id(training.user_id).await?;
                owners.insert(training.user_id, owner);
            }
            let dto = match owners.get(&training.user_id) {
                Some(Some(user)) => TrainingMapper::to_dto_with_user(training, user),
                _ => dangling(training),
            };
            dtos.push(dto);
        }

        Ok(dtos)
    }
}

fn dangling(training: &Training) -> TrainingDto {
    warn!(
        "Training {:?} references missing user {}",
        training.id, training.user_id
    );
    TrainingMapper::to_dto(training)
}

#[async_trait]
impl TrainingService for TrainingServiceImpl {
    async fn create_training(&self, dto: TrainingDto) -> FitnessResult<TrainingDto> {
        debug!("Creating training: {} for {:?}", dto.activity_type, dto.owner.owner_id());

        if let Some(id) = dto.id {
            return Err(FitnessError::validation(format!(
                "A new training cannot already have an id (got {})",
                id
            )));
        }
        dto.validate_request()?;

        let owner_id = dto.owner.owner_id().ok_or_else(|| {
            FitnessError::validation("Training owner must be an existing user with an id")
        })?;
        let owner = self.load_user(owner_id).await?;

        let saved = self
            .training_repository
            .save(TrainingMapper::to_entity(dto, owner_id))
            .await?;

        info!("Training created: {:?} for user {}", saved.id, owner_id);
        Ok(TrainingMapper::to_dto_with_user(&saved, &owner))
    }

    async fn get_training(&self, id: TrainingId) -> FitnessResult<TrainingDto> {
        debug!("Getting training: {}", id);

        let training = self.load(id).await?;
        self.present(&training).await
    }

    async fn list_trainings(&self) -> FitnessResult<Vec<TrainingDto>> {
        debug!("Listing trainings");

        let trainings = self.training_repository.find_all().await?;
        self.present_all(trainings).await
    }

    async fn update_training(&self, id: TrainingId, dto: TrainingDto) -> FitnessResult<TrainingDto> {
        debug!("Updating training: {}", id);

        let mut training = self.load(id).await?;
        dto.validate_request()?;

        TrainingMapper::merge_into(dto, &mut training);
        let updated = self.training_repository.save(training).await?;

        info!("Training updated: {}", id);
        self.present(&updated).await
    }

    async fn list_finished_after(&self, instant: DateTime<Utc>) -> FitnessResult<Vec<TrainingDto>> {
        debug!("Listing trainings finished after {}", instant);

        let trainings = self.training_repository.find_finished_after(instant).await?;
        self.present_all(trainings).await
    }

    async fn list_by_activity_type(&self, activity_type: ActivityType) -> FitnessResult<Vec<TrainingDto>> {
        debug!("Listing trainings by activity type: {}", activity_type);

        let trainings = self
            .training_repository
            .find_by_activity_type(activity_type)
            .await?;
        self.present_all(trainings).await
    }

    async fn list_by_user(&self, user_id: UserId) -> FitnessResult<Vec<TrainingDto>> {
        debug!("Listing trainings for user: {}", user_id);

        let user = self.load_user(user_id).await?;
        let trainings = self.training_repository.find_by_user(&user).await?;

        Ok(trainings
            .iter()
            .map(|training| TrainingMapper::to_dto_with_user(training, &user))
            .collect())
    }
}

impl std::fmt::Debug for TrainingServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrainingServiceImpl").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::{TrainingOwner, UserDto};
    use chrono::{NaiveDate, TimeZone};
    use fitness_repository::{
        InMemoryTrainingDao, InMemoryUserDao, TrainingRepositoryImpl, UserRepositoryImpl,
    };
    use mockall::mock;

    mock! {
        pub TrainingRepo {}

        #[async_trait]
        impl TrainingRepository for TrainingRepo {
            async fn save(&self, training: Training) -> FitnessResult<Training>;
            async fn find_by_id(&self, id: TrainingId) -> FitnessResult<Option<Training>>;
            async fn find_all(&self) -> FitnessResult<Vec<Training>>;
            async fn exists_by_id(&self, id: TrainingId) -> FitnessResult<bool>;
            async fn delete_by_id(&self, id: TrainingId) -> FitnessResult<()>;
            async fn find_finished_after(&self, instant: DateTime<Utc>) -> FitnessResult<Vec<Training>>;
            async fn find_by_activity_type(&self, activity_type: ActivityType) -> FitnessResult<Vec<Training>>;
            async fn find_by_user(&self, user: &User) -> FitnessResult<Vec<Training>>;
        }
    }

    struct Fixture {
        service: TrainingServiceImpl,
        users: Arc<dyn UserRepository>,
        trainings: Arc<dyn TrainingRepository>,
    }

    fn fixture() -> Fixture {
        let users: Arc<dyn UserRepository> =
            Arc::new(UserRepositoryImpl::new(Arc::new(InMemoryUserDao::new())));
        let trainings: Arc<dyn TrainingRepository> =
            Arc::new(TrainingRepositoryImpl::new(Arc::new(InMemoryTrainingDao::new())));
        Fixture {
            service: TrainingServiceImpl::new(trainings.clone(), users.clone()),
            users,
            trainings,
        }
    }

    async fn ann(fixture: &Fixture) -> User {
        fixture
            .users
            .save(User::new(
                "Ann",
                "K",
                NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
                "ann@x.com",
            ))
            .await
            .unwrap()
    }

    fn ending(owner: TrainingOwner, y: i32, m: u32, d: u32) -> TrainingDto {
        TrainingDto {
            id: None,
            owner,
            start_time: Utc.with_ymd_and_hms(y, m, d, 8, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(y, m, d, 9, 0, 0).unwrap(),
            activity_type: ActivityType::Running,
            distance: 10.0,
            average_speed: 10.0,
        }
    }

    fn by_id(user: &User) -> TrainingOwner {
        TrainingOwner::UserId(user.id.unwrap())
    }

    #[tokio::test]
    async fn test_create_training_embeds_owner() {
        let fx = fixture();
        let user = ann(&fx).await;

        let created = fx
            .service
            .create_training(ending(by_id(&user), 2023, 1, 1))
            .await
            .unwrap();

        assert!(created.id.is_some());
        match &created.owner {
            TrainingOwner::User(owner) => assert_eq!(owner.id, user.id),
            other => panic!("Expected embedded user, got {other:?}"),
        }
        assert_eq!(fx.service.get_training(created.id.unwrap()).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_create_training_accepts_embedded_owner() {
        let fx = fixture();
        let user = ann(&fx).await;
        let embedded = TrainingOwner::User(UserDto {
            id: user.id,
            first_name: "ignored".to_string(),
            last_name: "ignored".to_string(),
            birthdate: user.birthdate,
            email: "ignored@x.com".to_string(),
        });

        let created = fx.service.create_training(ending(embedded, 2023, 1, 1)).await.unwrap();

        match created.owner {
            TrainingOwner::User(owner) => assert_eq!(owner.email, "ann@x.com"),
            other => panic!("Expected embedded user, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_training_unknown_user() {
        let fx = fixture();

        let result = fx
            .service
            .create_training(ending(TrainingOwner::UserId(UserId(999)), 2023, 1, 1))
            .await;

        match result {
            Err(FitnessError::NotFound { resource_type, .. }) => assert_eq!(resource_type, "User"),
            _ => panic!("Expected NotFound error"),
        }
        assert!(fx.trainings.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_training_rejects_id_and_unsaved_owner() {
        let fx = fixture();
        let user = ann(&fx).await;

        let with_id = TrainingDto {
            id: Some(TrainingId(3)),
            ..ending(by_id(&user), 2023, 1, 1)
        };
        assert!(matches!(
            fx.service.create_training(with_id).await,
            Err(FitnessError::Validation(_))
        ));

        let unsaved = TrainingOwner::User(UserDto {
            id: None,
            first_name: "Ann".to_string(),
            last_name: "K".to_string(),
            birthdate: user.birthdate,
            email: "ann@x.com".to_string(),
        });
        assert!(matches!(
            fx.service.create_training(ending(unsaved, 2023, 1, 1)).await,
            Err(FitnessError::Validation(_))
        ));

        let negative = TrainingDto {
            distance: -1.0,
            ..ending(by_id(&user), 2023, 1, 1)
        };
        assert!(matches!(
            fx.service.create_training(negative).await,
            Err(FitnessError::Validation(_))
        ));
        assert!(fx.service.list_trainings().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_training_not_found() {
        let fx = fixture();

        match fx.service.get_training(TrainingId(1)).await {
            Err(FitnessError::NotFound { resource_type, id }) => {
                assert_eq!(resource_type, "Training");
                assert_eq!(id, "1");
            }
            _ => panic!("Expected NotFound error"),
        }
    }

    #[tokio::test]
    async fn test_update_training_keeps_owner() {
        let fx = fixture();
        let ann = ann(&fx).await;
        let bob = fx
            .users
            .save(User::new("Bob", "B", NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(), "bob@y.org"))
            .await
            .unwrap();
        let created = fx
            .service
            .create_training(ending(by_id(&ann), 2023, 1, 1))
            .await
            .unwrap();
        let id = created.id.unwrap();

        let update = TrainingDto {
            id: Some(TrainingId(77)),
            activity_type: ActivityType::Swimming,
            distance: 2.5,
            ..ending(by_id(&bob), 2023, 2, 2)
        };
        let updated = fx.service.update_training(id, update).await.unwrap();

        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.owner.owner_id(), ann.id);
        assert_eq!(updated.activity_type, ActivityType::Swimming);
        assert_eq!(updated.distance, 2.5);
        assert_eq!(fx.service.list_trainings().await.unwrap().len(), 1);

        let missing = fx
            .service
            .update_training(TrainingId(500), ending(by_id(&ann), 2023, 1, 1))
            .await;
        assert!(missing.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_update_training_checks_existence_before_fields() {
        let fx = fixture();
        let ann = ann(&fx).await;
        let negative = TrainingDto {
            distance: -1.0,
            ..ending(by_id(&ann), 2023, 1, 1)
        };

        let missing = fx
            .service
            .update_training(TrainingId(500), negative.clone())
            .await;
        assert!(missing.unwrap_err().is_not_found());

        let created = fx
            .service
            .create_training(ending(by_id(&ann), 2023, 1, 1))
            .await
            .unwrap();
        let rejected = fx
            .service
            .update_training(created.id.unwrap(), negative)
            .await;
        assert!(matches!(rejected, Err(FitnessError::Validation(_))));
        assert_eq!(
            fx.service.get_training(created.id.unwrap()).await.unwrap(),
            created
        );
    }

    #[tokio::test]
    async fn test_list_finished_after() {
        let fx = fixture();
        let user = ann(&fx).await;
        fx.service
            .create_training(ending(by_id(&user), 2023, 1, 1))
            .await
            .unwrap();
        let june = fx
            .service
            .create_training(ending(by_id(&user), 2023, 6, 1))
            .await
            .unwrap();

        let cutoff = Utc.with_ymd_and_hms(2023, 3, 1, 0, 0, 0).unwrap();
        let finished = fx.service.list_finished_after(cutoff).await.unwrap();

        assert_eq!(finished, vec![june]);
    }

    #[tokio::test]
    async fn test_list_by_activity_type() {
        let fx = fixture();
        let user = ann(&fx).await;
        fx.service
            .create_training(ending(by_id(&user), 2023, 1, 1))
            .await
            .unwrap();
        let tennis = TrainingDto {
            activity_type: ActivityType::Tennis,
            ..ending(by_id(&user), 2023, 1, 2)
        };
        fx.service.create_training(tennis).await.unwrap();

        let found = fx.service.list_by_activity_type(ActivityType::Tennis).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].activity_type, ActivityType::Tennis);
        assert!(fx
            .service
            .list_by_activity_type(ActivityType::Walking)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_list_by_user() {
        let fx = fixture();
        let user = ann(&fx).await;
        fx.service
            .create_training(ending(by_id(&user), 2023, 1, 1))
            .await
            .unwrap();

        let trainings = fx.service.list_by_user(user.id.unwrap()).await.unwrap();
        assert_eq!(trainings.len(), 1);

        let unknown = fx.service.list_by_user(UserId(999)).await;
        assert!(unknown.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_dangling_owner_falls_back_to_id() {
        let fx = fixture();
        let user = ann(&fx).await;
        let created = fx
            .service
            .create_training(ending(by_id(&user), 2023, 1, 1))
            .await
            .unwrap();

        fx.users.delete_by_id(user.id.unwrap()).await.unwrap();

        let fetched = fx.service.get_training(created.id.unwrap()).await.unwrap();
        assert_eq!(fetched.owner, TrainingOwner::UserId(user.id.unwrap()));
        assert_eq!(fx.service.list_trainings().await.unwrap()[0].owner, fetched.owner);
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let mut repo = MockTrainingRepo::new();
        repo.expect_find_all()
            .returning(|| Err(FitnessError::database("database is locked")));
        let users: Arc<dyn UserRepository> =
            Arc::new(UserRepositoryImpl::new(Arc::new(InMemoryUserDao::new())));
        let service = TrainingServiceImpl::new(Arc::new(repo), users);

        match service.list_trainings().await {
            Err(FitnessError::Database(message)) => assert_eq!(message, "database is locked"),
            _ => panic!("Expected Database error"),
        }
    }
}
