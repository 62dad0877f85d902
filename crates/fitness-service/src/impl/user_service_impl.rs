//! User service implementation.

use crate::dto::UserDto;
use crate::mappers::UserMapper;
use crate::user_service::UserService;
use async_trait::async_trait;
use chrono::NaiveDate;
use fitness_core::{Clock, FitnessError, FitnessResult, UserId, ValidateExt};
use fitness_repository::UserRepository;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

/// User service component.
#[derive(Component)]
#[shaku(interface = UserService)]
pub struct UserServiceImpl {
    #[shaku(inject)]
    user_repository: Arc<dyn UserRepository>,
    #[shaku(inject)]
    clock: Arc<dyn Clock>,
}

impl UserServiceImpl {
    /// Creates a new user service.
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            user_repository,
            clock,
        }
    }

    async fn load(&self, id: UserId) -> FitnessResult<fitness_domain::User> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| FitnessError::not_found("User", id))
    }
}

fn to_dtos(users: Vec<fitness_domain::User>) -> Vec<UserDto> {
    users.iter().map(UserMapper::to_dto).collect()
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn create_user(&self, dto: UserDto) -> FitnessResult<UserDto> {
        debug!("Creating user: {}", dto.email);

        if let Some(id) = dto.id {
            return Err(FitnessError::validation(format!(
                "A new user cannot already have an id (got {})",
                id
            )));
        }
        dto.validate_request()?;

        let saved = self.user_repository.save(UserMapper::to_entity(dto)).await?;

        info!("User created: {:?}", saved.id);
        Ok(UserMapper::to_dto(&saved))
    }

    async fn get_user(&self, id: UserId) -> FitnessResult<UserDto> {
        debug!("Getting user: {}", id);

        let user = self.load(id).await?;
        Ok(UserMapper::to_dto(&user))
    }

    async fn list_users(&self) -> FitnessResult<Vec<UserDto>> {
        debug!("Listing users");

        Ok(to_dtos(self.user_repository.find_all().await?))
    }

    async fn find_user_by_email(&self, email: &str) -> FitnessResult<Option<UserDto>> {
        debug!("Finding user by email: {}", email);

        let user = self.user_repository.find_by_email(email).await?;
        Ok(UserMapper::to_dto_opt(user.as_ref()))
    }

    async fn update_user(&self, id: UserId, dto: UserDto) -> FitnessResult<UserDto> {
        debug!("Updating user: {}", id);

        let mut user = self.load(id).await?;
        dto.validate_request()?;

        UserMapper::merge_into(dto, &mut user);
        let updated = self.user_repository.save(user.with_id(id)).await?;

        info!("User updated: {}", id);
        Ok(UserMapper::to_dto(&updated))
    }

    async fn delete_user(&self, id: UserId) -> FitnessResult<()> {
        debug!("Deleting user: {}", id);

        if !self.user_repository.exists_by_id(id).await? {
            return Err(FitnessError::not_found("User", id));
        }
        self.user_repository.delete_by_id(id).await?;

        info!("User deleted: {}", id);
        Ok(())
    }

    async fn search_users_by_email(&self, fragment: &str) -> FitnessResult<Vec<UserDto>> {
        debug!("Searching users by email fragment: {}", fragment);

        Ok(to_dtos(
            self.user_repository
                .find_by_email_containing_ignore_case(fragment)
                .await?,
        ))
    }

    async fn search_users_by_age_greater_than(&self, age: u32) -> FitnessResult<Vec<UserDto>> {
        let today = self.clock.today();
        debug!("Searching users older than {} years as of {}", age, today);

        Ok(to_dtos(
            self.user_repository.find_by_age_greater_than(age, today).await?,
        ))
    }

    async fn find_users_older_than(&self, date: NaiveDate) -> FitnessResult<Vec<UserDto>> {
        debug!("Finding users born before {}", date);

        Ok(to_dtos(self.user_repository.find_by_birthdate_before(date).await?))
    }
}

impl std::fmt::Debug for UserServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl").finish_non_exhaustive()
    }
}
