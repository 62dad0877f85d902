//! User service trait definition.

use crate::dto::UserDto;
use async_trait::async_trait;
use chrono::NaiveDate;
use fitness_core::{FitnessResult, Interface, UserId};

/// User service trait.
#[async_trait]
pub trait UserService: Interface + Send + Sync {
    /// Creates a new user. The DTO must not carry an id.
    async fn create_user(&self, dto: UserDto) -> FitnessResult<UserDto>;

    /// Gets a user by ID.
    async fn get_user(&self, id: UserId) -> FitnessResult<UserDto>;

    /// Lists every user.
    async fn list_users(&self) -> FitnessResult<Vec<UserDto>>;

    /// Exact, case-sensitive email lookup.
    async fn find_user_by_email(&self, email: &str) -> FitnessResult<Option<UserDto>>;

    /// Replaces every mutable field of user `id`. `dto.id` is ignored.
    async fn update_user(&self, id: UserId, dto: UserDto) -> FitnessResult<UserDto>;

    /// Deletes a user. Trainings that reference it are left in place.
    async fn delete_user(&self, id: UserId) -> FitnessResult<()>;

    /// Users whose email contains `fragment`, ignoring case.
    async fn search_users_by_email(&self, fragment: &str) -> FitnessResult<Vec<UserDto>>;

    /// Users strictly older than `age` years as of today.
    async fn search_users_by_age_greater_than(&self, age: u32) -> FitnessResult<Vec<UserDto>>;

    /// Users born strictly before `date`.
    async fn find_users_older_than(&self, date: NaiveDate) -> FitnessResult<Vec<UserDto>>;
}
