//! Repository traits: the query predicates over users and trainings.
//!
//! Filters that can be answered from a store index are delegated to the
//! DAO; the rest are evaluated over a full scan. Either way the result set
//! is the one the predicate describes, in the store's scan order.

use async_trait::async_trait;
use chrono::{DateTime, Months, NaiveDate, Utc};
use fitness_core::{FitnessResult, Interface, TrainingId, UserId};
use fitness_domain::{ActivityType, Training, User};

/// User repository trait.
#[async_trait]
pub trait UserRepository: Interface + Send + Sync {
    /// Persists a user, assigning an id if it has none.
    async fn save(&self, user: User) -> FitnessResult<User>;

    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> FitnessResult<Option<User>>;

    /// Returns every user.
    async fn find_all(&self) -> FitnessResult<Vec<User>>;

    /// Checks if a user exists.
    async fn exists_by_id(&self, id: UserId) -> FitnessResult<bool>;

    /// Deletes a user by ID. Trainings that reference it are untouched.
    async fn delete_by_id(&self, id: UserId) -> FitnessResult<()>;

    /// First user whose email equals `email` exactly.
    async fn find_by_email(&self, email: &str) -> FitnessResult<Option<User>>;

    /// Users whose email contains `fragment`, ignoring case.
    /// An empty fragment matches everyone.
    async fn find_by_email_containing_ignore_case(&self, fragment: &str) -> FitnessResult<Vec<User>>;

    /// Users born strictly before `today` minus `age` years.
    async fn find_by_age_greater_than(&self, age: u32, today: NaiveDate) -> FitnessResult<Vec<User>>;

    /// Users born strictly before `date`.
    async fn find_by_birthdate_before(&self, date: NaiveDate) -> FitnessResult<Vec<User>>;
}

/// Training repository trait.
#[async_trait]
pub trait TrainingRepository: Interface + Send + Sync {
    /// Persists a training, assigning an id if it has none.
    async fn save(&self, training: Training) -> FitnessResult<Training>;

    /// Finds a training by ID.
    async fn find_by_id(&self, id: TrainingId) -> FitnessResult<Option<Training>>;

    /// Returns every training.
    async fn find_all(&self) -> FitnessResult<Vec<Training>>;

    /// Checks if a training exists.
    async fn exists_by_id(&self, id: TrainingId) -> FitnessResult<bool>;

    /// Deletes a training by ID.
    async fn delete_by_id(&self, id: TrainingId) -> FitnessResult<()>;

    /// Trainings whose end time is strictly after `instant`.
    async fn find_finished_after(&self, instant: DateTime<Utc>) -> FitnessResult<Vec<Training>>;

    /// Trainings of exactly this activity type.
    async fn find_by_activity_type(&self, activity_type: ActivityType) -> FitnessResult<Vec<Training>>;

    /// Trainings owned by `user`. A user without an id owns nothing.
    async fn find_by_user(&self, user: &User) -> FitnessResult<Vec<Training>>;
}

/// Latest birthdate (exclusive) of someone older than `age` years on `today`.
///
/// February 29 minus a non-leap number of years clamps to February 28.
/// `None` when the result falls outside the calendar range.
#[must_use]
pub fn age_cutoff(age: u32, today: NaiveDate) -> Option<NaiveDate> {
    today.checked_sub_months(Months::new(age.checked_mul(12)?))
}
