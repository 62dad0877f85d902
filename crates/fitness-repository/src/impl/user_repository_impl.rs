//! `UserRepositoryImpl`, user query predicates over a [`UserDao`].
//!
//! [`UserDao`]: crate::dao::UserDao

use crate::traits::age_cutoff;
use crate::{dao::UserDao, traits::UserRepository};
use async_trait::async_trait;
use chrono::NaiveDate;
use fitness_core::{FitnessResult, UserId};
use fitness_domain::User;
use shaku::Component;
use std::sync::Arc;
use tracing::debug;

/// Repository implementation that evaluates user predicates.
#[derive(Component)]
#[shaku(interface = UserRepository)]
pub struct UserRepositoryImpl {
    #[shaku(inject)]
    user_dao: Arc<dyn UserDao>,
}

impl UserRepositoryImpl {
    /// Creates a new `UserRepositoryImpl` with the given DAO.
    #[must_use]
    pub fn new(user_dao: Arc<dyn UserDao>) -> Self {
        Self { user_dao }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn save(&self, user: User) -> FitnessResult<User> {
        debug!("Repository: save user {:?}", user.id);
        self.user_dao.save(user).await
    }

    async fn find_by_id(&self, id: UserId) -> FitnessResult<Option<User>> {
        debug!("Repository: find_by_id {}", id);
        self.user_dao.find_by_id(id).await
    }

    async fn find_all(&self) -> FitnessResult<Vec<User>> {
        debug!("Repository: find_all users");
        self.user_dao.find_all().await
    }

    async fn exists_by_id(&self, id: UserId) -> FitnessResult<bool> {
        self.user_dao.exists_by_id(id).await
    }

    async fn delete_by_id(&self, id: UserId) -> FitnessResult<()> {
        debug!("Repository: delete user {}", id);
        self.user_dao.delete_by_id(id).await
    }

    async fn find_by_email(&self, email: &str) -> FitnessResult<Option<User>> {
        debug!("Repository: find_by_email {}", email);
        self.user_dao.find_by_email(email).await
    }

    async fn find_by_email_containing_ignore_case(&self, fragment: &str) -> FitnessResult<Vec<User>> {
        debug!("Repository: find_by_email_containing_ignore_case {}", fragment);
        let users = self.user_dao.find_all().await?;
        Ok(users
            .into_iter()
            .filter(|u| u.email_contains_ignore_case(fragment))
            .collect())
    }

    async fn find_by_age_greater_than(&self, age: u32, today: NaiveDate) -> FitnessResult<Vec<User>> {
        debug!("Repository: find_by_age_greater_than {} (today {})", age, today);
        match age_cutoff(age, today) {
            Some(cutoff) => self.user_dao.find_by_birthdate_before(cutoff).await,
            None => Ok(Vec::new()),
        }
    }

    async fn find_by_birthdate_before(&self, date: NaiveDate) -> FitnessResult<Vec<User>> {
        debug!("Repository: find_by_birthdate_before {}", date);
        self.user_dao.find_by_birthdate_before(date).await
    }
}

impl std::fmt::Debug for UserRepositoryImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRepositoryImpl").finish_non_exhaustive()
    }
}
