//! UserDao trait, low-level user data access.
//!
//! [`UserRepository`] builds its query predicates on top of this.
//!
//! [`UserRepository`]: crate::traits::UserRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use fitness_core::{FitnessResult, Interface, Store, UserId};
use fitness_domain::User;

/// User store with indexed lookups.
///
/// Every lookup returns records in ascending id order.
#[async_trait]
pub trait UserDao: Store<User, UserId> + Interface {
    /// First user whose email equals `email` exactly (case-sensitive).
    async fn find_by_email(&self, email: &str) -> FitnessResult<Option<User>>;

    /// Users born strictly before `date`.
    async fn find_by_birthdate_before(&self, date: NaiveDate) -> FitnessResult<Vec<User>>;
}
