//! User entity.

use chrono::NaiveDate;
use fitness_core::{Entity, UserId};
use serde::{Deserialize, Serialize};

/// A registered person whose trainings are tracked.
///
/// Trainings point at users, never the other way round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier, `None` until first save.
    pub id: Option<UserId>,

    pub first_name: String,

    pub last_name: String,

    pub birthdate: NaiveDate,

    /// Unique by convention only.
    pub email: String,
}

impl User {
    /// Creates an unsaved user.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birthdate: NaiveDate,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            birthdate,
            email: email.into(),
        }
    }

    /// Returns the same user carrying `id`.
    #[must_use]
    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    /// Case-insensitive substring match on the email. An empty fragment
    /// matches every user.
    #[must_use]
    pub fn email_contains_ignore_case(&self, fragment: &str) -> bool {
        self.email.to_lowercase().contains(&fragment.to_lowercase())
    }

    /// True if the birthdate is strictly before `date`.
    #[must_use]
    pub fn born_before(&self, date: NaiveDate) -> bool {
        self.birthdate < date
    }
}

impl Entity<UserId> for User {
    fn id(&self) -> Option<UserId> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> User {
        User::new(
            "Ann",
            "K",
            NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            "ann@x.com",
        )
    }

    #[test]
    fn test_new_user_is_unsaved() {
        let user = ann();
        assert!(user.id.is_none());
        assert!(!user.is_persisted());
        assert!(ann().with_id(UserId(3)).is_persisted());
    }

    #[test]
    fn test_email_contains_ignore_case() {
        let user = ann();
        assert!(user.email_contains_ignore_case("ANN"));
        assert!(user.email_contains_ignore_case("@X."));
        assert!(user.email_contains_ignore_case(""));
        assert!(!user.email_contains_ignore_case("bob"));
    }

    #[test]
    fn test_born_before_is_strict() {
        let user = ann();
        assert!(user.born_before(NaiveDate::from_ymd_opt(1990, 1, 2).unwrap()));
        assert!(!user.born_before(NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()));
    }
}
