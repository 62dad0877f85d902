//! `InMemoryUserDao`, users kept in process memory.

use super::index::SecondaryIndex;
use crate::dao::UserDao;
use async_trait::async_trait;
use chrono::NaiveDate;
use fitness_core::{FitnessResult, Store, UserId};
use fitness_domain::User;
use parking_lot::RwLock;
use shaku::Component;
use std::collections::BTreeMap;
use tracing::debug;

/// Backing table of [`InMemoryUserDao`].
#[derive(Debug, Default)]
pub struct UserTable {
    rows: BTreeMap<UserId, User>,
    by_email: SecondaryIndex<String, UserId>,
    by_birthdate: SecondaryIndex<NaiveDate, UserId>,
    last_id: i64,
}

impl UserTable {
    fn upsert(&mut self, mut user: User) -> User {
        let id = match user.id {
            Some(id) => {
                self.last_id = self.last_id.max(id.0);
                id
            }
            None => {
                self.last_id += 1;
                UserId(self.last_id)
            }
        };
        user.id = Some(id);

        if let Some(previous) = self.rows.insert(id, user.clone()) {
            self.unindex(id, &previous);
        }
        self.by_email.insert(user.email.clone(), id);
        self.by_birthdate.insert(user.birthdate, id);
        user
    }

    fn remove(&mut self, id: UserId) {
        if let Some(previous) = self.rows.remove(&id) {
            self.unindex(id, &previous);
        }
    }

    fn unindex(&mut self, id: UserId, user: &User) {
        self.by_email.remove(user.email.as_str(), id);
        self.by_birthdate.remove(&user.birthdate, id);
    }

    fn select(&self, ids: impl IntoIterator<Item = UserId>) -> Vec<User> {
        ids.into_iter()
            .filter_map(|id| self.rows.get(&id).cloned())
            .collect()
    }
}

/// User DAO over an in-memory table.
///
/// Ids start at 1 and are never reused within the process.
#[derive(Component, Default)]
#[shaku(interface = UserDao)]
pub struct InMemoryUserDao {
    #[shaku(default)]
    table: RwLock<UserTable>,
}

impl InMemoryUserDao {
    /// Creates an empty DAO.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store<User, UserId> for InMemoryUserDao {
    async fn save(&self, user: User) -> FitnessResult<User> {
        let saved = self.table.write().upsert(user);
        debug!("InMemoryUserDao: saved user {:?}", saved.id);
        Ok(saved)
    }

    async fn find_by_id(&self, id: UserId) -> FitnessResult<Option<User>> {
        Ok(self.table.read().rows.get(&id).cloned())
    }

    async fn find_all(&self) -> FitnessResult<Vec<User>> {
        Ok(self.table.read().rows.values().cloned().collect())
    }

    async fn exists_by_id(&self, id: UserId) -> FitnessResult<bool> {
        Ok(self.table.read().rows.contains_key(&id))
    }

    async fn delete_by_id(&self, id: UserId) -> FitnessResult<()> {
        self.table.write().remove(id);
        Ok(())
    }
}

#[async_trait]
impl UserDao for InMemoryUserDao {
    async fn find_by_email(&self, email: &str) -> FitnessResult<Option<User>> {
        let table = self.table.read();
        let first = table.by_email.get(email).into_iter().next();
        Ok(table.select(first).into_iter().next())
    }

    async fn find_by_birthdate_before(&self, date: NaiveDate) -> FitnessResult<Vec<User>> {
        let table = self.table.read();
        Ok(table.select(table.by_birthdate.below(&date)))
    }
}

impl std::fmt::Debug for InMemoryUserDao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryUserDao")
            .field("rows", &self.table.read().rows.len())
            .finish_non_exhaustive()
    }
}
