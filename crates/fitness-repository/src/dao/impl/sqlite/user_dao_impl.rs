//! `SqliteUserDao`, users in the `users` table.

use crate::dao::UserDao;
use crate::DatabasePoolInterface;
use async_trait::async_trait;
use chrono::NaiveDate;
use fitness_core::{FitnessResult, Store, UserId};
use fitness_domain::User;
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

const SELECT_USERS: &str = "SELECT id, first_name, last_name, birthdate, email FROM users";

/// User DAO backed by SQLite.
#[derive(Component, Clone)]
#[shaku(interface = UserDao)]
pub struct SqliteUserDao {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl SqliteUserDao {
    /// Creates a new SQLite user DAO.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    first_name: String,
    last_name: String,
    birthdate: NaiveDate,
    email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: Some(UserId(row.id)),
            first_name: row.first_name,
            last_name: row.last_name,
            birthdate: row.birthdate,
            email: row.email,
        }
    }
}

#[async_trait]
impl Store<User, UserId> for SqliteUserDao {
    async fn save(&self, user: User) -> FitnessResult<User> {
        debug!("Saving user: {:?}", user.id);

        let result = match user.id {
            Some(id) => {
                sqlx::query(
                    r#"
                    INSERT OR REPLACE INTO users (id, first_name, last_name, birthdate, email)
                    VALUES (?, ?, ?, ?, ?)
                    "#,
                )
                .bind(id.0)
                .bind(&user.first_name)
                .bind(&user.last_name)
                .bind(user.birthdate)
                .bind(&user.email)
                .execute(self.pool.inner())
                .await?
            }
            None => {
                sqlx::query(
                    r#"
                    INSERT INTO users (first_name, last_name, birthdate, email)
                    VALUES (?, ?, ?, ?)
                    "#,
                )
                .bind(&user.first_name)
                .bind(&user.last_name)
                .bind(user.birthdate)
                .bind(&user.email)
                .execute(self.pool.inner())
                .await?
            }
        };

        let id = user.id.unwrap_or(UserId(result.last_insert_rowid()));
        Ok(user.with_id(id))
    }

    async fn find_by_id(&self, id: UserId) -> FitnessResult<Option<User>> {
        debug!("Finding user by id: {}", id);

        let row = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USERS} WHERE id = ?"))
            .bind(id.0)
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(row.map(User::from))
    }

    async fn find_all(&self) -> FitnessResult<Vec<User>> {
        debug!("Finding all users");

        let rows = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USERS} ORDER BY id"))
            .fetch_all(self.pool.inner())
            .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn exists_by_id(&self, id: UserId) -> FitnessResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE id = ?")
            .bind(id.0)
            .fetch_one(self.pool.inner())
            .await?;

        Ok(count > 0)
    }

    async fn delete_by_id(&self, id: UserId) -> FitnessResult<()> {
        debug!("Deleting user: {}", id);

        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.0)
            .execute(self.pool.inner())
            .await?;

        Ok(())
    }
}

#[async_trait]
impl UserDao for SqliteUserDao {
    async fn find_by_email(&self, email: &str) -> FitnessResult<Option<User>> {
        debug!("Finding user by email: {}", email);

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "{SELECT_USERS} WHERE email = ? ORDER BY id LIMIT 1"
        ))
        .bind(email)
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(User::from))
    }

    async fn find_by_birthdate_before(&self, date: NaiveDate) -> FitnessResult<Vec<User>> {
        debug!("Finding users born before: {}", date);

        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "{SELECT_USERS} WHERE birthdate < ? ORDER BY id"
        ))
        .bind(date)
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }
}

impl std::fmt::Debug for SqliteUserDao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteUserDao").finish_non_exhaustive()
    }
}
