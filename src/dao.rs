//! User data access.
//!
//! Every failed statement is logged with the driver error and surfaced as
//! the generic `database error`. Only two conditions get their own kind: a
//! missing row (not found) and a duplicate email (bad request).

use async_trait::async_trait;
use sqlx::PgPool;

use crate::cache::UserCache;
use crate::date;
use crate::db;
use crate::error::AppError;
use crate::models::User;

#[async_trait]
pub trait UserDao: Send + Sync {
    /// Loads the row with this id. The password is never loaded.
    async fn get(&self, id: i64) -> Result<User, AppError>;

    /// Inserts the record and writes the generated id back onto it.
    async fn save(&self, user: &mut User) -> Result<(), AppError>;

    /// Writes first name, last name and email for `user.id`.
    /// Succeeds even when no row matches.
    async fn update(&self, user: &User) -> Result<(), AppError>;

    /// Removes the row. Succeeds even when no row matches.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Every user with this status, ordered by id. Never empty on success.
    async fn find_by_status(&self, status: &str) -> Result<Vec<User>, AppError>;

    /// Loads the row for this email including its password hash.
    async fn find_by_email(&self, email: &str) -> Result<User, AppError>;
}

pub struct PgUserDao {
    pool: PgPool,
    cache: UserCache,
}

impl PgUserDao {
    pub fn new(pool: PgPool, cache: UserCache) -> Self {
        Self { pool, cache }
    }

    pub fn cache(&self) -> &UserCache {
        &self.cache
    }
}

#[async_trait]
impl UserDao for PgUserDao {
    async fn get(&self, id: i64) -> Result<User, AppError> {
        if let Some(user) = self.cache.get(id) {
            tracing::debug!(user_id = id, "user served from cache");
            return Ok(user);
        }

        let seen = self.cache.generation(id);
        let user = db::users::find_by_id(&self.pool, id)
            .await
            .map_err(|e| match e {
                sqlx::Error::RowNotFound => AppError::NotFound(format!("user {id} not found")),
                _ => {
                    tracing::error!(error = %e, user_id = id, "error when trying to get user by id");
                    AppError::database()
                }
            })?;

        self.cache.put(&user, seen);
        Ok(user)
    }

    async fn save(&self, user: &mut User) -> Result<(), AppError> {
        if user.date_created.is_empty() {
            user.date_created = date::now_db_format();
        }

        let id = db::users::insert(&self.pool, user)
            .await
            .map_err(|e| duplicate_email_or_database(e, &user.email, "error when trying to save user"))?;

        user.id = id;
        tracing::info!(user_id = id, "user saved");
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<(), AppError> {
        db::users::update(&self.pool, user)
            .await
            .map_err(|e| duplicate_email_or_database(e, &user.email, "error when trying to update user"))?;

        self.cache.invalidate(user.id);
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        db::users::delete(&self.pool, id).await.map_err(|e| {
            tracing::error!(error = %e, user_id = id, "error when trying to delete user");
            AppError::database()
        })?;

        self.cache.invalidate(id);
        Ok(())
    }

    async fn find_by_status(&self, status: &str) -> Result<Vec<User>, AppError> {
        let users = db::users::find_by_status(&self.pool, status)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, status, "error when trying to find users by status");
                AppError::database()
            })?;

        if users.is_empty() {
            return Err(AppError::NotFound(format!(
                "no users matching status {status}"
            )));
        }
        Ok(users)
    }

    async fn find_by_email(&self, email: &str) -> Result<User, AppError> {
        db::users::find_by_email(&self.pool, email)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "error when trying to find user by email");
                AppError::database()
            })?
            .ok_or_else(|| AppError::NotFound(format!("no user with email {email}")))
    }
}

fn duplicate_email_or_database(err: sqlx::Error, email: &str, context: &str) -> AppError {
    match err {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::BadRequest(format!("email {email} already exists"))
        }
        _ => {
            tracing::error!(error = %err, "{context}");
            AppError::database()
        }
    }
}
