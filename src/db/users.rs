use sqlx::PgPool;

use crate::models::User;

pub async fn insert(pool: &PgPool, user: &User) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as(
        "INSERT INTO users (first_name, last_name, email, date_created, status, password)
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
    )
    .bind(&user.first_name)
    .bind(&user.last_name)
    .bind(&user.email)
    .bind(&user.date_created)
    .bind(&user.status)
    .bind(&user.password)
    .fetch_one(pool)
    .await?;
    Ok(row.0)
}

/// Fails with `RowNotFound` when no row has this id.
pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT id, first_name, last_name, email, date_created, status
         FROM users WHERE id = $1",
    )
    .bind(id)
    .fetch_one(pool)
    .await
}

pub async fn update(pool: &PgPool, user: &User) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET first_name = $2, last_name = $3, email = $4 WHERE id = $1")
        .bind(user.id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn find_by_status(pool: &PgPool, status: &str) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT id, first_name, last_name, email, date_created, status
         FROM users WHERE status = $1 ORDER BY id",
    )
    .bind(status)
    .fetch_all(pool)
    .await
}

/// Includes the password hash, for credential checks only.
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}
