//! User repository
//!
//! - find_by_email: case-folded comparison
//! - find_by_id: primary key lookup
//! - create: INSERT ... RETURNING

use sqlx::PgPool;

use crate::error::Result;
use crate::models::{Email, NewUser, User, UserId};

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Look up a user by email, ignoring case on both sides.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE lower(email) = $1
            "#,
        )
        .bind(Email::fold(email))
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Look up a user by primary key.
    pub async fn find_by_id(&self, id: UserId) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Insert a user. The email is stored already lowercased.
    pub async fn create(&self, user: &NewUser) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password
            "#,
        )
        .bind(&user.name)
        .bind(user.email.as_str())
        .bind(&user.password)
        .fetch_one(self.pool)
        .await?;

        Ok(user)
    }
}
