//! User rows

use serde::Serialize;
use sqlx::FromRow;

use super::{Email, ValidationError};

/// Primary key of `users`
pub type UserId = i32;

/// User record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    /// Stored as supplied by the caller (the web layer hashes it first).
    #[serde(skip_serializing)]
    pub password: String,
}

/// Payload for `add_user`
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: Email,
    pub password: String,
}

impl NewUser {
    /// Validate raw form input into an insertable user.
    pub fn new(
        name: impl Into<String>,
        email: &str,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }

        let password = password.into();
        if password.is_empty() {
            return Err(ValidationError::Empty { field: "password" });
        }

        Ok(Self {
            name,
            email: Email::new(email)?,
            password,
        })
    }
}
