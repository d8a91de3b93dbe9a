//! RentalDataStore: the six data-access operations used by the web layer
//!
//! Each operation is an independent future over the shared pool. Database
//! failures are logged here, once, and then returned to the caller, so "no
//! rows" (`Ok(None)` / empty `Vec`) is always distinguishable from "query
//! failed" (`Err`).

use sqlx::PgPool;
use tracing::instrument;

use crate::config::DbConfig;
use crate::error::{Result, StoreError};
use crate::models::{
    Limit, NewProperty, NewUser, Property, PropertyListing, PropertySearch, ReservationListing,
    User, UserId,
};
use crate::pool::create_pool;
use crate::repos::{PropertyRepo, ReservationRepo, UserRepo};

/// Handle to the LightBnB database
#[derive(Debug, Clone)]
pub struct RentalDataStore {
    pool: PgPool,
}

impl RentalDataStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build a store with a lazily-connecting pool.
    pub fn from_config(config: &DbConfig) -> Self {
        Self::new(create_pool(config))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get a single user by email, case-insensitively.
    #[instrument(skip_all)]
    pub async fn get_user_with_email(&self, email: &str) -> Result<Option<User>> {
        logged("get_user_with_email", UserRepo::new(&self.pool).find_by_email(email).await)
    }

    /// Get a single user by id.
    #[instrument(skip(self))]
    pub async fn get_user_with_id(&self, id: UserId) -> Result<Option<User>> {
        logged("get_user_with_id", UserRepo::new(&self.pool).find_by_id(id).await)
    }

    /// Add a new user, returning the stored row.
    #[instrument(skip_all)]
    pub async fn add_user(&self, user: &NewUser) -> Result<User> {
        logged("add_user", UserRepo::new(&self.pool).create(user).await)
    }

    /// Past reservations for a guest, oldest first, at most `limit` rows.
    ///
    /// `limit` is capped at 100 (0 returns nothing); [`crate::models::DEFAULT_LIMIT`] is the usual value.
    #[instrument(skip(self, limit))]
    pub async fn get_all_reservations(
        &self,
        guest_id: UserId,
        limit: u32,
    ) -> Result<Vec<ReservationListing>> {
        let limit = Limit::new(limit);
        logged(
            "get_all_reservations",
            ReservationRepo::new(&self.pool)
                .list_past_for_guest(guest_id, limit)
                .await,
        )
    }

    /// Properties matching `options`, cheapest first, at most `limit` rows.
    #[instrument(skip(self, limit))]
    pub async fn get_all_properties(
        &self,
        options: &PropertySearch,
        limit: u32,
    ) -> Result<Vec<PropertyListing>> {
        let limit = Limit::new(limit);
        logged(
            "get_all_properties",
            PropertyRepo::new(&self.pool).search(options, limit).await,
        )
    }

    /// Add a property listing, returning the stored row.
    #[instrument(skip_all)]
    pub async fn add_property(&self, property: &NewProperty) -> Result<Property> {
        logged("add_property", PropertyRepo::new(&self.pool).create(property).await)
    }
}

/// Log database failures at the store boundary and pass the result through.
fn logged<T>(operation: &'static str, result: Result<T>) -> Result<T> {
    match &result {
        Err(StoreError::Database(err)) => {
            tracing::error!(operation, error = %err, "query failed");
        }
        Err(err) => {
            tracing::debug!(operation, error = %err, "rejected before query");
        }
        Ok(_) => {}
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_store() -> RentalDataStore {
        RentalDataStore::from_config(&DbConfig {
            host: "127.0.0.1".into(),
            port: 1,
            max_connections: 1,
            ..DbConfig::default()
        })
    }

    #[tokio::test]
    async fn connection_failure_is_an_error_not_empty() {
        let store = unreachable_store();
        let err = store.get_user_with_id(1).await.unwrap_err();
        assert!(matches!(err, StoreError::Database(_)));
    }

    #[tokio::test]
    async fn invalid_search_fails_before_querying() {
        let store = unreachable_store();
        let search = PropertySearch::default().price_range(None, Some(i32::MAX));
        let err = store.get_all_properties(&search, 10).await.unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }
}
