//! lightbnb-store: data-access layer for the LightBnB booking app
//!
//! Looks up and creates users, lists a guest's past reservations, searches
//! properties with optional filters, and inserts property listings. Every
//! operation is one parameterized statement against a shared PostgreSQL pool.
//!
//! ```ignore
//! use lightbnb_store::{DbConfig, PropertySearch, RentalDataStore};
//!
//! let store = RentalDataStore::from_config(&DbConfig::load(None)?);
//! let cheap = store
//!     .get_all_properties(&PropertySearch::default().city("van").price_range(None, Some(150)), 10)
//!     .await?;
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod pool;
pub mod query;
pub mod repos;
pub mod store;

pub use config::DbConfig;
pub use error::{Result, StoreError};
pub use models::{
    Cents, Email, Limit, NewProperty, NewUser, Property, PropertyListing, PropertySearch,
    Reservation, ReservationListing, User, ValidationError,
};
pub use store::RentalDataStore;
