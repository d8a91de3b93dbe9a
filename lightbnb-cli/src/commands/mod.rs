//! Command implementations for the lightbnb CLI

pub mod config;
pub mod properties;
pub mod reservations;
pub mod user;

use lightbnb_store::RentalDataStore;

use crate::output::Format;

pub use config::run_config;
pub use properties::run_properties;
pub use reservations::run_reservations;
pub use user::run_user;

/// Shared state handed to every database-backed command
pub struct Context {
    pub store: RentalDataStore,
    pub format: Format,
}
