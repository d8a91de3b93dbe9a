//! Domain models
//!
//! Row types decode straight from query results. Input types validate at
//! construction and return `ValidationError` instead of panicking.

pub mod email;
pub mod limit;
pub mod money;
pub mod property;
pub mod reservation;
pub mod search;
pub mod user;
pub mod validation;

pub use email::Email;
pub use limit::{Limit, DEFAULT_LIMIT};
pub use money::Cents;
pub use property::{NewProperty, Property, PropertyId, PropertyListing};
pub use reservation::{Reservation, ReservationId, ReservationListing};
pub use search::PropertySearch;
pub use user::{NewUser, User, UserId};
pub use validation::ValidationError;
