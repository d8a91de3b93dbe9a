//! Repository implementations for database access
//!
//! Each repository borrows the shared pool and issues exactly one
//! parameterized statement per method. Caller data only ever travels as bound
//! parameters.

/// Property columns, qualified so they stay unambiguous inside joins.
macro_rules! property_columns {
    () => {
        "properties.id, properties.owner_id, properties.title, properties.description, \
         properties.thumbnail_photo_url, properties.cover_photo_url, properties.cost_per_night, \
         properties.street, properties.city, properties.province, properties.post_code, \
         properties.country, properties.parking_spaces, properties.number_of_bathrooms, \
         properties.number_of_bedrooms"
    };
}

pub(crate) use property_columns;

pub mod properties;
pub mod reservations;
pub mod users;

pub use properties::PropertyRepo;
pub use reservations::ReservationRepo;
pub use users::UserRepo;
