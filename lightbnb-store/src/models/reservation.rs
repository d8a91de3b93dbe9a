//! Reservation rows

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

use super::{Property, PropertyId, UserId};

/// Primary key of `reservations`
pub type ReservationId = i32;

/// Reservation record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub guest_id: UserId,
    pub property_id: PropertyId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// A past reservation together with the property stayed at
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReservationListing {
    pub reservation: Reservation,
    pub property: Property,
    pub average_rating: Option<f64>,
}

/// Reservation columns are selected with a `reservation_` alias on `id` so
/// they don't collide with the joined property's `id`.
impl<'r> FromRow<'r, PgRow> for ReservationListing {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            reservation: Reservation {
                id: row.try_get("reservation_id")?,
                guest_id: row.try_get("guest_id")?,
                property_id: row.try_get("property_id")?,
                start_date: row.try_get("start_date")?,
                end_date: row.try_get("end_date")?,
            },
            property: Property::from_row(row)?,
            average_rating: row.try_get("average_rating")?,
        })
    }
}
