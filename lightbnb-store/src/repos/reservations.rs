//! Reservation repository

use sqlx::PgPool;

use super::property_columns;
use crate::error::Result;
use crate::models::{Limit, ReservationListing, UserId};

/// Past stays for one guest, oldest first, with the property's average rating.
const PAST_RESERVATIONS_SQL: &str = concat!(
    "SELECT reservations.id AS reservation_id, reservations.guest_id, reservations.property_id, \
     reservations.start_date, reservations.end_date, ",
    property_columns!(),
    ", AVG(property_reviews.rating)::float8 AS average_rating \
     FROM reservations \
     JOIN properties ON reservations.property_id = properties.id \
     JOIN property_reviews ON properties.id = property_reviews.property_id \
     WHERE reservations.guest_id = $1 AND reservations.end_date < now()::date \
     GROUP BY reservations.id, properties.id \
     ORDER BY reservations.start_date \
     LIMIT $2"
);

/// Reservation repository
pub struct ReservationRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ReservationRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Reservations for `guest_id` that ended before today.
    pub async fn list_past_for_guest(
        &self,
        guest_id: UserId,
        limit: Limit,
    ) -> Result<Vec<ReservationListing>> {
        let rows = sqlx::query_as::<_, ReservationListing>(PAST_RESERVATIONS_SQL)
            .bind(guest_id)
            .bind(limit.as_i64())
            .fetch_all(self.pool)
            .await?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_guest_and_limit_are_parameters() {
        assert!(PAST_RESERVATIONS_SQL.contains("reservations.guest_id = $1"));
        assert!(PAST_RESERVATIONS_SQL.ends_with("LIMIT $2"));
        assert!(!PAST_RESERVATIONS_SQL.contains("$3"));
    }

    #[test]
    fn reservation_id_is_aliased() {
        // Property::from_row reads the bare `id` column.
        assert!(PAST_RESERVATIONS_SQL.contains("reservations.id AS reservation_id"));
        assert!(PAST_RESERVATIONS_SQL.contains("properties.id,"));
    }
}
