//! Property repository
//!
//! - search: optional filters folded into one WHERE clause, cheapest first
//! - create: INSERT ... RETURNING

use sqlx::PgPool;

use super::property_columns;
use crate::error::Result;
use crate::models::{Limit, NewProperty, Property, PropertyListing, PropertySearch};
use crate::query::Filters;

const SEARCH_SELECT: &str = concat!(
    "SELECT ",
    property_columns!(),
    ", AVG(property_reviews.rating)::float8 AS average_rating \
     FROM properties \
     JOIN property_reviews ON properties.id = property_reviews.property_id"
);

const INSERT_SQL: &str = concat!(
    "INSERT INTO properties (title, description, owner_id, thumbnail_photo_url, cover_photo_url, \
     cost_per_night, street, city, province, post_code, country, parking_spaces, \
     number_of_bathrooms, number_of_bedrooms) \
     VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
     RETURNING ",
    property_columns!()
);

/// Full search statement for a set of filters. LIMIT is the last parameter.
pub fn search_sql(filters: &Filters) -> String {
    let mut sql = String::from(SEARCH_SELECT);

    let where_clause = filters.where_clause();
    if !where_clause.is_empty() {
        sql.push(' ');
        sql.push_str(&where_clause);
    }

    sql.push_str(" GROUP BY properties.id ORDER BY cost_per_night LIMIT ");
    sql.push_str(&filters.next_placeholder());
    sql
}

/// Property repository
pub struct PropertyRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PropertyRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Properties matching `search`, ordered by nightly cost ascending.
    pub async fn search(&self, search: &PropertySearch, limit: Limit) -> Result<Vec<PropertyListing>> {
        let filters = search.filters()?;
        let sql = search_sql(&filters);

        tracing::debug!(params = filters.len() + 1, "searching properties");

        let rows = filters
            .bind(sqlx::query_as::<_, PropertyListing>(&sql))
            .bind(limit.as_i64())
            .fetch_all(self.pool)
            .await?;

        Ok(rows)
    }

    /// Insert a property listing.
    pub async fn create(&self, property: &NewProperty) -> Result<Property> {
        let row = sqlx::query_as::<_, Property>(INSERT_SQL)
            .bind(&property.title)
            .bind(property.description.as_deref())
            .bind(property.owner_id)
            .bind(&property.thumbnail_photo_url)
            .bind(&property.cover_photo_url)
            .bind(property.cost_per_night)
            .bind(&property.street)
            .bind(&property.city)
            .bind(&property.province)
            .bind(&property.post_code)
            .bind(&property.country)
            .bind(property.parking_spaces)
            .bind(property.number_of_bathrooms)
            .bind(property.number_of_bedrooms)
            .fetch_one(self.pool)
            .await?;

        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfiltered_search() {
        let sql = search_sql(&Filters::new());
        assert!(sql.starts_with("SELECT properties.id,"));
        assert!(!sql.contains("WHERE"));
        assert!(sql.ends_with("GROUP BY properties.id ORDER BY cost_per_night LIMIT $1"));
    }

    #[test]
    fn filtered_search_puts_limit_last() {
        let filters = PropertySearch::default()
            .city("van")
            .price_range(Some(50), Some(150))
            .filters()
            .unwrap();
        let sql = search_sql(&filters);

        assert!(sql.contains(
            "property_reviews.property_id WHERE city ILIKE $1 AND cost_per_night >= $2 AND cost_per_night <= $3 GROUP BY"
        ));
        assert!(sql.ends_with("LIMIT $4"));
    }

    #[test]
    fn insert_binds_fourteen_columns() {
        assert!(INSERT_SQL.contains("$14)"));
        assert!(!INSERT_SQL.contains("$15"));
        assert!(INSERT_SQL.contains("RETURNING properties.id,"));
    }
}
