//! Property search options

use serde::Deserialize;

use super::{Cents, UserId, ValidationError};
use crate::query::Filters;

/// Optional filters for `get_all_properties`
///
/// Prices are whole dollars; they are converted to cents before binding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PropertySearch {
    /// Case-insensitive substring of the city
    pub city: Option<String>,
    pub owner_id: Option<UserId>,
    pub minimum_price_per_night: Option<i32>,
    pub maximum_price_per_night: Option<i32>,
}

impl PropertySearch {
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn owner(mut self, owner_id: UserId) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn price_range(mut self, minimum: Option<i32>, maximum: Option<i32>) -> Self {
        self.minimum_price_per_night = minimum;
        self.maximum_price_per_night = maximum;
        self
    }

    /// Build the WHERE predicates.
    ///
    /// Order is fixed: city, owner, minimum price, maximum price. A blank city
    /// (empty or whitespace only) is treated as no city filter; any other
    /// value is bound as given.
    pub fn filters(&self) -> Result<Filters, ValidationError> {
        let mut filters = Filters::new();

        if let Some(city) = self.city.as_deref().filter(|c| !c.trim().is_empty()) {
            filters.push("city ILIKE {}", format!("%{}%", city));
        }

        if let Some(owner_id) = self.owner_id {
            filters.push("owner_id = {}", owner_id);
        }

        if let Some(dollars) = self.minimum_price_per_night {
            let cents = Cents::from_dollars("minimum_price_per_night", dollars)?;
            filters.push("cost_per_night >= {}", cents.get());
        }

        if let Some(dollars) = self.maximum_price_per_night {
            let cents = Cents::from_dollars("maximum_price_per_night", dollars)?;
            filters.push("cost_per_night <= {}", cents.get());
        }

        Ok(filters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::SqlParam;
    use proptest::prelude::*;

    #[test]
    fn no_options_no_where() {
        let filters = PropertySearch::default().filters().unwrap();
        assert!(filters.is_empty());
        assert_eq!(filters.where_clause(), "");
    }

    #[test]
    fn city_is_wrapped_in_wildcards() {
        let filters = PropertySearch::default().city("van").filters().unwrap();
        assert_eq!(filters.where_clause(), "WHERE city ILIKE $1");
        assert_eq!(
            filters.params().cloned().collect::<Vec<_>>(),
            vec![SqlParam::Text("%van%".into())]
        );
    }

    #[test]
    fn city_is_bound_untrimmed() {
        let filters = PropertySearch::default().city(" York").filters().unwrap();
        assert_eq!(
            filters.params().cloned().collect::<Vec<_>>(),
            vec![SqlParam::Text("% York%".into())]
        );
    }

    #[test]
    fn blank_city_is_ignored() {
        let filters = PropertySearch::default().city("   ").filters().unwrap();
        assert!(filters.is_empty());
    }

    #[test]
    fn prices_are_converted_to_cents() {
        let filters = PropertySearch::default()
            .price_range(Some(50), Some(150))
            .filters()
            .unwrap();

        assert_eq!(
            filters.where_clause(),
            "WHERE cost_per_night >= $1 AND cost_per_night <= $2"
        );
        assert_eq!(
            filters.params().cloned().collect::<Vec<_>>(),
            vec![SqlParam::Int(5_000), SqlParam::Int(15_000)]
        );
    }

    #[test]
    fn owner_without_city_opens_where() {
        let filters = PropertySearch::default()
            .owner(2)
            .price_range(None, Some(200))
            .filters()
            .unwrap();
        assert_eq!(
            filters.where_clause(),
            "WHERE owner_id = $1 AND cost_per_night <= $2"
        );
        assert_eq!(filters.next_placeholder(), "$3");
    }

    #[test]
    fn all_filters_in_fixed_order() {
        let filters = PropertySearch::default()
            .price_range(Some(10), Some(20))
            .owner(5)
            .city("Vancouver")
            .filters()
            .unwrap();
        assert_eq!(
            filters.where_clause(),
            "WHERE city ILIKE $1 AND owner_id = $2 AND cost_per_night >= $3 AND cost_per_night <= $4"
        );
    }

    #[test]
    fn overflowing_price_is_rejected() {
        let err = PropertySearch::default()
            .price_range(Some(i32::MAX), None)
            .filters()
            .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OutOfRange {
                field: "minimum_price_per_night",
                ..
            }
        ));
    }

    #[test]
    fn deserializes_partial_query() {
        let search: PropertySearch =
            serde_json::from_str(r#"{"city": "van", "maximum_price_per_night": 150}"#).unwrap();
        assert_eq!(search.city.as_deref(), Some("van"));
        assert_eq!(search.owner_id, None);
        assert_eq!(search.maximum_price_per_night, Some(150));
    }

    fn placeholder_numbers(clause: &str) -> Vec<usize> {
        clause
            .split('$')
            .skip(1)
            .map(|rest| {
                let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
                digits.parse().unwrap()
            })
            .collect()
    }

    proptest! {
        /// Property: placeholders are numbered 1..=n in order, LIMIT gets n + 1
        #[test]
        fn prop_placeholders_follow_position(
            city in proptest::option::of("[a-zA-Z ]{0,12}"),
            owner_id in proptest::option::of(1..10_000i32),
            minimum in proptest::option::of(0..100_000i32),
            maximum in proptest::option::of(0..100_000i32),
        ) {
            let search = PropertySearch {
                city,
                owner_id,
                minimum_price_per_night: minimum,
                maximum_price_per_night: maximum,
            };
            let filters = search.filters().unwrap();
            let n = filters.len();

            let numbers = placeholder_numbers(&filters.where_clause());
            prop_assert_eq!(numbers, (1..=n).collect::<Vec<_>>());
            prop_assert_eq!(filters.next_placeholder(), format!("${}", n + 1));
            prop_assert_eq!(filters.params().count(), n);

            let expected = search.owner_id.is_some() as usize
                + search.minimum_price_per_night.is_some() as usize
                + search.maximum_price_per_night.is_some() as usize
                + search.city.as_deref().map_or(false, |c| !c.trim().is_empty()) as usize;
            prop_assert_eq!(n, expected);
        }
    }
}
