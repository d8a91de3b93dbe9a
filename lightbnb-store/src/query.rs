//! Positional WHERE-clause builder
//!
//! Filters are kept as an ordered list of predicate/parameter pairs. The
//! placeholder for each parameter is derived from its position in the list
//! when the clause is rendered, so adding or skipping a filter never requires
//! renumbering anything by hand.
//!
//! Predicate templates are `&'static str` with a single `{}` where the
//! placeholder goes. Only parameters carry caller data.

use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::Postgres;

/// A bound parameter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlParam {
    Text(String),
    Int(i32),
}

impl From<String> for SqlParam {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<i32> for SqlParam {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

/// Ordered predicates joined with AND
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    clauses: Vec<(&'static str, SqlParam)>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate. `template` must contain exactly one `{}`.
    pub fn push(&mut self, template: &'static str, param: impl Into<SqlParam>) -> &mut Self {
        debug_assert_eq!(template.matches("{}").count(), 1, "bad template: {template}");
        self.clauses.push((template, param.into()));
        self
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Parameters in bind order.
    pub fn params(&self) -> impl Iterator<Item = &SqlParam> {
        self.clauses.iter().map(|(_, param)| param)
    }

    /// Render `WHERE a AND b ...`, or an empty string when there are no
    /// predicates.
    pub fn where_clause(&self) -> String {
        if self.clauses.is_empty() {
            return String::new();
        }

        let predicates: Vec<String> = self
            .clauses
            .iter()
            .enumerate()
            .map(|(i, (template, _))| template.replacen("{}", &placeholder(i + 1), 1))
            .collect();

        format!("WHERE {}", predicates.join(" AND "))
    }

    /// Placeholder for the first parameter bound after the filters.
    pub fn next_placeholder(&self) -> String {
        placeholder(self.clauses.len() + 1)
    }

    /// Bind every filter parameter, in order, onto a query.
    pub fn bind<'q, O>(
        &self,
        query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        self.params().fold(query, |query, param| match param {
            SqlParam::Text(value) => query.bind(value.clone()),
            SqlParam::Int(value) => query.bind(*value),
        })
    }
}

fn placeholder(index: usize) -> String {
    format!("${}", index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_renders_nothing() {
        let filters = Filters::new();
        assert_eq!(filters.where_clause(), "");
        assert_eq!(filters.next_placeholder(), "$1");
    }

    #[test]
    fn first_predicate_opens_where_rest_use_and() {
        let mut filters = Filters::new();
        filters
            .push("owner_id = {}", 4)
            .push("cost_per_night >= {}", 5_000);

        assert_eq!(
            filters.where_clause(),
            "WHERE owner_id = $1 AND cost_per_night >= $2"
        );
        assert_eq!(filters.next_placeholder(), "$3");
    }

    #[test]
    fn params_keep_insertion_order() {
        let mut filters = Filters::new();
        filters.push("city ILIKE {}", "%van%").push("owner_id = {}", 9);

        let params: Vec<_> = filters.params().cloned().collect();
        assert_eq!(
            params,
            vec![SqlParam::Text("%van%".into()), SqlParam::Int(9)]
        );
    }
}
