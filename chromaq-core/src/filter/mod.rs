//! Filter expressions for metadata and document conditions.
//!
//! Filters are built from matchers and combined into conditions, then
//! materialized into the nested structure the database's `where` and
//! `where_document` parameters expect:
//!
//! ```
//! use chromaq_core::filter::{and, cond, eq, gte, Materialize};
//!
//! // category = 'docs' AND year >= 2024
//! let filter = and([cond("category", eq("docs")), cond("year", gte(2024))]);
//! let json = serde_json::to_string(&filter.materialize()).unwrap();
//! assert_eq!(json, r#"{"$and":[{"category":{"$eq":"docs"}},{"year":{"$gte":2024}}]}"#);
//! ```

pub mod condition;
pub mod matcher;
pub mod value;

pub use condition::{
    and, and_field, and_matchers, cond, or, or_field, or_matchers, Condition, DocumentCondition,
    FieldMatch, Logical, Materialize, MetadataCondition,
};
pub use matcher::{
    contains, eq, gt, gte, is_in, lt, lte, ne, not_contains, not_in, Comparison, DocumentMatcher,
    MetadataMatcher, Number, Operand, Operator, Scalar, ScalarList,
};
pub use value::Value;

/// Materializes an optional filter; an absent filter becomes `{}`.
pub fn materialize_or_empty<M: Materialize>(filter: Option<&M>) -> Value {
    filter
        .map(Materialize::materialize)
        .unwrap_or_else(Value::empty_map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_filter_is_empty_map() {
        let none: Option<&MetadataCondition> = None;
        assert_eq!(materialize_or_empty(none), Value::empty_map());
    }

    #[test]
    fn test_present_filter() {
        let c = cond("k", ne("v"));
        let v = materialize_or_empty(Some(&c));
        assert!(!v.is_empty());
    }
}
