//! Per-operation request criteria.
//!
//! A criteria is built once through its builder, then turned into a request
//! with [`Requestable::to_request`]. Materializing resolves embeddings and
//! ids through the given collaborators and validates the request shape, so
//! an invalid request never reaches the transport.

pub mod add;
pub mod delete;
pub mod get;
pub mod query;
pub mod update;
pub mod validate;

pub use add::{AddCriteria, AddCriteriaBuilder};
pub use delete::{DeleteCriteria, DeleteCriteriaBuilder};
pub use get::{GetCriteria, GetCriteriaBuilder};
pub use query::{QueryCriteria, QueryCriteriaBuilder};
pub use update::{UpdateCriteria, UpdateCriteriaBuilder};
pub use validate::Validate;

use crate::embedding::EmbeddingFunction;
use crate::error::Result;
use crate::filter::{materialize_or_empty, DocumentCondition, MetadataCondition, Value};

/// Criteria that can be materialized into a transport request.
pub trait Requestable {
    type Request;

    /// Resolves embeddings and ids, validates, and returns the request.
    fn to_request(
        &self,
        ids: &[String],
        embedding_function: Option<&dyn EmbeddingFunction>,
    ) -> Result<Self::Request>;
}

/// The metadata and document filters of a criteria, kept separate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    metadata: Option<MetadataCondition>,
    document: Option<DocumentCondition>,
}

impl Filters {
    pub fn set_metadata(&mut self, condition: impl Into<MetadataCondition>) {
        self.metadata = Some(condition.into());
    }

    pub fn set_document(&mut self, condition: impl Into<DocumentCondition>) {
        self.document = Some(condition.into());
    }

    #[inline]
    pub fn metadata(&self) -> Option<&MetadataCondition> {
        self.metadata.as_ref()
    }

    #[inline]
    pub fn document(&self) -> Option<&DocumentCondition> {
        self.document.as_ref()
    }

    /// Materialized `where`, `{}` when unset.
    pub fn where_metadata(&self) -> Value {
        materialize_or_empty(self.metadata.as_ref())
    }

    /// Materialized `where_document`, `{}` when unset.
    pub fn where_document(&self) -> Value {
        materialize_or_empty(self.document.as_ref())
    }

    /// True when neither filter materializes to anything.
    pub fn is_empty(&self) -> bool {
        self.where_metadata().is_empty() && self.where_document().is_empty()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{and, contains, eq};

    #[test]
    fn test_filters_default_is_empty() {
        let f = Filters::default();
        assert!(f.is_empty());
        assert_eq!(f.where_metadata(), Value::empty_map());
        assert_eq!(f.where_document(), Value::empty_map());
    }

    #[test]
    fn test_filters_set() {
        let mut f = Filters::default();
        f.set_metadata(("k", eq(1)));
        assert!(!f.is_empty());
        assert!(f.metadata().is_some());
        assert!(f.document().is_none());

        let mut f = Filters::default();
        f.set_document(contains("x"));
        assert!(!f.is_empty());
    }

    #[test]
    fn test_empty_composite_still_counts_as_filter() {
        let mut f = Filters::default();
        f.set_metadata(and(Vec::<MetadataCondition>::new()));
        assert!(!f.is_empty());
    }
}
