//! Criteria for deleting items by id and/or filter.

use tracing::debug;

use crate::criteria::validate::Validate;
use crate::criteria::{Filters, Requestable};
use crate::embedding::EmbeddingFunction;
use crate::error::Result;
use crate::filter::{DocumentCondition, MetadataCondition, Value};
use crate::request::DeleteRequest;

/// Filters selecting what to delete.
///
/// A delete must target something: either explicit ids or at least one
/// non-empty filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteCriteria {
    filters: Filters,
}

impl DeleteCriteria {
    pub fn builder() -> DeleteCriteriaBuilder {
        DeleteCriteriaBuilder::default()
    }

    pub fn where_metadata(&self) -> Value {
        self.filters.where_metadata()
    }

    pub fn where_document(&self) -> Value {
        self.filters.where_document()
    }

    #[inline]
    pub fn filters(&self) -> &Filters {
        &self.filters
    }
}

impl Requestable for DeleteCriteria {
    type Request = DeleteRequest;

    fn to_request(
        &self,
        ids: &[String],
        _embedding_function: Option<&dyn EmbeddingFunction>,
    ) -> Result<DeleteRequest> {
        let request = DeleteRequest {
            ids: ids.to_vec(),
            where_metadata: self.where_metadata(),
            where_document: self.where_document(),
        };
        request.validate()?;
        debug!(ids = request.ids.len(), "materialized delete request");
        Ok(request)
    }
}

/// Builder for [`DeleteCriteria`].
#[derive(Debug, Clone, Default)]
pub struct DeleteCriteriaBuilder {
    inner: DeleteCriteria,
}

impl DeleteCriteriaBuilder {
    pub fn where_metadata(mut self, condition: impl Into<MetadataCondition>) -> Self {
        self.inner.filters.set_metadata(condition);
        self
    }

    pub fn where_document(mut self, condition: impl Into<DocumentCondition>) -> Self {
        self.inner.filters.set_document(condition);
        self
    }

    pub fn build(self) -> DeleteCriteria {
        self.inner
    }
}
