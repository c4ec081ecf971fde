//! Criteria for fetching items by id and/or filter.

use tracing::debug;

use crate::criteria::{Filters, Requestable};
use crate::embedding::EmbeddingFunction;
use crate::error::Result;
use crate::filter::{DocumentCondition, MetadataCondition, Value};
use crate::include::Include;
use crate::request::GetRequest;

pub const DEFAULT_LIMIT: usize = 10;
pub const DEFAULT_OFFSET: usize = 0;

/// Filters and paging for a get call. No filter is mandatory.
#[derive(Debug, Clone, PartialEq)]
pub struct GetCriteria {
    filters: Filters,
    include: Vec<Include>,
    limit: usize,
    offset: usize,
}

impl GetCriteria {
    pub fn builder() -> GetCriteriaBuilder {
        GetCriteriaBuilder::default()
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

    #[inline]
    pub fn include(&self) -> &[Include] {
        &self.include
    }

    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl Requestable for GetCriteria {
    type Request = GetRequest;

    fn to_request(
        &self,
        ids: &[String],
        _embedding_function: Option<&dyn EmbeddingFunction>,
    ) -> Result<GetRequest> {
        let request = GetRequest {
            ids: ids.to_vec(),
            where_metadata: self.where_metadata(),
            where_document: self.where_document(),
            include: self.include.clone(),
            limit: Some(self.limit),
            offset: Some(self.offset),
        };
        debug!(
            ids = request.ids.len(),
            limit = self.limit,
            offset = self.offset,
            "materialized get request"
        );
        Ok(request)
    }
}

/// Builder for [`GetCriteria`].
#[derive(Debug, Clone)]
pub struct GetCriteriaBuilder {
    inner: GetCriteria,
}

impl Default for GetCriteriaBuilder {
    fn default() -> Self {
        Self {
            inner: GetCriteria {
                filters: Filters::default(),
                include: Include::defaults(),
                limit: DEFAULT_LIMIT,
                offset: DEFAULT_OFFSET,
            },
        }
    }
}

impl GetCriteriaBuilder {
    /// Sets the metadata filter; accepts a condition or a `(field, matcher)` pair.
    pub fn where_metadata(mut self, condition: impl Into<MetadataCondition>) -> Self {
        self.inner.filters.set_metadata(condition);
        self
    }

    /// Sets the document filter; accepts a condition or a document matcher.
    pub fn where_document(mut self, condition: impl Into<DocumentCondition>) -> Self {
        self.inner.filters.set_document(condition);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.inner.limit = limit;
        self
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.inner.offset = offset;
        self
    }

    pub fn include<I: IntoIterator<Item = Include>>(mut self, include: I) -> Self {
        self.inner.include = include.into_iter().collect();
        self
    }

    pub fn build(self) -> GetCriteria {
        self.inner
    }
}
