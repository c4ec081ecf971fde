//! Criteria for nearest-neighbor queries.

use tracing::debug;

use crate::criteria::validate::Validate;
use crate::criteria::{Filters, Requestable};
use crate::embedding::{resolve_embeddings, Embedding, EmbeddingFunction};
use crate::error::Result;
use crate::filter::{DocumentCondition, MetadataCondition, Value};
use crate::include::Include;
use crate::request::QueryRequest;

pub const DEFAULT_N_RESULTS: usize = 10;

/// A nearest-neighbor query.
///
/// The slice passed to [`to_request`](Requestable::to_request) holds the
/// query texts, which are embedded only when the criteria carries no
/// embeddings of its own.
///
/// # Example
///
/// ```
/// use chromaq_core::filter::{contains, gt};
/// use chromaq_core::{Embedding, QueryCriteria, Requestable};
///
/// let request = QueryCriteria::builder()
///     .where_metadata(("year", gt(2020)))
///     .where_document(contains("rust"))
///     .with_number_of_results(3)
///     .with_embeddings([Embedding::from([0.1, 0.2])])
///     .build()
///     .to_request(&[], None)
///     .unwrap();
/// assert_eq!(request.n_results, 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QueryCriteria {
    filters: Filters,
    n_results: usize,
    include: Vec<Include>,
    embeddings: Vec<Embedding>,
}

impl QueryCriteria {
    pub fn builder() -> QueryCriteriaBuilder {
        QueryCriteriaBuilder::default()
    }

    pub fn where_metadata(&self) -> Value {
        self.filters.where_metadata()
    }

    pub fn where_document(&self) -> Value {
        self.filters.where_document()
    }

    #[inline]
    pub fn n_results(&self) -> usize {
        self.n_results
    }

    #[inline]
    pub fn include(&self) -> &[Include] {
        &self.include
    }

    #[inline]
    pub fn embeddings(&self) -> &[Embedding] {
        &self.embeddings
    }

    #[inline]
    pub fn has_embeddings(&self) -> bool {
        !self.embeddings.is_empty()
    }
}

impl Requestable for QueryCriteria {
    type Request = QueryRequest;

    fn to_request(
        &self,
        texts: &[String],
        embedding_function: Option<&dyn EmbeddingFunction>,
    ) -> Result<QueryRequest> {
        let query_embeddings = resolve_embeddings(&self.embeddings, texts, embedding_function)?;
        let request = QueryRequest {
            where_metadata: self.where_metadata(),
            where_document: self.where_document(),
            query_embeddings,
            n_results: self.n_results,
            include: self.include.clone(),
        };
        request.validate()?;
        debug!(
            queries = request.query_embeddings.len(),
            n_results = self.n_results,
            "materialized query request"
        );
        Ok(request)
    }
}

/// Builder for [`QueryCriteria`].
#[derive(Debug, Clone)]
pub struct QueryCriteriaBuilder {
    inner: QueryCriteria,
}

impl Default for QueryCriteriaBuilder {
    fn default() -> Self {
        Self {
            inner: QueryCriteria {
                filters: Filters::default(),
                n_results: DEFAULT_N_RESULTS,
                include: Include::defaults(),
                embeddings: Vec::new(),
            },
        }
    }
}

impl QueryCriteriaBuilder {
    pub fn where_metadata(mut self, condition: impl Into<MetadataCondition>) -> Self {
        self.inner.filters.set_metadata(condition);
        self
    }

    pub fn where_document(mut self, condition: impl Into<DocumentCondition>) -> Self {
        self.inner.filters.set_document(condition);
        self
    }

    pub fn with_number_of_results(mut self, n_results: usize) -> Self {
        self.inner.n_results = n_results;
        self
    }

    pub fn with_embeddings<I, E>(mut self, embeddings: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Embedding>,
    {
        self.inner.embeddings = embeddings.into_iter().map(Into::into).collect();
        self
    }

    pub fn include<I: IntoIterator<Item = Include>>(mut self, include: I) -> Self {
        self.inner.include = include.into_iter().collect();
        self
    }

    pub fn build(self) -> QueryCriteria {
        self.inner
    }
}
