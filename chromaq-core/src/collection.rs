//! Data-plane operations on one collection.
//!
//! A `Collection` runs criteria through a [`Transport`]:
//! - materializes and validates the request
//! - executes it against the configured collection id
//! - wraps the outcome in a [`Response`]

use std::fmt;
use std::sync::Arc;

use tracing::warn;

use crate::criteria::{
    AddCriteria, DeleteCriteria, GetCriteria, QueryCriteria, Requestable, UpdateCriteria,
};
use crate::embedding::EmbeddingFunction;
use crate::error::{Error, Result};
use crate::id_generator::{IdGenerator, Sha256IdGenerator};
use crate::request::GetRequest;
use crate::results::{GetResult, QueryResult, RawOutcome, Response};
use crate::transport::Transport;

/// Prefix of the failure message when an add with generated ids is rejected.
pub const ADD_FAILED: &str = "Failing adding new elements to collection.";

/// Failure message when a filtered `get_all_matching` finds nothing.
pub const NOTHING_FOUND: &str = "Nothing was found";

/// Configuration for a collection.
#[derive(Clone)]
pub struct CollectionConfig {
    /// Id of the collection on the database side.
    pub collection_id: String,
    /// Generator used by [`Collection::add_auto`] when the criteria has none.
    pub id_generator: Arc<dyn IdGenerator>,
}

impl CollectionConfig {
    /// Creates a config using the SHA-256 id generator.
    pub fn new(collection_id: impl Into<String>) -> Self {
        Self {
            collection_id: collection_id.into(),
            id_generator: Arc::new(Sha256IdGenerator),
        }
    }

    /// Sets the default id generator. Chainable.
    pub fn with_id_generator(mut self, generator: impl IdGenerator + 'static) -> Self {
        self.id_generator = Arc::new(generator);
        self
    }
}

impl fmt::Debug for CollectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionConfig")
            .field("collection_id", &self.collection_id)
            .finish_non_exhaustive()
    }
}

/// A handle on one collection, bound to a transport.
///
/// # Example
///
/// ```
/// use chromaq_core::request::*;
/// use chromaq_core::{
///     AddCriteria, Collection, CollectionConfig, Embedding, RawOutcome, Result, Transport,
/// };
///
/// struct AcceptAll;
///
/// impl Transport for AcceptAll {
///     fn add(&self, _: &AddRequest, _: &str) -> Result<RawOutcome> {
///         Ok(RawOutcome::Value(serde_json::json!(true)))
///     }
///     fn get(&self, _: &GetRequest, _: &str) -> Result<RawOutcome> { Ok(RawOutcome::Empty) }
///     fn query(&self, _: &QueryRequest, _: &str) -> Result<RawOutcome> { Ok(RawOutcome::Empty) }
///     fn update(&self, _: &UpdateRequest, _: &str) -> Result<RawOutcome> { Ok(RawOutcome::Empty) }
///     fn upsert(&self, _: &AddRequest, _: &str) -> Result<RawOutcome> { Ok(RawOutcome::Empty) }
///     fn delete(&self, _: &DeleteRequest, _: &str) -> Result<RawOutcome> { Ok(RawOutcome::Empty) }
///     fn count(&self, _: &str) -> Result<RawOutcome> { Ok(RawOutcome::Empty) }
/// }
///
/// let collection = Collection::new(AcceptAll, CollectionConfig::new("my-collection"));
/// let criteria = AddCriteria::builder()
///     .with_embeddings([Embedding::from([1.0, 2.0, 3.0])])
///     .with_documents(["first document"])
///     .build();
///
/// let ids = collection.add_auto(criteria).unwrap().into_payload().unwrap();
/// assert_eq!(ids.len(), 1);
/// ```
pub struct Collection<T: Transport> {
    transport: T,
    config: CollectionConfig,
    embedding_function: Option<Box<dyn EmbeddingFunction>>,
}

impl<T: Transport> Collection<T> {
    /// Creates a collection handle without an embedding function.
    pub fn new(transport: T, config: CollectionConfig) -> Self {
        Self {
            transport,
            config,
            embedding_function: None,
        }
    }

    /// Sets the function used to embed documents and query texts. Chainable.
    pub fn with_embedding_function(mut self, function: impl EmbeddingFunction + 'static) -> Self {
        self.embedding_function = Some(Box::new(function));
        self
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.config.collection_id
    }

    #[inline]
    pub fn config(&self) -> &CollectionConfig {
        &self.config
    }

    #[inline]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn embedder(&self) -> Option<&dyn EmbeddingFunction> {
        self.embedding_function.as_deref()
    }

    /// Adds items under the given ids.
    pub fn add(&self, ids: &[String], criteria: &AddCriteria) -> Result<Response<bool>> {
        let request = criteria.to_request(ids, self.embedder())?;
        let outcome = self.transport.add(&request, self.id())?;
        Ok(Response::of(observe("add", outcome)))
    }

    /// Adds items under generated ids and returns those ids.
    ///
    /// The configured default generator is used when the criteria has none.
    pub fn add_auto(&self, criteria: AddCriteria) -> Result<Response<Vec<String>>> {
        let criteria = if criteria.has_id_generator() {
            criteria
        } else {
            criteria
                .to_builder()
                .with_shared_id_generator(Arc::clone(&self.config.id_generator))
                .build()
        };

        let request = criteria.to_request(&[], self.embedder())?;
        let outcome = self.transport.add(&request, self.id())?;
        let response = match Response::<bool>::of(observe("add", outcome)) {
            Response::Success(_) => Response::Success(request.ids),
            Response::Failure(error) => Response::failed(format!("{}{}", ADD_FAILED, error)),
        };
        Ok(response)
    }

    /// Gets items by id and/or filter.
    pub fn get(&self, ids: &[String], criteria: &GetCriteria) -> Result<Response<GetResult>> {
        let request = criteria.to_request(ids, self.embedder())?;
        let outcome = self.transport.get(&request, self.id())?;
        Response::of_get_result(observe("get", outcome))
    }

    /// Gets every item of the collection.
    pub fn get_all(&self) -> Result<Response<GetResult>> {
        let outcome = self.transport.get(&GetRequest::default(), self.id())?;
        Response::of_get_result(observe("get", outcome))
    }

    /// Gets every item and keeps the result only if `predicate` accepts it.
    ///
    /// A rejected or failed fetch yields a failure with [`NOTHING_FOUND`].
    pub fn get_all_matching(
        &self,
        predicate: impl FnOnce(&GetResult) -> bool,
    ) -> Result<Response<GetResult>> {
        let response = match self.get_all()? {
            Response::Success(result) if predicate(&result) => Response::Success(result),
            _ => Response::failed(NOTHING_FOUND),
        };
        Ok(response)
    }

    pub fn update(&self, ids: &[String], criteria: &UpdateCriteria) -> Result<Response<bool>> {
        let request = criteria.to_request(ids, self.embedder())?;
        let outcome = self.transport.update(&request, self.id())?;
        Ok(Response::of_nullable(observe("update", outcome)))
    }

    pub fn upsert(&self, ids: &[String], criteria: &AddCriteria) -> Result<Response<bool>> {
        let request = criteria.to_request(ids, self.embedder())?;
        let outcome = self.transport.upsert(&request, self.id())?;
        Ok(Response::of_nullable(observe("upsert", outcome)))
    }

    /// Queries the nearest neighbors of `texts`, or of the criteria's own
    /// embeddings when it has some.
    pub fn query(
        &self,
        texts: &[String],
        criteria: &QueryCriteria,
    ) -> Result<Response<QueryResult>> {
        let request = criteria.to_request(texts, self.embedder())?;
        let outcome = self.transport.query(&request, self.id())?;
        Response::of_query_result(observe("query", outcome))
    }

    /// Deletes by id and/or filter and returns the deleted ids.
    pub fn delete(
        &self,
        ids: &[String],
        criteria: &DeleteCriteria,
    ) -> Result<Response<Vec<String>>> {
        let request = criteria.to_request(ids, self.embedder())?;
        let outcome = self.transport.delete(&request, self.id())?;
        Ok(Response::of(observe("delete", outcome)))
    }

    pub fn delete_ids(&self, ids: &[String]) -> Result<Response<Vec<String>>> {
        self.delete(ids, &DeleteCriteria::default())
    }

    /// Deletes every item of the collection by id.
    ///
    /// Fails with [`Error::Collection`] when the items cannot be listed or
    /// the collection is empty.
    pub fn delete_all(&self) -> Result<Response<Vec<String>>> {
        let ids = match self.get_all()? {
            Response::Success(result) => result.ids,
            Response::Failure(error) => {
                return Err(Error::Collection(format!(
                    "Error could not get all elements. {}",
                    error
                )));
            }
        };
        if ids.is_empty() {
            return Err(Error::Collection("Collection is empty. Nothing to delete".into()));
        }
        self.delete_ids(&ids)
    }

    pub fn count(&self) -> Result<Response<i64>> {
        let outcome = self.transport.count(self.id())?;
        Ok(Response::of(observe("count", outcome)))
    }
}

/// Logs structured errors before they are wrapped.
fn observe(operation: &'static str, outcome: RawOutcome) -> RawOutcome {
    if let RawOutcome::Error(error) = &outcome {
        warn!(operation, %error, "database rejected request");
    }
    outcome
}
