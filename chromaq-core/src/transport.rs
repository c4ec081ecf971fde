//! The seam between request building and the wire.
//!
//! A [`Transport`] executes materialized requests against one collection.
//! It returns `Err` only when no outcome could be produced at all; a
//! structured rejection from the database is an `Ok(RawOutcome::Error(..))`.

use crate::error::Result;
use crate::request::{AddRequest, DeleteRequest, GetRequest, QueryRequest, UpdateRequest};
use crate::results::RawOutcome;

/// Executes requests for a collection.
pub trait Transport {
    fn add(&self, request: &AddRequest, collection_id: &str) -> Result<RawOutcome>;

    fn get(&self, request: &GetRequest, collection_id: &str) -> Result<RawOutcome>;

    fn query(&self, request: &QueryRequest, collection_id: &str) -> Result<RawOutcome>;

    fn update(&self, request: &UpdateRequest, collection_id: &str) -> Result<RawOutcome>;

    fn upsert(&self, request: &AddRequest, collection_id: &str) -> Result<RawOutcome>;

    fn delete(&self, request: &DeleteRequest, collection_id: &str) -> Result<RawOutcome>;

    /// Number of items in the collection.
    fn count(&self, collection_id: &str) -> Result<RawOutcome>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn add(&self, request: &AddRequest, collection_id: &str) -> Result<RawOutcome> {
        (**self).add(request, collection_id)
    }

    fn get(&self, request: &GetRequest, collection_id: &str) -> Result<RawOutcome> {
        (**self).get(request, collection_id)
    }

    fn query(&self, request: &QueryRequest, collection_id: &str) -> Result<RawOutcome> {
        (**self).query(request, collection_id)
    }

    fn update(&self, request: &UpdateRequest, collection_id: &str) -> Result<RawOutcome> {
        (**self).update(request, collection_id)
    }

    fn upsert(&self, request: &AddRequest, collection_id: &str) -> Result<RawOutcome> {
        (**self).upsert(request, collection_id)
    }

    fn delete(&self, request: &DeleteRequest, collection_id: &str) -> Result<RawOutcome> {
        (**self).delete(request, collection_id)
    }

    fn count(&self, collection_id: &str) -> Result<RawOutcome> {
        (**self).count(collection_id)
    }
}
