//! # chromaq Core
//!
//! Core library for chromaq, a typed request builder for Chroma-style
//! vector databases.
//!
//! This crate turns filter criteria into the nested `where` / `where_document`
//! structures the database expects, validates request shape before anything
//! is sent, and post-processes query results by distance. It never talks to
//! the network itself: a [`Transport`] does.
//!
//! ## Core Types
//!
//! ### Filtering
//!
//! - [`filter`] - Matchers (`eq`, `gt`, `is_in`, `contains`, ...) and AND/OR conditions
//! - [`Value`] - The wire value a condition materializes to
//!
//! ### Criteria
//!
//! - [`AddCriteria`], [`GetCriteria`], [`QueryCriteria`], [`UpdateCriteria`],
//!   [`DeleteCriteria`] - Per-operation builders, materialized with [`Requestable`]
//!
//! ### Results
//!
//! - [`Response`] - Success or structured API failure
//! - [`QueryResult`] - Ragged per-query arrays, filterable by [`DistanceRange`]
//! - [`GetResult`] - Flat item arrays
//!
//! ### Collaborators
//!
//! - [`EmbeddingFunction`] - Texts to vectors
//! - [`IdGenerator`] - Vectors to ids, [`Sha256IdGenerator`] by default
//! - [`Transport`] - Requests to raw outcomes
//! - [`Collection`] - Runs criteria through a transport

pub mod collection;
pub mod criteria;
pub mod embedding;
pub mod error;
pub mod filter;
pub mod id_generator;
pub mod include;
pub mod metadata;
pub mod request;
pub mod results;
pub mod transport;

// Re-exports for convenient access
pub use collection::{Collection, CollectionConfig};
pub use criteria::{
    AddCriteria, DeleteCriteria, GetCriteria, QueryCriteria, Requestable, UpdateCriteria,
};
pub use embedding::{Embedding, EmbeddingFunction};
pub use error::{Error, Result};
pub use filter::{Condition, DocumentCondition, Materialize, MetadataCondition, Value};
pub use id_generator::{IdGenerator, Sha256IdGenerator};
pub use include::Include;
pub use metadata::Metadata;
pub use results::{
    DistanceRange, GetResult, HttpValidationError, QueryResult, RawOutcome, Response,
    ValidationError,
};
pub use transport::Transport;

/// Re-export commonly used types for convenience.
///
/// # Example
///
/// ```rust
/// use chromaq_core::prelude::*;
///
/// let criteria = GetCriteria::builder()
///     .where_metadata(or([cond("lang", eq("rust")), cond("stars", gte(100))]))
///     .where_document(contains("vector"))
///     .with_limit(5)
///     .build();
/// let request = criteria.to_request(&[], None).unwrap();
/// assert_eq!(request.limit, Some(5));
/// ```
pub mod prelude {
    pub use crate::filter::{
        and, and_field, and_matchers, cond, contains, eq, gt, gte, is_in, lt, lte, ne,
        not_contains, not_in, or, or_field, or_matchers,
    };
    pub use crate::{
        AddCriteria, Collection, CollectionConfig, DeleteCriteria, DistanceRange, Embedding,
        EmbeddingFunction, Error, GetCriteria, GetResult, HttpValidationError, IdGenerator,
        Include, Materialize, Metadata, QueryCriteria, QueryResult, RawOutcome, Requestable,
        Response, Result, Sha256IdGenerator, Transport, UpdateCriteria, Value,
    };
}
