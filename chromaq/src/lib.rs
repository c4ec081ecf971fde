//! # chromaq
//!
//! **Typed filters, request criteria and result filtering for Chroma-style
//! vector database clients.**
//!
//! chromaq builds the request side of a vector database client:
//!
//! - **Filters** - `where` and `where_document` conditions from typed matchers
//! - **Validation** - malformed requests fail before anything is sent
//! - **Id generation** - content-addressed ids from embeddings
//! - **Result filtering** - keep only neighbors within a distance range
//!
//! ## Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | **Typed Matchers** | comparisons, `is_in` / `not_in`, `contains` / `not_contains` |
//! | **Composites** | Arbitrarily nested `$and` / `$or` |
//! | **Criteria** | Add, get, query, update, upsert and delete builders |
//! | **Envelope** | `Response::Success` or a structured `Response::Failure` |
//! | **Distance Ranges** | `less_than`, `bigger_than`, `between`, `equal_to` |
//!
//! ## Quick Start
//!
//! ### Building Filters
//!
//! ```rust
//! use chromaq::prelude::*;
//!
//! let filter = and([
//!     cond("category", eq("programming")),
//!     or([cond("year", gte(2020)), cond("tags", is_in(["rust", "systems"]))]),
//! ]);
//!
//! let json = serde_json::to_value(filter.materialize()).unwrap();
//! assert_eq!(
//!     json,
//!     serde_json::json!({"$and": [
//!         {"category": {"$eq": "programming"}},
//!         {"$or": [{"year": {"$gte": 2020}}, {"tags": {"$in": ["rust", "systems"]}}]}
//!     ]})
//! );
//! ```
//!
//! ### Materializing a Request
//!
//! Criteria resolve embeddings through an [`EmbeddingFunction`], which can be
//! any closure:
//!
//! ```rust
//! use chromaq::prelude::*;
//!
//! let embed = |texts: &[String]| -> Result<Vec<Embedding>> {
//!     Ok(texts.iter().map(|t| Embedding::from_vec(vec![t.len() as f32, 0.0])).collect())
//! };
//!
//! let request = QueryCriteria::builder()
//!     .where_metadata(("lang", eq("rust")))
//!     .with_number_of_results(5)
//!     .build()
//!     .to_request(&["ownership and borrowing".to_string()], Some(&embed))
//!     .unwrap();
//!
//! assert_eq!(request.query_embeddings.len(), 1);
//! ```
//!
//! ### Validation
//!
//! ```rust
//! use chromaq::prelude::*;
//!
//! let err = DeleteCriteria::builder().build().to_request(&[], None).unwrap_err();
//! assert!(err.is_validation());
//! ```
//!
//! ### Filtering Results by Distance
//!
//! ```rust
//! use chromaq::prelude::*;
//!
//! let result = QueryResult::from_json(
//!     r#"{"ids": [["a", "b", "c"]], "distances": [[0.1, 0.4, 0.9]]}"#,
//! )
//! .unwrap();
//!
//! let close = result.ids_within(Some(&DistanceRange::less_than(0.5)));
//! assert_eq!(close, vec![vec!["a".to_string(), "b".to_string()]]);
//! ```
//!
//! ## Architecture
//!
//! chromaq is organized into two crates:
//!
//! - **`chromaq-core`** - Filters, criteria, results and collaborator traits
//! - **`chromaq`** - Main crate that re-exports everything
//!
//! ### Core Components
//!
//! - [`filter`] - Matchers, conditions and the [`Value`] wire type
//! - [`criteria`] - Per-operation builders and validation
//! - [`results`] - [`Response`], [`QueryResult`], [`GetResult`], [`DistanceRange`]
//! - [`Collection`] - Runs criteria through a [`Transport`]
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T>`](crate::Result), which uses
//! the [`Error`] enum for error types. A request the database rejects is not
//! an error: it comes back as [`Response::Failure`].
//!
//! ## Logging
//!
//! chromaq emits [`tracing`](https://docs.rs/tracing) events and installs no
//! subscriber. Run the demo with `RUST_LOG=chromaq_core=debug` to see them.

// Re-export everything from core
pub use chromaq_core::*;
