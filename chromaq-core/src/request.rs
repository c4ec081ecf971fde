//! Materialized request values handed to a [`Transport`](crate::Transport).
//!
//! Field names follow the database's JSON API.

use serde::{Deserialize, Serialize};

use crate::embedding::Embedding;
use crate::filter::Value;
use crate::include::Include;
use crate::metadata::Metadata;

/// Body of an add or upsert call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddRequest {
    pub ids: Vec<String>,
    pub embeddings: Vec<Embedding>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metadatas: Vec<Metadata>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<String>,
    pub increment_index: bool,
}

/// Body of a get call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetRequest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<String>,
    #[serde(rename = "where")]
    pub where_metadata: Value,
    pub where_document: Value,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<Include>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
}

impl Default for GetRequest {
    /// An unfiltered get of everything in the collection.
    fn default() -> Self {
        Self {
            ids: Vec::new(),
            where_metadata: Value::empty_map(),
            where_document: Value::empty_map(),
            include: Vec::new(),
            limit: None,
            offset: None,
        }
    }
}

/// Body of a nearest-neighbor query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    #[serde(rename = "where")]
    pub where_metadata: Value,
    pub where_document: Value,
    pub query_embeddings: Vec<Embedding>,
    pub n_results: usize,
    pub include: Vec<Include>,
}

/// Body of an update call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRequest {
    pub ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embeddings: Vec<Embedding>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metadatas: Vec<Metadata>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<String>,
}

/// Body of a delete call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteRequest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<String>,
    #[serde(rename = "where")]
    pub where_metadata: Value,
    pub where_document: Value,
}
