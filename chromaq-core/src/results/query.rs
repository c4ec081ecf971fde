//! Ragged per-query result arrays and distance filtering.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::embedding::Embedding;
use crate::error::Result;
use crate::metadata::Metadata;
use crate::results::null_as_default;
use crate::results::range::DistanceRange;

/// The result of a nearest-neighbor query.
///
/// Every field holds one row per query input and one cell per neighbor.
/// Rows of different fields are not guaranteed to have equal lengths, and a
/// field the request did not include is empty. A neighbor stored without a
/// document or metadata has a `None` cell.
///
/// # Example
///
/// ```
/// use chromaq_core::{DistanceRange, QueryResult};
///
/// let result = QueryResult::from_json(
///     r#"{"ids": [["id1", "id2"], ["d1", "d2"]], "distances": [[0.0, 1.0], [-1.0, 5.0]]}"#,
/// )
/// .unwrap();
/// let close = result.ids_within(Some(&DistanceRange::less_than(0.5)));
/// assert_eq!(close, vec![vec!["id1".to_string()], vec!["d1".to_string()]]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub ids: Vec<Vec<String>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub documents: Vec<Vec<Option<String>>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadatas: Vec<Vec<Option<Metadata>>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub embeddings: Vec<Vec<Embedding>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub distances: Vec<Vec<f32>>,
}

impl QueryResult {
    /// Parses a query result from its JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn ids_within(&self, range: Option<&DistanceRange>) -> Vec<Vec<String>> {
        self.filter_by_distance(&self.ids, range, "ids")
    }

    pub fn documents_within(&self, range: Option<&DistanceRange>) -> Vec<Vec<Option<String>>> {
        self.filter_by_distance(&self.documents, range, "documents")
    }

    pub fn metadatas_within(&self, range: Option<&DistanceRange>) -> Vec<Vec<Option<Metadata>>> {
        self.filter_by_distance(&self.metadatas, range, "metadatas")
    }

    pub fn embeddings_within(&self, range: Option<&DistanceRange>) -> Vec<Vec<Embedding>> {
        self.filter_by_distance(&self.embeddings, range, "embeddings")
    }

    /// Keeps cell `(i, j)` of `target` iff `distances[i][j]` is in range and
    /// the cell exists. Rows left empty are dropped.
    fn filter_by_distance<T: Clone>(
        &self,
        target: &[Vec<T>],
        range: Option<&DistanceRange>,
        field: &'static str,
    ) -> Vec<Vec<T>> {
        let Some(range) = range else {
            return target.to_vec();
        };

        let mut filtered = Vec::new();
        for (i, row) in self.distances.iter().enumerate() {
            let mut kept = Vec::new();
            for (j, &distance) in row.iter().enumerate() {
                if !range.in_range(distance) {
                    continue;
                }
                match target.get(i).and_then(|cells| cells.get(j)) {
                    Some(cell) => kept.push(cell.clone()),
                    None => {
                        debug!(field, row = i, column = j, "skipping cell missing from result")
                    }
                }
            }
            if !kept.is_empty() {
                filtered.push(kept);
            }
        }
        filtered
    }
}
