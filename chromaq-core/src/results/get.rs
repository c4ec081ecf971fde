//! Flat result of a get call.

use serde::{Deserialize, Serialize};

use crate::embedding::Embedding;
use crate::error::Result;
use crate::metadata::Metadata;
use crate::results::null_as_default;

/// Items returned by a get call, one entry per item.
///
/// An item stored without a document or metadata has `None` in that slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub ids: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub documents: Vec<Option<String>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadatas: Vec<Option<Metadata>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub embeddings: Vec<Embedding>,
}

impl GetResult {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents() {
        let result = GetResult::from_json(
            r#"{"documents":["doc1","doc2"],"embeddings":[],"ids":[],"metadatas":[]}"#,
        )
        .unwrap();
        assert_eq!(result.documents.len(), 2);
        assert!(result.is_empty());
    }

    #[test]
    fn test_ids_and_metadatas() {
        let result = GetResult::from_json(
            r#"{"ids":["id1","id2"],"metadatas":[{"key1":"value1"},{"key2":"value2"}]}"#,
        )
        .unwrap();
        assert_eq!(result.len(), 2);
        let second = result.metadatas[1].as_ref().unwrap();
        assert_eq!(second.get_str("key2"), Some("value2"));
    }

    #[test]
    fn test_null_cells() {
        let result = GetResult::from_json(
            r#"{"ids":["a","b"],"documents":["doc",null],"metadatas":[null,{"k":"v"}]}"#,
        )
        .unwrap();
        assert_eq!(result.documents, vec![Some("doc".to_string()), None]);
        assert_eq!(result.metadatas, vec![None, Some(Metadata::single("k", "v"))]);
    }

    #[test]
    fn test_embeddings_and_nulls() {
        let result =
            GetResult::from_json(r#"{"ids":["a"],"embeddings":[[1.0,2.0]],"documents":null}"#)
                .unwrap();
        assert_eq!(result.embeddings, vec![Embedding::from([1.0, 2.0])]);
        assert!(result.documents.is_empty());
    }
}
