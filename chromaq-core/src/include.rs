//! Fields a get or query request asks the database to return.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Include {
    Embeddings,
    Documents,
    Metadatas,
    Distances,
}

impl Include {
    /// `[documents, metadatas, distances]`.
    pub fn defaults() -> Vec<Include> {
        vec![Include::Documents, Include::Metadatas, Include::Distances]
    }

    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Include::Embeddings => "embeddings",
            Include::Documents => "documents",
            Include::Metadatas => "metadatas",
            Include::Distances => "distances",
        }
    }
}
