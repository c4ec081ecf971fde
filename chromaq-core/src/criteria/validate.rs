//! Structural validation of materialized requests.

use crate::error::{Error, Result};
use crate::request::{AddRequest, DeleteRequest, QueryRequest, UpdateRequest};

pub const MISSING_EMBEDDINGS_OR_DOCUMENTS: &str =
    "You must provide either embeddings or a list of documents";
pub const LENGTH_MISMATCH: &str = "The length of ids, embeddings, and documents must match";
pub const MISSING_UPDATE_IDS: &str = "ids cannot be empty for update";
pub const MISSING_DELETE_TARGET: &str = "you need to specify either the list of ids to delete \
     or a where clause for documents or metadata";
pub const MISSING_QUERY_EMBEDDINGS: &str =
    "You need to either provide the embeddings or the text you want to query";

/// A request that can check its own shape.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// True when every given length is the same. Empty input counts as equal.
fn same_length(lengths: &[usize]) -> bool {
    lengths.windows(2).all(|w| w[0] == w[1])
}

impl Validate for AddRequest {
    fn validate(&self) -> Result<()> {
        if self.embeddings.is_empty() && self.documents.is_empty() {
            return Err(Error::validation(MISSING_EMBEDDINGS_OR_DOCUMENTS));
        }
        if !same_length(&[self.ids.len(), self.embeddings.len(), self.documents.len()]) {
            return Err(Error::validation(LENGTH_MISMATCH));
        }
        Ok(())
    }
}

impl Validate for UpdateRequest {
    fn validate(&self) -> Result<()> {
        if self.ids.is_empty() {
            return Err(Error::validation(MISSING_UPDATE_IDS));
        }
        Ok(())
    }
}

impl Validate for DeleteRequest {
    fn validate(&self) -> Result<()> {
        if self.ids.is_empty() && self.where_metadata.is_empty() && self.where_document.is_empty()
        {
            return Err(Error::validation(MISSING_DELETE_TARGET));
        }
        Ok(())
    }
}

impl Validate for QueryRequest {
    fn validate(&self) -> Result<()> {
        if self.query_embeddings.is_empty() {
            return Err(Error::validation(MISSING_QUERY_EMBEDDINGS));
        }
        Ok(())
    }
}
