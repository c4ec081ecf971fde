//! Criteria for updating existing items.

use tracing::debug;

use crate::criteria::validate::{Validate, MISSING_UPDATE_IDS};
use crate::criteria::Requestable;
use crate::embedding::{resolve_embeddings, Embedding, EmbeddingFunction};
use crate::error::{Error, Result};
use crate::metadata::Metadata;
use crate::request::UpdateRequest;

/// New documents, embeddings or metadata for items addressed by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateCriteria {
    documents: Vec<String>,
    embeddings: Vec<Embedding>,
    metadatas: Vec<Metadata>,
}

impl UpdateCriteria {
    pub fn builder() -> UpdateCriteriaBuilder {
        UpdateCriteriaBuilder::default()
    }

    #[inline]
    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    #[inline]
    pub fn embeddings(&self) -> &[Embedding] {
        &self.embeddings
    }

    #[inline]
    pub fn metadatas(&self) -> &[Metadata] {
        &self.metadatas
    }

    #[inline]
    pub fn has_embeddings(&self) -> bool {
        !self.embeddings.is_empty()
    }
}

impl Requestable for UpdateCriteria {
    type Request = UpdateRequest;

    fn to_request(
        &self,
        ids: &[String],
        embedding_function: Option<&dyn EmbeddingFunction>,
    ) -> Result<UpdateRequest> {
        // Checked before embedding so a bad update never calls the function.
        if ids.is_empty() {
            return Err(Error::validation(MISSING_UPDATE_IDS));
        }
        let embeddings = resolve_embeddings(&self.embeddings, &self.documents, embedding_function)?;

        let request = UpdateRequest {
            ids: ids.to_vec(),
            embeddings,
            metadatas: self.metadatas.clone(),
            documents: self.documents.clone(),
        };
        request.validate()?;
        debug!(
            ids = request.ids.len(),
            embeddings = request.embeddings.len(),
            "materialized update request"
        );
        Ok(request)
    }
}

/// Builder for [`UpdateCriteria`].
#[derive(Debug, Clone, Default)]
pub struct UpdateCriteriaBuilder {
    inner: UpdateCriteria,
}

impl UpdateCriteriaBuilder {
    pub fn with_documents<I, S>(mut self, documents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.documents = documents.into_iter().map(Into::into).collect();
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

    pub fn with_embedding(mut self, embedding: impl Into<Embedding>) -> Self {
        self.inner.embeddings = vec![embedding.into()];
        self
    }

    pub fn with_metadatas<I>(mut self, metadatas: I) -> Self
    where
        I: IntoIterator<Item = Metadata>,
    {
        self.inner.metadatas = metadatas.into_iter().collect();
        self
    }

    pub fn build(self) -> UpdateCriteria {
        self.inner
    }
}
