//! Criteria for adding (or upserting) items.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::criteria::validate::Validate;
use crate::criteria::Requestable;
use crate::embedding::{resolve_embeddings, Embedding, EmbeddingFunction};
use crate::error::{Error, Result};
use crate::id_generator::IdGenerator;
use crate::metadata::Metadata;
use crate::request::AddRequest;

/// Documents, embeddings and metadata to add to a collection.
///
/// When no embeddings are given they are computed from the documents. When
/// no ids are passed to [`to_request`](Requestable::to_request) they are
/// derived from the embeddings by the configured [`IdGenerator`].
///
/// # Example
///
/// ```
/// use chromaq_core::{AddCriteria, Embedding, Metadata, Requestable};
///
/// let criteria = AddCriteria::builder()
///     .with_documents(["first", "second"])
///     .with_embeddings([Embedding::from([1.0, 2.0]), Embedding::from([3.0, 4.0])])
///     .with_metadatas([Metadata::single("key", "value")])
///     .build();
///
/// let ids = vec!["id1".to_string(), "id2".to_string()];
/// let request = criteria.to_request(&ids, None).unwrap();
/// assert_eq!(request.ids, ids);
/// assert!(request.increment_index);
/// ```
#[derive(Clone)]
pub struct AddCriteria {
    documents: Vec<String>,
    embeddings: Vec<Embedding>,
    metadatas: Vec<Metadata>,
    increment_index: bool,
    id_generator: Option<Arc<dyn IdGenerator>>,
}

impl AddCriteria {
    pub fn builder() -> AddCriteriaBuilder {
        AddCriteriaBuilder::default()
    }

    /// Re-opens this criteria for modification.
    pub fn to_builder(&self) -> AddCriteriaBuilder {
        AddCriteriaBuilder {
            inner: self.clone(),
        }
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

    #[inline]
    pub fn should_increment_index(&self) -> bool {
        self.increment_index
    }

    #[inline]
    pub fn has_id_generator(&self) -> bool {
        self.id_generator.is_some()
    }
}

impl fmt::Debug for AddCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddCriteria")
            .field("documents", &self.documents)
            .field("embeddings", &self.embeddings)
            .field("metadatas", &self.metadatas)
            .field("increment_index", &self.increment_index)
            .field("id_generator", &self.id_generator.is_some())
            .finish()
    }
}

impl Requestable for AddCriteria {
    type Request = AddRequest;

    fn to_request(
        &self,
        ids: &[String],
        embedding_function: Option<&dyn EmbeddingFunction>,
    ) -> Result<AddRequest> {
        let embeddings = resolve_embeddings(&self.embeddings, &self.documents, embedding_function)?;

        let ids = if ids.is_empty() {
            let generator = self.id_generator.as_ref().ok_or(Error::MissingIdGenerator)?;
            generator.generate(&embeddings)
        } else {
            ids.to_vec()
        };

        let request = AddRequest {
            ids,
            embeddings,
            metadatas: self.metadatas.clone(),
            documents: self.documents.clone(),
            increment_index: self.increment_index,
        };
        request.validate()?;

        debug!(
            ids = request.ids.len(),
            embeddings = request.embeddings.len(),
            documents = request.documents.len(),
            "materialized add request"
        );
        Ok(request)
    }
}

/// Builder for [`AddCriteria`].
pub struct AddCriteriaBuilder {
    inner: AddCriteria,
}

impl Default for AddCriteriaBuilder {
    fn default() -> Self {
        Self {
            inner: AddCriteria {
                documents: Vec::new(),
                embeddings: Vec::new(),
                metadatas: Vec::new(),
                increment_index: true,
                id_generator: None,
            },
        }
    }
}

impl AddCriteriaBuilder {
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

    /// Sets a single embedding.
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

    pub fn with_incremental_index(mut self) -> Self {
        self.inner.increment_index = true;
        self
    }

    pub fn with_no_incremental_index(mut self) -> Self {
        self.inner.increment_index = false;
        self
    }

    pub fn with_id_generator(self, generator: impl IdGenerator + 'static) -> Self {
        self.with_shared_id_generator(Arc::new(generator))
    }

    pub fn with_shared_id_generator(mut self, generator: Arc<dyn IdGenerator>) -> Self {
        self.inner.id_generator = Some(generator);
        self
    }

    pub fn build(self) -> AddCriteria {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::testing::{fake_embedder, ids};
    use crate::criteria::validate::{LENGTH_MISMATCH, MISSING_EMBEDDINGS_OR_DOCUMENTS};
    use crate::id_generator::Sha256IdGenerator;

    #[test]
    fn test_create_add_request() {
        let request = AddCriteria::builder()
            .with_incremental_index()
            .with_documents(["text", "another text"])
            .with_embeddings([Embedding::from([1.0, 2.0]), Embedding::from([3.0, 4.0])])
            .with_metadatas([Metadata::single("key", "value")])
            .build()
            .to_request(&ids(&["id1", "id2"]), Some(&fake_embedder))
            .unwrap();

        let expected = AddRequest {
            ids: ids(&["id1", "id2"]),
            embeddings: vec![Embedding::from([1.0, 2.0]), Embedding::from([3.0, 4.0])],
            metadatas: vec![Metadata::single("key", "value")],
            documents: ids(&["text", "another text"]),
            increment_index: true,
        };
        assert_eq!(request, expected);
    }

    #[test]
    fn test_flags_and_accessors() {
        let criteria = AddCriteria::builder().with_no_incremental_index().build();
        assert!(!criteria.should_increment_index());
        assert!(!criteria.has_embeddings());
        assert!(!criteria.has_id_generator());

        let criteria = AddCriteria::builder()
            .with_embedding([1.0, 20.0, 3.0])
            .build();
        assert!(criteria.has_embeddings());
        assert!(criteria.should_increment_index());
    }

    #[test]
    fn test_missing_documents_and_embeddings() {
        let criteria = AddCriteria::builder().with_incremental_index().build();
        let err = criteria
            .to_request(&ids(&["1", "2"]), Some(&fake_embedder))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains(MISSING_EMBEDDINGS_OR_DOCUMENTS));
    }

    #[test]
    fn test_ids_length_differs_from_documents() {
        let criteria = AddCriteria::builder().with_documents(["a"]).build();
        let err = criteria
            .to_request(&ids(&["1", "2"]), Some(&fake_embedder))
            .unwrap_err();
        assert!(err.to_string().contains(LENGTH_MISMATCH));
    }

    #[test]
    fn test_ids_length_differs_from_embeddings() {
        let criteria = AddCriteria::builder()
            .with_embedding([1.0, 2.0, 3.0])
            .with_documents(["Text"])
            .build();
        let err = criteria.to_request(&ids(&["1", "2"]), None).unwrap_err();
        assert!(err.to_string().contains(LENGTH_MISMATCH));
    }

    #[test]
    fn test_no_embeddings_and_no_function() {
        let criteria = AddCriteria::builder().with_documents(["Text"]).build();
        let err = criteria.to_request(&ids(&["1"]), None).unwrap_err();
        assert!(matches!(err, Error::MissingEmbeddingFunction));
    }

    #[test]
    fn test_embeddings_computed_from_documents() {
        let request = AddCriteria::builder()
            .with_documents(["abc", "de"])
            .build()
            .to_request(&ids(&["1", "2"]), Some(&fake_embedder))
            .unwrap();
        assert_eq!(
            request.embeddings,
            vec![Embedding::from([3.0, 1.0]), Embedding::from([2.0, 1.0])]
        );
    }

    #[test]
    fn test_generated_ids() {
        let criteria = AddCriteria::builder()
            .with_embeddings([Embedding::from([1.0]), Embedding::from([2.0])])
            .with_documents(["one", "two"])
            .with_id_generator(Sha256IdGenerator)
            .build();
        let request = criteria.to_request(&[], None).unwrap();
        assert_eq!(request.ids.len(), 2);
        assert_eq!(request.ids[0], Sha256IdGenerator::id_for(&Embedding::from([1.0])));
    }

    #[test]
    fn test_embeddings_without_documents_is_length_mismatch() {
        let criteria = AddCriteria::builder()
            .with_embeddings([Embedding::from([1.0]), Embedding::from([2.0])])
            .build();
        let err = criteria.to_request(&ids(&["1", "2"]), None).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), LENGTH_MISMATCH);
    }

    #[test]
    fn test_empty_ids_without_generator() {
        let criteria = AddCriteria::builder().with_embedding([1.0]).build();
        let err = criteria.to_request(&[], None).unwrap_err();
        assert!(matches!(err, Error::MissingIdGenerator));
    }

    #[test]
    fn test_to_builder_keeps_fields() {
        let criteria = AddCriteria::builder()
            .with_documents(["a"])
            .with_no_incremental_index()
            .build();
        let reopened = criteria.to_builder().with_id_generator(Sha256IdGenerator).build();
        assert_eq!(reopened.documents(), criteria.documents());
        assert!(!reopened.should_increment_index());
        assert!(reopened.has_id_generator());
    }
}
