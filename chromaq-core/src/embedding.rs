//! Embedding vectors and the embedding function collaborator.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A dense embedding vector.
///
/// Serialized as a plain JSON array of numbers, which is the form the
/// database accepts in `embeddings` and `query_embeddings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Embedding {
    data: Vec<f32>,
}

impl Embedding {
    /// Creates an embedding from a slice of f32 values.
    ///
    /// # Example
    ///
    /// ```
    /// use chromaq_core::Embedding;
    ///
    /// let e = Embedding::new(&[1.0, 2.0, 3.0]);
    /// assert_eq!(e.dimension(), 3);
    /// ```
    #[inline]
    pub fn new(data: &[f32]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Creates an embedding from an owned `Vec<f32>`.
    #[inline]
    pub fn from_vec(data: Vec<f32>) -> Self {
        Self { data }
    }

    /// Returns the dimension (length) of the embedding.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Canonical text form used for content addressing: `[1.0, 2.0, 3.0]`.
    ///
    /// Values use Rust's shortest round-trip `Debug` form, so `1e7` renders as
    /// `10000000.0` and only magnitudes from `1e16` switch to exponent form.
    /// Ids derived from it are stable across runs of this crate but are not
    /// guaranteed to match ids produced by clients in other languages.
    pub fn canonical_string(&self) -> String {
        format!("{:?}", self.data)
    }

    /// Consumes the embedding and returns the underlying data.
    #[inline]
    pub fn into_inner(self) -> Vec<f32> {
        self.data
    }
}

impl From<Vec<f32>> for Embedding {
    fn from(data: Vec<f32>) -> Self {
        Self::from_vec(data)
    }
}

impl From<&[f32]> for Embedding {
    fn from(data: &[f32]) -> Self {
        Self::new(data)
    }
}

impl<const N: usize> From<[f32; N]> for Embedding {
    fn from(data: [f32; N]) -> Self {
        Self::from_vec(data.to_vec())
    }
}

impl AsRef<[f32]> for Embedding {
    fn as_ref(&self) -> &[f32] {
        &self.data
    }
}

/// Turns texts into embeddings, one per text and in the same order.
///
/// Any `Fn(&[String]) -> Result<Vec<Embedding>>` is an embedding function,
/// which keeps tests free of model loading.
pub trait EmbeddingFunction {
    fn embed(&self, texts: &[String]) -> Result<Vec<Embedding>>;
}

impl<F> EmbeddingFunction for F
where
    F: Fn(&[String]) -> Result<Vec<Embedding>>,
{
    fn embed(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        self(texts)
    }
}

/// Uses the caller's embeddings verbatim, otherwise embeds `texts`.
///
/// Nothing is embedded when both are empty, so a missing function is only
/// an error when there is actually text to embed.
pub(crate) fn resolve_embeddings(
    given: &[Embedding],
    texts: &[String],
    function: Option<&dyn EmbeddingFunction>,
) -> Result<Vec<Embedding>> {
    if !given.is_empty() {
        return Ok(given.to_vec());
    }
    if texts.is_empty() {
        return Ok(Vec::new());
    }
    let function = function.ok_or(Error::MissingEmbeddingFunction)?;
    function.embed(texts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake(texts: &[String]) -> Result<Vec<Embedding>> {
        Ok(texts
            .iter()
            .map(|t| Embedding::from_vec(vec![t.len() as f32]))
            .collect())
    }

    #[test]
    fn test_embedding_creation() {
        let e = Embedding::new(&[1.0, 2.0, 3.0]);
        assert_eq!(e.dimension(), 3);
        assert_eq!(e.as_slice(), &[1.0, 2.0, 3.0]);
        assert!(!e.is_empty());
    }

    #[test]
    fn test_canonical_string() {
        let e = Embedding::from([1.0, 2.0, 3.5]);
        assert_eq!(e.canonical_string(), "[1.0, 2.0, 3.5]");

        let e = Embedding::new(&[1e7, 0.5, 1e20]);
        assert_eq!(e.canonical_string(), "[10000000.0, 0.5, 1e20]");
    }

    #[test]
    fn test_serializes_as_array() {
        let e = Embedding::from(vec![1.0, 2.0]);
        assert_eq!(serde_json::to_string(&e).unwrap(), "[1.0,2.0]");
        let back: Embedding = serde_json::from_str("[1.0,2.0]").unwrap();
        assert_eq!(back, e);
    }

    #[test]
    fn test_resolve_prefers_given() {
        let given = vec![Embedding::from([9.0])];
        let texts = vec!["abc".to_string()];
        let out = resolve_embeddings(&given, &texts, Some(&fake)).unwrap();
        assert_eq!(out, given);
    }

    #[test]
    fn test_resolve_calls_function() {
        let texts = vec!["abc".to_string(), "a".to_string()];
        let out = resolve_embeddings(&[], &texts, Some(&fake)).unwrap();
        assert_eq!(out, vec![Embedding::from([3.0]), Embedding::from([1.0])]);
    }

    #[test]
    fn test_resolve_missing_function() {
        let texts = vec!["abc".to_string()];
        let err = resolve_embeddings(&[], &texts, None).unwrap_err();
        assert!(matches!(err, Error::MissingEmbeddingFunction));
    }

    #[test]
    fn test_resolve_nothing_to_embed() {
        assert!(resolve_embeddings(&[], &[], None).unwrap().is_empty());
    }
}
