//! Content-addressed id generation.

use sha2::{Digest, Sha256};

use crate::embedding::Embedding;

/// Maximum length of a generated id.
pub const MAX_ID_LENGTH: usize = 50;

/// Derives one id per embedding, in the same order.
pub trait IdGenerator: Send + Sync {
    fn generate(&self, embeddings: &[Embedding]) -> Vec<String>;
}

impl<F> IdGenerator for F
where
    F: Fn(&[Embedding]) -> Vec<String> + Send + Sync,
{
    fn generate(&self, embeddings: &[Embedding]) -> Vec<String> {
        self(embeddings)
    }
}

/// Default generator: hex SHA-256 of the vector's canonical text, cut to
/// [`MAX_ID_LENGTH`] characters.
///
/// Identical vectors always get identical ids.
///
/// ```
/// use chromaq_core::{Embedding, IdGenerator, Sha256IdGenerator};
///
/// let ids = Sha256IdGenerator.generate(&[Embedding::from([1.0, 2.0, 3.0])]);
/// assert_eq!(ids.len(), 1);
/// assert_eq!(ids[0].len(), 50);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256IdGenerator;

impl Sha256IdGenerator {
    /// Computes the id for a single embedding.
    pub fn id_for(embedding: &Embedding) -> String {
        let mut hasher = Sha256::new();
        hasher.update(embedding.canonical_string().as_bytes());
        let mut id = hex::encode(hasher.finalize());
        id.truncate(MAX_ID_LENGTH);
        id
    }
}

impl IdGenerator for Sha256IdGenerator {
    fn generate(&self, embeddings: &[Embedding]) -> Vec<String> {
        embeddings.iter().map(Self::id_for).collect()
    }
}
