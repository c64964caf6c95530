//! Where artifact content comes from.
//!
//! The engine only needs a synchronous `get(identifier)`; everything else about
//! retrieval (paths, timeouts, storage) belongs to the source implementation.

mod fs;
mod memory;

pub use fs::FsArtifactSource;
pub use memory::MemoryArtifactSource;

use crate::error::ArtifactError;

/// Supplies the full text of an artifact by identifier.
pub trait ArtifactSource: Send + Sync {
    /// Load the artifact's content.
    ///
    /// # Errors
    /// Returns an error if the artifact does not exist, cannot be read, or takes
    /// longer than the source allows.
    fn get(&self, id: &str) -> Result<String, ArtifactError>;
}

/// Loaded, read-only artifact text together with its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactContent {
    id: String,
    text: String,
}

impl ArtifactContent {
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    /// Fetch `id` from `source`.
    ///
    /// # Errors
    /// Propagates the source's [`ArtifactError`].
    pub fn load(source: &dyn ArtifactSource, id: &str) -> Result<Self, ArtifactError> {
        source.get(id).map(|text| Self::new(id, text))
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for ArtifactContent {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
