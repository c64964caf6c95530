use std::collections::HashMap;

use crate::error::ArtifactError;

use super::ArtifactSource;

/// Artifacts held in memory, keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct MemoryArtifactSource {
    artifacts: HashMap<String, String>,
}

impl MemoryArtifactSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_artifact(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(id, text);
        self
    }

    pub fn insert(&mut self, id: impl Into<String>, text: impl Into<String>) {
        self.artifacts.insert(id.into(), text.into());
    }
}

impl ArtifactSource for MemoryArtifactSource {
    fn get(&self, id: &str) -> Result<String, ArtifactError> {
        self.artifacts
            .get(id)
            .cloned()
            .ok_or_else(|| ArtifactError::NotFound { id: id.to_string() })
    }
}
