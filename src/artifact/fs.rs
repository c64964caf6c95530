use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::error::ArtifactError;

use super::ArtifactSource;

/// Reads artifacts from disk, resolving identifiers against a root directory.
///
/// With a timeout set, each read runs on a helper thread and the caller stops
/// waiting once the timeout elapses. The helper thread finishes on its own.
#[derive(Debug, Clone)]
pub struct FsArtifactSource {
    root: PathBuf,
    timeout: Option<Duration>,
}

impl FsArtifactSource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            timeout: None,
        }
    }

    /// `Duration::ZERO` disables the timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = (!timeout.is_zero()).then_some(timeout);
        self
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Absolute identifiers are used as-is; relative ones are joined to the root.
    #[must_use]
    pub fn resolve(&self, id: &str) -> PathBuf {
        self.root.join(id)
    }

    fn read(path: &Path, id: &str) -> Result<String, ArtifactError> {
        std::fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => ArtifactError::NotFound { id: id.to_string() },
            _ => ArtifactError::Unreadable {
                id: id.to_string(),
                source,
            },
        })
    }

    fn read_with_timeout(path: PathBuf, id: &str, timeout: Duration) -> Result<String, ArtifactError> {
        let (tx, rx) = mpsc::channel();
        let owned_id = id.to_string();
        thread::spawn(move || {
            // Receiver may be gone after a timeout
            let _ = tx.send(Self::read(&path, &owned_id));
        });

        match rx.recv_timeout(timeout) {
            Ok(result) => result,
            Err(mpsc::RecvTimeoutError::Timeout) => Err(ArtifactError::Timeout {
                id: id.to_string(),
                timeout,
            }),
            Err(mpsc::RecvTimeoutError::Disconnected) => Err(ArtifactError::Unreadable {
                id: id.to_string(),
                source: std::io::Error::other("artifact reader stopped unexpectedly"),
            }),
        }
    }
}

impl ArtifactSource for FsArtifactSource {
    fn get(&self, id: &str) -> Result<String, ArtifactError> {
        let path = self.resolve(id);
        tracing::debug!(artifact = id, path = %path.display(), "loading artifact");
        match self.timeout {
            Some(timeout) => Self::read_with_timeout(path, id, timeout),
            None => Self::read(&path, id),
        }
    }
}

#[cfg(test)]
#[path = "fs_tests.rs"]
mod tests;
