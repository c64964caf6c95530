use std::path::{Path, PathBuf};

use crate::error::{EvidenceGuardError, Result};

use super::filesystem::{FileSystem, RealFileSystem};
use super::model::{SUITE_VERSION, SuiteConfig};

pub const LOCAL_SUITE_NAME: &str = ".evidence-guard.toml";
pub const USER_SUITE_NAME: &str = "suite.toml";

/// A parsed suite together with the file it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedSuite {
    pub config: SuiteConfig,
    pub path: PathBuf,
}

impl LoadedSuite {
    /// Directory artifact identifiers resolve against: `run.root` relative to
    /// the suite file's directory, or that directory itself.
    #[must_use]
    pub fn artifact_root(&self) -> PathBuf {
        let base = self
            .path
            .parent()
            .map_or_else(PathBuf::new, Path::to_path_buf);
        match &self.config.run.root {
            Some(root) => base.join(root),
            None => base,
        }
    }
}

fn validate_suite_version(config: &SuiteConfig) -> Result<()> {
    match &config.version {
        None => Ok(()),
        Some(v) if v == SUITE_VERSION => Ok(()),
        Some(v) => Err(EvidenceGuardError::Config(format!(
            "Unsupported suite version '{v}'. Only version '{SUITE_VERSION}' is supported."
        ))),
    }
}

/// Loads suite files from the filesystem.
///
/// Search order:
/// 1. `.evidence-guard.toml` in current directory
/// 2. `suite.toml` in the platform-specific user config directory
#[derive(Debug)]
pub struct SuiteLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for SuiteLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl SuiteLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> SuiteLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_suite_path(&self) -> Option<PathBuf> {
        self.fs
            .current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_SUITE_NAME))
    }

    fn user_suite_path(&self) -> Option<PathBuf> {
        self.fs.config_dir().map(|dir| dir.join(USER_SUITE_NAME))
    }

    /// Discover and load the suite file.
    ///
    /// # Errors
    /// Returns an error if no suite file is found, or it cannot be read or parsed.
    pub fn load(&self) -> Result<LoadedSuite> {
        let candidates = [self.local_suite_path(), self.user_suite_path()];
        for path in candidates.into_iter().flatten() {
            if self.fs.exists(&path) {
                tracing::debug!(path = %path.display(), "discovered suite file");
                return self.load_from_path(&path);
            }
        }
        Err(EvidenceGuardError::Config(format!(
            "No suite file found. Create {LOCAL_SUITE_NAME} or pass --suite <PATH>."
        )))
    }

    /// Load a suite from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, is not valid TOML, or declares
    /// an unsupported version.
    pub fn load_from_path(&self, path: &Path) -> Result<LoadedSuite> {
        let content =
            self.fs
                .read_to_string(path)
                .map_err(|source| EvidenceGuardError::FileRead {
                    path: path.to_path_buf(),
                    source,
                })?;
        let config: SuiteConfig = toml::from_str(&content)?;
        validate_suite_version(&config)?;
        Ok(LoadedSuite {
            config,
            path: path.to_path_buf(),
        })
    }
}

#[cfg(test)]
#[path = "loader_tests/mod.rs"]
mod tests;
