use thiserror::Error;

use crate::requirement::ParseError;
use crate::version::backend::BackendKind;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unauthorized: repository returned status {0}")]
    Unauthorized(u16),

    #[error("Repository not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid repository URL: {0}")]
    InvalidUrl(String),
}

/// Failure to fetch a single page during a crawl; absorbed per branch
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request timed out: {0}")]
    Timeout(String),
}

/// More than one candidate satisfies a requirement.
///
/// Not fatal: a candidate is still picked and this travels alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} candidates satisfy '{module}': {}", .locators.len(), .locators.join(", "))]
pub struct CollisionError {
    pub module: String,
    pub locators: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Invalid repository URL: '{0}'")]
    InvalidRepositoryUrl(String),

    #[error("No {0} backend is configured")]
    UnsupportedBackend(BackendKind),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("No package satisfies '{requirement}'")]
    NotFound { requirement: String },
}

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Server responded with status {0}")]
    Status(u16),

    #[error("Invalid file name: {0}")]
    InvalidFileName(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
