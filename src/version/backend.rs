//! Backend trait for enumerating package files in a remote repository

use std::fmt;
use std::str::FromStr;

#[cfg(test)]
use mockall::automock;
use serde::Deserialize;
use tracing::warn;

use crate::version::error::BackendError;
use crate::version::types::{Credentials, ResultSet};

/// Strategy used to enumerate a repository
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Artifactory storage API listing (one request, whole tree)
    #[default]
    #[serde(alias = "dohq")]
    Structured,
    /// Recursive walk over served HTML directory pages
    #[serde(alias = "html")]
    Crawl,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Structured => "structured",
            BackendKind::Crawl => "crawl",
        }
    }

    /// Parse `name`, falling back to [`BackendKind::Structured`] when unknown
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            warn!(
                "Unknown backend '{}', using {} by default",
                name,
                BackendKind::default()
            );
            BackendKind::default()
        })
    }
}

impl FromStr for BackendKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "structured" | "dohq" => Ok(BackendKind::Structured),
            "crawl" | "html" => Ok(BackendKind::Crawl),
            _ => Err(()),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for listing package files below a repository root
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// Returns the kind of backend this implementation provides
    fn kind(&self) -> BackendKind;

    /// Enumerates every `.py` / `.whl` file reachable from `root`
    ///
    /// # Arguments
    /// * `root` - Repository URL, ending with `/`
    /// * `credentials` - Passed through to every request
    ///
    /// # Returns
    /// * `Ok(ResultSet)` - Locator to display name, in discovery order
    /// * `Err(BackendError)` - If the repository itself cannot be listed
    async fn search(&self, root: &str, credentials: &Credentials)
    -> Result<ResultSet, BackendError>;
}
