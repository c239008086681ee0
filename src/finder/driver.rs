//! Resolution driver
//!
//! Groups the requirement parser, the candidate resolver and the available
//! backends behind a single `resolve` call.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{error, info};

use crate::config::FinderConfig;
use crate::requirement::{Requirement, RequirementParser};
use crate::version::backend::{Backend, BackendKind};
use crate::version::backends::{CrawlBackend, StructuredBackend};
use crate::version::error::{CollisionError, ResolveError};
use crate::version::fetch::{HttpFetcher, build_client};
use crate::version::resolver::CandidateResolver;
use crate::version::types::{Candidate, Credentials};

/// Outcome of a successful resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub requirement: Requirement,
    pub candidate: Candidate,
    /// Set when several candidates matched and one was picked by policy
    pub collision: Option<CollisionError>,
}

/// Entry point for locating an artifact in a remote repository
pub struct ArtifactFinder {
    parser: RequirementParser,
    resolver: CandidateResolver,
    backends: HashMap<BackendKind, Arc<dyn Backend>>,
}

impl ArtifactFinder {
    /// Create a finder without backends; add them with [`Self::with_backend`]
    pub fn new(resolver: CandidateResolver) -> Self {
        Self {
            parser: RequirementParser::new(),
            resolver,
            backends: HashMap::new(),
        }
    }

    /// Create a finder with the structured and crawl backends sharing one HTTP client
    pub fn from_config(config: &FinderConfig) -> Result<Self, reqwest::Error> {
        let client = build_client(&config.http)?;
        let fetcher = Arc::new(HttpFetcher::new(client.clone()));

        Ok(Self::new(CandidateResolver::default())
            .with_backend(Arc::new(StructuredBackend::new(client)))
            .with_backend(Arc::new(CrawlBackend::new(fetcher, &config.crawl))))
    }

    /// Register `backend` under its own kind, replacing any previous one
    pub fn with_backend(mut self, backend: Arc<dyn Backend>) -> Self {
        self.backends.insert(backend.kind(), backend);
        self
    }

    pub fn backend(&self, kind: BackendKind) -> Option<&Arc<dyn Backend>> {
        self.backends.get(&kind)
    }

    pub fn resolver(&self) -> &CandidateResolver {
        &self.resolver
    }

    pub fn parse_requirement(&self, requirement: &str) -> Result<Requirement, ResolveError> {
        Ok(self.parser.parse(requirement)?)
    }

    /// Find the file satisfying `requirement` below `repository_url`
    ///
    /// # Arguments
    /// * `requirement` - Module name with optional constraints, e.g. `foo>=1.2<2.0`
    /// * `repository_url` - Repository root; a trailing `/` is added if missing
    /// * `tags` - Substrings every locator must contain when candidates collide
    /// * `credentials` - Passed through to the backend
    /// * `backend_kind` - Which backend lists the repository
    pub async fn resolve(
        &self,
        requirement: &str,
        repository_url: &str,
        tags: &[String],
        credentials: &Credentials,
        backend_kind: BackendKind,
    ) -> Result<Resolution, ResolveError> {
        let requirement = self.parse_requirement(requirement)?;

        let repository_url = repository_url.trim();
        if repository_url.is_empty() {
            return Err(ResolveError::InvalidRepositoryUrl(repository_url.to_string()));
        }
        let root = if repository_url.ends_with('/') {
            repository_url.to_string()
        } else {
            format!("{}/", repository_url)
        };

        let backend = self
            .backend(backend_kind)
            .ok_or(ResolveError::UnsupportedBackend(backend_kind))?;

        info!(
            "Resolving '{}' in {} with {} backend",
            requirement, root, backend_kind
        );
        let results = backend.search(&root, credentials).await?;

        if results.is_empty() {
            error!("No packages found, check if URL and credentials are valid");
            return Err(ResolveError::NotFound {
                requirement: requirement.to_string(),
            });
        }

        let selection = self.resolver.resolve(&requirement, &results, tags)?;
        info!(
            "Resolved '{}' to {} at {}",
            requirement, selection.candidate, selection.candidate.locator
        );

        Ok(Resolution {
            requirement,
            candidate: selection.candidate,
            collision: selection.collision,
        })
    }
}
