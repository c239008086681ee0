//! In-memory backend test utilities

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use artifact_finder::version::backend::{Backend, BackendKind};
use artifact_finder::version::error::BackendError;
use artifact_finder::version::types::{Credentials, ResultSet};

/// Backend that answers every search with a fixed listing
pub struct StaticBackend {
    kind: BackendKind,
    results: ResultSet,
    searches: AtomicUsize,
}

impl StaticBackend {
    pub fn new(kind: BackendKind) -> Self {
        Self {
            kind,
            results: ResultSet::new(),
            searches: AtomicUsize::new(0),
        }
    }

    /// Add files under `root`, in discovery order
    pub fn with_files(mut self, root: &str, files: &[&str]) -> Self {
        for file in files {
            let name = file.rsplit('/').next().unwrap_or(file);
            self.results
                .insert(format!("{root}{file}"), name.to_string());
        }
        self
    }

    pub fn searches(&self) -> usize {
        self.searches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Backend for StaticBackend {
    fn kind(&self) -> BackendKind {
        self.kind
    }

    async fn search(
        &self,
        _root: &str,
        _credentials: &Credentials,
    ) -> Result<ResultSet, BackendError> {
        self.searches.fetch_add(1, Ordering::SeqCst);
        Ok(self.results.clone())
    }
}
