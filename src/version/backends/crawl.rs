//! Crawl backend: walks served HTML directory pages
//!
//! Every admitted directory becomes a task on a tokio `JoinSet`; a semaphore
//! caps how many of them fetch at once. Workers only report what they saw.
//! The coordinator loop owns the result set and decides which directories
//! are admitted, so no state is shared between workers.
//!
//! Each directory is remembered with the shallowest level it was admitted
//! at. Workers finish in any order, so a directory first reached through a
//! long detour is scanned again when a shorter path turns up later; its
//! subtree is then explored as deep as the nesting limit allows.
//!
//! Credentials only go to pages on the root's origin.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Url;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::config::CrawlConfig;
use crate::version::backend::{Backend, BackendKind};
use crate::version::backends::links::{LinkExtractor, LinkKind};
use crate::version::error::BackendError;
use crate::version::fetch::PageFetcher;
use crate::version::types::{Credentials, ResultSet, is_package_file};

/// Unit of traversal work; owned by the worker that scans it
#[derive(Debug, Clone)]
struct CrawlTask {
    locator: Url,
    depth: usize,
}

/// What a worker found on one page
#[derive(Debug, Default)]
struct PageScan {
    depth: usize,
    directories: Vec<Url>,
    files: Vec<(String, String)>,
}

impl PageScan {
    fn empty(depth: usize) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }
}

/// Backend that discovers files by following directory hyperlinks
pub struct CrawlBackend {
    fetcher: Arc<dyn PageFetcher>,
    extractor: Arc<LinkExtractor>,
    max_nesting_level: usize,
    max_workers: usize,
}

impl CrawlBackend {
    pub fn new(fetcher: Arc<dyn PageFetcher>, config: &CrawlConfig) -> Self {
        Self {
            fetcher,
            extractor: Arc::new(LinkExtractor::new()),
            max_nesting_level: config.max_nesting_level,
            max_workers: config.max_workers.max(1),
        }
    }

    fn spawn_task(
        &self,
        join_set: &mut JoinSet<PageScan>,
        semaphore: &Arc<Semaphore>,
        root: &Url,
        credentials: &Credentials,
        task: CrawlTask,
    ) {
        let fetcher = Arc::clone(&self.fetcher);
        let extractor = Arc::clone(&self.extractor);
        let semaphore = Arc::clone(semaphore);
        let credentials = if task.locator.origin() == root.origin() {
            credentials.clone()
        } else {
            debug!("Fetching {} without credentials: foreign origin", task.locator);
            Credentials::anonymous()
        };

        join_set.spawn(async move {
            let Ok(_permit) = semaphore.acquire_owned().await else {
                return PageScan::empty(task.depth);
            };
            scan_page(fetcher.as_ref(), &extractor, &credentials, task).await
        });
    }
}

#[async_trait]
impl Backend for CrawlBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Crawl
    }

    async fn search(
        &self,
        root: &str,
        credentials: &Credentials,
    ) -> Result<ResultSet, BackendError> {
        let root_url =
            Url::parse(root).map_err(|e| BackendError::InvalidUrl(format!("{}: {}", root, e)))?;

        info!(
            "Crawling {} (max nesting level {}, {} workers)",
            root_url, self.max_nesting_level, self.max_workers
        );

        let semaphore = Arc::new(Semaphore::new(self.max_workers));
        let mut join_set = JoinSet::new();
        // locator -> shallowest admitted level
        let mut admitted: HashMap<String, usize> = HashMap::new();
        let mut results = ResultSet::new();
        let mut pages_scanned = 0usize;

        admitted.insert(root_url.to_string(), 0);
        self.spawn_task(
            &mut join_set,
            &semaphore,
            &root_url,
            credentials,
            CrawlTask {
                locator: root_url.clone(),
                depth: 0,
            },
        );

        while let Some(joined) = join_set.join_next().await {
            let scan = match joined {
                Ok(scan) => scan,
                Err(e) => {
                    warn!("Crawl worker did not finish: {}", e);
                    continue;
                }
            };
            pages_scanned += 1;

            for (locator, name) in scan.files {
                results.insert(locator, name);
            }

            for directory in scan.directories {
                if scan.depth >= self.max_nesting_level {
                    debug!(
                        "Pruning {}: nesting level {} reached",
                        directory, self.max_nesting_level
                    );
                    continue;
                }

                let depth = scan.depth + 1;
                match admitted.get(directory.as_str()) {
                    Some(&seen) if seen <= depth => {
                        debug!("Skipping {}: already visited at level {}", directory, seen);
                        continue;
                    }
                    Some(&seen) => debug!(
                        "Revisiting {}: reached at level {} after level {}",
                        directory, depth, seen
                    ),
                    None => {}
                }
                admitted.insert(directory.to_string(), depth);

                self.spawn_task(
                    &mut join_set,
                    &semaphore,
                    &root_url,
                    credentials,
                    CrawlTask {
                        locator: directory,
                        depth,
                    },
                );
            }
        }

        info!(
            "Crawl finished: {} pages scanned, {} package files found",
            pages_scanned,
            results.len()
        );

        Ok(results)
    }
}

/// Fetch one page and classify its forward links.
///
/// Any failure yields an empty scan so that one broken subtree never fails
/// the whole crawl.
async fn scan_page(
    fetcher: &dyn PageFetcher,
    extractor: &LinkExtractor,
    credentials: &Credentials,
    task: CrawlTask,
) -> PageScan {
    let page = match fetcher.fetch(task.locator.as_str(), credentials).await {
        Ok(page) if page.is_success() => page,
        Ok(page) => {
            warn!(
                "HTTP request error: status code {} for {}",
                page.status, task.locator
            );
            return PageScan::empty(task.depth);
        }
        Err(e) => {
            warn!("Failed to fetch {}: {}", task.locator, e);
            return PageScan::empty(task.depth);
        }
    };

    let mut scan = PageScan::empty(task.depth);

    for link in extractor.extract_forward(&page.body) {
        let kind = link.kind();
        if kind == LinkKind::File && !is_package_file(&link.text) {
            continue;
        }

        let resolved = match task.locator.join(&link.href) {
            Ok(url) => url,
            Err(e) => {
                debug!("Ignoring link '{}' on {}: {}", link.href, task.locator, e);
                continue;
            }
        };

        match kind {
            LinkKind::Directory => scan.directories.push(resolved),
            LinkKind::File => scan.files.push((resolved.to_string(), link.text)),
        }
    }

    debug!(
        "Scanned {} (depth {}): {} directories, {} files",
        task.locator,
        task.depth,
        scan.directories.len(),
        scan.files.len()
    );

    scan
}
