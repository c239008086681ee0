//! Download of the winning candidate

use std::path::{Path, PathBuf};

use reqwest::Client;
use tracing::{error, info};

use crate::version::error::DownloadError;
use crate::version::types::{Candidate, Credentials};

/// Fetches candidate files into a local directory
#[derive(Clone)]
pub struct Downloader {
    client: Client,
}

impl Downloader {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Download `candidate` into `dest_dir` under its display name
    ///
    /// The display name comes from the remote listing, so it must be a plain
    /// file name; anything containing a path separator is rejected.
    pub async fn download(
        &self,
        candidate: &Candidate,
        dest_dir: &Path,
        credentials: &Credentials,
    ) -> Result<PathBuf, DownloadError> {
        let file_name = safe_file_name(&candidate.display_name)?;

        let response = credentials
            .apply(self.client.get(&candidate.locator))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!("Server response code: {} for {}", status, candidate.locator);
            return Err(DownloadError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        let path = dest_dir.join(file_name);
        tokio::fs::write(&path, &bytes).await?;

        info!("Downloaded {} ({} bytes) to {:?}", candidate.locator, bytes.len(), path);
        Ok(path)
    }
}

fn safe_file_name(name: &str) -> Result<&str, DownloadError> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\'])
        || name.contains('\0');

    if invalid {
        Err(DownloadError::InvalidFileName(name.to_string()))
    } else {
        Ok(name)
    }
}
