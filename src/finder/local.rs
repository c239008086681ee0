//! Local pre-check: reuse a source module that is already on disk

use std::path::Path;

use tracing::{debug, info};

use crate::requirement::Requirement;
use crate::version::resolver::{CandidateResolver, Selection};
use crate::version::types::{ArtifactKind, ResultSet};

/// Look in `dir` for a `.py` file satisfying `requirement`.
///
/// Only source modules count: a wheel on disk still has to be installed.
/// Files are considered in name order, so the collision policy sees a stable
/// sequence.
pub fn find_local(
    resolver: &CandidateResolver,
    requirement: &Requirement,
    dir: &Path,
) -> std::io::Result<Option<Selection>> {
    let mut names: Vec<String> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| ArtifactKind::from_file_name(name) == Some(ArtifactKind::SourceModule))
        .collect();
    names.sort();

    let results: ResultSet = names
        .into_iter()
        .map(|name| (dir.join(&name).to_string_lossy().into_owned(), name))
        .collect();
    debug!("Found {} local source modules in {:?}", results.len(), dir);

    let selection = resolver.resolve(requirement, &results, &[]).ok();
    if let Some(selection) = &selection {
        info!(
            "Using local {} for '{}'",
            selection.candidate.locator, requirement
        );
    }

    Ok(selection)
}
