//! Candidate resolver
//!
//! Turns a backend's result set into a single winning candidate:
//! 1. keep entries whose name contains the module name and whose version
//!    meets every constraint;
//! 2. when several remain, keep those whose locator contains every tag;
//! 3. when several still remain, apply the collision policy and report the
//!    collision alongside the pick.

use tracing::{debug, warn};

use crate::requirement::Requirement;
use crate::version::error::{CollisionError, ResolveError};
use crate::version::extract::VersionExtractor;
use crate::version::types::{Candidate, ResultSet};

/// Tie-break applied when several candidates survive tag filtering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Pick the candidate discovered last.
    ///
    /// Does not prefer the highest version; pass tags when collisions matter.
    #[default]
    LastDiscoveredWins,
}

impl CollisionPolicy {
    fn pick(&self, mut candidates: Vec<Candidate>) -> Option<Candidate> {
        match self {
            CollisionPolicy::LastDiscoveredWins => candidates.pop(),
        }
    }
}

/// Winning candidate plus the collision it was picked from, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub candidate: Candidate,
    pub collision: Option<CollisionError>,
}

/// Filters and disambiguates repository entries for a requirement
pub struct CandidateResolver {
    extractor: VersionExtractor,
    policy: CollisionPolicy,
}

impl CandidateResolver {
    pub fn new(policy: CollisionPolicy) -> Self {
        Self {
            extractor: VersionExtractor::new(),
            policy,
        }
    }

    pub fn policy(&self) -> CollisionPolicy {
        self.policy
    }

    /// Entries matching the module name and every constraint, in result set order
    pub fn collect_candidates(
        &self,
        requirement: &Requirement,
        results: &ResultSet,
    ) -> Vec<Candidate> {
        results
            .iter()
            .filter(|(_, name)| name.contains(&requirement.module_name))
            .filter_map(|(locator, name)| {
                let version = self.extractor.extract(name, &requirement.module_name);
                if !requirement.is_satisfied_by(&version) {
                    debug!("Rejecting {} ({}): constraints not met", name, version);
                    return None;
                }
                Some(Candidate {
                    locator: locator.clone(),
                    display_name: name.clone(),
                    version,
                })
            })
            .collect()
    }

    /// Pick one candidate, narrowing collisions with `tags`
    pub fn select(
        &self,
        requirement: &Requirement,
        mut candidates: Vec<Candidate>,
        tags: &[String],
    ) -> Result<Selection, ResolveError> {
        if candidates.len() > 1 {
            warn!(
                "{} packages satisfy '{}'",
                candidates.len(),
                requirement
            );
            if !tags.is_empty() {
                candidates.retain(|c| tags.iter().all(|tag| c.locator.contains(tag.as_str())));
                debug!("{} candidates left after tag filter {:?}", candidates.len(), tags);
            }
        }

        let collision = (candidates.len() > 1).then(|| CollisionError {
            module: requirement.module_name.clone(),
            locators: candidates.iter().map(|c| c.locator.clone()).collect(),
        });

        if let Some(collision) = &collision {
            if tags.is_empty() {
                warn!("Could not resolve the collision, provide some tags: {}", collision);
            } else {
                warn!("Tags {:?} did not resolve the collision: {}", tags, collision);
            }
        }

        let candidate = self
            .policy
            .pick(candidates)
            .ok_or_else(|| ResolveError::NotFound {
                requirement: requirement.to_string(),
            })?;

        Ok(Selection {
            candidate,
            collision,
        })
    }

    /// Collect then select in one step
    pub fn resolve(
        &self,
        requirement: &Requirement,
        results: &ResultSet,
        tags: &[String],
    ) -> Result<Selection, ResolveError> {
        let candidates = self.collect_candidates(requirement, results);
        self.select(requirement, candidates, tags)
    }
}

impl Default for CandidateResolver {
    fn default() -> Self {
        Self::new(CollisionPolicy::default())
    }
}
