//! Common types shared by backends, the resolver and the finder

use std::fmt;

use indexmap::IndexMap;

use crate::version::loose::Version;

/// File extensions recognized as installable artifacts
pub const PACKAGE_EXTENSIONS: [&str; 2] = [".py", ".whl"];

/// Files discovered in a repository: locator -> display name.
///
/// Iteration follows first-discovery order; re-inserting a locator only
/// replaces its display name.
pub type ResultSet = IndexMap<String, String>;

/// Returns true when `name` ends in a recognized package extension
pub fn is_package_file(name: &str) -> bool {
    PACKAGE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Kind of artifact, derived from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Plain Python source module (`.py`)
    SourceModule,
    /// Wheel package (`.whl`)
    Wheel,
}

impl ArtifactKind {
    pub fn from_file_name(name: &str) -> Option<Self> {
        if name.ends_with(".py") {
            Some(ArtifactKind::SourceModule)
        } else if name.ends_with(".whl") {
            Some(ArtifactKind::Wheel)
        } else {
            None
        }
    }
}

/// A discovered repository entry with its extracted version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub locator: String,
    pub display_name: String,
    pub version: Version,
}

impl Candidate {
    pub fn kind(&self) -> Option<ArtifactKind> {
        ArtifactKind::from_file_name(&self.display_name)
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name, self.version)
    }
}

/// Repository credentials, sent as HTTP basic auth when a login is set
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

impl Credentials {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_anonymous(&self) -> bool {
        self.login.is_empty()
    }

    /// Attach basic auth to `request` unless anonymous
    pub fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if self.is_anonymous() {
            request
        } else {
            request.basic_auth(&self.login, Some(&self.password))
        }
    }
}

// Never print the password
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("password", &"***")
            .finish()
    }
}
