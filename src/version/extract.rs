//! Version extraction from artifact file names
//!
//! Format examples:
//! - `foo-2.1.0.py` -> 2.1.0
//! - `foo_1.2.py` -> 1.2
//! - `pkgA-1.0-linux.whl` -> 1.0
//! - `foo-2.0rc1.py` -> 2.0 (suffix `rc1`)
//! - `foo.py` -> 0

use regex::Regex;

use crate::version::loose::Version;

/// Extracts loose versions from display names
pub struct VersionExtractor {
    /// Regex for `<sep><digits>(.<digits>)?(.<digits>)?<suffix>?`
    version_re: Regex,
}

impl VersionExtractor {
    pub fn new() -> Self {
        Self {
            version_re: Regex::new(r"[>=<_-]{1,2}(\d+(?:\.\d+){0,2}(?:[A-Za-z]+\d*)?)").unwrap(),
        }
    }

    /// Extract the version following `module_name` in `display_name`.
    ///
    /// Falls back to [`Version::zero`] when the module name does not occur or
    /// no numeric group follows it.
    pub fn extract(&self, display_name: &str, module_name: &str) -> Version {
        let Some(position) = display_name.find(module_name) else {
            return Version::zero();
        };
        let rest = &display_name[position + module_name.len()..];

        self.version_re
            .captures(rest)
            .and_then(|caps| caps.get(1))
            .and_then(|m| Version::parse(m.as_str()))
            .unwrap_or_else(Version::zero)
    }
}

impl Default for VersionExtractor {
    fn default() -> Self {
        Self::new()
    }
}
