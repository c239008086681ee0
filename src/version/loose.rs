//! Loose dotted-numeric versions
//!
//! Artifact file names rarely carry strict semver, so versions here are a
//! plain tuple of integer components. Missing components compare as zero and
//! any trailing text is kept only for display.

use std::cmp::Ordering;
use std::fmt;

/// A loosely parsed version such as `1`, `1.2`, `1.10.0` or `2.0rc1`
#[derive(Debug, Clone, Default)]
pub struct Version {
    components: Vec<u64>,
    suffix: Option<String>,
}

impl Version {
    /// The version assumed for files that carry no version at all
    pub fn zero() -> Self {
        Self {
            components: vec![0],
            suffix: None,
        }
    }

    pub fn new(components: Vec<u64>) -> Self {
        Self {
            components,
            suffix: None,
        }
    }

    /// Parse the leading `<digits>(.<digits>)*` part of `input`.
    ///
    /// Everything after the numeric part becomes the suffix. Returns `None`
    /// when `input` does not start with a digit. Components too large for
    /// `u64` saturate.
    ///
    /// Examples:
    /// - "1.2.3" -> [1, 2, 3]
    /// - "2.0rc1" -> [2, 0] + "rc1"
    /// - "v1.0" -> None
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        let mut components = Vec::new();
        let mut rest = input;

        loop {
            let digits_end = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            if digits_end == 0 {
                break;
            }
            // All digits, so parsing only fails on overflow
            components.push(rest[..digits_end].parse().unwrap_or(u64::MAX));
            rest = &rest[digits_end..];

            // Only consume the dot when another numeric component follows
            match rest.strip_prefix('.') {
                Some(after) if after.starts_with(|c: char| c.is_ascii_digit()) => rest = after,
                _ => break,
            }
        }

        if components.is_empty() {
            return None;
        }

        let suffix = (!rest.is_empty()).then(|| rest.to_string());
        Some(Self { components, suffix })
    }

    pub fn components(&self) -> &[u64] {
        &self.components
    }

    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    fn component(&self, index: usize) -> u64 {
        self.components.get(index).copied().unwrap_or(0)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());
        (0..len)
            .map(|i| self.component(i).cmp(&other.component(i)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numeric: Vec<String> = self.components.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", numeric.join("."))?;
        if let Some(suffix) = &self.suffix {
            write!(f, "{}", suffix)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", vec![1], None)]
    #[case("1.2", vec![1, 2], None)]
    #[case("1.10.0", vec![1, 10, 0], None)]
    #[case("2.0rc1", vec![2, 0], Some("rc1"))]
    #[case("3.1.", vec![3, 1], Some("."))]
    #[case(" 4.5 ", vec![4, 5], None)]
    #[case("99999999999999999999.1", vec![u64::MAX, 1], None)]
    fn parse_splits_components_and_suffix(
        #[case] input: &str,
        #[case] components: Vec<u64>,
        #[case] suffix: Option<&str>,
    ) {
        let version = Version::parse(input).unwrap();
        assert_eq!(version.components(), components.as_slice());
        assert_eq!(version.suffix(), suffix);
    }

    #[rstest]
    #[case("")]
    #[case("v1.0")]
    #[case("latest")]
    fn parse_returns_none_without_leading_digits(#[case] input: &str) {
        assert_eq!(Version::parse(input), None);
    }

    #[rstest]
    #[case("1.2.0", "1.10.0", Ordering::Less)]
    #[case("2.0", "1.99.99", Ordering::Greater)]
    #[case("1.0", "1.0.0", Ordering::Equal)]
    #[case("1", "1.0.1", Ordering::Less)]
    #[case("2.0rc1", "2.0", Ordering::Equal)]
    #[case("0", "0.0.1", Ordering::Less)]
    fn cmp_is_numeric_and_zero_padded(
        #[case] left: &str,
        #[case] right: &str,
        #[case] expected: Ordering,
    ) {
        let left = Version::parse(left).unwrap();
        let right = Version::parse(right).unwrap();
        assert_eq!(left.cmp(&right), expected);
    }

    #[test]
    fn zero_sorts_below_any_released_version() {
        assert!(Version::zero() < Version::new(vec![0, 0, 1]));
        assert_eq!(Version::zero(), Version::new(vec![]));
    }

    #[test]
    fn display_keeps_suffix() {
        assert_eq!(Version::parse("2.0rc1").unwrap().to_string(), "2.0rc1");
        assert_eq!(Version::new(vec![1, 2, 3]).to_string(), "1.2.3");
    }
}
