//! Package version values and their ordering.
//!
//! Package managers publish versions that are semver-like but not strictly
//! semver: `2.0`, `1.26.4`, `3.0.0rc1`, `0.4.0.1`. [`PackageVersion`] accepts
//! any number of numeric release components and an optional pre-release or
//! build suffix, and orders them with semver precedence rules:
//!
//! - release components compare numerically, missing components are zero
//! - a release without pre-release outranks the same release with one
//! - pre-release identifiers compare per semver
//! - build metadata never affects precedence
//!
//! # Example
//!
//! ```
//! use ratchet::constraint::PackageVersion;
//!
//! let installed: PackageVersion = "1.0".parse().unwrap();
//! let requested: PackageVersion = "1.0.0".parse().unwrap();
//! assert_eq!(installed, requested);
//!
//! let rc: PackageVersion = "2.0.0rc1".parse().unwrap();
//! let release: PackageVersion = "2.0.0".parse().unwrap();
//! assert!(rc < release);
//! ```

use semver::{BuildMetadata, Prerelease};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Reasons a version string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("empty version")]
    Empty,

    #[error("invalid release component in '{0}'")]
    InvalidRelease(String),

    #[error("invalid pre-release '{0}'")]
    InvalidPrerelease(String),

    #[error("invalid build metadata '{0}'")]
    InvalidBuild(String),
}

/// A parsed package version.
#[derive(Debug, Clone)]
pub struct PackageVersion {
    release: Vec<u64>,
    pre: Prerelease,
    build: BuildMetadata,
}

impl PackageVersion {
    /// Numeric release components, as written.
    pub fn release(&self) -> &[u64] {
        &self.release
    }

    /// Pre-release identifiers (empty for a final release).
    pub fn pre(&self) -> &Prerelease {
        &self.pre
    }

    /// Build metadata (empty when absent).
    pub fn build(&self) -> &BuildMetadata {
        &self.build
    }

    /// Whether this is a pre-release.
    pub fn is_prerelease(&self) -> bool {
        !self.pre.is_empty()
    }
}

/// Byte offset where the numeric `1.2.3` release prefix ends.
fn release_end(s: &str) -> usize {
    s.find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(s.len())
}

impl FromStr for PackageVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s
            .strip_prefix('v')
            .or_else(|| s.strip_prefix('V'))
            .unwrap_or(s);
        if s.is_empty() {
            return Err(VersionError::Empty);
        }

        let (rest, build) = match s.split_once('+') {
            Some((_, "")) => return Err(VersionError::InvalidBuild(String::new())),
            Some((rest, build)) => (
                rest,
                BuildMetadata::new(build)
                    .map_err(|_| VersionError::InvalidBuild(build.to_string()))?,
            ),
            None => (s, BuildMetadata::EMPTY),
        };

        let (release_part, suffix) = rest.split_at(release_end(rest));
        // "1.0.post1" leaves a trailing separator on the release part
        let release_part = release_part.strip_suffix('.').unwrap_or(release_part);
        if release_part.is_empty() {
            return Err(VersionError::InvalidRelease(s.to_string()));
        }

        let release = release_part
            .split('.')
            .map(|component| component.parse::<u64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| VersionError::InvalidRelease(s.to_string()))?;

        let suffix = suffix.trim_start_matches(['-', '.', '_']);
        let pre = if suffix.is_empty() {
            Prerelease::EMPTY
        } else {
            Prerelease::new(suffix)
                .map_err(|_| VersionError::InvalidPrerelease(suffix.to_string()))?
        };

        Ok(Self {
            release,
            pre,
            build,
        })
    }
}

impl Ord for PackageVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.release.len().max(other.release.len());
        for i in 0..len {
            let ours = self.release.get(i).copied().unwrap_or(0);
            let theirs = other.release.get(i).copied().unwrap_or(0);
            match ours.cmp(&theirs) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }

        match (self.pre.is_empty(), other.pre.is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self.pre.cmp(&other.pre),
        }
    }
}

impl PartialOrd for PackageVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for PackageVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PackageVersion {}

impl fmt::Display for PackageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let release: Vec<String> = self.release.iter().map(u64::to_string).collect();
        write!(f, "{}", release.join("."))?;
        if !self.pre.is_empty() {
            write!(f, "-{}", self.pre)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> PackageVersion {
        s.parse().unwrap()
    }

    #[test]
    fn parses_plain_release() {
        let version = v("1.26.4");
        assert_eq!(version.release(), &[1, 26, 4]);
        assert!(!version.is_prerelease());
        assert!(version.build().is_empty());
    }

    #[test]
    fn parses_single_component_any_version() {
        assert_eq!(v("0").release(), &[0]);
    }

    #[test]
    fn missing_components_compare_as_zero() {
        assert_eq!(v("1.0"), v("1.0.0"));
        assert_eq!(v("2"), v("2.0.0.0"));
        assert!(v("1.0.0.1") > v("1.0"));
    }

    #[test]
    fn numeric_not_lexicographic() {
        assert!(v("1.10.0") > v("1.9.9"));
        assert!(v("10.0.0") > v("9.99.99"));
    }

    #[test]
    fn any_version_is_lowest_release() {
        assert!(v("0.0.1") > v("0"));
        assert!(v("0") <= v("0.0.0"));
    }

    #[test]
    fn prerelease_sorts_before_release() {
        assert!(v("2.0.0-rc.1") < v("2.0.0"));
        assert!(v("2.0.0rc1") < v("2.0.0"));
        assert!(v("2.0.0rc1") > v("1.9.9"));
    }

    #[test]
    fn prerelease_identifiers_use_semver_precedence() {
        assert!(v("1.0.0-alpha") < v("1.0.0-alpha.1"));
        assert!(v("1.0.0-alpha.1") < v("1.0.0-beta"));
        assert!(v("1.0.0-beta.2") < v("1.0.0-beta.11"));
        assert!(v("1.0.0-rc.1") > v("1.0.0-beta.11"));
    }

    #[test]
    fn build_metadata_ignored_for_precedence() {
        assert_eq!(v("1.0.0+cpu"), v("1.0.0+cu121"));
        assert_eq!(v("1.0.0+cpu").build().as_str(), "cpu");
    }

    #[test]
    fn accepts_leading_v() {
        assert_eq!(v("v1.2.3"), v("1.2.3"));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!("".parse::<PackageVersion>().unwrap_err(), VersionError::Empty);
        assert!(matches!(
            "abc".parse::<PackageVersion>(),
            Err(VersionError::InvalidRelease(_))
        ));
        assert!(matches!(
            "1..2".parse::<PackageVersion>(),
            Err(VersionError::InvalidRelease(_))
        ));
        assert!(matches!(
            "1.0+".parse::<PackageVersion>(),
            Err(VersionError::InvalidBuild(_))
        ));
    }

    #[test]
    fn display_normalizes_suffixes() {
        assert_eq!(v("2.0.0rc1").to_string(), "2.0.0-rc1");
        assert_eq!(v("1.2+local").to_string(), "1.2+local");
    }
}
