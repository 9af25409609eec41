//! The version data model.

mod build_metadata;
mod pre_release;

pub use build_metadata::BuildMetadata;
pub use pre_release::{PreRelease, PreReleaseIdentifier};

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use num_bigint::BigUint;

use crate::error::ParseError;
use crate::version_parser::VersionParser;

/// A parsed version.
///
/// Versions are immutable once constructed. Ordering follows the
/// precedence rules: the core triple compares numerically, a release
/// outranks any pre-release of the same core version, and pre-release
/// sequences compare identifier by identifier. Build metadata never
/// participates, so equality and hashing ignore it too: two versions
/// differing only in build metadata are equal even though they render
/// differently.
#[derive(Debug, Clone)]
pub struct Version {
    major: BigUint,
    minor: BigUint,
    patch: BigUint,
    pre_release: PreRelease,
    build_metadata: BuildMetadata,
}

impl Version {
    /// A release version with the given core triple and no pre-release or
    /// build metadata.
    pub fn new(
        major: impl Into<BigUint>,
        minor: impl Into<BigUint>,
        patch: impl Into<BigUint>,
    ) -> Self {
        Version {
            major: major.into(),
            minor: minor.into(),
            patch: patch.into(),
            pre_release: PreRelease::empty(),
            build_metadata: BuildMetadata::empty(),
        }
    }

    /// A version assembled from all of its parts.
    pub fn from_parts(
        major: BigUint,
        minor: BigUint,
        patch: BigUint,
        pre_release: PreRelease,
        build_metadata: BuildMetadata,
    ) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release,
            build_metadata,
        }
    }

    pub fn major(&self) -> &BigUint {
        &self.major
    }

    pub fn minor(&self) -> &BigUint {
        &self.minor
    }

    pub fn patch(&self) -> &BigUint {
        &self.patch
    }

    pub fn pre_release(&self) -> &PreRelease {
        &self.pre_release
    }

    pub fn build_metadata(&self) -> &BuildMetadata {
        &self.build_metadata
    }

    /// Whether this version carries a pre-release component.
    pub fn is_pre_release(&self) -> bool {
        !self.pre_release.is_empty()
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| self.pre_release.cmp(&other.pre_release))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    // Build metadata is excluded so the hash agrees with equality.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre_release.hash(state);
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}{}{}",
            self.major, self.minor, self.patch, self.pre_release, self.build_metadata
        )
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionParser::new(s).parse()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Version {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;

    use super::*;

    fn version(text: &str) -> Version {
        text.parse().expect(text)
    }

    #[test]
    fn test_precedence_chain() {
        let ordered = [
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
            "1.0.0-beta.2",
            "1.0.0-beta.11",
            "1.0.0-rc.1",
            "1.0.0",
            "2.0.0",
            "2.1.0",
            "2.1.1",
        ];

        for pair in ordered.windows(2) {
            let (lower, higher) = (version(pair[0]), version(pair[1]));
            assert!(
                lower < higher,
                "'{}' should have lower precedence than '{}'",
                pair[0],
                pair[1]
            );
            assert!(higher > lower);
        }
    }

    #[test]
    fn test_numeric_identifiers_precede_alphanumeric() {
        assert!(version("1.0.0-2") < version("1.0.0-alpha"));
        assert!(version("1.0.0-999999") < version("1.0.0-1a"));
    }

    #[test]
    fn test_numeric_identifiers_compare_by_value() {
        assert!(version("1.0.0-2") < version("1.0.0-11"));
        assert!(version("1.0.0-alpha.9") < version("1.0.0-alpha.10"));
    }

    #[test]
    fn test_build_metadata_is_ignored() {
        assert_eq!(version("1.0.0+a"), version("1.0.0+b"));
        assert_eq!(version("1.0.0"), version("1.0.0+20130313144700"));
        assert_eq!(
            version("1.0.0-alpha+001").cmp(&version("1.0.0-alpha+exp.sha.5114f85")),
            Ordering::Equal
        );
        // The rendered text still differs.
        assert_ne!(
            version("1.0.0+a").to_string(),
            version("1.0.0+b").to_string()
        );
    }

    #[test]
    fn test_hash_agrees_with_equality() {
        fn hash(v: &Version) -> u64 {
            let mut hasher = DefaultHasher::new();
            v.hash(&mut hasher);
            hasher.finish()
        }

        assert_eq!(hash(&version("1.0.0+a")), hash(&version("1.0.0+b")));
        assert_eq!(hash(&version("1.2.3")), hash(&version("1.2.3")));
    }

    #[test]
    fn test_total_order_properties() {
        let corpus: Vec<Version> = [
            "0.0.0",
            "0.0.1",
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-2",
            "1.0.0",
            "1.0.0+meta",
            "1.0.1",
            "2.0.0-rc.1",
            "2.0.0",
        ]
        .iter()
        .map(|t| version(t))
        .collect();

        for a in &corpus {
            assert_eq!(a.cmp(a), Ordering::Equal);
            for b in &corpus {
                assert_eq!(a.cmp(b), b.cmp(a).reverse());
                for c in &corpus {
                    if a.cmp(b) != Ordering::Greater && b.cmp(c) != Ordering::Greater {
                        assert_ne!(a.cmp(c), Ordering::Greater);
                    }
                }
            }
        }
    }

    #[test]
    fn test_sorting() {
        let mut versions = vec![
            version("2.4.0"),
            version("0.1.0"),
            version("2.4.0-alpha"),
            version("3.2.1"),
            version("1.0.0"),
        ];
        versions.sort();
        let rendered: Vec<String> = versions.iter().map(|v| v.to_string()).collect();
        assert_eq!(
            rendered,
            vec!["0.1.0", "1.0.0", "2.4.0-alpha", "2.4.0", "3.2.1"]
        );
    }

    #[test]
    fn test_constructors() {
        let v = Version::new(1u32, 2u32, 3u32);
        assert_eq!(v.to_string(), "1.2.3");
        assert!(!v.is_pre_release());

        let v = Version::from_parts(
            BigUint::from(1u32),
            BigUint::from(0u32),
            BigUint::from(0u32),
            PreRelease::new(vec![
                PreReleaseIdentifier::classify("rc"),
                PreReleaseIdentifier::classify("1"),
            ]),
            BuildMetadata::new(vec!["build".into(), "123".into()]),
        );
        assert_eq!(v.to_string(), "1.0.0-rc.1+build.123");
        assert!(v.is_pre_release());
        assert_eq!(v, version("1.0.0-rc.1"));
    }

    #[test]
    fn test_arbitrary_precision() {
        let big = version("99999999999999999999999.999999999999999999.99999999999999999");
        assert_eq!(
            big.to_string(),
            "99999999999999999999999.999999999999999999.99999999999999999"
        );
        assert!(big > version("99999999999999999999998.0.0"));
    }
}
