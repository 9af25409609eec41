//! Version ranges and interval membership.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::range_parser::VersionRangeParser;
use crate::version::Version;

/// One edge of a version interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bound {
    /// No constraint on this edge.
    Unbounded,
    /// The edge version itself lies inside the range.
    Inclusive(Version),
    /// The edge version lies just outside the range.
    Exclusive(Version),
}

/// An interval of versions with inclusive, exclusive, or absent edges.
///
/// Ranges are immutable once constructed. A range whose lower bound
/// exceeds its upper bound is representable and simply satisfied by no
/// version; the parser does not reject it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRange {
    lower: Bound,
    upper: Bound,
}

impl VersionRange {
    /// A range between the two bounds.
    pub fn new(lower: Bound, upper: Bound) -> Self {
        VersionRange { lower, upper }
    }

    /// The degenerate range `[version, version]`, satisfied only by
    /// versions equal to `version` by precedence (build metadata
    /// variants included).
    pub fn exactly(version: Version) -> Self {
        VersionRange {
            lower: Bound::Inclusive(version.clone()),
            upper: Bound::Inclusive(version),
        }
    }

    pub fn lower(&self) -> &Bound {
        &self.lower
    }

    pub fn upper(&self) -> &Bound {
        &self.upper
    }

    /// Whether `version` lies within both bounds.
    pub fn is_satisfied_by(&self, version: &Version) -> bool {
        let above_lower = match &self.lower {
            Bound::Unbounded => true,
            Bound::Inclusive(bound) => version.cmp(bound) != Ordering::Less,
            Bound::Exclusive(bound) => version.cmp(bound) == Ordering::Greater,
        };
        let below_upper = match &self.upper {
            Bound::Unbounded => true,
            Bound::Inclusive(bound) => version.cmp(bound) != Ordering::Greater,
            Bound::Exclusive(bound) => version.cmp(bound) == Ordering::Less,
        };
        above_lower && below_upper
    }

    /// Parses `version` and checks it against the range.
    pub fn is_satisfied_by_str(&self, version: &str) -> Result<bool, ParseError> {
        Ok(self.is_satisfied_by(&version.parse()?))
    }
}

impl fmt::Display for VersionRange {
    /// Renders in interval notation, e.g. `[1.0.0,2.0.0)`. Ranges parsed
    /// from wildcard shorthand render in their normalized interval form,
    /// not in the original spelling.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.lower {
            Bound::Unbounded => f.write_str("(")?,
            Bound::Inclusive(version) => write!(f, "[{version}")?,
            Bound::Exclusive(version) => write!(f, "({version}")?,
        }
        f.write_str(",")?;
        match &self.upper {
            Bound::Unbounded => f.write_str(")"),
            Bound::Inclusive(version) => write!(f, "{version}]"),
            Bound::Exclusive(version) => write!(f, "{version})"),
        }
    }
}

impl FromStr for VersionRange {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionRangeParser::new(s).parse()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for VersionRange {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for VersionRange {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
