//! Semantic version and version range parsing with arbitrary-precision
//! precedence.
//!
//! Versions follow the `major.minor.patch` grammar with optional
//! pre-release identifiers and build metadata; numeric components have no
//! width limit. Ranges are written either in interval notation
//! (`[1.0.0,2.0.0)`), as comparisons (`>=1.0.0`), as carets (`^1.2.3`),
//! or as wildcards (`1.2.+`); every form normalizes to a pair of bounds.
//!
//! ```
//! use quarry_semver::{parse_version, parse_version_range};
//!
//! let version = parse_version("1.2.3-alpha.1")?;
//! let range = parse_version_range("[1.0.0,2.0.0)")?;
//! assert!(range.is_satisfied_by(&version));
//! # Ok::<(), quarry_semver::ParseError>(())
//! ```
//!
//! All values are immutable once constructed, and every operation is a
//! pure function: the crate performs no I/O and holds no shared state, so
//! parsed values can be used freely across threads. Malformed input is
//! reported through [`ParseError`], which carries the failing offset and
//! a user-facing message.

mod error;
mod range;
mod range_parser;
mod tokenizer;
mod version;
mod version_parser;

pub use error::ParseError;
pub use range::{Bound, VersionRange};
pub use range_parser::VersionRangeParser;
pub use version::{BuildMetadata, PreRelease, PreReleaseIdentifier, Version};
pub use version_parser::VersionParser;

use std::cmp::Ordering;

/// Parses a version string such as `1.2.3-alpha.1+build.5`.
///
/// When taking user input, the error's message is designed to be shown
/// back to the user.
pub fn parse_version(input: &str) -> Result<Version, ParseError> {
    VersionParser::new(input).parse()
}

/// Parses a version range string such as `[1.0.0,2.0.0)` or `1.2.+`.
pub fn parse_version_range(input: &str) -> Result<VersionRange, ParseError> {
    VersionRangeParser::new(input).parse()
}

/// Compares two versions by precedence. Build metadata is ignored, so two
/// versions differing only in build metadata compare equal.
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.cmp(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_points() {
        let version = parse_version("1.2.3").unwrap();
        let range = parse_version_range("[1.0.0,)").unwrap();
        assert!(range.is_satisfied_by(&version));
        assert_eq!(
            compare(&version, &parse_version("1.2.3+meta").unwrap()),
            Ordering::Equal
        );
    }

    #[test]
    fn test_universal_range_satisfied_by_every_version() {
        let range = parse_version_range("+").unwrap();
        for text in ["0.0.0", "1.2.3-alpha", "9999.0.1+meta", "1.0.0-2"] {
            assert!(range.is_satisfied_by(&parse_version(text).unwrap()));
        }
    }

    #[test]
    fn test_parse_errors_surface_offsets() {
        assert_eq!(parse_version("1.2").unwrap_err().offset(), 3);
        assert_eq!(parse_version("01.2.3").unwrap_err().offset(), 0);
        assert_eq!(parse_version_range("[1.2.3").unwrap_err().offset(), 6);
    }
}
