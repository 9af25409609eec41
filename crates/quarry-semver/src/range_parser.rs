//! Recursive descent parsing of version range strings.

use num_traits::Zero;

use crate::error::ParseError;
use crate::range::{Bound, VersionRange};
use crate::tokenizer::{TokenCursor, TokenKind};
use crate::version::{BuildMetadata, PreRelease, Version};
use crate::version_parser;

/// A parser for a single version range string.
///
/// Four surface syntaxes are recognized, dispatched on the first token:
///
/// - **Intervals**: `[1.0.0,2.0.0)` with `[`/`]` inclusive, `(`/`)`
///   exclusive, and an omitted version meaning unbounded on that side.
/// - **Comparisons**: `>1.0.0`, `>=1.0.0`, `<2.0.0`, `<=2.0.0`, each a
///   half-bounded interval.
/// - **Carets**: `^1.2.3` spans from the version up to (excluding) the
///   next increment of its leftmost non-zero core component.
/// - **Wildcards**: `+` (or `*`) matches everything, `1.+` any version
///   with major 1, `1.2.+` any version with major 1 and minor 2; a plain
///   version such as `1.2.3` matches exactly that version.
///
/// Wildcards are translated into intervals during parsing, so the
/// resulting [`VersionRange`] always carries plain bounds.
pub struct VersionRangeParser<'a> {
    input: &'a str,
}

impl<'a> VersionRangeParser<'a> {
    /// A parser over the given input.
    pub fn new(input: &'a str) -> Self {
        VersionRangeParser { input }
    }

    /// Parses the input as a version range, requiring that the whole
    /// input is consumed.
    pub fn parse(&self) -> Result<VersionRange, ParseError> {
        let mut cursor = TokenCursor::new(self.input)?;
        let first = cursor.current().kind.clone();
        let range = match first {
            TokenKind::OpenBracket | TokenKind::OpenParen => parse_interval(&mut cursor)?,
            TokenKind::Greater | TokenKind::Less => parse_comparison(&mut cursor)?,
            TokenKind::Caret => parse_caret(&mut cursor)?,
            _ => parse_wildcard_or_version(&mut cursor)?,
        };
        cursor.expect_end()?;
        Ok(range)
    }
}

fn parse_interval(cursor: &mut TokenCursor) -> Result<VersionRange, ParseError> {
    let lower_inclusive = cursor.advance().kind == TokenKind::OpenBracket;

    let lower = if cursor.current().kind == TokenKind::Comma {
        Bound::Unbounded
    } else {
        let version = version_parser::parse_partial(cursor)?;
        if lower_inclusive {
            Bound::Inclusive(version)
        } else {
            Bound::Exclusive(version)
        }
    };

    if cursor.current().kind != TokenKind::Comma {
        return Err(cursor.expected("','"));
    }
    cursor.advance();

    let upper = match cursor.current().kind.clone() {
        TokenKind::CloseBracket | TokenKind::CloseParen => {
            cursor.advance();
            Bound::Unbounded
        }
        _ => {
            let version = version_parser::parse_partial(cursor)?;
            match cursor.current().kind.clone() {
                TokenKind::CloseBracket => {
                    cursor.advance();
                    Bound::Inclusive(version)
                }
                TokenKind::CloseParen => {
                    cursor.advance();
                    Bound::Exclusive(version)
                }
                _ => return Err(cursor.expected("']' or ')'")),
            }
        }
    };

    Ok(VersionRange::new(lower, upper))
}

fn parse_comparison(cursor: &mut TokenCursor) -> Result<VersionRange, ParseError> {
    let greater = cursor.advance().kind == TokenKind::Greater;
    let inclusive = cursor.current().kind == TokenKind::Equals;
    if inclusive {
        cursor.advance();
    }

    let version = version_parser::parse_partial(cursor)?;
    let bound = if inclusive {
        Bound::Inclusive(version)
    } else {
        Bound::Exclusive(version)
    };

    Ok(if greater {
        VersionRange::new(bound, Bound::Unbounded)
    } else {
        VersionRange::new(Bound::Unbounded, bound)
    })
}

fn parse_caret(cursor: &mut TokenCursor) -> Result<VersionRange, ParseError> {
    cursor.advance();
    let lower = version_parser::parse_partial(cursor)?;
    let upper = caret_upper(&lower);
    Ok(VersionRange::new(
        Bound::Inclusive(lower),
        Bound::Exclusive(upper),
    ))
}

/// The exclusive upper bound of a caret range: the next increment of the
/// leftmost non-zero core component, e.g. `^1.2.3` < `2.0.0` and
/// `^0.1.2` < `0.2.0`.
fn caret_upper(lower: &Version) -> Version {
    if !lower.major().is_zero() {
        Version::new(lower.major().clone() + 1u32, 0u32, 0u32)
    } else if !lower.minor().is_zero() {
        Version::new(0u32, lower.minor().clone() + 1u32, 0u32)
    } else {
        Version::new(0u32, 0u32, lower.patch().clone() + 1u32)
    }
}

fn is_wildcard(kind: &TokenKind) -> bool {
    matches!(kind, TokenKind::Plus | TokenKind::Star)
}

fn parse_wildcard_or_version(cursor: &mut TokenCursor) -> Result<VersionRange, ParseError> {
    // A bare `+` or `*` matches every version.
    if is_wildcard(&cursor.current().kind) {
        cursor.advance();
        return Ok(VersionRange::new(Bound::Unbounded, Bound::Unbounded));
    }

    let major = version_parser::numeric_component(cursor)?;
    version_parser::expect_dot(cursor)?;

    if is_wildcard(&cursor.current().kind) {
        cursor.advance();
        return Ok(VersionRange::new(
            Bound::Inclusive(Version::new(major.clone(), 0u32, 0u32)),
            Bound::Exclusive(Version::new(major + 1u32, 0u32, 0u32)),
        ));
    }

    let minor = version_parser::numeric_component(cursor)?;
    version_parser::expect_dot(cursor)?;

    if is_wildcard(&cursor.current().kind) {
        cursor.advance();
        return Ok(VersionRange::new(
            Bound::Inclusive(Version::new(major.clone(), minor.clone(), 0u32)),
            Bound::Exclusive(Version::new(major, minor + 1u32, 0u32)),
        ));
    }

    let patch = version_parser::numeric_component(cursor)?;

    // A complete version, possibly with pre-release and build metadata,
    // denotes the degenerate range satisfied only by itself.
    let pre_release = if cursor.current().kind == TokenKind::Hyphen {
        cursor.advance();
        version_parser::parse_pre_release(cursor)?
    } else {
        PreRelease::empty()
    };
    let build_metadata = if cursor.current().kind == TokenKind::Plus {
        cursor.advance();
        version_parser::parse_build_metadata(cursor)?
    } else {
        BuildMetadata::empty()
    };

    Ok(VersionRange::exactly(Version::from_parts(
        major,
        minor,
        patch,
        pre_release,
        build_metadata,
    )))
}
