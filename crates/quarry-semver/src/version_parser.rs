//! Recursive descent parsing of version strings.

use num_bigint::BigUint;

use crate::error::ParseError;
use crate::tokenizer::{TokenCursor, TokenKind};
use crate::version::{BuildMetadata, PreRelease, PreReleaseIdentifier, Version};

/// A parser for a single version string.
///
/// The grammar is `major "." minor "." patch` with an optional
/// `-pre.release` sequence and an optional `+build.metadata` sequence.
/// Core components and numeric pre-release identifiers must not carry
/// leading zeros. Parsing is all-or-nothing: any failure is reported as a
/// positioned [`ParseError`] and nothing is returned.
pub struct VersionParser<'a> {
    input: &'a str,
}

impl<'a> VersionParser<'a> {
    /// A parser over the given input.
    pub fn new(input: &'a str) -> Self {
        VersionParser { input }
    }

    /// Parses the input as a version, requiring that the whole input is
    /// consumed.
    pub fn parse(&self) -> Result<Version, ParseError> {
        let mut cursor = TokenCursor::new(self.input)?;
        let version = parse_partial(&mut cursor)?;
        cursor.expect_end()?;
        Ok(version)
    }
}

/// Parses a version from the cursor's current position, stopping at the
/// first token that cannot continue a version. Used directly by the range
/// parser, where a version ends at a comma or closing bracket rather than
/// at end of input.
pub(crate) fn parse_partial(cursor: &mut TokenCursor) -> Result<Version, ParseError> {
    let major = numeric_component(cursor)?;
    expect_dot(cursor)?;
    let minor = numeric_component(cursor)?;
    expect_dot(cursor)?;
    let patch = numeric_component(cursor)?;

    let pre_release = if cursor.current().kind == TokenKind::Hyphen {
        cursor.advance();
        parse_pre_release(cursor)?
    } else {
        PreRelease::empty()
    };

    let build_metadata = if cursor.current().kind == TokenKind::Plus {
        cursor.advance();
        parse_build_metadata(cursor)?
    } else {
        BuildMetadata::empty()
    };

    Ok(Version::from_parts(
        major,
        minor,
        patch,
        pre_release,
        build_metadata,
    ))
}

/// Consumes a core numeric component, rejecting leading zeros.
pub(crate) fn numeric_component(cursor: &mut TokenCursor) -> Result<BigUint, ParseError> {
    match cursor.current().kind.clone() {
        TokenKind::Number(digits) => {
            if digits.len() > 1 && digits.starts_with('0') {
                return Err(
                    cursor.error_here("numeric identifier must not contain leading zeros")
                );
            }
            let value = digits.parse().expect("token holds a digit run");
            cursor.advance();
            Ok(value)
        }
        _ => Err(cursor.expected("numeric identifier")),
    }
}

pub(crate) fn expect_dot(cursor: &mut TokenCursor) -> Result<(), ParseError> {
    if cursor.current().kind == TokenKind::Dot {
        cursor.advance();
        Ok(())
    } else {
        Err(cursor.expected("'.'"))
    }
}

pub(crate) fn parse_pre_release(cursor: &mut TokenCursor) -> Result<PreRelease, ParseError> {
    let mut identifiers = vec![pre_release_identifier(cursor)?];
    while cursor.current().kind == TokenKind::Dot {
        cursor.advance();
        identifiers.push(pre_release_identifier(cursor)?);
    }
    Ok(PreRelease::new(identifiers))
}

fn pre_release_identifier(cursor: &mut TokenCursor) -> Result<PreReleaseIdentifier, ParseError> {
    match cursor.current().kind.clone() {
        TokenKind::Number(digits) => {
            if digits.len() > 1 && digits.starts_with('0') {
                return Err(
                    cursor.error_here("numeric identifier must not contain leading zeros")
                );
            }
            let value = digits.parse().expect("token holds a digit run");
            cursor.advance();
            Ok(PreReleaseIdentifier::Numeric(value))
        }
        TokenKind::Identifier(text) => {
            cursor.advance();
            Ok(PreReleaseIdentifier::Alphanumeric(text))
        }
        _ => Err(cursor.expected("pre-release identifier")),
    }
}

pub(crate) fn parse_build_metadata(cursor: &mut TokenCursor) -> Result<BuildMetadata, ParseError> {
    let mut identifiers = vec![build_identifier(cursor)?];
    while cursor.current().kind == TokenKind::Dot {
        cursor.advance();
        identifiers.push(build_identifier(cursor)?);
    }
    Ok(BuildMetadata::new(identifiers))
}

fn build_identifier(cursor: &mut TokenCursor) -> Result<String, ParseError> {
    match cursor.current().kind.clone() {
        TokenKind::Number(digits) => {
            cursor.advance();
            Ok(digits)
        }
        TokenKind::Identifier(text) => {
            cursor.advance();
            Ok(text)
        }
        _ => Err(cursor.expected("build metadata identifier")),
    }
}
