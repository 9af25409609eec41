//! Pre-release identifiers and their precedence rules.

use std::cmp::Ordering;
use std::fmt;

use num_bigint::BigUint;

/// A single dot-separated pre-release component.
///
/// Numeric identifiers compare by integer value and always precede
/// alphanumeric identifiers at the same position; alphanumeric
/// identifiers compare byte-for-byte in ASCII order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PreReleaseIdentifier {
    /// A digit-only component without leading zeros.
    Numeric(BigUint),
    /// A component containing a letter or hyphen, or a digit run with a
    /// leading zero.
    Alphanumeric(String),
}

impl PreReleaseIdentifier {
    /// Classifies a raw component: a digit run with no leading zero (or
    /// exactly `"0"`) is numeric, anything else is alphanumeric.
    pub fn classify(component: &str) -> Self {
        let bytes = component.as_bytes();
        let numeric = !bytes.is_empty()
            && bytes.iter().all(|b| b.is_ascii_digit())
            && (bytes.len() == 1 || bytes[0] != b'0');
        if numeric {
            PreReleaseIdentifier::Numeric(component.parse().expect("validated digit run"))
        } else {
            PreReleaseIdentifier::Alphanumeric(component.to_owned())
        }
    }

    /// Whether this identifier compares by integer value.
    pub fn is_numeric(&self) -> bool {
        matches!(self, PreReleaseIdentifier::Numeric(_))
    }
}

impl Ord for PreReleaseIdentifier {
    fn cmp(&self, other: &Self) -> Ordering {
        use PreReleaseIdentifier::{Alphanumeric, Numeric};
        match (self, other) {
            (Numeric(a), Numeric(b)) => a.cmp(b),
            (Numeric(_), Alphanumeric(_)) => Ordering::Less,
            (Alphanumeric(_), Numeric(_)) => Ordering::Greater,
            (Alphanumeric(a), Alphanumeric(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for PreReleaseIdentifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PreReleaseIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreReleaseIdentifier::Numeric(value) => write!(f, "{value}"),
            PreReleaseIdentifier::Alphanumeric(text) => f.write_str(text),
        }
    }
}

/// The pre-release component of a version. An empty sequence means the
/// version is a release, which outranks every pre-release of the same
/// core version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PreRelease {
    identifiers: Vec<PreReleaseIdentifier>,
}

impl PreRelease {
    /// A pre-release made of the given identifiers.
    pub fn new(identifiers: Vec<PreReleaseIdentifier>) -> Self {
        PreRelease { identifiers }
    }

    /// The empty pre-release, denoting a release version.
    pub fn empty() -> Self {
        PreRelease::default()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn identifiers(&self) -> &[PreReleaseIdentifier] {
        &self.identifiers
    }
}

impl Ord for PreRelease {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.identifiers.is_empty(), other.identifiers.is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                for (a, b) in self.identifiers.iter().zip(&other.identifiers) {
                    match a.cmp(b) {
                        Ordering::Equal => continue,
                        decided => return decided,
                    }
                }
                // A strict prefix sorts before the longer sequence.
                self.identifiers.len().cmp(&other.identifiers.len())
            }
        }
    }
}

impl PartialOrd for PreRelease {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PreRelease {
    /// Renders as `-alpha.1`, with the leading hyphen, or as nothing when
    /// empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, identifier) in self.identifiers.iter().enumerate() {
            let separator = if i == 0 { '-' } else { '.' };
            write!(f, "{separator}{identifier}")?;
        }
        Ok(())
    }
}
