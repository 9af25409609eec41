//! Build metadata attached to a version.

use std::fmt;

/// The build metadata of a version: a sequence of opaque identifiers
/// carried for informational purposes only. It never participates in
/// ordering or equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BuildMetadata {
    identifiers: Vec<String>,
}

impl BuildMetadata {
    /// Build metadata made of the given identifiers.
    pub fn new(identifiers: Vec<String>) -> Self {
        BuildMetadata { identifiers }
    }

    /// The empty build metadata.
    pub fn empty() -> Self {
        BuildMetadata::default()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }
}

impl fmt::Display for BuildMetadata {
    /// Renders as `+build.1`, with the leading plus, or as nothing when
    /// empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, identifier) in self.identifiers.iter().enumerate() {
            let separator = if i == 0 { '+' } else { '.' };
            write!(f, "{separator}{identifier}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(BuildMetadata::empty().to_string(), "");
        assert_eq!(
            BuildMetadata::new(vec!["build".into(), "1848".into()]).to_string(),
            "+build.1848"
        );
        assert_eq!(
            BuildMetadata::new(vec!["meta-valid".into()]).to_string(),
            "+meta-valid"
        );
    }
}
