//! Author identifiers.

use serde::{Deserialize, Serialize};

use crate::sources::SourceError;

/// A validated portal author identifier.
///
/// The portal keys authors by a decimal number. Surrounding whitespace is
/// trimmed; anything other than ASCII digits afterwards is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AuthorId(String);

impl AuthorId {
    pub fn parse(raw: &str) -> Result<Self, SourceError> {
        let id = raw.trim();
        if !Self::is_valid(id) {
            return Err(SourceError::InvalidAuthorId(id.to_string()));
        }
        Ok(Self(id.to_string()))
    }

    /// Cheap validity check that does not allocate an error
    pub fn is_valid(raw: &str) -> bool {
        let id = raw.trim();
        !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AuthorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for AuthorId {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for AuthorId {
    type Error = SourceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<AuthorId> for String {
    fn from(id: AuthorId) -> Self {
        id.0
    }
}

/// The identifier argument of a scrape: one author, or an ordered batch.
///
/// The two forms take different code paths: a single author honours the
/// requested output format, a batch always yields records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorIds {
    One(String),
    Many(Vec<String>),
}

impl AuthorIds {
    /// Validate every identifier up front, before any request is made
    pub fn validate(&self) -> Result<Vec<AuthorId>, SourceError> {
        match self {
            AuthorIds::One(id) => Ok(vec![AuthorId::parse(id)?]),
            AuthorIds::Many(ids) => ids.iter().map(|id| AuthorId::parse(id)).collect(),
        }
    }

    pub fn is_batch(&self) -> bool {
        matches!(self, AuthorIds::Many(_))
    }
}

impl From<&str> for AuthorIds {
    fn from(id: &str) -> Self {
        AuthorIds::One(id.to_string())
    }
}

impl From<String> for AuthorIds {
    fn from(id: String) -> Self {
        AuthorIds::One(id)
    }
}

impl From<u64> for AuthorIds {
    fn from(id: u64) -> Self {
        AuthorIds::One(id.to_string())
    }
}

impl From<Vec<String>> for AuthorIds {
    fn from(ids: Vec<String>) -> Self {
        AuthorIds::Many(ids)
    }
}

impl From<Vec<&str>> for AuthorIds {
    fn from(ids: Vec<&str>) -> Self {
        AuthorIds::Many(ids.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for AuthorIds {
    fn from(ids: &[&str]) -> Self {
        AuthorIds::Many(ids.iter().map(|s| s.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ids() {
        assert_eq!(AuthorId::parse("12345").unwrap().as_str(), "12345");
        assert_eq!(AuthorId::parse("  6789 \n").unwrap().as_str(), "6789");
        assert!(AuthorId::is_valid("007"));
    }

    #[test]
    fn test_invalid_ids() {
        for raw in ["", "   ", "12a45", "abc", "-12", "+12", "1 2", "12.5", "١٢٣"] {
            let err = AuthorId::parse(raw).unwrap_err();
            assert!(
                matches!(err, SourceError::InvalidAuthorId(_)),
                "'{}' should be rejected",
                raw
            );
            assert!(!AuthorId::is_valid(raw));
        }
    }

    #[test]
    fn test_batch_validation_fails_on_any_invalid() {
        let ids = AuthorIds::from(vec!["123", "x9"]);
        assert!(ids.is_batch());
        assert!(matches!(
            ids.validate(),
            Err(SourceError::InvalidAuthorId(id)) if id == "x9"
        ));

        let ids = AuthorIds::from(vec!["123", " 456 "]);
        let parsed = ids.validate().unwrap();
        assert_eq!(parsed[1].as_str(), "456");
    }

    #[test]
    fn test_deserialize_rejects_invalid() {
        let ok: AuthorId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(ok.to_string(), "42");
        assert!(serde_json::from_str::<AuthorId>("\"4x2\"").is_err());
    }
}
