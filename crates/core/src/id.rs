//! Strongly-typed document identifiers.
//!
//! Ids look like `CONT-1A2B3C4D`: the kind prefix, a dash, then eight uppercase
//! hex digits taken from a random UUID.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;
use crate::kind::DocumentKind;

const SUFFIX_LEN: usize = 8;

/// Identifier of a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentId {
    kind: DocumentKind,
    raw: String,
}

impl DocumentId {
    /// Generate a fresh identifier for `kind`.
    ///
    /// Uniqueness is probabilistic (32 random bits), not guaranteed. Prefer
    /// [`DocumentId::from_uuid`] in tests for determinism.
    pub fn generate(kind: DocumentKind) -> Self {
        Self::from_uuid(kind, Uuid::new_v4())
    }

    /// Build an identifier from the leading hex digits of `uuid`.
    pub fn from_uuid(kind: DocumentKind, uuid: Uuid) -> Self {
        let hex = uuid.simple().to_string().to_ascii_uppercase();
        Self {
            kind,
            raw: format!("{}-{}", kind.prefix(), &hex[..SUFFIX_LEN]),
        }
    }

    /// The document kind encoded in the prefix.
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl core::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl TryFrom<String> for DocumentId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DocumentId> for String {
    fn from(value: DocumentId) -> Self {
        value.raw
    }
}

impl FromStr for DocumentId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, suffix) = s
            .split_once('-')
            .ok_or_else(|| DomainError::invalid_id(format!("DocumentId: missing '-' in {s:?}")))?;

        let kind = DocumentKind::from_prefix(prefix).ok_or_else(|| {
            DomainError::invalid_id(format!("DocumentId: unknown prefix {prefix:?}"))
        })?;

        let well_formed = suffix.len() == SUFFIX_LEN
            && suffix
                .chars()
                .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c));
        if !well_formed {
            return Err(DomainError::invalid_id(format!(
                "DocumentId: expected {SUFFIX_LEN} uppercase hex digits, got {suffix:?}"
            )));
        }

        Ok(Self {
            kind,
            raw: s.to_string(),
        })
    }
}
