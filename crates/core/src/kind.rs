//! Document kinds recognized by the factory.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The closed set of document variants.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Contract,
    Report,
    Presentation,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::Contract,
        DocumentKind::Report,
        DocumentKind::Presentation,
    ];

    /// Identifier prefix used for generated document ids.
    pub fn prefix(self) -> &'static str {
        match self {
            DocumentKind::Contract => "CONT",
            DocumentKind::Report => "REP",
            DocumentKind::Presentation => "PRES",
        }
    }

    /// Canonical lowercase type tag.
    pub fn tag(self) -> &'static str {
        match self {
            DocumentKind::Contract => "contract",
            DocumentKind::Report => "report",
            DocumentKind::Presentation => "presentation",
        }
    }

    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.prefix() == prefix)
    }
}

impl core::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Parses a type tag, ignoring ASCII case.
impl FromStr for DocumentKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::unrecognized_type(s))
    }
}
