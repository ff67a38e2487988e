//! Attributes shared by every document variant.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use docflow_core::{DocumentId, DocumentKind, DomainError, DomainResult, Entity};

use crate::narrator::Narrator;

/// Common document fields.
///
/// Everything except `page_count` is fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    id: DocumentId,
    title: String,
    author: String,
    creation_date: NaiveDate,
    page_count: i32,
}

impl DocumentRecord {
    pub fn new(
        id: DocumentId,
        title: impl Into<String>,
        author: impl Into<String>,
        creation_date: NaiveDate,
        page_count: i32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            creation_date,
            page_count,
        }
    }

    pub fn document_id(&self) -> &DocumentId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn creation_date(&self) -> NaiveDate {
        self.creation_date
    }

    pub fn page_count(&self) -> i32 {
        self.page_count
    }

    /// Negative values are stored as given.
    pub fn set_page_count(&mut self, page_count: i32) {
        self.page_count = page_count;
    }

    /// One-line summary: id, title, author, creation date and page count.
    pub fn document_info(&self) -> String {
        format!(
            "ID: {} | Title: {} | Author: {} | Date: {} | Pages: {}",
            self.id, self.title, self.author, self.creation_date, self.page_count
        )
    }

    pub fn archive(&self, narrator: &mut dyn Narrator) {
        narrator.narrate(format!("Archiving document: {}", self.title));
    }

    /// Fails unless the id prefix names `kind`.
    pub fn ensure_kind(&self, kind: DocumentKind) -> DomainResult<()> {
        if self.id.kind() != kind {
            return Err(DomainError::invalid_id(format!(
                "DocumentId: {} does not identify a {kind}",
                self.id
            )));
        }
        Ok(())
    }

    /// Narration step common to every variant's `describe_content`.
    pub fn narrate_content(&self, narrator: &mut dyn Narrator) {
        narrator.narrate(format!("Generating content for document: {}", self.title));
    }
}

/// Deserializes a record whose id must belong to `kind`.
pub(crate) fn deserialize_of_kind<'de, D>(
    deserializer: D,
    kind: DocumentKind,
) -> Result<DocumentRecord, D::Error>
where
    D: Deserializer<'de>,
{
    let record = DocumentRecord::deserialize(deserializer)?;
    record.ensure_kind(kind).map_err(serde::de::Error::custom)?;
    Ok(record)
}

impl Entity for DocumentRecord {
    type Id = DocumentId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
