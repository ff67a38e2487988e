//! Sealed union over the document variants.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use docflow_core::{DocumentId, DocumentKind, Entity};

use crate::contract::Contract;
use crate::narrator::Narrator;
use crate::operations::DocumentOperations;
use crate::presentation::Presentation;
use crate::record::DocumentRecord;
use crate::report::Report;

/// Any document the factory can build.
///
/// Callers that need variant-specific actions match on this enum (or use the
/// `as_*` accessors) instead of inspecting types at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Document {
    Contract(Contract),
    Report(Report),
    Presentation(Presentation),
}

impl Document {
    pub fn kind(&self) -> DocumentKind {
        match self {
            Document::Contract(_) => DocumentKind::Contract,
            Document::Report(_) => DocumentKind::Report,
            Document::Presentation(_) => DocumentKind::Presentation,
        }
    }

    pub fn set_page_count(&mut self, page_count: i32) {
        match self {
            Document::Contract(d) => d.set_page_count(page_count),
            Document::Report(d) => d.set_page_count(page_count),
            Document::Presentation(d) => d.set_page_count(page_count),
        }
    }

    pub fn document_info(&self) -> String {
        self.record().document_info()
    }

    pub fn archive(&self, narrator: &mut dyn Narrator) {
        self.record().archive(narrator);
    }

    pub fn as_contract(&self) -> Option<&Contract> {
        match self {
            Document::Contract(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_report(&self) -> Option<&Report> {
        match self {
            Document::Report(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_presentation(&self) -> Option<&Presentation> {
        match self {
            Document::Presentation(p) => Some(p),
            _ => None,
        }
    }

    fn operations(&self) -> &dyn DocumentOperations {
        match self {
            Document::Contract(d) => d,
            Document::Report(d) => d,
            Document::Presentation(d) => d,
        }
    }
}

impl DocumentOperations for Document {
    fn record(&self) -> &DocumentRecord {
        self.operations().record()
    }

    fn compute_cost(&self) -> f64 {
        self.operations().compute_cost()
    }

    fn format(&self) -> &'static str {
        self.operations().format()
    }

    fn is_archivable_on(&self, today: NaiveDate) -> bool {
        self.operations().is_archivable_on(today)
    }

    fn type_label(&self) -> String {
        self.operations().type_label()
    }

    fn describe_content(&self, narrator: &mut dyn Narrator) {
        self.operations().describe_content(narrator);
    }
}

impl Entity for Document {
    type Id = DocumentId;

    fn id(&self) -> &Self::Id {
        self.record().document_id()
    }
}

impl From<Contract> for Document {
    fn from(value: Contract) -> Self {
        Document::Contract(value)
    }
}

impl From<Report> for Document {
    fn from(value: Report) -> Self {
        Document::Report(value)
    }
}

impl From<Presentation> for Document {
    fn from(value: Presentation) -> Self {
        Document::Presentation(value)
    }
}
