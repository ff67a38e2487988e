//! Single construction entry point for documents.

use chrono::{Months, NaiveDate};

use docflow_core::{Clock, DocumentId, DocumentKind, DomainResult, Entity, SystemClock};

use crate::contract::{self, Contract};
use crate::document::Document;
use crate::params::{DocumentParams, defaults};
use crate::presentation::Presentation;
use crate::record::DocumentRecord;
use crate::report::Report;

/// Value given to contracts built by [`DocumentFactory::create_simple_contract`].
pub const SIMPLE_CONTRACT_VALUE: f64 = 1000.0;

/// Builds documents from a type tag and optional parameters.
///
/// The only validation is on the type tag; counts and amounts are taken as
/// given. Creation dates (and the default contract validity) come from the
/// factory's clock.
#[derive(Debug, Default, Clone)]
pub struct DocumentFactory<C = SystemClock> {
    clock: C,
}

impl DocumentFactory<SystemClock> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> DocumentFactory<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Build a document of the kind named by `doc_type` (case-insensitive).
    ///
    /// Fails with `UnrecognizedDocumentType` for any other tag; nothing is
    /// constructed in that case.
    pub fn create_document(&self, doc_type: &str, params: DocumentParams) -> DomainResult<Document> {
        let kind: DocumentKind = doc_type.parse().inspect_err(|err| {
            tracing::debug!(doc_type, error = %err, "document type rejected");
        })?;
        Ok(self.create_from_kind(kind, params))
    }

    /// Build a document of an already-resolved kind. Cannot fail.
    pub fn create_from_kind(&self, kind: DocumentKind, params: DocumentParams) -> Document {
        let today = self.clock.today();
        let page_count = params.page_count.unwrap_or(defaults::PAGE_COUNT);
        if page_count < 0 {
            tracing::warn!(page_count, %kind, "negative page count accepted");
        }

        let record = DocumentRecord::new(
            DocumentId::generate(kind),
            params.title.unwrap_or_else(|| defaults::TITLE.to_string()),
            params.author.unwrap_or_else(|| defaults::AUTHOR.to_string()),
            today,
            page_count,
        );

        let document: Document = match kind {
            DocumentKind::Contract => Contract::new(
                record,
                params
                    .contract_type
                    .unwrap_or_else(|| defaults::CONTRACT_TYPE.to_string()),
                params
                    .valid_until
                    .unwrap_or_else(|| default_valid_until(today)),
                params.contract_value.unwrap_or(defaults::CONTRACT_VALUE),
            )
            .into(),
            DocumentKind::Report => Report::new(
                record,
                params
                    .report_period
                    .unwrap_or_else(|| defaults::REPORT_PERIOD.to_string()),
                params.has_charts.unwrap_or(defaults::HAS_CHARTS),
                params
                    .department
                    .unwrap_or_else(|| defaults::DEPARTMENT.to_string()),
            )
            .into(),
            DocumentKind::Presentation => {
                let slides = params.slides.unwrap_or(defaults::SLIDES);
                if slides < 0 {
                    tracing::warn!(slides, "negative slide count accepted");
                }
                Presentation::new(
                    record,
                    params.theme.unwrap_or_else(|| defaults::THEME.to_string()),
                    slides,
                    params.has_animations.unwrap_or(defaults::HAS_ANIMATIONS),
                )
                .into()
            }
        };

        tracing::debug!(document_id = %document.id(), %kind, "document created");
        document
    }

    /// Civil contract worth [`SIMPLE_CONTRACT_VALUE`], other fields defaulted.
    pub fn create_simple_contract(
        &self,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> Document {
        let params = DocumentParams::new()
            .with_title(title)
            .with_author(author)
            .with_contract_type(contract::CIVIL)
            .with_contract_value(SIMPLE_CONTRACT_VALUE);
        self.create_from_kind(DocumentKind::Contract, params)
    }

    /// Report with charts for `department`, other fields defaulted.
    pub fn create_simple_report(
        &self,
        title: impl Into<String>,
        author: impl Into<String>,
        department: impl Into<String>,
    ) -> Document {
        let params = DocumentParams::new()
            .with_title(title)
            .with_author(author)
            .with_department(department)
            .with_charts(true);
        self.create_from_kind(DocumentKind::Report, params)
    }
}

/// One year after `today`, clamped to the end of the month (Feb 29 -> Feb 28).
fn default_valid_until(today: NaiveDate) -> NaiveDate {
    today
        .checked_add_months(Months::new(defaults::VALIDITY_MONTHS))
        .unwrap_or(NaiveDate::MAX)
}
