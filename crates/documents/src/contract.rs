use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use docflow_core::{Clock, DocumentKind, SystemClock};

use crate::narrator::Narrator;
use crate::operations::DocumentOperations;
use crate::record::{self, DocumentRecord};

/// Contract category carrying a flat printing surcharge.
pub const LABOR: &str = "labor";
/// Contract category whose surcharge scales with the contract value.
pub const COMMERCIAL: &str = "commercial";
pub const CIVIL: &str = "civil";

const COST_PER_PAGE: f64 = 2.5;
const LABOR_SURCHARGE: f64 = 50.0;
const COMMERCIAL_VALUE_RATE: f64 = 0.001;

/// A legal agreement valid until a given date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    #[serde(deserialize_with = "contract_record")]
    record: DocumentRecord,
    contract_type: String,
    valid_until: NaiveDate,
    contract_value: f64,
}

impl Contract {
    /// `record` must carry an id generated for this kind.
    pub(crate) fn new(
        record: DocumentRecord,
        contract_type: impl Into<String>,
        valid_until: NaiveDate,
        contract_value: f64,
    ) -> Self {
        Self {
            record,
            contract_type: contract_type.into(),
            valid_until,
            contract_value,
        }
    }

    pub fn contract_type(&self) -> &str {
        &self.contract_type
    }

    pub fn valid_until(&self) -> NaiveDate {
        self.valid_until
    }

    pub fn contract_value(&self) -> f64 {
        self.contract_value
    }

    pub fn set_page_count(&mut self, page_count: i32) {
        self.record.set_page_count(page_count);
    }

    /// Invariant: expired iff `today` is strictly after `valid_until`.
    pub fn is_expired_on(&self, today: NaiveDate) -> bool {
        today > self.valid_until
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_on(SystemClock.today())
    }
}

fn contract_record<'de, D>(deserializer: D) -> Result<DocumentRecord, D::Error>
where
    D: serde::Deserializer<'de>,
{
    record::deserialize_of_kind(deserializer, DocumentKind::Contract)
}

impl DocumentOperations for Contract {
    fn record(&self) -> &DocumentRecord {
        &self.record
    }

    fn compute_cost(&self) -> f64 {
        let base = f64::from(self.record.page_count()) * COST_PER_PAGE;
        match self.contract_type.as_str() {
            LABOR => base + LABOR_SURCHARGE,
            COMMERCIAL => base + self.contract_value * COMMERCIAL_VALUE_RATE,
            _ => base,
        }
    }

    fn format(&self) -> &'static str {
        "Legal A4 format, duplex printing"
    }

    /// Archivable only while the contract is still valid; a contract ending
    /// today is neither expired nor archivable.
    fn is_archivable_on(&self, today: NaiveDate) -> bool {
        self.valid_until > today
    }

    fn type_label(&self) -> String {
        format!("Contract ({})", self.contract_type)
    }

    fn describe_content(&self, narrator: &mut dyn Narrator) {
        self.record.narrate_content(narrator);
        narrator.narrate("Adding legal framework and standard contract clauses".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docflow_core::DocumentId;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn contract(contract_type: &str, pages: i32, value: f64, valid_until: NaiveDate) -> Contract {
        let record = DocumentRecord::new(
            DocumentId::generate(DocumentKind::Contract),
            "Service agreement",
            "Legal",
            date(2025, 1, 1),
            pages,
        );
        Contract::new(record, contract_type, valid_until, value)
    }

    fn assert_cost(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "cost {actual} != expected {expected}"
        );
    }

    #[test]
    fn labor_contract_adds_flat_surcharge() {
        assert_cost(contract(LABOR, 0, 0.0, date(2030, 1, 1)).compute_cost(), 50.0);
        assert_cost(contract(LABOR, 5, 50_000.0, date(2030, 1, 1)).compute_cost(), 62.5);
    }

    #[test]
    fn commercial_contract_scales_with_value() {
        let c = contract(COMMERCIAL, 4, 20_000.0, date(2030, 1, 1));
        assert_cost(c.compute_cost(), 4.0 * 2.5 + 20.0);
    }

    #[test]
    fn other_categories_pay_pages_only() {
        assert_cost(contract(CIVIL, 3, 1_000.0, date(2030, 1, 1)).compute_cost(), 7.5);
        // Category matching is exact.
        assert_cost(contract("Labor", 3, 0.0, date(2030, 1, 1)).compute_cost(), 7.5);
    }

    #[test]
    fn expiry_and_archiving_are_strict_around_valid_until() {
        let c = contract(CIVIL, 1, 0.0, date(2026, 6, 30));

        assert!(!c.is_expired_on(date(2026, 6, 29)));
        assert!(c.is_archivable_on(date(2026, 6, 29)));

        // On the last valid day the contract is neither expired nor archivable.
        assert!(!c.is_expired_on(date(2026, 6, 30)));
        assert!(!c.is_archivable_on(date(2026, 6, 30)));

        assert!(c.is_expired_on(date(2026, 7, 1)));
        assert!(!c.is_archivable_on(date(2026, 7, 1)));
    }

    #[test]
    fn system_clock_forms_agree_with_dated_forms() {
        let far_future = contract(CIVIL, 1, 0.0, date(9999, 12, 31));
        assert!(!far_future.is_expired());
        assert!(far_future.is_archivable());

        let long_gone = contract(CIVIL, 1, 0.0, date(1999, 12, 31));
        assert!(long_gone.is_expired());
        assert!(!long_gone.is_archivable());
    }

    #[test]
    fn type_label_names_the_category() {
        let label = contract(COMMERCIAL, 1, 0.0, date(2030, 1, 1)).type_label();
        assert!(label.contains("Contract"));
        assert!(label.contains("commercial"));
        assert_eq!(label, "Contract (commercial)");
    }

    #[test]
    fn describe_content_runs_common_step_first() {
        let mut lines = Vec::new();
        contract(CIVIL, 1, 0.0, date(2030, 1, 1)).describe_content(&mut lines);
        assert_eq!(
            lines,
            vec![
                "Generating content for document: Service agreement".to_string(),
                "Adding legal framework and standard contract clauses".to_string(),
            ]
        );
    }

    proptest! {
        #[test]
        fn cost_is_never_negative_for_non_negative_inputs(
            pages in 0i32..100_000,
            value in 0.0f64..1.0e12,
            category in prop::sample::select(vec![LABOR, COMMERCIAL, CIVIL, "other"]),
        ) {
            let c = contract(category, pages, value, date(2030, 1, 1));
            prop_assert!(c.compute_cost() >= 0.0);
        }
    }
}
