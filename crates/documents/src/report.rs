use serde::{Deserialize, Serialize};

use docflow_core::DocumentKind;

use crate::narrator::Narrator;
use crate::operations::DocumentOperations;
use crate::record::{self, DocumentRecord};

const COST_PER_PAGE: f64 = 1.8;
const CHARTS_SURCHARGE: f64 = 30.0;
const COLOR_PRINT_FACTOR: f64 = 1.5;

/// Departments whose reports are printed in colour.
pub const COLOR_DEPARTMENTS: [&str; 2] = ["marketing", "design"];

/// A periodic departmental report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(deserialize_with = "report_record")]
    record: DocumentRecord,
    report_period: String,
    has_charts: bool,
    department: String,
}

impl Report {
    /// `record` must carry an id generated for this kind.
    pub(crate) fn new(
        record: DocumentRecord,
        report_period: impl Into<String>,
        has_charts: bool,
        department: impl Into<String>,
    ) -> Self {
        Self {
            record,
            report_period: report_period.into(),
            has_charts,
            department: department.into(),
        }
    }

    pub fn report_period(&self) -> &str {
        &self.report_period
    }

    pub fn has_charts(&self) -> bool {
        self.has_charts
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn set_page_count(&mut self, page_count: i32) {
        self.record.set_page_count(page_count);
    }

    pub fn add_executive_summary(&self, narrator: &mut dyn Narrator) {
        narrator.narrate(format!(
            "Adding executive summary to report: {}",
            self.record.title()
        ));
    }
}

fn report_record<'de, D>(deserializer: D) -> Result<DocumentRecord, D::Error>
where
    D: serde::Deserializer<'de>,
{
    record::deserialize_of_kind(deserializer, DocumentKind::Report)
}

impl DocumentOperations for Report {
    fn record(&self) -> &DocumentRecord {
        &self.record
    }

    fn compute_cost(&self) -> f64 {
        let mut cost = f64::from(self.record.page_count()) * COST_PER_PAGE;
        if self.has_charts {
            cost += CHARTS_SURCHARGE;
        }
        // Colour surcharge applies to the charts addition too.
        if COLOR_DEPARTMENTS.contains(&self.department.as_str()) {
            cost *= COLOR_PRINT_FACTOR;
        }
        cost
    }

    fn format(&self) -> &'static str {
        "Corporate format with company logo"
    }

    fn type_label(&self) -> String {
        format!("Report ({}) from {}", self.report_period, self.department)
    }

    fn describe_content(&self, narrator: &mut dyn Narrator) {
        self.record.narrate_content(narrator);
        narrator.narrate("Adding tables, charts and analytical conclusions".to_string());
        if self.has_charts {
            narrator.narrate(format!(
                "Generating charts for period: {}",
                self.report_period
            ));
        }
    }
}
