//! Construction parameters accepted by the factory.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Values used for parameters the caller leaves unset.
pub mod defaults {
    pub const TITLE: &str = "Untitled";
    pub const AUTHOR: &str = "Unknown author";
    pub const PAGE_COUNT: i32 = 1;

    pub const CONTRACT_TYPE: &str = "civil";
    /// `valid_until` defaults to this many months after the creation date.
    pub const VALIDITY_MONTHS: u32 = 12;
    pub const CONTRACT_VALUE: f64 = 0.0;

    pub const REPORT_PERIOD: &str = "monthly";
    pub const HAS_CHARTS: bool = false;
    pub const DEPARTMENT: &str = "general";

    pub const THEME: &str = "General theme";
    pub const SLIDES: i32 = 10;
    pub const HAS_ANIMATIONS: bool = false;
}

/// Optional construction parameters for any document kind.
///
/// Field names follow the camelCase parameter names (`pageCount`,
/// `contractType`, ...) so a JSON object deserializes directly. Parameters that
/// do not apply to the requested kind are ignored, as are unknown keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentParams {
    pub title: Option<String>,
    pub author: Option<String>,
    pub page_count: Option<i32>,

    pub contract_type: Option<String>,
    pub valid_until: Option<NaiveDate>,
    pub contract_value: Option<f64>,

    pub report_period: Option<String>,
    pub has_charts: Option<bool>,
    pub department: Option<String>,

    pub theme: Option<String>,
    pub slides: Option<i32>,
    pub has_animations: Option<bool>,
}

impl DocumentParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_page_count(mut self, page_count: i32) -> Self {
        self.page_count = Some(page_count);
        self
    }

    pub fn with_contract_type(mut self, contract_type: impl Into<String>) -> Self {
        self.contract_type = Some(contract_type.into());
        self
    }

    pub fn with_valid_until(mut self, valid_until: NaiveDate) -> Self {
        self.valid_until = Some(valid_until);
        self
    }

    pub fn with_contract_value(mut self, contract_value: f64) -> Self {
        self.contract_value = Some(contract_value);
        self
    }

    pub fn with_report_period(mut self, report_period: impl Into<String>) -> Self {
        self.report_period = Some(report_period.into());
        self
    }

    pub fn with_charts(mut self, has_charts: bool) -> Self {
        self.has_charts = Some(has_charts);
        self
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    pub fn with_slides(mut self, slides: i32) -> Self {
        self.slides = Some(slides);
        self
    }

    pub fn with_animations(mut self, has_animations: bool) -> Self {
        self.has_animations = Some(has_animations);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_bag_and_ignores_unknown_keys() {
        let params: DocumentParams = serde_json::from_str(
            r#"{
                "title": "Employment contract",
                "pageCount": 5,
                "contractType": "labor",
                "validUntil": "2029-10-16",
                "contractValue": 50000.0,
                "color": "blue"
            }"#,
        )
        .unwrap();

        assert_eq!(
            params,
            DocumentParams::new()
                .with_title("Employment contract")
                .with_page_count(5)
                .with_contract_type("labor")
                .with_valid_until(NaiveDate::from_ymd_opt(2029, 10, 16).unwrap())
                .with_contract_value(50_000.0)
        );
    }

    #[test]
    fn empty_bag_leaves_everything_unset() {
        let params: DocumentParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params, DocumentParams::default());
    }

    #[test]
    fn mistyped_values_are_rejected() {
        assert!(serde_json::from_str::<DocumentParams>(r#"{"pageCount": "five"}"#).is_err());
        assert!(serde_json::from_str::<DocumentParams>(r#"{"hasCharts": 1}"#).is_err());
    }
}
