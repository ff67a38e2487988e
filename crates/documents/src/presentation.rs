use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use docflow_core::DocumentKind;

use crate::narrator::Narrator;
use crate::operations::DocumentOperations;
use crate::record::{self, DocumentRecord};

const COST_PER_SLIDE: f64 = 3.0;
const ANIMATIONS_SURCHARGE: f64 = 25.0;
const ARCHIVE_WINDOW: Months = Months::new(6);

/// A slide deck. Printing cost follows the slide count, not the page count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presentation {
    #[serde(deserialize_with = "presentation_record")]
    record: DocumentRecord,
    presentation_theme: String,
    slide_count: i32,
    has_animations: bool,
}

impl Presentation {
    /// `record` must carry an id generated for this kind.
    pub(crate) fn new(
        record: DocumentRecord,
        presentation_theme: impl Into<String>,
        slide_count: i32,
        has_animations: bool,
    ) -> Self {
        Self {
            record,
            presentation_theme: presentation_theme.into(),
            slide_count,
            has_animations,
        }
    }

    pub fn presentation_theme(&self) -> &str {
        &self.presentation_theme
    }

    pub fn slide_count(&self) -> i32 {
        self.slide_count
    }

    pub fn has_animations(&self) -> bool {
        self.has_animations
    }

    pub fn set_page_count(&mut self, page_count: i32) {
        self.record.set_page_count(page_count);
    }

    pub fn start_slide_show(&self, narrator: &mut dyn Narrator) {
        narrator.narrate(format!("Starting slide show: {}", self.record.title()));
        narrator.narrate(format!("Theme: {}", self.presentation_theme));
        narrator.narrate(format!("Slides: {}", self.slide_count));
    }
}

fn presentation_record<'de, D>(deserializer: D) -> Result<DocumentRecord, D::Error>
where
    D: serde::Deserializer<'de>,
{
    record::deserialize_of_kind(deserializer, DocumentKind::Presentation)
}

impl DocumentOperations for Presentation {
    fn record(&self) -> &DocumentRecord {
        &self.record
    }

    fn compute_cost(&self) -> f64 {
        let mut cost = f64::from(self.slide_count) * COST_PER_SLIDE;
        if self.has_animations {
            cost += ANIMATIONS_SURCHARGE;
        }
        cost
    }

    fn format(&self) -> &'static str {
        "16:9 presentation format, colour printing"
    }

    /// Presentations go stale after six months.
    fn is_archivable_on(&self, today: NaiveDate) -> bool {
        match today.checked_sub_months(ARCHIVE_WINDOW) {
            Some(cutoff) => self.record.creation_date() > cutoff,
            None => true,
        }
    }

    fn describe_content(&self, narrator: &mut dyn Narrator) {
        self.record.narrate_content(narrator);
        narrator.narrate(format!(
            "Building slide structure for theme: {}",
            self.presentation_theme
        ));
        narrator.narrate(format!("Slide count: {}", self.slide_count));
        if self.has_animations {
            narrator.narrate("Adding animations and transitions".to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docflow_core::DocumentId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn presentation(created: NaiveDate, slides: i32, has_animations: bool) -> Presentation {
        let record = DocumentRecord::new(
            DocumentId::generate(DocumentKind::Presentation),
            "Product launch",
            "Marketing",
            created,
            slides,
        );
        Presentation::new(record, "New product", slides, has_animations)
    }

    #[test]
    fn cost_follows_slides_and_animations() {
        assert_eq!(presentation(date(2025, 1, 1), 5, false).compute_cost(), 15.0);
        assert_eq!(presentation(date(2025, 1, 1), 15, true).compute_cost(), 70.0);
        assert_eq!(presentation(date(2025, 1, 1), 0, true).compute_cost(), 25.0);
    }

    #[test]
    fn page_count_does_not_affect_cost() {
        let mut p = presentation(date(2025, 1, 1), 5, false);
        p.set_page_count(500);
        assert_eq!(p.compute_cost(), 15.0);
    }

    #[test]
    fn archivable_only_within_six_months_of_creation() {
        let p = presentation(date(2025, 1, 15), 10, false);

        assert!(p.is_archivable_on(date(2025, 1, 15)));
        assert!(p.is_archivable_on(date(2025, 7, 14)));
        // Exactly six months later the cutoff equals the creation date.
        assert!(!p.is_archivable_on(date(2025, 7, 15)));
        assert!(!p.is_archivable_on(date(2026, 1, 1)));
    }

    #[test]
    fn six_month_window_clamps_to_month_end() {
        // 2025-08-31 minus six months is 2025-02-28.
        let p = presentation(date(2025, 2, 28), 10, false);
        assert!(!p.is_archivable_on(date(2025, 8, 31)));
        assert!(p.is_archivable_on(date(2025, 8, 27)));
    }

    #[test]
    fn uses_generic_type_label() {
        assert_eq!(presentation(date(2025, 1, 1), 1, false).type_label(), "General document");
    }

    #[test]
    fn describe_content_lists_structure_then_animations() {
        let mut lines = Vec::new();
        presentation(date(2025, 1, 1), 15, true).describe_content(&mut lines);
        assert_eq!(
            lines,
            vec![
                "Generating content for document: Product launch".to_string(),
                "Building slide structure for theme: New product".to_string(),
                "Slide count: 15".to_string(),
                "Adding animations and transitions".to_string(),
            ]
        );
    }

    #[test]
    fn slide_show_announces_theme_and_count() {
        let mut lines = Vec::new();
        presentation(date(2025, 1, 1), 12, false).start_slide_show(&mut lines);
        assert_eq!(
            lines,
            vec![
                "Starting slide show: Product launch".to_string(),
                "Theme: New product".to_string(),
                "Slides: 12".to_string(),
            ]
        );
    }
}
