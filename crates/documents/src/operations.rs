//! The capability set shared by every document variant.

use chrono::NaiveDate;

use docflow_core::{Clock, SystemClock};

use crate::narrator::Narrator;
use crate::record::DocumentRecord;

/// Quality-management standard every document is produced under.
pub const DOCUMENT_STANDARD: &str = "ISO 9001:2015";

/// Label used by variants that do not describe themselves more precisely.
pub const GENERIC_TYPE_LABEL: &str = "General document";

/// Returns [`DOCUMENT_STANDARD`]; needs no document instance.
pub fn document_standard() -> &'static str {
    DOCUMENT_STANDARD
}

/// Polymorphic document behaviour.
///
/// Variants must supply the record, the printing cost and the print format.
/// Archiving eligibility, the type label and the content narration have
/// defaults that variants override where their rules differ.
pub trait DocumentOperations {
    /// Common fields of this document.
    fn record(&self) -> &DocumentRecord;

    /// Printing cost in the local currency.
    fn compute_cost(&self) -> f64;

    /// Human-readable print format.
    fn format(&self) -> &'static str;

    /// Whether the document may go to long-term storage as of `today`.
    fn is_archivable_on(&self, _today: NaiveDate) -> bool {
        true
    }

    /// [`is_archivable_on`](Self::is_archivable_on) evaluated against the system date.
    fn is_archivable(&self) -> bool {
        self.is_archivable_on(SystemClock.today())
    }

    fn type_label(&self) -> String {
        GENERIC_TYPE_LABEL.to_string()
    }

    /// Narrates how the document content is produced.
    ///
    /// Overrides must run the common step (`record().narrate_content`) before
    /// their own lines.
    fn describe_content(&self, narrator: &mut dyn Narrator) {
        self.record().narrate_content(narrator);
    }
}
