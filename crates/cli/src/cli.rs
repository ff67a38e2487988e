//! `docflow` command line: build one document and print what it costs.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;

use docflow_core::{Clock, FixedClock, SystemClock};
use docflow_documents::{
    Document, DocumentFactory, DocumentOperations, DocumentParams, Narrator, document_standard,
};

#[derive(Parser, Debug)]
#[command(
    name = "docflow",
    version,
    about = "Build a contract, report or presentation and show its printing summary."
)]
pub struct Cli {
    /// Document type: contract, report or presentation (any case).
    pub doc_type: String,

    /// Parameters as a JSON object, e.g. '{"title": "Q1", "pageCount": 8}'.
    #[arg(long, short)]
    pub params: Option<String>,

    /// Date to treat as today (YYYY-MM-DD).
    #[arg(long, env = "DOCFLOW_TODAY")]
    pub today: Option<NaiveDate>,

    /// Print the document as JSON instead of the text summary.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn run(self, out: &mut impl Write) -> Result<()> {
        let params: DocumentParams = match &self.params {
            Some(raw) => serde_json::from_str(raw).context("invalid --params JSON")?,
            None => DocumentParams::default(),
        };

        let today = self.today.unwrap_or_else(|| SystemClock.today());
        let factory = DocumentFactory::with_clock(FixedClock(today));
        let document = factory
            .create_document(&self.doc_type, params)
            .with_context(|| format!("cannot create {:?}", self.doc_type))?;
        tracing::info!(kind = %document.kind(), "document built");

        if self.json {
            serde_json::to_writer_pretty(&mut *out, &document)?;
            writeln!(out)?;
            return Ok(());
        }

        write_summary(out, &document, today)
    }
}

/// Writes lines straight to the wrapped writer, remembering the first error.
struct WriteNarrator<'a, W: Write> {
    out: &'a mut W,
    error: Option<std::io::Error>,
}

impl<W: Write> Narrator for WriteNarrator<'_, W> {
    fn narrate(&mut self, line: String) {
        if self.error.is_none() {
            if let Err(e) = writeln!(self.out, "  {line}") {
                self.error = Some(e);
            }
        }
    }
}

pub fn write_summary(out: &mut impl Write, document: &Document, today: NaiveDate) -> Result<()> {
    writeln!(out, "{}", document.document_info())?;
    writeln!(out, "  Type: {}", document.type_label())?;
    writeln!(out, "  Format: {}", document.format())?;
    writeln!(out, "  Printing cost: {:.2}", document.compute_cost())?;
    writeln!(out, "  Archivable: {}", document.is_archivable_on(today))?;
    writeln!(out, "  Standard: {}", document_standard())?;

    match document {
        Document::Contract(c) => writeln!(
            out,
            "  Valid until: {} (expired: {})",
            c.valid_until(),
            c.is_expired_on(today)
        )?,
        Document::Report(r) => writeln!(out, "  Charts: {}", r.has_charts())?,
        Document::Presentation(p) => writeln!(out, "  Slides: {}", p.slide_count())?,
    }

    writeln!(out, "Content:")?;
    let mut narrator = WriteNarrator { out, error: None };
    document.describe_content(&mut narrator);
    match document {
        Document::Report(r) => r.add_executive_summary(&mut narrator),
        Document::Presentation(p) => p.start_slide_show(&mut narrator),
        Document::Contract(_) => {}
    }
    match narrator.error {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("docflow").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        cli.run(&mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn prints_contract_summary() {
        let text = run(&[
            "contract",
            "--today",
            "2026-10-16",
            "--params",
            r#"{"title": "Employment contract", "contractType": "labor", "pageCount": 5}"#,
        ])
        .unwrap();

        assert!(text.starts_with("ID: CONT-"));
        assert!(text.contains("Title: Employment contract"));
        assert!(text.contains("Type: Contract (labor)"));
        assert!(text.contains("Printing cost: 62.50"));
        assert!(text.contains("Archivable: true"));
        assert!(text.contains("Valid until: 2027-10-16 (expired: false)"));
        assert!(text.contains("  Adding legal framework and standard contract clauses"));
    }

    #[test]
    fn presentation_summary_includes_slide_show() {
        let text = run(&["PRESENTATION", "--today", "2026-10-16", "-p", r#"{"slides": 3}"#]).unwrap();
        assert!(text.contains("Printing cost: 9.00"));
        assert!(text.contains("  Slides: 3"));
        assert!(text.contains("  Starting slide show: Untitled"));
    }

    #[test]
    fn json_output_is_tagged() {
        let text = run(&["report", "--json"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["kind"], "report");
        assert_eq!(value["department"], "general");
    }

    #[test]
    fn unknown_type_is_an_error() {
        let err = run(&["invoice"]).unwrap_err();
        assert!(format!("{err:#}").contains("unrecognized document type: invoice"));
    }

    #[test]
    fn malformed_params_are_an_error() {
        let err = run(&["report", "--params", "{not json"]).unwrap_err();
        assert!(err.to_string().contains("invalid --params JSON"));
    }
}
