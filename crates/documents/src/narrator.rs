//! Sinks for document narration.
//!
//! `describe_content`, `archive` and the variant-specific actions narrate what
//! they do line by line. Where those lines end up is the caller's choice.

/// Receives narration lines in the order they are produced.
pub trait Narrator {
    fn narrate(&mut self, line: String);
}

/// Collects lines in memory.
impl Narrator for Vec<String> {
    fn narrate(&mut self, line: String) {
        self.push(line);
    }
}

/// Emits every line as an `info` tracing event.
#[derive(Debug, Default, Copy, Clone)]
pub struct TracingNarrator;

impl Narrator for TracingNarrator {
    fn narrate(&mut self, line: String) {
        tracing::info!(target: "docflow::narration", "{line}");
    }
}
