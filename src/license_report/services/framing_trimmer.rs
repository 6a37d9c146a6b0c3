use crate::license_report::domain::ReportDocument;

/// FramingTrimmer - Removes the timestamped header and footer of a report
///
/// The generator frames its output with a first and last line that carry
/// the generation date. Dropping both makes the committed report depend only
/// on the installed packages.
///
/// This is not idempotent: each call removes two more lines, so it must be
/// applied exactly once to fresh generator output.
pub struct FramingTrimmer;

impl FramingTrimmer {
    /// Returns the document without its first and last line.
    ///
    /// Documents with fewer than two lines trim to an empty document.
    pub fn trim(document: &ReportDocument) -> ReportDocument {
        let lines = document.lines();
        let body = if lines.len() < 2 {
            Vec::new()
        } else {
            lines[1..lines.len() - 1].to_vec()
        };
        ReportDocument::new(body, document.line_ending())
    }

    /// Convenience wrapper over raw report text
    pub fn trim_text(content: &str) -> String {
        Self::trim(&ReportDocument::parse(content)).render()
    }
}
