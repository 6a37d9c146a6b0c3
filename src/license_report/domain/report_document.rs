/// Line terminator used when a report is written back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// Picks the terminator most lines use; ties go to LF
    pub fn detect(content: &str) -> Self {
        let crlf = content.matches("\r\n").count();
        let lf = content.matches('\n').count() - crlf;
        if crlf > lf {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// ReportDocument - A license report as an ordered sequence of lines
///
/// Lines are stored without their terminators. The dominant line ending
/// seen on parse is remembered so that rendering does not rewrite a CRLF
/// report as LF. A report with mixed endings is written back with that
/// dominant ending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    lines: Vec<String>,
    line_ending: LineEnding,
}

impl ReportDocument {
    pub fn new(lines: Vec<String>, line_ending: LineEnding) -> Self {
        Self { lines, line_ending }
    }

    pub fn parse(content: &str) -> Self {
        Self {
            lines: content.lines().map(str::to_string).collect(),
            line_ending: LineEnding::detect(content),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Renders the document back to text.
    ///
    /// Lines are joined with the document's line ending and a non-empty
    /// document ends with exactly one terminator. An empty document renders
    /// as an empty string.
    pub fn render(&self) -> String {
        if self.lines.is_empty() {
            return String::new();
        }
        let ending = self.line_ending.as_str();
        let mut out = self.lines.join(ending);
        out.push_str(ending);
        out
    }
}
