//! Import report accumulation
//!
//! An import call produces one line per processed record, in input order.
//! Lines are collected here and joined once when the call finishes.

/// Line appended for every rejected record
pub const ERROR_MESSAGE: &str = "Invalid data!";

/// Ordered collection of report lines for one import call
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportAccumulator {
    lines: Vec<String>,
    rejected: usize,
}

impl ReportAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a success line
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Append the generic rejection line
    pub fn push_error(&mut self) {
        self.rejected += 1;
        self.lines.push(ERROR_MESSAGE.to_string());
    }

    /// Number of lines so far
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of rejection lines so far
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Join the lines with `\n` and drop trailing whitespace
    pub fn finish(self) -> String {
        self.lines.join("\n").trim_end().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut report = ReportAccumulator::new();
        report.push("first");
        report.push_error();
        report.push("third");

        assert_eq!(report.len(), 3);
        assert_eq!(report.rejected(), 1);
        assert_eq!(report.finish(), "first\nInvalid data!\nthird");
    }

    #[test]
    fn test_empty_report_is_empty_string() {
        let report = ReportAccumulator::new();
        assert!(report.is_empty());
        assert_eq!(report.finish(), "");
    }

    #[test]
    fn test_trailing_whitespace_is_trimmed() {
        let mut report = ReportAccumulator::new();
        report.push("line  ");
        report.push("");
        assert_eq!(report.finish(), "line");
    }
}
