//! Aggregated run report.

/// Text report plus the anomalies found while building it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub body: String,
    pub issues: Vec<String>,
}

impl Report {
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Prepend a heading line and a blank line to the body.
    pub fn with_heading(mut self, heading: &str) -> Self {
        self.body = format!("{heading}\n\n{}", self.body);
        self
    }
}
