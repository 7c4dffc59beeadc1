use tracing::debug;

use super::types::{DocumentReport, PriceFile, RunSummary, Schema};
use super::validation::validate_document;

#[derive(Debug, Default)]
pub struct Reporter {
    reports: Vec<DocumentReport>,
    summary: RunSummary,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, report: DocumentReport) {
        self.summary.files_examined += 1;
        self.summary.total_violations += report.violations.len();
        if report.is_valid() {
            self.summary.valid_files += 1;
        }
        self.reports.push(report);
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Reports ordered by logical document name, then file name.
    pub fn reports(&self) -> Vec<&DocumentReport> {
        let mut reports: Vec<&DocumentReport> = self.reports.iter().collect();
        reports.sort_by(|a, b| (&a.name, &a.file_name).cmp(&(&b.name, &b.file_name)));
        reports
    }
}

/// Validates every price file against `schema` in name order.
pub fn run(schema: &Schema, files: &[PriceFile]) -> Reporter {
    let mut ordered: Vec<&PriceFile> = files.iter().collect();
    ordered.sort_by(|a, b| (&a.name, &a.file_name).cmp(&(&b.name, &b.file_name)));

    let mut reporter = Reporter::new();
    for file in ordered {
        let violations = validate_document(&file.content, schema, &file.name);
        debug!(
            file = %file.file_name,
            violations = violations.len(),
            "validated price file"
        );
        reporter.record(DocumentReport {
            name: file.name.clone(),
            file_name: file.file_name.clone(),
            violations,
        });
    }
    reporter
}
