use super::reporting::Reporter;
use super::types::DocumentReport;
use colored::*;

const RULE_WIDTH: usize = 40;

pub fn error_header(head: &str) -> String {
    format!("❌ {}", head).red().to_string()
}

fn document_lines(report: &DocumentReport) -> Vec<String> {
    match report.is_valid() {
        true => vec![format!("✅ {}", report.file_name).green().to_string()],
        false => {
            let mut lines = vec![error_header(&report.file_name)];
            lines.extend(
                report
                    .violations
                    .iter()
                    .map(|violation| format!("   - {}", violation)),
            );
            lines
        }
    }
}

pub fn report_lines(reporter: &Reporter) -> Vec<String> {
    let summary = reporter.summary();
    let mut lines = vec![
        format!(
            "Validating {} price files against schema...",
            summary.files_examined
        ),
        String::new(),
    ];

    reporter
        .reports()
        .into_iter()
        .for_each(|report| lines.extend(document_lines(report)));

    lines.push(String::new());
    lines.push("─".repeat(RULE_WIDTH));
    lines.push(format!(
        "Results: {}/{} files valid",
        summary.valid_files, summary.files_examined
    ));

    match summary.total_violations > 0 {
        true => lines.push(format!("Total errors: {}", summary.total_violations).red().to_string()),
        false => lines.push("All validations passed!".green().to_string()),
    }

    lines
}

pub fn print_report(reporter: &Reporter) {
    report_lines(reporter)
        .into_iter()
        .for_each(|line| println!("{}", line));
}
