//! Report printing (text and JSON).

use crate::analyzer::AnalysisResult;
use colored::Colorize;
use std::io::Write;

/// Print the full text report.
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
pub fn print_report(writer: &mut impl Write, result: &AnalysisResult) -> std::io::Result<()> {
    if result.findings.is_empty() && result.parse_errors.is_empty() {
        writeln!(
            writer,
            "{} ({} files analyzed)",
            "✓ All clean! No issues found.".green(),
            result.total_files_analyzed
        )?;
        return Ok(());
    }

    for finding in &result.findings {
        writeln!(
            writer,
            "{}:{}:{}: {} {}",
            finding.file.display(),
            finding.line,
            finding.col,
            format!("[{}]", finding.rule_id).yellow(),
            finding.message
        )?;
    }

    for error in &result.parse_errors {
        writeln!(
            writer,
            "{}: {} {}",
            error.file.display(),
            "[parse-error]".red(),
            error.error
        )?;
    }

    writeln!(
        writer,
        "\n{} finding(s) in {} file(s)",
        result.findings.len(),
        result.total_files_analyzed
    )?;
    Ok(())
}

/// Print the report as JSON.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn print_json_report(writer: &mut impl Write, result: &AnalysisResult) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, result)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::rules::Finding;
    use std::path::PathBuf;

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            findings: vec![Finding {
                rule_id: "keyword-arg-required".to_owned(),
                category: "Convention".to_owned(),
                severity: "LOW".to_owned(),
                message: "Function arguments should be passed as keyword arguments.".to_owned(),
                file: PathBuf::from("app.py"),
                line: 8,
                col: 0,
            }],
            parse_errors: Vec::new(),
            total_files_analyzed: 1,
        }
    }

    #[test]
    fn test_text_report_contains_location_and_code() {
        colored::control::set_override(false);
        let mut buffer = Vec::new();
        print_report(&mut buffer, &sample_result()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("app.py:8:0:"));
        assert!(text.contains("[keyword-arg-required]"));
    }

    #[test]
    fn test_clean_report() {
        colored::control::set_override(false);
        let mut buffer = Vec::new();
        print_report(&mut buffer, &AnalysisResult::default()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("All clean"));
    }

    #[test]
    fn test_json_report_round_trips() {
        let mut buffer = Vec::new();
        print_json_report(&mut buffer, &sample_result()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["findings"][0]["rule_id"], "keyword-arg-required");
        assert_eq!(value["findings"][0]["line"], 8);
    }
}
