//! JSON reporter
//!
//! Outputs the full AnalysisReport as pretty-printed JSON, including every
//! scored pair rather than the top rows shown by the other reporters.

use crate::models::AnalysisReport;
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_json_render_valid() {
        let report = test_report();
        let json_str = render(&report).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["window_size"], 5);
        assert_eq!(parsed["top_pairs"][0]["radical2"], "辶");
        assert_eq!(parsed["significance"][0]["significant"], true);
    }

    #[test]
    fn test_json_reads_back() {
        let report = test_report();
        let json_str = render(&report).expect("render JSON");
        let back: AnalysisReport = serde_json::from_str(&json_str).expect("deserialize");
        assert_eq!(back.top_pairs, report.top_pairs);
        assert_eq!(back.significance, report.significance);
    }

    #[test]
    fn test_json_empty_tables() {
        let mut report = test_report();
        report.significance.clear();
        report.avoidance.clear();
        let json_str = render(&report).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["avoidance"].as_array().expect("avoidance array").len(), 0);
    }
}
