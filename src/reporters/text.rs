//! Text (terminal) reporter with colors and formatting

use crate::models::{AnalysisReport, SignificanceRecord};
use anyhow::Result;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";

/// Render report as formatted terminal output
pub fn render(report: &AnalysisReport) -> Result<String> {
    let mut out = String::new();
    let top = report.top_n;

    // Header
    out.push_str(&format!("\n{BOLD}Radical Co-occurrence Analysis{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    let c = &report.corpus;
    out.push_str(&format!(
        "Characters: {}  Chapters: {}  Radical occurrences: {}  Radicals: {}\n",
        c.characters, c.chapters, c.radical_occurrences, c.unique_radicals
    ));
    out.push_str(&format!(
        "Window: ±{}  Co-occurrences: {}  Significant pairs: {}/{} ({} enriched)\n\n",
        report.window_size,
        report.total_pairs,
        report.significant_pairs,
        report.significance.len(),
        report.enriched().count()
    ));

    // Top pairs
    out.push_str(&format!("{BOLD}TOP PAIRS{RESET}\n"));
    if report.top_pairs.is_empty() {
        out.push_str(&format!("  {DIM}No co-occurrences in window{RESET}\n"));
    }
    for (i, pair) in report.top_pairs.iter().take(top).enumerate() {
        out.push_str(&format!(
            "  {DIM}{:>3}{RESET}  {}+{}  {:>6}  {DIM}{} × {}  {}{RESET}\n",
            i + 1,
            pair.radical1,
            pair.radical2,
            pair.count,
            pair.category1,
            pair.category2,
            pair.example_pairs
        ));
    }
    out.push('\n');

    // Enrichment
    out.push_str(&format!(
        "{BOLD}SIGNIFICANCE{RESET} {DIM}(observed ≥ {}, chi > {}){RESET}\n",
        report.min_observed, report.significance_threshold
    ));
    if report.significance.is_empty() {
        out.push_str(&format!("  {DIM}No pairs reached the observation minimum{RESET}\n"));
    } else {
        out.push_str(&format!(
            "{DIM}  PAIR      OBS   EXPECTED  ENRICH       CHI{RESET}\n"
        ));
        for record in report.significance.iter().take(top) {
            out.push_str(&format_record(record));
        }
    }
    out.push('\n');

    // Avoidance
    if !report.avoidance.is_empty() {
        out.push_str(&format!("{BOLD}AVOIDANCE{RESET}\n"));
        for pair in report.avoidance.iter().take(top) {
            out.push_str(&format!(
                "  {}+{}  observed {}  expected {:.1}  {RED}ratio {:.2}{RESET}\n",
                pair.radical1, pair.radical2, pair.observed, pair.expected, pair.avoidance_ratio
            ));
        }
        out.push('\n');
    }

    // Category clustering
    out.push_str(&format!("{BOLD}CATEGORY CLUSTERING{RESET}\n"));
    for c in report.category_clustering.iter().filter(|c| c.total > 0) {
        out.push_str(&format!(
            "  {:<15} {:>5.1}% within  {DIM}({} within, {} cross){RESET}\n",
            c.category,
            c.within_proportion * 100.0,
            c.within_category,
            c.cross_category
        ));
    }

    Ok(out)
}

fn format_record(record: &SignificanceRecord) -> String {
    let marker = if record.significant {
        format!("{GREEN}*{RESET}")
    } else {
        " ".to_string()
    };
    format!(
        "  {}+{}  {:>5}  {:>9.2}  {:>6.2}  {:>8.2} {}\n",
        record.radical1,
        record.radical2,
        record.observed,
        record.expected,
        record.enrichment,
        record.chi_square,
        marker
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_text_render_sections() {
        let out = render(&test_report()).expect("render text");
        assert!(out.contains("Radical Co-occurrence Analysis"));
        assert!(out.contains("口+辶"));
        assert!(out.contains("道-可, 可-道"));
        assert!(out.contains("AVOIDANCE"));
        assert!(out.contains("motion"));
        assert!(out.contains("20.0% within"));
        assert!(out.contains("(1 enriched)"));
    }

    #[test]
    fn test_text_render_empty() {
        let mut report = test_report();
        report.top_pairs.clear();
        report.significance.clear();
        report.avoidance.clear();
        let out = render(&report).expect("render text");
        assert!(out.contains("No co-occurrences in window"));
        assert!(out.contains("No pairs reached the observation minimum"));
        assert!(!out.contains("AVOIDANCE"));
    }
}
