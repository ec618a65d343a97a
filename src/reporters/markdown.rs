//! Markdown reporter for GitHub-flavored Markdown output
//!
//! Suitable for research notes and notebooks that render Markdown tables.

use crate::models::AnalysisReport;
use anyhow::Result;
use chrono::Local;

/// Render report as GitHub-flavored Markdown
pub fn render(report: &AnalysisReport) -> Result<String> {
    let mut md = String::new();

    md.push_str(&render_header(report));
    md.push('\n');

    md.push_str(&render_summary(report));
    md.push('\n');

    md.push_str(&render_top_pairs(report));
    md.push('\n');

    md.push_str(&render_significance(report));
    md.push('\n');

    md.push_str(&render_avoidance(report));
    md.push('\n');

    md.push_str(&render_clustering(report));
    md.push('\n');

    md.push_str(&render_footer());

    Ok(md)
}

fn render_header(report: &AnalysisReport) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");

    format!(
        r#"# Radical Co-occurrence Report

**Window: ±{}** | **Significant pairs: {}**

Generated: {}
"#,
        report.window_size, report.significant_pairs, timestamp
    )
}

fn render_summary(report: &AnalysisReport) -> String {
    format!(
        r#"## Summary

| Metric | Value |
|--------|-------|
| **Characters** | {} |
| **Chapters** | {} |
| **Radical occurrences** | {} |
| **Unique radicals** | {} |
| **Co-occurrences** | {} |
| **Scored pairs** | {} |
| **Significance rule** | observed ≥ {}, chi > {} |
"#,
        report.corpus.characters,
        report.corpus.chapters,
        report.corpus.radical_occurrences,
        report.corpus.unique_radicals,
        report.total_pairs,
        report.significance.len(),
        report.min_observed,
        report.significance_threshold
    )
}

fn render_top_pairs(report: &AnalysisReport) -> String {
    let mut md = String::from("## Top Pairs\n\n");
    if report.top_pairs.is_empty() {
        md.push_str("_No co-occurrences within the window._\n");
        return md;
    }
    md.push_str("| # | Pair | Categories | Count | Examples |\n");
    md.push_str("|---|------|------------|-------|----------|\n");
    for (i, p) in report.top_pairs.iter().take(report.top_n).enumerate() {
        md.push_str(&format!(
            "| {} | {} + {} | {} / {} | {} | {} |\n",
            i + 1,
            p.radical1,
            p.radical2,
            p.category1,
            p.category2,
            p.count,
            p.example_pairs
        ));
    }
    md
}

fn render_significance(report: &AnalysisReport) -> String {
    let mut md = String::from("## Significance\n\n");
    if report.significance.is_empty() {
        md.push_str("_No pairs reached the observation minimum._\n");
        return md;
    }
    md.push_str("| Pair | Observed | Expected | Enrichment | Chi² | Significant |\n");
    md.push_str("|------|----------|----------|------------|------|-------------|\n");
    for r in report.significance.iter().take(report.top_n) {
        md.push_str(&format!(
            "| {} + {} | {} | {:.2} | {:.2} | {:.2} | {} |\n",
            r.radical1,
            r.radical2,
            r.observed,
            r.expected,
            r.enrichment,
            r.chi_square,
            if r.significant { "yes" } else { "no" }
        ));
    }
    md
}

fn render_avoidance(report: &AnalysisReport) -> String {
    let mut md = String::from("## Avoidance Pairs\n\n");
    if report.avoidance.is_empty() {
        md.push_str("_No pair co-occurs markedly less often than expected._\n");
        return md;
    }
    md.push_str("| Pair | Categories | Observed | Expected | Ratio |\n");
    md.push_str("|------|------------|----------|----------|-------|\n");
    for a in report.avoidance.iter().take(report.top_n) {
        md.push_str(&format!(
            "| {} + {} | {} / {} | {} | {:.2} | {:.2} |\n",
            a.radical1,
            a.radical2,
            a.category1,
            a.category2,
            a.observed,
            a.expected,
            a.avoidance_ratio
        ));
    }
    md
}

fn render_clustering(report: &AnalysisReport) -> String {
    let mut md = String::from(
        "## Category Clustering\n\n\
         | Category | Within | Cross | Total | Within % |\n\
         |----------|--------|-------|-------|----------|\n",
    );
    for c in &report.category_clustering {
        md.push_str(&format!(
            "| {} | {} | {} | {} | {:.1}% |\n",
            c.category,
            c.within_category,
            c.cross_category,
            c.total,
            c.within_proportion * 100.0
        ));
    }
    md
}

fn render_footer() -> String {
    "---\n\n*Generated by bushou. Chi-square scores are applied per pair \
     without multiple-comparison correction.*\n"
        .to_string()
}
