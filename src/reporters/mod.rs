//! Output reporters for bushou analysis results
//!
//! Report formats:
//! - `text` - Terminal output with colors
//! - `json` - the full report, pretty-printed
//! - `markdown` - tables for notes and papers
//!
//! Flat CSV artifacts for downstream tooling are written by [`export`].

pub mod export;
mod json;
mod markdown;
mod text;

use crate::models::AnalysisReport;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Report format selected by `--format` or `[output] format`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Render an analysis report using an OutputFormat enum
pub fn report_with_format(report: &AnalysisReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(report),
        OutputFormat::Json => json::render(report),
        OutputFormat::Markdown => markdown::render(report),
    }
}

/// Extension used when the report is saved next to the CSV artifacts
pub fn file_extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{
        AvoidanceRecord, CategoryClustering, CorpusSummary, SignificanceRecord, TopPair,
    };

    /// Create a small AnalysisReport for testing
    pub(crate) fn test_report() -> AnalysisReport {
        AnalysisReport {
            corpus: CorpusSummary {
                characters: 120,
                chapters: 2,
                radical_occurrences: 140,
                unique_radicals: 30,
            },
            window_size: 5,
            min_observed: 5,
            significance_threshold: 3.84,
            top_n: 10,
            total_pairs: 100,
            top_pairs: vec![TopPair {
                radical1: "口".into(),
                radical2: "辶".into(),
                category1: "boundary".into(),
                category2: "motion".into(),
                count: 12,
                example_pairs: "道-可, 可-道".into(),
            }],
            significant_pairs: 1,
            significance: vec![SignificanceRecord {
                radical1: "口".into(),
                radical2: "辶".into(),
                category1: "boundary".into(),
                category2: "motion".into(),
                same_category: false,
                observed: 12,
                expected: 0.4,
                enrichment: 30.0,
                chi_square: 336.4,
                significant: true,
            }],
            avoidance: vec![AvoidanceRecord {
                radical1: "人".into(),
                radical2: "氵".into(),
                category1: "agent".into(),
                category2: "fluid".into(),
                observed: 1,
                expected: 7.0,
                avoidance_ratio: 3.5,
            }],
            category_clustering: vec![CategoryClustering {
                category: "motion".into(),
                within_category: 4,
                cross_category: 16,
                total: 20,
                within_proportion: 0.2,
            }],
        }
    }

    #[test]
    fn test_format_names() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from_str("md").unwrap(),
            OutputFormat::Markdown
        );
        assert!(OutputFormat::from_str("sarif").is_err());
    }

    #[test]
    fn test_format_display_round_trips() {
        for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown] {
            assert_eq!(OutputFormat::from_str(&format.to_string()).unwrap(), format);
        }
        assert_eq!(file_extension(OutputFormat::Markdown), "md");
    }

    #[test]
    fn test_report_dispatch() {
        let out = report_with_format(&test_report(), OutputFormat::Json).expect("render");
        assert!(out.trim_start().starts_with('{'));
        let md = report_with_format(&test_report(), OutputFormat::Markdown).expect("render");
        assert!(md.starts_with("# "));
    }
}
