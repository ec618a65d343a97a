//! Analysis pipeline
//!
//! Runs the full batch analysis over one corpus:
//! 1. Expand characters into radical occurrences and count windowed pairs
//! 2. Rank the most frequent pairs
//! 3. Score pairs against independence and derive avoidance pairs
//! 4. Aggregate co-occurrence by category

use crate::cooccurrence::{CategoryMatrix, CooccurrenceMatrix, MatrixBuilder, DEFAULT_WINDOW_SIZE};
use crate::corpus::Corpus;
use crate::dictionary::RadicalTable;
use crate::models::{
    AnalysisReport, AvoidanceRecord, CategoryClustering, CorpusSummary, RadicalPair,
    SignificanceRecord, TopPair,
};
use crate::stats::{self, SignificanceParams};
use tracing::info;

/// Tunables of one analysis run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisOptions {
    pub window_size: usize,
    pub min_observed: u32,
    pub significance_threshold: f64,
    pub top_n: usize,
    pub examples_per_pair: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            min_observed: stats::DEFAULT_MIN_OBSERVED,
            significance_threshold: stats::DEFAULT_SIGNIFICANCE_THRESHOLD,
            top_n: 20,
            examples_per_pair: 5,
        }
    }
}

impl AnalysisOptions {
    pub fn significance_params(&self) -> SignificanceParams {
        SignificanceParams {
            min_observed: self.min_observed,
            threshold: self.significance_threshold,
        }
    }
}

/// Full analysis pipeline.
pub struct Pipeline<'a> {
    table: &'a RadicalTable,
    options: AnalysisOptions,
    workers: usize,
}

impl<'a> Pipeline<'a> {
    pub fn new(table: &'a RadicalTable, options: AnalysisOptions) -> Self {
        Self {
            table,
            options,
            workers: 1,
        }
    }

    /// Threads used for the pair scan.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn run(&self, corpus: &Corpus) -> Analysis {
        let matrix = MatrixBuilder::new(self.table, self.options.window_size)
            .workers(self.workers)
            .build(corpus);
        info!(
            "Counted {} co-occurrences across {} radicals (window {})",
            matrix.total_pairs(),
            matrix.len(),
            self.options.window_size
        );

        let top_pairs = annotate_top_pairs(
            &matrix,
            self.table,
            self.options.top_n,
            self.options.examples_per_pair,
        );
        let significance =
            stats::significance_table(&matrix, self.table, self.options.significance_params());
        let avoidance = stats::avoidance_pairs(&significance);
        let category_matrix = matrix.category_matrix(self.table);
        let category_clustering = stats::category_clustering(&matrix, self.table);
        info!(
            "{} of {} scored pairs significant, {} avoidance pairs",
            stats::significant_count(&significance),
            significance.len(),
            avoidance.len()
        );

        let summary = CorpusSummary {
            characters: corpus.len(),
            chapters: corpus.chapter_count(),
            radical_occurrences: matrix.occurrence_count(),
            unique_radicals: matrix.len(),
        };

        Analysis {
            options: self.options,
            summary,
            matrix,
            top_pairs,
            significance,
            avoidance,
            category_matrix,
            category_clustering,
        }
    }
}

/// Attach categories and example compounds to the `n` most frequent pairs.
pub fn annotate_top_pairs(
    matrix: &CooccurrenceMatrix,
    table: &RadicalTable,
    n: usize,
    examples: usize,
) -> Vec<TopPair> {
    matrix
        .top_pairs(n)
        .into_iter()
        .map(|p| {
            let key = RadicalPair::new(&p.radical1, &p.radical2);
            TopPair {
                category1: table.category_of(&p.radical1).to_string(),
                category2: table.category_of(&p.radical2).to_string(),
                example_pairs: matrix.example_pairs(&key, examples),
                radical1: p.radical1,
                radical2: p.radical2,
                count: p.count,
            }
        })
        .collect()
}

/// Results of one pipeline run
pub struct Analysis {
    pub options: AnalysisOptions,
    pub summary: CorpusSummary,
    pub matrix: CooccurrenceMatrix,
    pub top_pairs: Vec<TopPair>,
    pub significance: Vec<SignificanceRecord>,
    pub avoidance: Vec<AvoidanceRecord>,
    pub category_matrix: CategoryMatrix,
    pub category_clustering: Vec<CategoryClustering>,
}

impl Analysis {
    pub fn report(&self) -> AnalysisReport {
        AnalysisReport {
            corpus: self.summary.clone(),
            window_size: self.options.window_size,
            min_observed: self.options.min_observed,
            significance_threshold: self.options.significance_threshold,
            top_n: self.options.top_n,
            total_pairs: self.matrix.total_pairs(),
            top_pairs: self.top_pairs.clone(),
            significant_pairs: stats::significant_count(&self.significance),
            significance: self.significance.clone(),
            avoidance: self.avoidance.clone(),
            category_clustering: self.category_clustering.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::tests::sample_table;

    fn options() -> AnalysisOptions {
        AnalysisOptions {
            window_size: 1,
            min_observed: 1,
            top_n: 3,
            ..Default::default()
        }
    }

    #[test]
    fn test_pipeline_report() {
        let table = sample_table();
        let corpus = Corpus::from_chapters(&[(1, "道可道非常道")]);
        let report = Pipeline::new(&table, options()).run(&corpus).report();

        assert_eq!(report.corpus.characters, 6);
        assert_eq!(report.corpus.chapters, 1);
        assert_eq!(report.corpus.radical_occurrences, 8);
        assert_eq!(report.corpus.unique_radicals, 6);
        assert_eq!(report.total_pairs, 9);
        assert_eq!(report.top_pairs.len(), 3);
        assert_eq!(report.top_pairs[0].category2, "motion");
        assert_eq!(report.top_pairs[1].example_pairs, "道-可, 可-道");
        assert_eq!(report.significance.len(), 7);
        assert_eq!(report.category_clustering.len(), 3);
    }

    #[test]
    fn test_worker_count_does_not_change_results() {
        let table = RadicalTable::builtin();
        let corpus = Corpus::from_chapters(&[
            (1, "道可道非常道名可名非常名無名天地之始有名萬物之母"),
            (2, "天下皆知美之為美斯惡已皆知善之為善斯不善已"),
        ]);
        let opts = AnalysisOptions {
            min_observed: 1,
            ..Default::default()
        };
        let one = Pipeline::new(&table, opts).run(&corpus).report();
        let many = Pipeline::new(&table, opts).with_workers(4).run(&corpus).report();
        assert_eq!(one.top_pairs, many.top_pairs);
        assert_eq!(one.significance, many.significance);
        assert_eq!(one.category_clustering, many.category_clustering);
    }
}
