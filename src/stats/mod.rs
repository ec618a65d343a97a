//! Significance engine
//!
//! Compares observed co-occurrence counts with the count expected if radicals
//! paired independently of each other. With `T` the number of distinct
//! co-occurrences (half the matrix sum) and `count(X)` the row sum of `X`:
//!
//! ```text
//! expected(X, Y) = count(X) * count(Y) / (2T)
//! chi            = (observed - expected)² / expected
//! enrichment     = observed / expected
//! ```
//!
//! `expected` is a heuristic denominator, not a fitted null model, and the
//! significance threshold is applied to every pair independently.

pub mod categorization;
pub mod clustering;

use crate::cooccurrence::CooccurrenceMatrix;
use crate::dictionary::RadicalTable;
use crate::models::{AvoidanceRecord, CategoryClustering, SignificanceRecord, OTHER_CATEGORY};
use tracing::debug;

/// Chi-square critical value for one degree of freedom at p = 0.05
pub const DEFAULT_SIGNIFICANCE_THRESHOLD: f64 = 3.84;

/// Pairs observed fewer times than this are not scored
pub const DEFAULT_MIN_OBSERVED: u32 = 5;

/// Avoidance requires at least this many expected co-occurrences
const AVOIDANCE_MIN_EXPECTED: f64 = 5.0;
/// ... and observed below this fraction of expected
const AVOIDANCE_MAX_ENRICHMENT: f64 = 0.5;

/// Thresholds for [`significance_table`]
#[derive(Debug, Clone, Copy)]
pub struct SignificanceParams {
    pub min_observed: u32,
    pub threshold: f64,
}

impl Default for SignificanceParams {
    fn default() -> Self {
        Self {
            min_observed: DEFAULT_MIN_OBSERVED,
            threshold: DEFAULT_SIGNIFICANCE_THRESHOLD,
        }
    }
}

/// Expected count, enrichment and chi-square score of one pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairScore {
    pub expected: f64,
    pub enrichment: f64,
    pub chi_square: f64,
}

impl PairScore {
    /// Score `observed` against the row sums of both radicals and the number
    /// of distinct co-occurrences `total_pairs`.
    pub fn compute(observed: u32, count_a: u64, count_b: u64, total_pairs: u64) -> Self {
        let expected = if total_pairs == 0 {
            0.0
        } else {
            (count_a as f64 * count_b as f64) / (2.0 * total_pairs as f64)
        };
        if expected <= 0.0 {
            return Self {
                expected,
                enrichment: 0.0,
                chi_square: 0.0,
            };
        }
        let observed = f64::from(observed);
        Self {
            expected,
            enrichment: observed / expected,
            chi_square: (observed - expected).powi(2) / expected,
        }
    }
}

/// Expected co-occurrence of `a` and `b` under independence.
pub fn expected_cooccurrence(matrix: &CooccurrenceMatrix, a: &str, b: &str) -> f64 {
    PairScore::compute(0, matrix.row_sum(a), matrix.row_sum(b), matrix.total() / 2).expected
}

/// Score every pair observed at least `min_observed` times, strongest
/// deviation first. Ties keep pair-key order.
pub fn significance_table(
    matrix: &CooccurrenceMatrix,
    table: &RadicalTable,
    params: SignificanceParams,
) -> Vec<SignificanceRecord> {
    let radicals = matrix.radicals();
    let row_sums: Vec<u64> = (0..radicals.len())
        .map(|i| matrix.row(i).iter().map(|&c| u64::from(c)).sum())
        .collect();
    let total_pairs = matrix.total() / 2;

    let mut records = Vec::new();
    for i in 0..radicals.len() {
        for j in i + 1..radicals.len() {
            let observed = matrix.cell(i, j);
            if observed < params.min_observed {
                continue;
            }

            let score = PairScore::compute(observed, row_sums[i], row_sums[j], total_pairs);
            let category1 = table.category_of(&radicals[i]);
            let category2 = table.category_of(&radicals[j]);

            records.push(SignificanceRecord {
                radical1: radicals[i].clone(),
                radical2: radicals[j].clone(),
                category1: category1.to_string(),
                category2: category2.to_string(),
                same_category: category1 == category2 && category1 != OTHER_CATEGORY,
                observed,
                expected: score.expected,
                enrichment: score.enrichment,
                chi_square: score.chi_square,
                significant: score.chi_square > params.threshold,
            });
        }
    }

    // Records are generated in pair-key order; the stable sort keeps it for ties
    records.sort_by(|a, b| b.chi_square.total_cmp(&a.chi_square));

    debug!(
        "Scored {} pairs ({} significant at chi > {})",
        records.len(),
        records.iter().filter(|r| r.significant).count(),
        params.threshold
    );
    records
}

/// Pairs that co-occur far less often than expected, most avoided first.
pub fn avoidance_pairs(records: &[SignificanceRecord]) -> Vec<AvoidanceRecord> {
    let mut avoided: Vec<AvoidanceRecord> = records
        .iter()
        .filter(|r| r.expected > AVOIDANCE_MIN_EXPECTED && r.enrichment < AVOIDANCE_MAX_ENRICHMENT)
        .map(|r| AvoidanceRecord {
            radical1: r.radical1.clone(),
            radical2: r.radical2.clone(),
            category1: r.category1.clone(),
            category2: r.category2.clone(),
            observed: r.observed,
            expected: r.expected,
            avoidance_ratio: r.expected / (f64::from(r.observed) + 1.0),
        })
        .collect();
    avoided.sort_by(|a, b| b.avoidance_ratio.total_cmp(&a.avoidance_ratio));
    avoided
}

/// Within- vs. cross-category share of co-occurrence for each named category.
pub fn category_clustering(
    matrix: &CooccurrenceMatrix,
    table: &RadicalTable,
) -> Vec<CategoryClustering> {
    let categories = matrix.category_matrix(table);
    table
        .categories()
        .iter()
        .map(|category| {
            let name = category.name.as_str();
            let within = categories.get(name, name);
            let total = categories.row_sum(name);
            CategoryClustering {
                category: name.to_string(),
                within_category: within,
                cross_category: total - within,
                total,
                within_proportion: if total > 0 {
                    within as f64 / total as f64
                } else {
                    0.0
                },
            }
        })
        .collect()
}

/// Number of significant records
pub fn significant_count(records: &[SignificanceRecord]) -> usize {
    records.iter().filter(|r| r.significant).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;
    use crate::dictionary::tests::sample_table;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn dao_matrix() -> CooccurrenceMatrix {
        let corpus = Corpus::from_chapters(&[(1, "道可道非常道")]);
        CooccurrenceMatrix::build(&corpus, &sample_table(), 1)
    }

    fn record(observed: u32, expected: f64) -> SignificanceRecord {
        SignificanceRecord {
            radical1: "口".into(),
            radical2: format!("r{observed}"),
            category1: "boundary".into(),
            category2: OTHER_CATEGORY.into(),
            same_category: false,
            observed,
            expected,
            enrichment: f64::from(observed) / expected,
            chi_square: 0.0,
            significant: false,
        }
    }

    #[test]
    fn test_pair_score_reference_values() {
        let score = PairScore::compute(5, 10, 8, 100);
        assert!(approx(score.expected, 0.4));
        assert!(approx(score.enrichment, 12.5));
        assert!(approx(score.chi_square, 52.9));
        assert!(score.chi_square > DEFAULT_SIGNIFICANCE_THRESHOLD);
    }

    #[test]
    fn test_pair_score_without_expectation() {
        let score = PairScore::compute(3, 10, 8, 0);
        assert_eq!(score.expected, 0.0);
        assert_eq!(score.enrichment, 0.0);
        assert_eq!(score.chi_square, 0.0);

        let score = PairScore::compute(3, 0, 8, 50);
        assert_eq!(score.enrichment, 0.0);
        assert_eq!(score.chi_square, 0.0);
    }

    #[test]
    fn test_expected_cooccurrence_from_matrix() {
        let matrix = dao_matrix();
        // rows: 辶 = 7, 口 = 2, T = 9
        assert!(approx(expected_cooccurrence(&matrix, "辶", "口"), 14.0 / 18.0));
        assert_eq!(expected_cooccurrence(&matrix, "辶", "水"), 0.0);
    }

    #[test]
    fn test_min_observed_filters_pairs() {
        let matrix = dao_matrix();
        let table = sample_table();
        let all = significance_table(
            &matrix,
            &table,
            SignificanceParams {
                min_observed: 1,
                ..Default::default()
            },
        );
        assert_eq!(all.len(), 7);
        assert!(all.iter().all(|r| r.observed >= 1));

        let strong = significance_table(
            &matrix,
            &table,
            SignificanceParams {
                min_observed: 2,
                ..Default::default()
            },
        );
        assert_eq!(strong.len(), 2);
        assert!(significance_table(&matrix, &table, SignificanceParams::default()).is_empty());
    }

    #[test]
    fn test_table_is_sorted_by_chi_with_key_ties() {
        let matrix = dao_matrix();
        let records = significance_table(
            &matrix,
            &sample_table(),
            SignificanceParams {
                min_observed: 1,
                threshold: 1.5,
            },
        );
        assert!(records.windows(2).all(|w| w[0].chi_square >= w[1].chi_square));
        assert_eq!((records[0].radical1.as_str(), records[0].radical2.as_str()), ("丁", "辶"));
        assert_eq!((records[1].radical1.as_str(), records[1].radical2.as_str()), ("口", "辶"));
        assert_eq!((records[2].radical1.as_str(), records[2].radical2.as_str()), ("尚", "非"));
        assert_eq!((records[3].radical1.as_str(), records[3].radical2.as_str()), ("巾", "非"));
        assert!(records[0].significant && records[1].significant);
        assert_eq!(significant_count(&records), 2);
        assert_eq!(records[1].category1, "boundary");
        assert_eq!(records[1].category2, "motion");
        assert!(!records[1].same_category);
    }

    #[test]
    fn test_same_category_excludes_other() {
        let matrix = dao_matrix();
        let records = significance_table(
            &matrix,
            &sample_table(),
            SignificanceParams {
                min_observed: 1,
                ..Default::default()
            },
        );
        let other_pair = records
            .iter()
            .find(|r| r.radical1 == "尚" && r.radical2 == "非")
            .unwrap();
        assert_eq!(other_pair.category1, OTHER_CATEGORY);
        assert_eq!(other_pair.category2, OTHER_CATEGORY);
        assert!(!other_pair.same_category);
    }

    #[test]
    fn test_avoidance_selection_and_order() {
        let records = vec![
            record(1, 6.0),  // ratio 3.0
            record(0, 8.0),  // ratio 8.0
            record(2, 4.0),  // expected too small
            record(4, 6.0),  // enrichment too high
            record(3, 10.0), // ratio 2.5
        ];
        let avoided = avoidance_pairs(&records);
        let ratios: Vec<f64> = avoided.iter().map(|a| a.avoidance_ratio).collect();
        assert_eq!(ratios, vec![8.0, 3.0, 2.5]);
        assert_eq!(avoided[0].observed, 0);
        assert_eq!(avoided[0].category1, "boundary");
    }

    #[test]
    fn test_category_clustering() {
        let matrix = dao_matrix();
        let clustering = category_clustering(&matrix, &sample_table());
        let names: Vec<&str> = clustering.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, vec!["motion", "boundary", "cloth"]);

        let motion = &clustering[0];
        assert_eq!(motion.total, 7);
        assert_eq!(motion.within_category, 0);
        assert_eq!(motion.cross_category, 7);
        assert_eq!(motion.within_proportion, 0.0);
    }

    #[test]
    fn test_category_clustering_accounts_for_all_mass() {
        let table = RadicalTable::builtin();
        let corpus =
            Corpus::from_chapters(&[(1, "道可道非常道名可名非常名無名天地之始有名萬物之母")]);
        let matrix = CooccurrenceMatrix::build(&corpus, &table, 5);
        let clustering = category_clustering(&matrix, &table);
        let other_row = matrix.category_matrix(&table).row_sum(OTHER_CATEGORY);

        let named: u64 = clustering.iter().map(|c| c.total).sum();
        assert_eq!(named + other_row, matrix.total());
        for c in &clustering {
            assert_eq!(c.within_category + c.cross_category, c.total);
            assert!((0.0..=1.0).contains(&c.within_proportion));
        }
    }
}
