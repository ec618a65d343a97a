//! Core data models for bushou
//!
//! These models flow from the corpus loader through the co-occurrence
//! builder and the significance engine into the reporters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category assigned to radicals that no curated category lists.
pub const OTHER_CATEGORY: &str = "other";

/// A single character of the corpus with its position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionedCharacter {
    pub ch: char,
    pub pronunciation: String,
    pub chapter: u32,
    /// 1-based position inside the chapter
    pub position_in_chapter: usize,
    /// 0-based running position across the whole corpus
    pub global_position: usize,
}

/// One radical contributed by one character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadicalOccurrence {
    pub radical: String,
    pub source_char: char,
    pub global_position: usize,
    pub chapter: u32,
}

/// Unordered radical pair stored in canonical (sorted) form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RadicalPair {
    pub first: String,
    pub second: String,
}

impl RadicalPair {
    /// Build the canonical key; `(a, b)` and `(b, a)` yield the same pair.
    pub fn new(a: &str, b: &str) -> Self {
        if a <= b {
            Self {
                first: a.to_string(),
                second: b.to_string(),
            }
        } else {
            Self {
                first: b.to_string(),
                second: a.to_string(),
            }
        }
    }

    pub fn is_self_pair(&self) -> bool {
        self.first == self.second
    }
}

impl fmt::Display for RadicalPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.first, self.second)
    }
}

/// A concrete co-occurrence found during the scan, kept for examples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairInstance {
    pub char1: char,
    pub char2: char,
    pub position1: usize,
    pub position2: usize,
    pub distance: usize,
    pub chapter: u32,
}

impl PairInstance {
    /// Compound form used in exports, e.g. `道-可`
    pub fn compound(&self) -> String {
        format!("{}-{}", self.char1, self.char2)
    }
}

/// A radical pair ranked by raw co-occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairCount {
    pub radical1: String,
    pub radical2: String,
    pub count: u32,
}

/// Observed vs. expected co-occurrence for one radical pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignificanceRecord {
    pub radical1: String,
    pub radical2: String,
    pub category1: String,
    pub category2: String,
    /// Both radicals share a curated (non-"other") category
    pub same_category: bool,
    pub observed: u32,
    pub expected: f64,
    pub enrichment: f64,
    pub chi_square: f64,
    pub significant: bool,
}

/// A pair that co-occurs much less often than independence predicts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvoidanceRecord {
    pub radical1: String,
    pub radical2: String,
    pub category1: String,
    pub category2: String,
    pub observed: u32,
    pub expected: f64,
    pub avoidance_ratio: f64,
}

/// Within- vs. cross-category mass for one named category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryClustering {
    pub category: String,
    pub within_category: u64,
    pub cross_category: u64,
    pub total: u64,
    pub within_proportion: f64,
}

/// A top pair annotated for reports and exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopPair {
    pub radical1: String,
    pub radical2: String,
    pub category1: String,
    pub category2: String,
    pub count: u32,
    /// First scan instances as `c1-c2`, comma separated
    pub example_pairs: String,
}

/// Size of the analyzed corpus
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusSummary {
    pub characters: usize,
    pub chapters: usize,
    pub radical_occurrences: usize,
    pub unique_radicals: usize,
}

/// Everything one `analyze` run reports
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub corpus: CorpusSummary,
    pub window_size: usize,
    pub min_observed: u32,
    pub significance_threshold: f64,
    /// How many rows the text and markdown reporters show per table
    pub top_n: usize,
    /// Distinct co-occurrences counted (half the matrix sum)
    pub total_pairs: u64,
    pub top_pairs: Vec<TopPair>,
    pub significant_pairs: usize,
    pub significance: Vec<SignificanceRecord>,
    pub avoidance: Vec<AvoidanceRecord>,
    pub category_clustering: Vec<CategoryClustering>,
}

impl AnalysisReport {
    /// Scored pairs with enrichment above 1, strongest first
    pub fn enriched(&self) -> impl Iterator<Item = &SignificanceRecord> {
        self.significance
            .iter()
            .filter(|r| r.significant && r.enrichment > 1.0)
    }
}
