//! Radical frequencies and category coverage
//!
//! Measures how much of the corpus each category accounts for, and how a
//! proposed table would shrink the uncategorized remainder.

use crate::corpus::Corpus;
use crate::dictionary::RadicalTable;
use crate::models::OTHER_CATEGORY;
use rustc_hash::FxHashMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadicalFrequency {
    pub radical: String,
    pub category: String,
    pub frequency: usize,
    /// Distinct characters contributing the radical, in corpus order
    pub examples: Vec<char>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub category: String,
    pub radicals: usize,
    pub occurrences: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recategorization {
    pub radical: String,
    pub current_category: String,
    pub proposed_category: String,
    pub frequency: usize,
    pub examples: Vec<char>,
}

impl Recategorization {
    pub fn is_changed(&self) -> bool {
        self.current_category != self.proposed_category
    }
}

/// Current vs. proposed categorization of every observed radical
#[derive(Debug, Clone, Serialize)]
pub struct CategorizationComparison {
    pub radicals: Vec<Recategorization>,
    /// Occurrences of radicals in "other" under the current table
    pub current_other: usize,
    pub proposed_other: usize,
}

impl CategorizationComparison {
    pub fn reduction(&self) -> usize {
        self.current_other.saturating_sub(self.proposed_other)
    }

    /// Percentage of current "other" occurrences that get a category
    pub fn reduction_percent(&self) -> f64 {
        if self.current_other == 0 {
            0.0
        } else {
            100.0 * (1.0 - self.proposed_other as f64 / self.current_other as f64)
        }
    }

    pub fn changed(&self) -> impl Iterator<Item = &Recategorization> {
        self.radicals.iter().filter(|r| r.is_changed())
    }
}

/// Occurrence count of every radical in the corpus, most frequent first
/// (ties by radical).
pub fn radical_frequencies(
    corpus: &Corpus,
    table: &RadicalTable,
    max_examples: usize,
) -> Vec<RadicalFrequency> {
    let mut by_radical: FxHashMap<&str, (usize, Vec<char>)> = FxHashMap::default();
    for c in corpus.characters() {
        for radical in table.radicals_of(c.ch) {
            let (count, examples) = by_radical.entry(radical.as_str()).or_default();
            *count += 1;
            if examples.len() < max_examples && !examples.contains(&c.ch) {
                examples.push(c.ch);
            }
        }
    }

    let mut frequencies: Vec<RadicalFrequency> = by_radical
        .into_iter()
        .map(|(radical, (frequency, examples))| RadicalFrequency {
            radical: radical.to_string(),
            category: table.category_of(radical).to_string(),
            frequency,
            examples,
        })
        .collect();
    frequencies.sort_by(|a, b| {
        b.frequency
            .cmp(&a.frequency)
            .then_with(|| a.radical.cmp(&b.radical))
    });
    frequencies
}

/// Per-category totals in table order, `"other"` last. Categories without
/// any observed radical are reported with zero counts.
pub fn category_summary(
    frequencies: &[RadicalFrequency],
    table: &RadicalTable,
) -> Vec<CategorySummary> {
    table
        .category_names()
        .into_iter()
        .map(|name| {
            let members = frequencies.iter().filter(|f| f.category == name);
            CategorySummary {
                category: name.to_string(),
                radicals: members.clone().count(),
                occurrences: members.map(|f| f.frequency).sum(),
            }
        })
        .collect()
}

/// Compare `current` against `proposed` over the radicals `current` finds
/// in the corpus.
pub fn compare_categorization(
    corpus: &Corpus,
    current: &RadicalTable,
    proposed: &RadicalTable,
    max_examples: usize,
) -> CategorizationComparison {
    let radicals: Vec<Recategorization> = radical_frequencies(corpus, current, max_examples)
        .into_iter()
        .map(|f| Recategorization {
            proposed_category: proposed.category_of(&f.radical).to_string(),
            current_category: f.category,
            radical: f.radical,
            frequency: f.frequency,
            examples: f.examples,
        })
        .collect();

    let other_total = |pick: fn(&Recategorization) -> &str| -> usize {
        radicals
            .iter()
            .filter(|r| pick(r) == OTHER_CATEGORY)
            .map(|r| r.frequency)
            .sum()
    };
    let current_other = other_total(|r| r.current_category.as_str());
    let proposed_other = other_total(|r| r.proposed_category.as_str());

    CategorizationComparison {
        radicals,
        current_other,
        proposed_other,
    }
}
