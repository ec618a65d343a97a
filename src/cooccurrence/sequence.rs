//! Ordered category sequences
//!
//! Finds runs of radical occurrences whose categories follow a requested
//! order, each step strictly later in the text and within the window of the
//! previous step.

use crate::dictionary::RadicalTable;
use crate::models::RadicalOccurrence;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceMatch {
    pub radicals: Vec<String>,
    pub characters: Vec<char>,
    pub positions: Vec<usize>,
    /// Chapter of the first step
    pub chapter: u32,
}

impl SequenceMatch {
    pub fn text(&self) -> String {
        self.characters.iter().collect()
    }
}

/// Every match of `categories`, one per qualifying starting occurrence.
///
/// Each step takes the first later occurrence in the required category,
/// so one match is reported per start even if alternatives exist.
pub fn find_category_sequences(
    occurrences: &[RadicalOccurrence],
    table: &RadicalTable,
    categories: &[&str],
    window_size: usize,
) -> Vec<SequenceMatch> {
    let Some((&head, rest)) = categories.split_first() else {
        return Vec::new();
    };

    let mut matches = Vec::new();
    for (start, occ) in occurrences.iter().enumerate() {
        if table.category_of(&occ.radical) != head {
            continue;
        }

        let mut steps = vec![start];
        for &target in rest {
            let Some(&last_idx) = steps.last() else {
                break;
            };
            match next_step(occurrences, table, last_idx, target, window_size) {
                Some(idx) => steps.push(idx),
                None => break,
            }
        }
        if steps.len() != categories.len() {
            continue;
        }

        matches.push(SequenceMatch {
            radicals: steps.iter().map(|&i| occurrences[i].radical.clone()).collect(),
            characters: steps.iter().map(|&i| occurrences[i].source_char).collect(),
            positions: steps.iter().map(|&i| occurrences[i].global_position).collect(),
            chapter: occ.chapter,
        });
    }
    matches
}

fn next_step(
    occurrences: &[RadicalOccurrence],
    table: &RadicalTable,
    from: usize,
    category: &str,
    window_size: usize,
) -> Option<usize> {
    let origin = occurrences[from].global_position;
    for (offset, occ) in occurrences[from + 1..].iter().enumerate() {
        let distance = occ.global_position - origin;
        if distance > window_size {
            return None;
        }
        if distance == 0 {
            continue;
        }
        if table.category_of(&occ.radical) == category {
            return Some(from + 1 + offset);
        }
    }
    None
}
