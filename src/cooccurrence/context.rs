//! Radical neighborhood of a single character

use crate::corpus::Corpus;
use crate::dictionary::RadicalTable;
use serde::Serialize;
use std::collections::BTreeMap;

/// Distinct example characters kept per neighboring radical
const EXAMPLES_PER_RADICAL: usize = 5;

/// Which radicals surround every occurrence of one character.
#[derive(Debug, Clone, Serialize)]
pub struct CharacterProfile {
    pub character: char,
    pub radicals: Vec<String>,
    pub frequency: usize,
    /// `(chapter, position_in_chapter)` of each occurrence
    pub positions: Vec<(u32, usize)>,
    pub window_size: usize,
    /// Most frequent neighboring radicals with counts
    pub top_radicals: Vec<(String, usize)>,
    /// Neighboring characters that contributed each radical, in encounter order
    pub examples: BTreeMap<String, Vec<char>>,
}

/// Profile the context of `target`, or `None` when it never occurs.
pub fn character_profile(
    corpus: &Corpus,
    table: &RadicalTable,
    target: char,
    window_size: usize,
    top: usize,
) -> Option<CharacterProfile> {
    let occurrences = corpus.global_positions_of(target);
    if occurrences.is_empty() {
        return None;
    }

    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut examples: BTreeMap<String, Vec<char>> = BTreeMap::new();

    for &pos in &occurrences {
        for neighbor in corpus.context_window(pos, window_size) {
            if neighbor.global_position == pos {
                continue;
            }
            for radical in table.radicals_of(neighbor.ch) {
                *counts.entry(radical.clone()).or_insert(0) += 1;
                let seen = examples.entry(radical.clone()).or_default();
                if seen.len() < EXAMPLES_PER_RADICAL && !seen.contains(&neighbor.ch) {
                    seen.push(neighbor.ch);
                }
            }
        }
    }

    let mut top_radicals: Vec<(String, usize)> = counts.into_iter().collect();
    top_radicals.sort_by(|a, b| b.1.cmp(&a.1));
    top_radicals.truncate(top);

    Some(CharacterProfile {
        character: target,
        radicals: table.radicals_of(target).to_vec(),
        frequency: occurrences.len(),
        positions: corpus.positions_of(target),
        window_size,
        top_radicals,
        examples,
    })
}
