//! Radical co-occurrence matrix
//!
//! Every character is expanded into one [`RadicalOccurrence`] per radical it
//! contains. Two occurrences co-occur when their characters sit at most
//! `window_size` positions apart. Counting works on canonical
//! [`RadicalPair`] keys and is materialized into a symmetric matrix over the
//! sorted set of radicals observed in the corpus.
//!
//! Two kinds of pairs are never counted:
//! - radicals of the same character (distance 0), and
//! - the same radical at two different positions, which would land on the
//!   diagonal. Those are tallied as per-radical repeats instead.
//!
//! The forward scan stops at the first occurrence beyond the window. That
//! early exit relies on occurrences being in non-decreasing position order,
//! which [`extract_occurrences`] guarantees.

mod context;
mod sequence;

pub use context::{character_profile, CharacterProfile};
pub use sequence::{find_category_sequences, SequenceMatch};

use crate::corpus::Corpus;
use crate::dictionary::RadicalTable;
use crate::models::{PairCount, PairInstance, RadicalOccurrence, RadicalPair};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::ops::Range;
use tracing::{debug, warn};

/// Default proximity window, in character positions
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Expand characters into radical occurrences, preserving position order.
pub fn extract_occurrences(corpus: &Corpus, table: &RadicalTable) -> Vec<RadicalOccurrence> {
    corpus
        .characters()
        .iter()
        .flat_map(|c| {
            table.radicals_of(c.ch).iter().map(move |radical| RadicalOccurrence {
                radical: radical.clone(),
                source_char: c.ch,
                global_position: c.global_position,
                chapter: c.chapter,
            })
        })
        .collect()
}

/// Counts gathered from one slice of the scan
#[derive(Default)]
struct Tally {
    counts: BTreeMap<RadicalPair, u32>,
    instances: BTreeMap<RadicalPair, Vec<PairInstance>>,
    repeats: BTreeMap<String, u32>,
}

impl Tally {
    /// Append `other`, which must cover a later range of scan starts.
    fn absorb(&mut self, other: Tally) {
        for (pair, count) in other.counts {
            *self.counts.entry(pair).or_insert(0) += count;
        }
        for (pair, mut instances) in other.instances {
            self.instances.entry(pair).or_default().append(&mut instances);
        }
        for (radical, count) in other.repeats {
            *self.repeats.entry(radical).or_insert(0) += count;
        }
    }
}

/// Scan forward from every start index in `starts`.
fn scan(occurrences: &[RadicalOccurrence], starts: Range<usize>, window_size: usize) -> Tally {
    let mut tally = Tally::default();

    for i in starts {
        let a = &occurrences[i];
        for b in &occurrences[i + 1..] {
            let distance = b.global_position.abs_diff(a.global_position);
            if distance > window_size {
                break;
            }
            // A character's own radicals never co-occur with each other
            if distance == 0 {
                continue;
            }
            let pair = RadicalPair::new(&a.radical, &b.radical);
            if pair.is_self_pair() {
                *tally.repeats.entry(pair.first).or_insert(0) += 1;
                continue;
            }

            *tally.counts.entry(pair.clone()).or_insert(0) += 1;
            tally.instances.entry(pair).or_default().push(PairInstance {
                char1: a.source_char,
                char2: b.source_char,
                position1: a.global_position,
                position2: b.global_position,
                distance,
                chapter: a.chapter,
            });
        }
    }

    tally
}

/// Builds a [`CooccurrenceMatrix`] for one `(corpus, window_size)` configuration.
pub struct MatrixBuilder<'a> {
    table: &'a RadicalTable,
    window_size: usize,
    workers: usize,
}

impl<'a> MatrixBuilder<'a> {
    pub fn new(table: &'a RadicalTable, window_size: usize) -> Self {
        Self {
            table,
            window_size,
            workers: 1,
        }
    }

    /// Split the scan across `workers` threads. The result does not depend
    /// on the worker count.
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn build(&self, corpus: &Corpus) -> CooccurrenceMatrix {
        let occurrences = extract_occurrences(corpus, self.table);
        let n = occurrences.len();
        debug!(
            "Scanning {} radical occurrences with window {} on {} worker(s)",
            n, self.window_size, self.workers
        );

        let tally = if self.workers <= 1 || n < 2 * self.workers {
            scan(&occurrences, 0..n, self.window_size)
        } else {
            self.parallel_scan(&occurrences)
        };

        CooccurrenceMatrix::from_tally(tally, &occurrences, self.window_size)
    }

    fn parallel_scan(&self, occurrences: &[RadicalOccurrence]) -> Tally {
        let n = occurrences.len();
        let chunk = n.div_ceil(self.workers);
        let ranges: Vec<Range<usize>> = (0..n)
            .step_by(chunk)
            .map(|start| start..(start + chunk).min(n))
            .collect();

        let pool = match rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .build()
        {
            Ok(pool) => pool,
            Err(e) => {
                warn!("Falling back to a sequential scan: {}", e);
                return scan(occurrences, 0..n, self.window_size);
            }
        };

        // collect() keeps range order, so instances stay in scan order
        let partials: Vec<Tally> = pool.install(|| {
            ranges
                .into_par_iter()
                .map(|range| scan(occurrences, range, self.window_size))
                .collect()
        });

        let mut tally = Tally::default();
        for partial in partials {
            tally.absorb(partial);
        }
        tally
    }
}

/// Symmetric radical × radical co-occurrence counts with a zero diagonal.
#[derive(Debug, Clone)]
pub struct CooccurrenceMatrix {
    window_size: usize,
    radicals: Vec<String>,
    index: FxHashMap<String, usize>,
    /// Row-major `radicals.len()²` cells
    cells: Vec<u32>,
    pair_counts: BTreeMap<RadicalPair, u32>,
    instances: BTreeMap<RadicalPair, Vec<PairInstance>>,
    repeats: BTreeMap<String, u32>,
    occurrence_count: usize,
}

impl CooccurrenceMatrix {
    /// Single-threaded build
    pub fn build(corpus: &Corpus, table: &RadicalTable, window_size: usize) -> Self {
        MatrixBuilder::new(table, window_size).build(corpus)
    }

    fn from_tally(tally: Tally, occurrences: &[RadicalOccurrence], window_size: usize) -> Self {
        let mut radicals: Vec<String> = occurrences.iter().map(|o| o.radical.clone()).collect();
        radicals.sort();
        radicals.dedup();

        let index: FxHashMap<String, usize> = radicals
            .iter()
            .enumerate()
            .map(|(i, r)| (r.clone(), i))
            .collect();

        let n = radicals.len();
        let mut cells = vec![0u32; n * n];
        for (pair, &count) in &tally.counts {
            let i = index[&pair.first];
            let j = index[&pair.second];
            cells[i * n + j] = count;
            cells[j * n + i] = count;
        }

        Self {
            window_size,
            radicals,
            index,
            cells,
            pair_counts: tally.counts,
            instances: tally.instances,
            repeats: tally.repeats,
            occurrence_count: occurrences.len(),
        }
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Radicals indexing rows and columns, sorted
    pub fn radicals(&self) -> &[String] {
        &self.radicals
    }

    pub fn len(&self) -> usize {
        self.radicals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radicals.is_empty()
    }

    pub fn index_of(&self, radical: &str) -> Option<usize> {
        self.index.get(radical).copied()
    }

    /// Radical occurrences the matrix was built from
    pub fn occurrence_count(&self) -> usize {
        self.occurrence_count
    }

    pub fn cell(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.radicals.len() + j]
    }

    pub fn row(&self, i: usize) -> &[u32] {
        let n = self.radicals.len();
        &self.cells[i * n..(i + 1) * n]
    }

    /// Count for two radicals; 0 when either was not observed.
    pub fn get(&self, a: &str, b: &str) -> u32 {
        match (self.index_of(a), self.index_of(b)) {
            (Some(i), Some(j)) => self.cell(i, j),
            _ => 0,
        }
    }

    pub fn row_sum(&self, radical: &str) -> u64 {
        self.index_of(radical)
            .map(|i| self.row(i).iter().map(|&c| u64::from(c)).sum())
            .unwrap_or(0)
    }

    /// Sum over every cell (each pair counted twice)
    pub fn total(&self) -> u64 {
        self.cells.iter().map(|&c| u64::from(c)).sum()
    }

    /// Distinct co-occurrences, i.e. `total() / 2`
    pub fn total_pairs(&self) -> u64 {
        self.pair_counts.values().map(|&c| u64::from(c)).sum()
    }

    pub fn max(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Non-zero pair counts keyed by canonical pair
    pub fn pair_counts(&self) -> &BTreeMap<RadicalPair, u32> {
        &self.pair_counts
    }

    /// Same-radical co-occurrences excluded from the matrix
    pub fn repeats(&self) -> &BTreeMap<String, u32> {
        &self.repeats
    }

    /// Every scan instance recorded for `pair`, in scan order
    pub fn instances(&self, pair: &RadicalPair) -> &[PairInstance] {
        self.instances.get(pair).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First `limit` instances as compound strings, e.g. `道-可, 可-道`
    pub fn example_pairs(&self, pair: &RadicalPair, limit: usize) -> String {
        self.instances(pair)
            .iter()
            .take(limit)
            .map(PairInstance::compound)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Cells divided by the global maximum; all zeros when the matrix is empty.
    pub fn normalized(&self) -> Vec<Vec<f64>> {
        let max = self.max();
        (0..self.len())
            .map(|i| {
                self.row(i)
                    .iter()
                    .map(|&c| if max == 0 { 0.0 } else { f64::from(c) / f64::from(max) })
                    .collect()
            })
            .collect()
    }

    /// The `n` most frequent pairs. Ties are ordered by pair key.
    pub fn top_pairs(&self, n: usize) -> Vec<PairCount> {
        let mut pairs: Vec<(&RadicalPair, u32)> =
            self.pair_counts.iter().map(|(p, &c)| (p, c)).collect();
        // Stable sort over key-ordered input keeps ties in key order
        pairs.sort_by(|a, b| b.1.cmp(&a.1));
        pairs
            .into_iter()
            .take(n)
            .map(|(pair, count)| PairCount {
                radical1: pair.first.clone(),
                radical2: pair.second.clone(),
                count,
            })
            .collect()
    }

    /// The `n` radicals co-occurring most with `radical`.
    pub fn neighbors(&self, radical: &str, n: usize) -> Vec<(String, u32)> {
        let Some(i) = self.index_of(radical) else {
            return Vec::new();
        };
        let mut neighbors: Vec<(String, u32)> = self
            .row(i)
            .iter()
            .enumerate()
            .filter(|&(j, &count)| j != i && count > 0)
            .map(|(j, &count)| (self.radicals[j].clone(), count))
            .collect();
        neighbors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        neighbors.truncate(n);
        neighbors
    }

    /// Aggregate counts by radical category, including same-category sums
    /// on the diagonal.
    pub fn category_matrix(&self, table: &RadicalTable) -> CategoryMatrix {
        let categories: Vec<String> =
            table.category_names().into_iter().map(String::from).collect();
        let cat_index: FxHashMap<&str, usize> = categories
            .iter()
            .enumerate()
            .map(|(i, c)| (c.as_str(), i))
            .collect();
        let radical_cat: Vec<usize> = self
            .radicals
            .iter()
            .map(|r| cat_index[table.category_of(r)])
            .collect();

        let k = categories.len();
        let mut cells = vec![0u64; k * k];
        for (i, &ci) in radical_cat.iter().enumerate() {
            for (j, &cj) in radical_cat.iter().enumerate() {
                cells[ci * k + cj] += u64::from(self.cell(i, j));
            }
        }

        CategoryMatrix { categories, cells }
    }
}

/// Category × category co-occurrence sums
#[derive(Debug, Clone)]
pub struct CategoryMatrix {
    categories: Vec<String>,
    cells: Vec<u64>,
}

impl CategoryMatrix {
    /// Named categories in table order, then `"other"`
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    fn index_of(&self, category: &str) -> Option<usize> {
        self.categories.iter().position(|c| c == category)
    }

    pub fn cell(&self, i: usize, j: usize) -> u64 {
        self.cells[i * self.categories.len() + j]
    }

    pub fn get(&self, a: &str, b: &str) -> u64 {
        match (self.index_of(a), self.index_of(b)) {
            (Some(i), Some(j)) => self.cell(i, j),
            _ => 0,
        }
    }

    pub fn row_sum(&self, category: &str) -> u64 {
        let k = self.categories.len();
        self.index_of(category)
            .map(|i| self.cells[i * k..(i + 1) * k].iter().sum())
            .unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.cells.iter().sum()
    }
}
