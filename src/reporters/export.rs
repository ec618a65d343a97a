//! CSV artifacts
//!
//! Every table an analysis run produces can be written as a flat CSV file
//! for spreadsheets, notebooks and plotting scripts. Matrix files carry the
//! radicals as both the header row and the first column.

use crate::cooccurrence::{CategoryMatrix, CooccurrenceMatrix};
use crate::corpus::Corpus;
use crate::dictionary::RadicalTable;
use crate::models::{AvoidanceRecord, SignificanceRecord, TopPair};
use crate::pipeline::Analysis;
use crate::stats::categorization::{radical_frequencies, CategorizationComparison, RadicalFrequency};
use crate::stats::clustering::{cluster_radicals, Dendrogram};
use anyhow::{Context, Result};
use csv::Writer;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const RAW_MATRIX_FILE: &str = "cooccurrence_matrix.csv";
pub const NORMALIZED_MATRIX_FILE: &str = "cooccurrence_matrix_normalized.csv";
pub const TOP_PAIRS_FILE: &str = "top_pairs.csv";
pub const SIGNIFICANCE_FILE: &str = "significance.csv";
pub const AVOIDANCE_FILE: &str = "avoidance_pairs.csv";
pub const CATEGORY_MATRIX_FILE: &str = "category_matrix.csv";
pub const LINKAGE_FILE: &str = "clustering_linkage.csv";
pub const RADICAL_FREQUENCY_FILE: &str = "radical_frequencies.csv";

/// Example characters listed per radical in the frequency table
const FREQUENCY_EXAMPLES: usize = 10;

/// Write every artifact of `analysis` into `dir`, creating it if needed.
pub fn export_all(
    analysis: &Analysis,
    corpus: &Corpus,
    table: &RadicalTable,
    dir: &Path,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory {}", dir.display()))?;

    let mut written = Vec::new();
    let mut emit = |name: &str, write: &dyn Fn(File) -> Result<()>| -> Result<()> {
        let path = dir.join(name);
        let file = File::create(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        write(file).with_context(|| format!("Failed to write {}", path.display()))?;
        debug!("Wrote {}", path.display());
        written.push(path);
        Ok(())
    };

    emit(RAW_MATRIX_FILE, &|f| write_raw_matrix(&analysis.matrix, f))?;
    emit(NORMALIZED_MATRIX_FILE, &|f| write_normalized_matrix(&analysis.matrix, f))?;
    emit(TOP_PAIRS_FILE, &|f| write_top_pairs(&analysis.top_pairs, f))?;
    emit(SIGNIFICANCE_FILE, &|f| write_significance(&analysis.significance, f))?;
    emit(AVOIDANCE_FILE, &|f| write_avoidance(&analysis.avoidance, f))?;
    emit(CATEGORY_MATRIX_FILE, &|f| write_category_matrix(&analysis.category_matrix, f))?;
    emit(LINKAGE_FILE, &|f| write_linkage(&cluster_radicals(&analysis.matrix), f))?;
    emit(RADICAL_FREQUENCY_FILE, &|f| {
        write_radical_frequencies(&radical_frequencies(corpus, table, FREQUENCY_EXAMPLES), f)
    })?;

    Ok(written)
}

pub fn write_raw_matrix<W: Write>(matrix: &CooccurrenceMatrix, out: W) -> Result<()> {
    write_square(matrix.radicals(), out, |i, j| matrix.cell(i, j).to_string())
}

pub fn write_normalized_matrix<W: Write>(matrix: &CooccurrenceMatrix, out: W) -> Result<()> {
    let normalized = matrix.normalized();
    write_square(matrix.radicals(), out, |i, j| format!("{:.6}", normalized[i][j]))
}

pub fn write_category_matrix<W: Write>(matrix: &CategoryMatrix, out: W) -> Result<()> {
    write_square(matrix.categories(), out, |i, j| matrix.cell(i, j).to_string())
}

fn write_square<W, F>(labels: &[String], out: W, cell: F) -> Result<()>
where
    W: Write,
    F: Fn(usize, usize) -> String,
{
    let mut wtr = Writer::from_writer(out);
    let mut header = vec![String::new()];
    header.extend(labels.iter().cloned());
    wtr.write_record(&header)?;

    for (i, label) in labels.iter().enumerate() {
        let mut row = Vec::with_capacity(labels.len() + 1);
        row.push(label.clone());
        row.extend((0..labels.len()).map(|j| cell(i, j)));
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_top_pairs<W: Write>(pairs: &[TopPair], out: W) -> Result<()> {
    let mut wtr = Writer::from_writer(out);
    wtr.write_record(["radical1", "radical2", "category1", "category2", "count", "example_pairs"])?;
    for p in pairs {
        let count = p.count.to_string();
        wtr.write_record([
            p.radical1.as_str(),
            p.radical2.as_str(),
            p.category1.as_str(),
            p.category2.as_str(),
            count.as_str(),
            p.example_pairs.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_significance<W: Write>(records: &[SignificanceRecord], out: W) -> Result<()> {
    let mut wtr = Writer::from_writer(out);
    if records.is_empty() {
        wtr.write_record([
            "radical1",
            "radical2",
            "category1",
            "category2",
            "same_category",
            "observed",
            "expected",
            "enrichment",
            "chi_square",
            "significant",
        ])?;
    }
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_avoidance<W: Write>(records: &[AvoidanceRecord], out: W) -> Result<()> {
    let mut wtr = Writer::from_writer(out);
    if records.is_empty() {
        wtr.write_record([
            "radical1",
            "radical2",
            "category1",
            "category2",
            "observed",
            "expected",
            "avoidance_ratio",
        ])?;
    }
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// One row per merge, with leaf labels resolved where a side is a single radical.
pub fn write_linkage<W: Write>(dendrogram: &Dendrogram, out: W) -> Result<()> {
    let mut wtr = Writer::from_writer(out);
    wtr.write_record(["step", "left", "right", "distance", "size", "left_label", "right_label"])?;
    let n = dendrogram.labels.len();
    let label = |id: usize| {
        if id < n {
            dendrogram.labels[id].clone()
        } else {
            format!("cluster {id}")
        }
    };
    for (step, s) in dendrogram.steps.iter().enumerate() {
        wtr.write_record([
            step.to_string(),
            s.left.to_string(),
            s.right.to_string(),
            format!("{:.6}", s.distance),
            s.size.to_string(),
            label(s.left),
            label(s.right),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Occurrences of every radical under one table, most frequent first.
pub fn write_radical_frequencies<W: Write>(frequencies: &[RadicalFrequency], out: W) -> Result<()> {
    let mut wtr = Writer::from_writer(out);
    wtr.write_record(["radical", "category", "frequency", "example_characters"])?;
    for f in frequencies {
        let examples: String = f.examples.iter().collect();
        let frequency = f.frequency.to_string();
        wtr.write_record([
            f.radical.as_str(),
            f.category.as_str(),
            frequency.as_str(),
            examples.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Current vs. proposed category of every radical, written by `bushou categories`.
pub fn write_categorization<W: Write>(
    comparison: &CategorizationComparison,
    out: W,
) -> Result<()> {
    let mut wtr = Writer::from_writer(out);
    wtr.write_record([
        "radical",
        "current_category",
        "proposed_category",
        "frequency",
        "example_characters",
    ])?;
    for r in &comparison.radicals {
        let examples: String = r.examples.iter().collect();
        let frequency = r.frequency.to_string();
        wtr.write_record([
            r.radical.as_str(),
            r.current_category.as_str(),
            r.proposed_category.as_str(),
            frequency.as_str(),
            examples.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
