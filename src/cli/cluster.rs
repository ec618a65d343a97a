//! Cluster command - UPGMA dendrogram over co-occurrence profiles

use super::Session;
use crate::cooccurrence::MatrixBuilder;
use crate::reporters::export;
use crate::stats::clustering::cluster_radicals;
use anyhow::{Context, Result};
use console::style;
use std::fs::File;
use std::path::Path;

/// Merges printed before the output is cut short
const SHOWN_STEPS: usize = 25;

pub(super) fn run(
    session: &Session,
    corpus_path: &Path,
    window: usize,
    output: Option<&Path>,
) -> Result<()> {
    let corpus = session.load_corpus(corpus_path)?;
    let matrix = MatrixBuilder::new(&session.table, window)
        .workers(session.workers)
        .build(&corpus);
    let dendrogram = cluster_radicals(&matrix);

    println!(
        "\n{} {}\n",
        style("Radical clustering").bold(),
        style(format!("({} radicals, window ±{window})", dendrogram.labels.len())).dim()
    );
    if dendrogram.labels.is_empty() {
        println!("  {}", style("No radicals to cluster").dim());
    } else {
        println!("  Leaf order: {}", dendrogram.leaf_labels().join(" "));
    }

    let n = dendrogram.labels.len();
    let label = |id: usize| {
        if id < n {
            dendrogram.labels[id].clone()
        } else {
            format!("#{id}")
        }
    };
    if !dendrogram.steps.is_empty() {
        println!("\n{}", style("Closest merges").bold());
    }
    for (step, s) in dendrogram.steps.iter().enumerate().take(SHOWN_STEPS) {
        println!(
            "  {:>4}. {:<8} + {:<8} {:>8.4}  {}",
            step,
            label(s.left),
            label(s.right),
            s.distance,
            style(format!("size {}", s.size)).dim()
        );
    }
    if dendrogram.steps.len() > SHOWN_STEPS {
        println!(
            "  {}",
            style(format!(
                "...and {} more (use --output for the full table)",
                dendrogram.steps.len() - SHOWN_STEPS
            ))
            .dim()
        );
    }

    if let Some(path) = output {
        let file =
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
        export::write_linkage(&dendrogram, file)?;
        eprintln!(
            "{} Wrote linkage table to {}",
            style("[OK]").green(),
            style(path.display()).cyan()
        );
    }
    Ok(())
}
