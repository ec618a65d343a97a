//! Categories and dictionary commands

use super::Session;
use crate::dictionary::RadicalTable;
use crate::models::OTHER_CATEGORY;
use crate::reporters::export;
use crate::stats::categorization::{
    category_summary, compare_categorization, radical_frequencies, CategorizationComparison,
};
use anyhow::{Context, Result};
use console::style;
use std::fs::File;
use std::path::Path;

/// Example characters listed per radical
const MAX_EXAMPLES: usize = 10;

/// Run the categories command
pub(super) fn run(
    session: &Session,
    corpus_path: &Path,
    proposed: Option<&Path>,
    output: Option<&Path>,
    top: usize,
) -> Result<()> {
    let corpus = session.load_corpus(corpus_path)?;
    let frequencies = radical_frequencies(&corpus, &session.table, MAX_EXAMPLES);
    let total: usize = frequencies.iter().map(|f| f.frequency).sum();

    println!("\n{}\n", style("Radical occurrences by category").bold());
    for summary in category_summary(&frequencies, &session.table) {
        let share = if total == 0 {
            0.0
        } else {
            100.0 * summary.occurrences as f64 / total as f64
        };
        println!(
            "  {:<16} {:>4} radicals  {:>7} occurrences  {}",
            summary.category,
            summary.radicals,
            summary.occurrences,
            style(format!("{share:5.1}%")).dim()
        );
    }

    let others: Vec<_> = frequencies
        .iter()
        .filter(|f| f.category == OTHER_CATEGORY)
        .collect();
    if !others.is_empty() {
        println!(
            "\n{} {}\n",
            style("Most frequent uncategorized radicals").bold(),
            style(format!("({} total)", others.len())).dim()
        );
        for f in others.iter().take(top) {
            let examples: String = f.examples.iter().collect();
            println!(
                "  {}  {:>6}  {}",
                f.radical,
                style(f.frequency).cyan(),
                style(examples).dim()
            );
        }
    }

    let proposed_table = match proposed {
        Some(path) => Some(
            RadicalTable::load(path)
                .with_context(|| format!("Failed to load proposed dictionary {}", path.display()))?,
        ),
        None => None,
    };
    let comparison = compare_categorization(
        &corpus,
        &session.table,
        proposed_table.as_ref().unwrap_or(&session.table),
        MAX_EXAMPLES,
    );
    if proposed_table.is_some() {
        print_comparison(&comparison, top);
    }

    if let Some(path) = output {
        let file =
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
        export::write_categorization(&comparison, file)?;
        eprintln!(
            "{} Wrote radical categorization to {}",
            style("[OK]").green(),
            style(path.display()).cyan()
        );
    }

    Ok(())
}

fn print_comparison(comparison: &CategorizationComparison, top: usize) {
    println!("\n{}\n", style("Proposed categorization").bold());
    println!(
        "  Uncategorized occurrences: {} -> {} ({})",
        comparison.current_other,
        comparison.proposed_other,
        style(format!(
            "-{} / {:.1}%",
            comparison.reduction(),
            comparison.reduction_percent()
        ))
        .green()
    );

    let changed: Vec<_> = comparison.changed().collect();
    if changed.is_empty() {
        println!("  {}", style("No radical changes category").dim());
        return;
    }
    println!();
    for r in changed.iter().take(top) {
        println!(
            "  {}  {:>6}  {} -> {}",
            r.radical,
            r.frequency,
            style(&r.current_category).dim(),
            style(&r.proposed_category).cyan()
        );
    }
    if changed.len() > top {
        println!(
            "  {}",
            style(format!("...and {} more", changed.len() - top)).dim()
        );
    }
}

/// Run the dictionary command
pub(super) fn dictionary(session: &Session, json: bool) -> Result<()> {
    let stats = session.table.stats();
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("\n{}\n", style("Radical dictionary").bold());
    println!("  Characters:       {}", stats.total_characters);
    println!("  Unique radicals:  {}", stats.total_unique_radicals);

    println!("\n{}", style("Characters per category").bold());
    for coverage in &stats.characters_by_category {
        let description = session
            .table
            .category(&coverage.category)
            .map(|c| c.description.as_str())
            .unwrap_or_default();
        println!(
            "  {:<16} {:>5}  {}",
            coverage.category,
            coverage.characters,
            style(description).dim()
        );
    }

    println!("\n{}", style("Most widely used radicals").bold());
    for radical in stats.characters_per_radical.iter().take(15) {
        println!(
            "  {}  {:>5}  {}",
            radical.radical,
            radical.characters,
            style(&radical.category).dim()
        );
    }
    Ok(())
}
