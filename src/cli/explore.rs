//! Exploration commands - pairs, neighbors, character context, sequences

use super::Session;
use crate::cooccurrence::{
    character_profile, extract_occurrences, find_category_sequences, MatrixBuilder,
};
use crate::pipeline::annotate_top_pairs;
use anyhow::{bail, Result};
use console::style;
use std::path::Path;

/// Example compounds shown per pair
const PAIR_EXAMPLES: usize = 3;

/// Run the pairs command
pub(super) fn pairs(
    session: &Session,
    corpus_path: &Path,
    window: usize,
    top: usize,
    json: bool,
) -> Result<()> {
    let corpus = session.load_corpus(corpus_path)?;
    let matrix = MatrixBuilder::new(&session.table, window)
        .workers(session.workers)
        .build(&corpus);
    let pairs = annotate_top_pairs(&matrix, &session.table, top, PAIR_EXAMPLES);

    if json {
        println!("{}", serde_json::to_string_pretty(&pairs)?);
        return Ok(());
    }

    println!(
        "\n{} {}\n",
        style("Top radical pairs").bold(),
        style(format!("(window ±{window})")).dim()
    );
    if pairs.is_empty() {
        println!("  {}", style("No co-occurrences in window").dim());
    }
    for (i, p) in pairs.iter().enumerate() {
        println!(
            "  {:>3}. {}+{}  {:>6}  {}  {}",
            i + 1,
            p.radical1,
            p.radical2,
            style(p.count).cyan(),
            style(format!("{} × {}", p.category1, p.category2)).dim(),
            p.example_pairs
        );
    }
    Ok(())
}

/// Run the neighbors command
pub(super) fn neighbors(
    session: &Session,
    corpus_path: &Path,
    radical: &str,
    window: usize,
    top: usize,
    json: bool,
) -> Result<()> {
    let corpus = session.load_corpus(corpus_path)?;
    let matrix = MatrixBuilder::new(&session.table, window)
        .workers(session.workers)
        .build(&corpus);
    let neighbors = matrix.neighbors(radical, top);

    if json {
        let rows: Vec<serde_json::Value> = neighbors
            .iter()
            .map(|(r, count)| {
                serde_json::json!({
                    "radical": r,
                    "category": session.table.category_of(r),
                    "count": count,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "\n{} {} {}\n",
        style("Neighbors of").bold(),
        style(radical).cyan().bold(),
        style(format!("({}, window ±{window})", session.table.category_of(radical))).dim()
    );
    if matrix.index_of(radical).is_none() {
        println!("  {}", style("Radical does not occur in the corpus").dim());
        return Ok(());
    }
    for (i, (r, count)) in neighbors.iter().enumerate() {
        println!(
            "  {:>3}. {}  {:>6}  {}",
            i + 1,
            r,
            style(count).cyan(),
            style(session.table.category_of(r)).dim()
        );
    }
    Ok(())
}

/// Run the character command
pub(super) fn character(
    session: &Session,
    corpus_path: &Path,
    target: char,
    window: usize,
    top: usize,
    json: bool,
) -> Result<()> {
    let corpus = session.load_corpus(corpus_path)?;
    let Some(profile) = character_profile(&corpus, &session.table, target, window, top) else {
        bail!("Character '{}' not found in corpus", target);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    let radicals = if profile.radicals.is_empty() {
        style("no known radicals".to_string()).dim()
    } else {
        style(profile.radicals.join(" ")).cyan()
    };
    println!("\n{} {}\n", style("Character").bold(), style(target).bold());
    println!("  Radicals:    {}", radicals);
    println!("  Frequency:   {}", profile.frequency);
    let shown: Vec<String> = profile
        .positions
        .iter()
        .take(10)
        .map(|(chapter, pos)| format!("{chapter}:{pos}"))
        .collect();
    let more = profile.positions.len().saturating_sub(shown.len());
    println!(
        "  Positions:   {}{}",
        shown.join(", "),
        if more > 0 {
            format!(" (+{more} more)")
        } else {
            String::new()
        }
    );
    println!(
        "\n{} {}",
        style("Surrounding radicals").bold(),
        style(format!("(window ±{window})")).dim()
    );
    for (radical, count) in &profile.top_radicals {
        let examples: String = profile
            .examples
            .get(radical)
            .map(|chars| chars.iter().collect())
            .unwrap_or_default();
        println!(
            "  {}  {:>5}  {:<15} {}",
            radical,
            style(count).cyan(),
            session.table.category_of(radical),
            style(examples).dim()
        );
    }
    Ok(())
}

/// Run the sequence command
pub(super) fn sequence(
    session: &Session,
    corpus_path: &Path,
    categories: &[String],
    window: usize,
    limit: usize,
    json: bool,
) -> Result<()> {
    if let Some(unknown) = categories
        .iter()
        .find(|c| !session.table.is_known_category(c))
    {
        bail!(
            "Unknown category '{}'. Known categories: {}",
            unknown,
            session.table.category_names().join(", ")
        );
    }

    let corpus = session.load_corpus(corpus_path)?;
    let occurrences = extract_occurrences(&corpus, &session.table);
    let wanted: Vec<&str> = categories.iter().map(String::as_str).collect();
    let matches = find_category_sequences(&occurrences, &session.table, &wanted, window);

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    println!(
        "\n{} {} {}\n",
        style("Sequence").bold(),
        style(wanted.join(" → ")).cyan(),
        style(format!("({} matches, window ±{window})", matches.len())).dim()
    );
    let shown = if limit == 0 { matches.len() } else { limit };
    for m in matches.iter().take(shown) {
        println!(
            "  {}  {}  {}",
            style(format!("ch.{:<3}", m.chapter)).dim(),
            m.text(),
            style(m.radicals.join(" ")).dim()
        );
    }
    if matches.len() > shown {
        println!(
            "\n  {}",
            style(format!("...and {} more (use --limit 0 for all)", matches.len() - shown)).dim()
        );
    }
    Ok(())
}
