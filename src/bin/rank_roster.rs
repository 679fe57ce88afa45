//! Roster Ranking Runner
//!
//! Loads the entity and weight tables, scores every athlete for one role,
//! prints the overall ranking and per-category leaders, and optionally
//! writes the result table as CSV.
//!
//! Usage:
//!   rank_roster <entities.(csv|parquet)> <weights.(csv|parquet)> <role> [output.csv]

use anyhow::Result;
use polars::prelude::*;
use roster_scorer::{
    build_results, rank_by_overall, rating_band, write_results_csv, RosterData, RosterScorer,
    ScoreSummary, ScorerConfig,
};
use std::path::Path;
use std::time::Instant;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        eprintln!(
            "Usage: {} <entities.(csv|parquet)> <weights.(csv|parquet)> <role> [output.csv]",
            args[0]
        );
        std::process::exit(2);
    }

    let entities_path = Path::new(&args[1]);
    let weights_path = Path::new(&args[2]);
    let role = &args[3];
    let output_path = args.get(4).map(Path::new);

    println!("\n{}", "=".repeat(70));
    println!("ROSTER SCORER - overall ratings for role '{}'", role);
    println!("{}", "=".repeat(70));

    let config = ScorerConfig::default();
    let data = RosterData::load(entities_path, weights_path, &config)?;

    let start = Instant::now();
    let scorer = RosterScorer::from_data(data, config)?;
    let scores = scorer.score(role)?;
    let results = build_results(&scores, scorer.config())?;
    let elapsed = start.elapsed();

    report_diagnostics(&scores.diagnostics, role);

    // The ranked table is both the display order and the saved artifact
    let ranked = rank_by_overall(&results)?;
    print_top_overall(&ranked, scorer.config(), 10)?;
    for label in &scores.categories {
        print_top_category(&results, scorer.config(), label, 5)?;
    }

    let summary = ScoreSummary::from_results(&results, scorer.config())?;
    print_summary(&summary);

    if let Some(path) = output_path {
        write_results_csv(&ranked, path)?;
        println!("\nRanking written to {:?}", path);
    }

    println!(
        "\nScored {} athletes in {:.1}ms",
        results.height(),
        elapsed.as_secs_f64() * 1000.0
    );

    Ok(())
}

fn report_diagnostics(diagnostics: &roster_scorer::Diagnostics, role: &str) {
    if diagnostics.unknown_role {
        println!("\nWARNING: role '{}' has no weight column - all scores are 0", role);
    }
    if !diagnostics.skipped_indicators.is_empty() {
        println!(
            "\nIndicators in the weight table with no entity column ({}):",
            diagnostics.skipped_indicators.len()
        );
        for indicator in &diagnostics.skipped_indicators {
            println!("  - {}", indicator);
        }
    }
    if diagnostics.unrecognized_polarity > 0 {
        println!(
            "\nWeight rows with unrecognized polarity (assumed higher is better): {}",
            diagnostics.unrecognized_polarity
        );
    }
    if diagnostics.duplicate_codes > 0 {
        println!("\nDuplicate identifier codes: {}", diagnostics.duplicate_codes);
    }
}

fn print_top_overall(ranked: &DataFrame, config: &ScorerConfig, n: usize) -> Result<()> {
    let names = ranked.column(&config.name_column)?.str()?;
    let codes = ranked.column(&config.code_column)?.str()?;
    let overall = ranked.column("Overall")?.f64()?;

    println!("\nTop {} overall:", n);
    for idx in 0..ranked.height().min(n) {
        let score = overall.get(idx).unwrap_or(0.0);
        println!(
            "  {:>2}. {:<28} {:<10} {:>5.1}  {}",
            idx + 1,
            names.get(idx).unwrap_or("?"),
            codes.get(idx).unwrap_or("?"),
            score,
            rating_band(score)
        );
    }
    Ok(())
}

fn print_top_category(
    results: &DataFrame,
    config: &ScorerConfig,
    label: &str,
    n: usize,
) -> Result<()> {
    let ranked = results.sort(
        [label],
        SortMultipleOptions::default().with_order_descending(true),
    )?;
    let names = ranked.column(&config.name_column)?.str()?;
    let scores = ranked.column(label)?.f64()?;

    println!("\nTop {} - {}:", n, label);
    for idx in 0..ranked.height().min(n) {
        println!(
            "  {:>2}. {:<28} {:>5.1}",
            idx + 1,
            names.get(idx).unwrap_or("?"),
            scores.get(idx).unwrap_or(0.0)
        );
    }
    Ok(())
}

fn print_summary(summary: &ScoreSummary) {
    println!("\n{}", "-".repeat(70));
    println!("Summary:");
    println!("  Athletes scored: {}", summary.count);
    println!("  Mean overall:    {:.1}", summary.mean);
    println!("  Median overall:  {:.1}", summary.median);
    println!("  Std deviation:   {:.1}", summary.std_dev);
    println!("  Best:  {} ({:.1})", summary.best, summary.max);
    println!("  Worst: {} ({:.1})", summary.worst, summary.min);
}
