//! Result Table Assembly
//!
//! Builds the output table (identity, Overall, category columns) in original
//! entity order with 1-decimal rounding, and provides CSV export, rating
//! bands, and summary statistics for ranked display.

use crate::config::ScorerConfig;
use crate::scorer::RosterScores;
use anyhow::{Context, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Round half away from zero to one decimal place
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Assemble the result table in original entity order
///
/// Columns, in order: name (original header), identifier code, `Overall`,
/// then one column per active category in first-encounter order. Scores are
/// rounded to one decimal here and nowhere else. Rows are NOT sorted;
/// ranked display is the caller's concern.
pub fn build_results(scores: &RosterScores, config: &ScorerConfig) -> Result<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(3 + scores.categories.len());

    columns.push(Series::new(config.name_column.as_str().into(), &scores.names).into());
    columns.push(Series::new(config.code_column.as_str().into(), &scores.codes).into());
    columns.push(
        Series::new(
            "Overall".into(),
            scores.overall.iter().map(|v| round1(*v)).collect::<Vec<f64>>(),
        )
        .into(),
    );

    for (label, values) in scores.categories.iter().zip(&scores.category_scores) {
        columns.push(
            Series::new(
                label.as_str().into(),
                values.iter().map(|v| round1(*v)).collect::<Vec<f64>>(),
            )
            .into(),
        );
    }

    DataFrame::new(columns).with_context(|| "Failed to assemble result table")
}

/// Write a result table as CSV (UTF-8, header row, floats to 1 decimal)
pub fn write_results_csv(results: &DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {:?}", path))?;
    CsvWriter::new(file)
        .include_header(true)
        .with_float_precision(Some(1))
        .finish(&mut results.clone())
        .with_context(|| format!("Failed to write CSV: {:?}", path))
}

/// Render a result table as CSV bytes, same format as `write_results_csv`
///
/// Byte-identical across repeated runs on identical input.
pub fn results_csv_bytes(results: &DataFrame) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    CsvWriter::new(&mut buffer)
        .include_header(true)
        .with_float_precision(Some(1))
        .finish(&mut results.clone())
        .with_context(|| "Failed to render CSV")?;
    Ok(buffer)
}

/// Sort a result table by `Overall` descending for ranked presentation
///
/// Ties keep their entity-table order, so repeated runs rank identically.
/// This ranked view is what the runner prints and saves.
pub fn rank_by_overall(results: &DataFrame) -> Result<DataFrame> {
    results
        .sort(
            ["Overall"],
            SortMultipleOptions::default()
                .with_order_descending(true)
                .with_maintain_order(true),
        )
        .with_context(|| "Failed to rank results by Overall")
}

/// Qualitative band for a 0-100 score
///
/// Scouting convention: 75+ Excellent, 60+ Good, 45+ Fair, below that Poor.
pub fn rating_band(score: f64) -> &'static str {
    if score >= 75.0 {
        "Excellent"
    } else if score >= 60.0 {
        "Good"
    } else if score >= 45.0 {
        "Fair"
    } else {
        "Poor"
    }
}

/// Summary statistics over the `Overall` column of a result table
#[derive(Debug)]
pub struct ScoreSummary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation (ddof 1); 0 for fewer than two entities
    pub std_dev: f64,
    pub max: f64,
    pub min: f64,
    /// Name of the highest-scoring entity (first on ties)
    pub best: String,
    /// Name of the lowest-scoring entity (first on ties)
    pub worst: String,
}

impl ScoreSummary {
    pub fn from_results(results: &DataFrame, config: &ScorerConfig) -> Result<Self> {
        let overall = results
            .column("Overall")
            .with_context(|| "Result table has no Overall column")?
            .f64()?;
        let names = results.column(&config.name_column)?.str()?;

        let mut values: Vec<f64> = Vec::with_capacity(results.height());
        let mut best = (f64::NEG_INFINITY, String::new());
        let mut worst = (f64::INFINITY, String::new());

        for idx in 0..results.height() {
            let Some(score) = overall.get(idx) else {
                continue;
            };
            values.push(score);

            let name = names.get(idx).unwrap_or("").to_string();
            if score > best.0 {
                best = (score, name.clone());
            }
            if score < worst.0 {
                worst = (score, name);
            }
        }

        let count = values.len();
        if count == 0 {
            return Ok(Self {
                count: 0,
                mean: 0.0,
                median: 0.0,
                std_dev: 0.0,
                max: 0.0,
                min: 0.0,
                best: String::new(),
                worst: String::new(),
            });
        }

        let mean = values.iter().sum::<f64>() / count as f64;
        let variance = if count > 1 {
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64
        } else {
            0.0
        };

        let mut sorted = values;
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let median = if count % 2 == 1 {
            sorted[count / 2]
        } else {
            (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
        };

        Ok(Self {
            count,
            mean,
            median,
            std_dev: variance.sqrt(),
            max: best.0,
            min: worst.0,
            best: best.1,
            worst: worst.1,
        })
    }
}
