//! Data Loading and Management
//!
//! Loads the entity and weight tables with Polars and validates their
//! structural columns. Also provides the column accessors the engine uses to
//! read indicators (numeric) and identity/metadata fields (strings).

use crate::config::ScorerConfig;
use crate::error::ScoreError;
use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

/// Input tables for one scoring run
///
/// Both tables are immutable once loaded; the engine never writes back.
#[derive(Debug)]
pub struct RosterData {
    /// Entity table: one row per athlete, identity plus indicator columns
    pub entities: DataFrame,

    /// Weight table: one row per indicator weight definition
    pub weights: DataFrame,
}

impl RosterData {
    /// Load both tables (CSV or Parquet, by extension) and validate the
    /// columns the engine cannot run without
    pub fn load(entities_path: &Path, weights_path: &Path, config: &ScorerConfig) -> Result<Self> {
        println!("Loading tables...");

        let entities = load_table(entities_path)?;
        let weights = load_table(weights_path)?;

        for column in [&config.name_column, &config.code_column] {
            if entities.column(column).is_err() {
                return Err(ScoreError::MissingIdentityColumn {
                    column: column.clone(),
                }
                .into());
            }
        }

        for column in [
            &config.indicator_column,
            &config.polarity_column,
            &config.category_column,
        ] {
            if weights.column(column).is_err() {
                return Err(ScoreError::MissingWeightColumn {
                    column: column.clone(),
                }
                .into());
            }
        }

        println!("  Entities: {} rows, {} columns", entities.height(), entities.width());
        println!("  Weight rows: {}", weights.height());

        Ok(RosterData { entities, weights })
    }
}

/// Load one table, dispatching on the file extension
///
/// `.parquet` goes through the lazy scanner; everything else is read as
/// headered CSV.
fn load_table(path: &Path) -> Result<DataFrame> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("parquet") => LazyFrame::scan_parquet(path, Default::default())
            .with_context(|| format!("Failed to scan parquet: {:?}", path))?
            .collect()
            .with_context(|| format!("Failed to load parquet: {:?}", path)),
        _ => CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.into()))
            .with_context(|| format!("Failed to create CSV reader: {:?}", path))?
            .finish()
            .with_context(|| format!("Failed to load CSV: {:?}", path)),
    }
}

/// Read a column as f64 values, accepting any primitive numeric dtype the
/// loaders produce
///
/// Returns `None` when the column is absent or non-numeric, which callers
/// treat as "indicator not available". Text columns are never parsed as
/// numbers, so a string column cannot pass for a role or indicator column.
pub fn numeric_column(df: &DataFrame, name: &str) -> Option<Vec<Option<f64>>> {
    let col = df.column(name).ok()?;

    if !matches!(
        col.dtype(),
        DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::Float32
            | DataType::Float64
    ) {
        return None;
    }

    let casted = col.cast(&DataType::Float64).ok()?;
    Some(casted.f64().ok()?.into_iter().collect())
}

/// Read a column as display strings, casting numeric codes as needed
pub fn column_as_strings(col: &Column) -> Result<Vec<Option<String>>> {
    let casted = col
        .cast(&DataType::String)
        .with_context(|| format!("Column '{}' cannot be read as strings", col.name()))?;
    let values = casted
        .str()
        .with_context(|| format!("Column '{}' cannot be read as strings", col.name()))?
        .into_iter()
        .map(|opt| opt.map(|s| s.to_string()))
        .collect();
    Ok(values)
}
