//! Weight Table Resolution
//!
//! Filters the weight table down to the rows applicable to one role and
//! derives the active category list from those rows.

use crate::config::ScorerConfig;
use crate::data::{column_as_strings, numeric_column};
use crate::error::ScoreError;
use crate::normalize::Polarity;
use anyhow::Result;
use polars::prelude::*;
use rustc_hash::FxHashSet;

/// One applicable weight definition after role filtering
#[derive(Debug, Clone)]
pub struct WeightRow {
    /// Indicator name, matched exactly against entity table columns
    pub indicator: String,

    /// Weight for the selected role (present and finite by construction)
    pub weight: f64,

    pub polarity: Polarity,

    /// `None` when the label is missing or a configured sentinel; such rows
    /// still feed the overall aggregate, just not a category rollup
    pub category: Option<String>,
}

/// Weight rows applicable to one role, plus derived category metadata
#[derive(Debug, Default)]
pub struct ResolvedWeights {
    pub rows: Vec<WeightRow>,

    /// Distinct category labels in first-encounter order over `rows`
    pub categories: Vec<String>,

    /// The role had no weight column; `rows` is empty and every score
    /// degrades to 0
    pub unknown_role: bool,

    /// Rows whose polarity token was unrecognized and defaulted to
    /// higher-is-better
    pub unrecognized_polarity: usize,
}

/// Select the weight rows that apply to `role`
///
/// A row applies when its cell in the role column is present and finite.
/// Rows without an indicator name are dropped. An unknown role is not an
/// error; it resolves to zero rows with the `unknown_role` flag set, since
/// the resulting all-zero scores are a correctness trap worth surfacing.
pub fn resolve_weights(
    weights: &DataFrame,
    role: &str,
    config: &ScorerConfig,
) -> Result<ResolvedWeights> {
    let indicators = string_values(weights, &config.indicator_column)?;
    let polarities = string_values(weights, &config.polarity_column)?;
    let categories = string_values(weights, &config.category_column)?;

    let Some(role_weights) = numeric_column(weights, role) else {
        eprintln!(
            "Warning: role '{}' has no weight column - no indicators apply",
            role
        );
        return Ok(ResolvedWeights {
            unknown_role: true,
            ..Default::default()
        });
    };

    let mut resolved = ResolvedWeights::default();
    let mut seen_categories: FxHashSet<String> = FxHashSet::default();

    for idx in 0..weights.height() {
        let Some(weight) = role_weights[idx].filter(|w| w.is_finite()) else {
            continue;
        };
        let Some(indicator) = indicators[idx]
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        else {
            continue;
        };

        let token = polarities[idx].as_deref().unwrap_or("");
        let polarity = match Polarity::parse(token) {
            Some(polarity) => polarity,
            None => {
                eprintln!(
                    "Warning: unrecognized polarity '{}' for indicator '{}' - assuming higher is better",
                    token.trim(),
                    indicator
                );
                resolved.unrecognized_polarity += 1;
                Polarity::HigherIsBetter
            }
        };

        let category = categories[idx]
            .as_deref()
            .filter(|label| !config.is_excluded_category(label))
            .map(|label| label.trim().to_string());

        if let Some(label) = &category {
            if seen_categories.insert(label.clone()) {
                resolved.categories.push(label.clone());
            }
        }

        resolved.rows.push(WeightRow {
            indicator: indicator.to_string(),
            weight,
            polarity,
            category,
        });
    }

    Ok(resolved)
}

/// Fetch a structural weight-table column as strings
fn string_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let col = df.column(name).map_err(|_| ScoreError::MissingWeightColumn {
        column: name.to_string(),
    })?;
    column_as_strings(col)
}
