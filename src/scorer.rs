//! Roster Scorer - Weighted aggregation of normalized indicators
//!
//! Coordinates weight resolution, per-indicator normalization (memoized per
//! run), and the weighted accumulation that produces one overall score plus
//! per-category scores for every entity.

use crate::config::ScorerConfig;
use crate::data::{column_as_strings, numeric_column, RosterData};
use crate::error::ScoreError;
use crate::normalize::{normalize_indicator, Polarity};
use crate::weights::resolve_weights;
use anyhow::Result;
use polars::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

/// Main scoring engine over one entity table and one weight table
///
/// One `score` call is a pure function of (entity table, weight table, role,
/// config): no state is kept across calls and the input tables are never
/// modified.
#[derive(Debug)]
pub struct RosterScorer {
    entities: DataFrame,
    weights: DataFrame,
    config: ScorerConfig,
}

/// Data-quality conditions observed during one scoring run
///
/// All of these are recoverable; the run still returns a best-effort result.
#[derive(Debug, Default)]
pub struct Diagnostics {
    /// Role had no weight column; every score degraded to 0
    pub unknown_role: bool,

    /// Indicators named in the weight table but absent (or non-numeric) in
    /// the entity table, first-seen order, one entry each
    pub skipped_indicators: Vec<String>,

    /// Weight rows whose polarity token was unrecognized and defaulted to
    /// higher-is-better
    pub unrecognized_polarity: usize,

    /// Identifier codes appearing more than once in the entity table
    pub duplicate_codes: usize,
}

/// Scores for every entity, aligned to entity-table row order
///
/// `names`, `codes`, `overall`, and each vector in `category_scores` share
/// the same positional axis: index i is the i-th entity-table row. Scores
/// are unrounded here; rounding happens once, in the result builder.
#[derive(Debug)]
pub struct RosterScores {
    pub names: Vec<String>,
    pub codes: Vec<String>,
    pub overall: Vec<f64>,

    /// Active category labels in first-encounter order
    pub categories: Vec<String>,

    /// One score vector per label in `categories`, same order
    pub category_scores: Vec<Vec<f64>>,

    pub diagnostics: Diagnostics,
}

impl RosterScorer {
    /// Build a scorer over in-memory tables
    ///
    /// Fails when the entity table lacks the configured identity columns;
    /// output rows could not be labelled without them.
    pub fn new(entities: DataFrame, weights: DataFrame, config: ScorerConfig) -> Result<Self> {
        for column in [&config.name_column, &config.code_column] {
            if entities.column(column).is_err() {
                return Err(ScoreError::MissingIdentityColumn {
                    column: column.clone(),
                }
                .into());
            }
        }

        Ok(Self {
            entities,
            weights,
            config,
        })
    }

    /// Build a scorer from loaded tables
    pub fn from_data(data: RosterData, config: ScorerConfig) -> Result<Self> {
        Self::new(data.entities, data.weights, config)
    }

    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Score every entity for one role
    ///
    /// Resolves the applicable weight rows, normalizes each referenced
    /// indicator once across the whole population, then accumulates weighted
    /// sums per entity, globally and per category. An absent normalized
    /// value contributes to neither sum. Entities with no applicable
    /// indicators score exactly 0 and still appear in the output.
    pub fn score(&self, role: &str) -> Result<RosterScores> {
        let resolved = resolve_weights(&self.weights, role, &self.config)?;

        let names = self.identity_values(&self.config.name_column)?;
        let codes = self.identity_values(&self.config.code_column)?;

        let mut seen_codes: FxHashSet<&str> = FxHashSet::default();
        let duplicate_codes = codes
            .iter()
            .filter(|code| !seen_codes.insert(code.as_str()))
            .count();
        if duplicate_codes > 0 {
            eprintln!(
                "Warning: {} duplicate identifier codes in entity table",
                duplicate_codes
            );
        }

        // Normalize each referenced indicator exactly once per run. Keyed by
        // (indicator, polarity) so duplicate rows with conflicting polarity
        // stay exact instead of first-wins.
        let mut normalized: FxHashMap<(String, Polarity), Vec<Option<f64>>> = FxHashMap::default();
        let mut skipped_indicators: Vec<String> = Vec::new();
        let mut skipped_seen: FxHashSet<String> = FxHashSet::default();

        for row in &resolved.rows {
            let key = (row.indicator.clone(), row.polarity);
            if normalized.contains_key(&key) || skipped_seen.contains(row.indicator.as_str()) {
                continue;
            }
            match numeric_column(&self.entities, &row.indicator) {
                Some(values) => {
                    normalized.insert(key, normalize_indicator(&values, row.polarity));
                }
                None => {
                    eprintln!(
                        "Warning: indicator '{}' not found in entity table - skipped",
                        row.indicator
                    );
                    skipped_seen.insert(row.indicator.clone());
                    skipped_indicators.push(row.indicator.clone());
                }
            }
        }

        let n_entities = self.entities.height();
        let n_categories = resolved.categories.len();

        // Rows that survived indicator lookup, with their normalized vector
        // and category slot attached
        let row_plan: Vec<(f64, &[Option<f64>], Option<usize>)> = {
            let category_index: FxHashMap<&str, usize> = resolved
                .categories
                .iter()
                .enumerate()
                .map(|(slot, label)| (label.as_str(), slot))
                .collect();

            resolved
                .rows
                .iter()
                .filter_map(|row| {
                    let vector = normalized.get(&(row.indicator.clone(), row.polarity))?;
                    let slot = row
                        .category
                        .as_deref()
                        .and_then(|label| category_index.get(label).copied());
                    Some((row.weight, vector.as_slice(), slot))
                })
                .collect()
        };

        let mut overall = Vec::with_capacity(n_entities);
        let mut category_scores: Vec<Vec<f64>> = vec![Vec::with_capacity(n_entities); n_categories];

        for idx in 0..n_entities {
            let mut weighted_sum = 0.0;
            let mut weight_sum = 0.0;
            let mut category_weighted = vec![0.0; n_categories];
            let mut category_weight = vec![0.0; n_categories];

            for (weight, vector, slot) in &row_plan {
                let Some(value) = vector[idx] else {
                    continue;
                };
                weighted_sum += value * weight;
                weight_sum += weight;
                if let Some(slot) = slot {
                    category_weighted[*slot] += value * weight;
                    category_weight[*slot] += weight;
                }
            }

            overall.push(if weight_sum > 0.0 {
                weighted_sum / weight_sum
            } else {
                0.0
            });

            for slot in 0..n_categories {
                category_scores[slot].push(if category_weight[slot] > 0.0 {
                    category_weighted[slot] / category_weight[slot]
                } else {
                    0.0
                });
            }
        }

        let diagnostics = Diagnostics {
            unknown_role: resolved.unknown_role,
            skipped_indicators,
            unrecognized_polarity: resolved.unrecognized_polarity,
            duplicate_codes,
        };

        Ok(RosterScores {
            names,
            codes,
            overall,
            categories: resolved.categories,
            category_scores,
            diagnostics,
        })
    }

    /// Read an identity column in entity-axis order; missing cells become
    /// empty strings
    fn identity_values(&self, column: &str) -> Result<Vec<String>> {
        let col = self
            .entities
            .column(column)
            .map_err(|_| ScoreError::MissingIdentityColumn {
                column: column.to_string(),
            })?;
        Ok(column_as_strings(col)?
            .into_iter()
            .map(|opt| opt.unwrap_or_default())
            .collect())
    }
}
