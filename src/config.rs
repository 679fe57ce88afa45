//! Engine Configuration
//!
//! Column names and category sentinels for the scoring engine. Defaults match
//! the scouting export format the engine was built around; a JSON file can
//! override any subset of fields.

use anyhow::{Context, Result};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Where identity and weight metadata live, and which category labels mean
/// "unclassified".
///
/// The engine reads both input tables through this structure, so the same
/// code serves any indicator scheme whose tables follow the shape described
/// here. Category sentinels are explicit configuration rather than literals
/// baked into the resolver.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScorerConfig {
    /// Entity table column holding the display name
    pub name_column: String,

    /// Entity table column holding the unique identifier code
    pub code_column: String,

    /// Weight table column naming the indicator
    pub indicator_column: String,

    /// Weight table column holding the polarity token
    pub polarity_column: String,

    /// Weight table column holding the category label
    pub category_column: String,

    /// Category labels excluded from rollups ("none", "unknown", role-only
    /// markers). Matched after trimming; the empty label is always excluded.
    pub excluded_categories: FxHashSet<String>,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            name_column: "player_name".to_string(),
            code_column: "COD".to_string(),
            indicator_column: "INDICADOR".to_string(),
            polarity_column: "Melhor para".to_string(),
            category_column: "CLASSIFICACAO RANKING".to_string(),
            excluded_categories: ["0", "?", "GK"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl ScorerConfig {
    /// Load configuration from a JSON file
    ///
    /// Fields absent from the file keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        serde_json::from_str(&contents).with_context(|| "Failed to parse config JSON")
    }

    /// True when the label means "unclassified" (sentinel, empty, or
    /// whitespace only)
    pub fn is_excluded_category(&self, label: &str) -> bool {
        let trimmed = label.trim();
        trimmed.is_empty() || self.excluded_categories.contains(trimmed)
    }
}
