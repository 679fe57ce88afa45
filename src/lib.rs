//! Roster Scorer
//!
//! Composite "overall" ratings for athletes from a table of raw performance
//! indicators, using role-specific weights:
//! - `normalize`: min-max 0-100 rescaling with per-indicator polarity
//! - `weights`: role filtering of the weight table and category derivation
//! - `scorer`: weighted aggregation into overall and per-category scores
//! - `results`: output table assembly, CSV export, rating bands, summaries
//!
//! One scoring run is a pure function of (entity table, weight table, role,
//! config); loading lives in `data` and stays outside the engine.

pub mod config;
pub mod data;
pub mod error;
pub mod normalize;
pub mod results;
pub mod scorer;
pub mod weights;

// Re-export commonly used types
pub use config::ScorerConfig;
pub use data::RosterData;
pub use error::ScoreError;
pub use normalize::{normalize_indicator, Polarity};
pub use results::{
    build_results, rank_by_overall, rating_band, results_csv_bytes, write_results_csv,
    ScoreSummary,
};
pub use scorer::{Diagnostics, RosterScorer, RosterScores};
pub use weights::{resolve_weights, ResolvedWeights, WeightRow};
