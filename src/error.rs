//! Error Types
//!
//! Typed fatal errors for the scoring pipeline. Only structural problems
//! abort a run; data-quality conditions travel in `scorer::Diagnostics`
//! alongside a best-effort result instead.

use thiserror::Error;

/// Fatal errors raised while interpreting the input tables
#[derive(Debug, Error)]
pub enum ScoreError {
    /// Entity table lacks a required identity column (name or code).
    /// Without it the output rows cannot be labelled.
    #[error("Entity table missing identity column '{column}'")]
    MissingIdentityColumn { column: String },

    /// Weight table lacks one of its structural columns
    /// (indicator name, polarity, or category label)
    #[error("Weight table missing column '{column}'")]
    MissingWeightColumn { column: String },
}
