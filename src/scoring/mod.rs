//! Scoring Module
//!
//! Task profile model and the automation opportunity scoring engine.

mod engine;
mod profile;

pub use engine::{
    compute_score, round_to_tenth, weighted_overall, ComponentScores, Confidence, Dimension,
    Insights, Recommendation, RoiEstimate, Scorecard, ScoringResult, Tier, WEEKS_PER_MONTH,
};
pub use profile::{Frequency, Integrations, Level, OutcomeKpi, TaskProfile, TimeUnit};
