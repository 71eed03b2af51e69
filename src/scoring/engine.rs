//! Automation Opportunity Scoring Engine
//!
//! Converts a [`TaskProfile`] into a scorecard, an ROI estimate, a tier
//! recommendation and a list of insights. Pure and deterministic: no state is
//! kept between calls and no input satisfying the profile invariants can fail.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::profile::{Frequency, Integrations, Level, TaskProfile, TimeUnit};
use crate::error::AgencyError;

/// Average number of weeks in a month
pub const WEEKS_PER_MONTH: f64 = 4.33;

const WEIGHT_FREQUENCY: f64 = 0.25;
const WEIGHT_TIME_IMPACT: f64 = 0.25;
const WEIGHT_COMPLEXITY: f64 = 0.2;
const WEIGHT_RISK: f64 = 0.15;
const WEIGHT_AI_FEASIBILITY: f64 = 0.15;

/// Recommended automation-solution category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    Low,
    Mid,
    Premium,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Low, Tier::Mid, Tier::Premium];

    /// First matching rule wins: Premium, then Mid, else Low.
    pub fn decide(overall_score: f64, monthly_value_saved: f64) -> Tier {
        if overall_score >= 7.0 && monthly_value_saved >= 2000.0 {
            Tier::Premium
        } else if overall_score >= 5.0 && monthly_value_saved >= 500.0 {
            Tier::Mid
        } else {
            Tier::Low
        }
    }

    pub fn solution(&self) -> &'static str {
        match self {
            Tier::Low => "DIY/Template solution",
            Tier::Mid => "Custom automation solution",
            Tier::Premium => "Fully managed AI agent/workflow",
        }
    }

    pub fn delivery_time(&self) -> &'static str {
        match self {
            Tier::Low => "1-2 weeks",
            Tier::Mid => "3-4 weeks",
            Tier::Premium => "6-8 weeks",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Low => "Low",
            Tier::Mid => "Mid",
            Tier::Premium => "Premium",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = AgencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Tier::Low),
            "Mid" => Ok(Tier::Mid),
            "Premium" => Ok(Tier::Premium),
            other => Err(AgencyError::InvalidTierKey(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn from_overall(overall_score: f64) -> Confidence {
        if overall_score >= 6.0 {
            Confidence::High
        } else if overall_score >= 4.0 {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

/// One scorecard dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub score: f64,
    pub label: String,
}

impl Dimension {
    fn new(score: f64, label: impl Into<String>) -> Self {
        Self { score, label: label.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scorecard {
    pub frequency: Dimension,
    pub time_impact: Dimension,
    pub complexity: Dimension,
    pub risk: Dimension,
    pub ai_feasibility: Dimension,
    /// Weighted composite, rounded to one decimal place
    pub overall: Dimension,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiEstimate {
    /// Hours per month, rounded to one decimal place
    pub monthly_time_saved: f64,
    /// Currency per month, rounded to the nearest unit
    pub monthly_value_saved: f64,
    pub hourly_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub tier: Tier,
    pub solution: String,
    pub delivery_time: String,
    pub confidence: Confidence,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Insights {
    pub strengths: Vec<String>,
    pub concerns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    pub scorecard: Scorecard,
    pub roi: RoiEstimate,
    pub recommendation: Recommendation,
    pub insights: Insights,
}

/// Unrounded intermediate values. Tier, confidence and insights are decided on
/// these, never on the display-rounded figures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentScores {
    pub frequency: f64,
    pub time_impact: f64,
    pub complexity: f64,
    pub risk: f64,
    pub ai_feasibility: f64,
    pub overall: f64,
    pub monthly_time_saved: f64,
    pub monthly_value_saved: f64,
}

impl ComponentScores {
    pub fn from_profile(profile: &TaskProfile) -> Self {
        let frequency = frequency_score(profile.frequency);

        let time_impact = clamp_score(profile.time_amount * time_multiplier(profile.time_spent));

        let skill = level_score(profile.skill_level);
        let integration = integration_score(profile.integrations);
        let complexity = (skill + integration) / 2.0;

        // Same table as skill level: low error tolerance scores 8.
        let risk = level_score(profile.error_tolerance);

        let ai_feasibility = clamp_score((skill + risk + integration) / 3.0);

        let frequency_multiplier = frequency / 10.0;
        let monthly_time_saved =
            hours(profile.time_amount, profile.time_spent) * frequency_multiplier * WEEKS_PER_MONTH;
        let monthly_value_saved = monthly_time_saved * profile.hourly_value;

        let overall = weighted_overall(frequency, time_impact, complexity, risk, ai_feasibility);

        Self {
            frequency,
            time_impact,
            complexity,
            risk,
            ai_feasibility,
            overall,
            monthly_time_saved,
            monthly_value_saved,
        }
    }

    pub fn tier(&self) -> Tier {
        Tier::decide(self.overall, self.monthly_value_saved)
    }

    pub fn insights(&self) -> Insights {
        let strengths = [
            (self.overall >= 7.0, "High automation potential"),
            (self.monthly_value_saved >= 1000.0, "Significant ROI opportunity"),
            (self.risk >= 7.0, "Low risk implementation"),
            (self.frequency >= 7.0, "High frequency task"),
        ];
        let concerns = [
            (self.overall < 4.0, "Low automation feasibility"),
            (self.monthly_value_saved < 500.0, "Limited ROI potential"),
            (self.risk < 4.0, "High risk implementation"),
            (self.complexity < 4.0, "High complexity requirements"),
        ];

        Insights {
            strengths: holding(&strengths),
            concerns: holding(&concerns),
        }
    }
}

/// Score a task profile.
pub fn compute_score(profile: &TaskProfile) -> ScoringResult {
    let scores = ComponentScores::from_profile(profile);
    let tier = scores.tier();

    tracing::debug!(
        overall = scores.overall,
        monthly_value_saved = scores.monthly_value_saved,
        tier = %tier,
        "Computed automation score"
    );

    ScoringResult {
        scorecard: Scorecard {
            frequency: Dimension::new(scores.frequency, profile.frequency.as_str()),
            time_impact: Dimension::new(
                scores.time_impact,
                format!("{} {}", profile.time_amount, profile.time_spent),
            ),
            complexity: Dimension::new(
                scores.complexity,
                format!("{} skill, {} integrations", profile.skill_level, profile.integrations),
            ),
            risk: Dimension::new(scores.risk, format!("{} tolerance", profile.error_tolerance)),
            ai_feasibility: Dimension::new(scores.ai_feasibility, "AI capability assessment"),
            overall: Dimension::new(round_to_tenth(scores.overall), "Overall automation score"),
        },
        roi: RoiEstimate {
            monthly_time_saved: round_to_tenth(scores.monthly_time_saved),
            monthly_value_saved: scores.monthly_value_saved.round(),
            hourly_value: profile.hourly_value,
        },
        recommendation: Recommendation {
            tier,
            solution: tier.solution().to_string(),
            delivery_time: tier.delivery_time().to_string(),
            confidence: Confidence::from_overall(scores.overall),
        },
        insights: scores.insights(),
    }
}

/// Weighted composite of the five component scores. Weights sum to 1.0.
pub fn weighted_overall(
    frequency: f64,
    time_impact: f64,
    complexity: f64,
    risk: f64,
    ai_feasibility: f64,
) -> f64 {
    frequency * WEIGHT_FREQUENCY
        + time_impact * WEIGHT_TIME_IMPACT
        + complexity * WEIGHT_COMPLEXITY
        + risk * WEIGHT_RISK
        + ai_feasibility * WEIGHT_AI_FEASIBILITY
}

pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn frequency_score(frequency: Frequency) -> f64 {
    match frequency {
        Frequency::Daily => 10.0,
        Frequency::Weekly => 7.0,
        Frequency::Monthly => 4.0,
        Frequency::Rarely => 1.0,
    }
}

fn time_multiplier(unit: TimeUnit) -> f64 {
    match unit {
        TimeUnit::Minutes => 1.0,
        TimeUnit::Hours => 2.0,
        TimeUnit::Days => 3.0,
    }
}

fn hours(amount: f64, unit: TimeUnit) -> f64 {
    match unit {
        TimeUnit::Minutes => amount / 60.0,
        TimeUnit::Hours => amount,
        TimeUnit::Days => amount * 24.0,
    }
}

fn level_score(level: Level) -> f64 {
    match level {
        Level::Low => 8.0,
        Level::Medium => 5.0,
        Level::High => 2.0,
    }
}

fn integration_score(integrations: Integrations) -> f64 {
    match integrations {
        Integrations::Single => 8.0,
        Integrations::Multiple => 5.0,
        Integrations::Complex => 2.0,
    }
}

fn clamp_score(value: f64) -> f64 {
    value.clamp(1.0, 10.0)
}

fn holding(conditions: &[(bool, &str)]) -> Vec<String> {
    conditions
        .iter()
        .filter(|(holds, _)| *holds)
        .map(|(_, text)| text.to_string())
        .collect()
}
