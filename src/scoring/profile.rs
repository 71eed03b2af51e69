use serde::{Deserialize, Serialize};
use std::fmt;

use super::engine::ComponentScores;
use crate::error::{AgencyError, AgencyResult};

/// How often the task is performed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Rarely,
}

impl Frequency {
    pub const ALL: [Frequency; 4] = [Self::Daily, Self::Weekly, Self::Monthly, Self::Rarely];

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Rarely => "rarely",
        }
    }
}

/// Unit in which `time_amount` is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 3] = [Self::Minutes, Self::Hours, Self::Days];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
        }
    }
}

/// Three-step scale shared by `skillLevel` and `errorTolerance`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub const ALL: [Level; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
        }
    }
}

/// Number and complexity of systems the task touches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Integrations {
    Single,
    Multiple,
    Complex,
}

impl Integrations {
    pub const ALL: [Integrations; 3] = [Self::Single, Self::Multiple, Self::Complex];

    pub fn as_str(&self) -> &'static str {
        match self {
            Integrations::Single => "single",
            Integrations::Multiple => "multiple",
            Integrations::Complex => "complex",
        }
    }
}

/// Primary KPI the automation would move. Not used by the scoring math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKpi {
    TimeSavings,
    CostReduction,
    QualityImprovement,
    RevenueGeneration,
}

impl OutcomeKpi {
    pub const ALL: [OutcomeKpi; 4] = [
        Self::TimeSavings,
        Self::CostReduction,
        Self::QualityImprovement,
        Self::RevenueGeneration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeKpi::TimeSavings => "time_savings",
            OutcomeKpi::CostReduction => "cost_reduction",
            OutcomeKpi::QualityImprovement => "quality_improvement",
            OutcomeKpi::RevenueGeneration => "revenue_generation",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(Frequency, TimeUnit, Level, Integrations, OutcomeKpi);

/// Structured description of a task, as collected by the assessment agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TaskProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_description: Option<String>,
    pub frequency: Frequency,
    pub time_spent: TimeUnit,
    pub time_amount: f64,
    pub skill_level: Level,
    /// Consequence severity if the automation errs
    pub error_tolerance: Level,
    pub integrations: Integrations,
    #[serde(rename = "outcomeKPI")]
    pub outcome_kpi: OutcomeKpi,
    pub hourly_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_pain_points: Option<String>,
}

impl TaskProfile {
    /// Check the numeric invariants the enums cannot express.
    ///
    /// Zero is accepted for both amounts; it is degenerate but well defined.
    /// Amounts whose monthly ROI overflows `f64` are rejected.
    pub fn validate(&self) -> AgencyResult<()> {
        check_amount("timeAmount", self.time_amount)?;
        check_amount("hourlyValue", self.hourly_value)?;

        let scores = ComponentScores::from_profile(self);
        if !scores.monthly_time_saved.is_finite() || !scores.monthly_value_saved.is_finite() {
            return Err(AgencyError::schema(
                "calculateAutomationScore",
                "'timeAmount' and 'hourlyValue' are too large to estimate monthly savings",
            ));
        }
        Ok(())
    }
}

fn check_amount(field: &str, value: f64) -> AgencyResult<()> {
    if !value.is_finite() {
        return Err(AgencyError::schema(
            "calculateAutomationScore",
            format!("'{}' must be a finite number", field),
        ));
    }
    if value < 0.0 {
        return Err(AgencyError::schema(
            "calculateAutomationScore",
            format!("'{}' must not be negative (got {})", field, value),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base() -> serde_json::Value {
        json!({
            "frequency": "weekly",
            "timeSpent": "minutes",
            "timeAmount": 30,
            "skillLevel": "low",
            "errorTolerance": "high",
            "integrations": "complex",
            "outcomeKPI": "cost_reduction",
            "hourlyValue": 45.5
        })
    }

    #[test]
    fn test_deserialize_wire_names() {
        let profile: TaskProfile = serde_json::from_value(base()).unwrap();
        assert_eq!(profile.frequency, Frequency::Weekly);
        assert_eq!(profile.time_spent, TimeUnit::Minutes);
        assert_eq!(profile.outcome_kpi, OutcomeKpi::CostReduction);
        assert_eq!(profile.task_description, None);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut value = base();
        value["budget"] = json!(100);
        assert!(serde_json::from_value::<TaskProfile>(value).is_err());
    }

    #[test]
    fn test_negative_amount_rejected() {
        let mut profile: TaskProfile = serde_json::from_value(base()).unwrap();
        profile.hourly_value = -1.0;
        let err = profile.validate().unwrap_err();
        assert!(err.to_string().contains("hourlyValue"));

        profile.hourly_value = 0.0;
        profile.time_amount = f64::INFINITY;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_overflowing_savings_rejected() {
        let mut value = base();
        value["timeSpent"] = json!("days");
        value["timeAmount"] = json!(1e300);
        value["hourlyValue"] = json!(1e300);
        let profile: TaskProfile = serde_json::from_value(value).unwrap();

        let err = profile.validate().unwrap_err();
        assert!(matches!(err, AgencyError::SchemaViolation { .. }));
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_large_but_finite_savings_accepted() {
        let mut value = base();
        value["timeAmount"] = json!(1e150);
        value["hourlyValue"] = json!(1e150);
        let profile: TaskProfile = serde_json::from_value(value).unwrap();
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_display_matches_wire() {
        assert_eq!(OutcomeKpi::QualityImprovement.to_string(), "quality_improvement");
        assert_eq!(
            serde_json::to_value(Integrations::Multiple).unwrap(),
            json!(Integrations::Multiple.to_string())
        );
    }
}
