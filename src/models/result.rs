use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::i18n::Text;

use super::question::AgeGroup;

/// Risk bucket derived from a score percentage.
///
/// Ordered by severity, so `Low < Medium < High < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Right-open buckets: [80, 100] Low, [60, 80) Medium, [40, 60) High,
    /// anything below 40 Critical.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            RiskLevel::Low
        } else if percentage >= 60.0 {
            RiskLevel::Medium
        } else if percentage >= 40.0 {
            RiskLevel::High
        } else {
            RiskLevel::Critical
        }
    }

    pub fn label(self) -> Text {
        match self {
            RiskLevel::Low => Text::LowRisk,
            RiskLevel::Medium => Text::MediumRisk,
            RiskLevel::High => Text::HighRisk,
            RiskLevel::Critical => Text::CriticalRisk,
        }
    }

    pub fn headline(self) -> Text {
        match self {
            RiskLevel::Low => Text::LowRiskExcellent,
            RiskLevel::Medium => Text::MediumRiskGood,
            RiskLevel::High => Text::HighRiskImprovement,
            RiskLevel::Critical => Text::CriticalRiskImmediate,
        }
    }

    pub fn description(self) -> Text {
        match self {
            RiskLevel::Low => Text::LowRiskDescription,
            RiskLevel::Medium => Text::MediumRiskDescription,
            RiskLevel::High => Text::HighRiskDescription,
            RiskLevel::Critical => Text::CriticalRiskDescription,
        }
    }

    pub fn recommendations(self) -> [Text; 2] {
        match self {
            RiskLevel::Critical => [Text::RecommendCourse, Text::RecommendCaution],
            RiskLevel::High => [Text::RecommendReviewPatterns, Text::RecommendVerifyRequests],
            RiskLevel::Medium | RiskLevel::Low => {
                [Text::RecommendStayCurrent, Text::RecommendShareKnowledge]
            }
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        };
        f.write_str(name)
    }
}

/// Sub-score for one scam group within a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScamResult {
    pub scam_number: u32,
    pub theme: String,
    pub total_questions: usize,
    pub correct_answers: usize,
    pub score_percentage: f64,
    pub risk_level: RiskLevel,
}

/// A completed run before the result store has assigned it an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAssessment {
    pub age_group: AgeGroup,
    pub total_questions: usize,
    pub correct_answers: usize,
    pub score_percentage: f64,
    pub responses: Vec<usize>,
    pub risk_level: RiskLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scam_results: Option<Vec<ScamResult>>,
}

/// A persisted run. Immutable once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub id: Uuid,
    pub user_id: Uuid,
    pub age_group: AgeGroup,
    pub total_questions: usize,
    pub correct_answers: usize,
    pub score_percentage: f64,
    pub responses: Vec<usize>,
    pub risk_level: RiskLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scam_results: Option<Vec<ScamResult>>,
    pub completed_at: DateTime<Utc>,
}

impl AssessmentResult {
    pub fn from_new(user_id: Uuid, new: NewAssessment, completed_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            age_group: new.age_group,
            total_questions: new.total_questions,
            correct_answers: new.correct_answers,
            score_percentage: new.score_percentage,
            responses: new.responses,
            risk_level: new.risk_level,
            scam_results: new.scam_results,
            completed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_boundaries_are_right_open() {
        assert_eq!(RiskLevel::from_percentage(100.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_percentage(80.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_percentage(79.99), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_percentage(60.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_percentage(59.99), RiskLevel::High);
        assert_eq!(RiskLevel::from_percentage(40.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_percentage(39.99), RiskLevel::Critical);
        assert_eq!(RiskLevel::from_percentage(0.0), RiskLevel::Critical);
    }

    #[test]
    fn severity_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::High < RiskLevel::Critical);
    }

    #[test]
    fn result_round_trips_through_json() {
        let new = NewAssessment {
            age_group: AgeGroup::Adults,
            total_questions: 4,
            correct_answers: 3,
            score_percentage: 75.0,
            responses: vec![1, 2, 3, 4],
            risk_level: RiskLevel::Medium,
            scam_results: None,
        };
        let result = AssessmentResult::from_new(Uuid::new_v4(), new, Utc::now());

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"age_group\":\"31-60\""));
        assert!(json.contains("\"risk_level\":\"Medium\""));
        assert!(!json.contains("scam_results"));

        let back: AssessmentResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
