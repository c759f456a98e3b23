use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::i18n::Text;

/// One of the four fixed brackets used to select a question set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "13-17")]
    Teens,
    #[serde(rename = "18-30")]
    YoungAdults,
    #[serde(rename = "31-60")]
    Adults,
    #[serde(rename = "61-90")]
    Seniors,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 4] = [
        AgeGroup::Teens,
        AgeGroup::YoungAdults,
        AgeGroup::Adults,
        AgeGroup::Seniors,
    ];

    /// The bracket as stored in records, e.g. `"31-60"`.
    pub fn key(self) -> &'static str {
        match self {
            AgeGroup::Teens => "13-17",
            AgeGroup::YoungAdults => "18-30",
            AgeGroup::Adults => "31-60",
            AgeGroup::Seniors => "61-90",
        }
    }

    pub fn title(self) -> Text {
        match self {
            AgeGroup::Teens => Text::Teenagers,
            AgeGroup::YoungAdults => Text::YoungAdults,
            AgeGroup::Adults => Text::Adults,
            AgeGroup::Seniors => Text::Seniors,
        }
    }

    /// Scenario themes shown on the selection card.
    pub fn featured_scenarios(self) -> [&'static str; 3] {
        match self {
            AgeGroup::Teens => ["Social Media Scams", "Fake Giveaways", "Online Romance"],
            AgeGroup::YoungAdults => ["Fashion Scams", "Job Offers", "Romance Scams"],
            AgeGroup::Adults => ["Courier Scams", "Marketplace Fraud", "Bill Scams"],
            AgeGroup::Seniors => ["Banking Scams", "Health Schemes", "Aadhaar Fraud"],
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AgeGroup {
    type Err = QuestionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgeGroup::ALL
            .into_iter()
            .find(|group| group.key() == s.trim())
            .ok_or_else(|| QuestionError::UnknownAgeGroup(s.to_string()))
    }
}

/// A validated scenario question. Options are non-empty and
/// `correct_answer` is a 1-based index into them.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub id: String,
    pub age_group: AgeGroup,
    pub scam_number: Option<u32>,
    pub theme: String,
    pub scenario_number: u32,
    pub scenario_title: String,
    pub scenario_description: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
}

impl Question {
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Returns the option text for a 1-based choice.
    pub fn option(&self, choice: usize) -> Option<&str> {
        choice
            .checked_sub(1)
            .and_then(|index| self.options.get(index))
            .map(String::as_str)
    }

    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_answer
    }
}

/// Reasons a raw record is rejected at ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionError {
    #[error("unknown age group '{0}'")]
    UnknownAgeGroup(String),

    #[error("record {index} is not a question: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("question {id}: options must be a list of strings")]
    MalformedOptions { id: String },

    #[error("question {id}: no options")]
    NoOptions { id: String },

    #[error("question {id}: correct answer {correct_answer} is outside 1..={option_count}")]
    CorrectAnswerOutOfRange {
        id: String,
        correct_answer: i64,
        option_count: usize,
    },
}

/// A question record as it comes out of the store, before validation.
///
/// `options` is kept loose because records have been seen with the option
/// list stored either as a JSON array or as a string holding one.
#[derive(Debug, Clone, Deserialize)]
pub struct RawQuestion {
    pub id: String,
    pub age_group: String,
    #[serde(default)]
    pub scam_number: Option<u32>,
    pub theme: String,
    pub scenario_number: u32,
    pub scenario_title: String,
    pub scenario_description: String,
    pub options: Value,
    pub correct_answer: i64,
}

impl TryFrom<RawQuestion> for Question {
    type Error = QuestionError;

    fn try_from(raw: RawQuestion) -> Result<Self, Self::Error> {
        let age_group = raw.age_group.parse()?;
        let options = parse_options(&raw.id, raw.options)?;

        if options.is_empty() {
            return Err(QuestionError::NoOptions { id: raw.id });
        }

        let correct_answer = usize::try_from(raw.correct_answer)
            .ok()
            .filter(|answer| (1..=options.len()).contains(answer))
            .ok_or_else(|| QuestionError::CorrectAnswerOutOfRange {
                id: raw.id.clone(),
                correct_answer: raw.correct_answer,
                option_count: options.len(),
            })?;

        Ok(Question {
            id: raw.id,
            age_group,
            scam_number: raw.scam_number,
            theme: raw.theme.trim().to_string(),
            scenario_number: raw.scenario_number,
            scenario_title: raw.scenario_title,
            scenario_description: raw.scenario_description,
            options,
            correct_answer,
        })
    }
}

fn parse_options(id: &str, value: Value) -> Result<Vec<String>, QuestionError> {
    let malformed = || QuestionError::MalformedOptions { id: id.to_string() };

    let items = match value {
        Value::Array(items) => items,
        Value::String(encoded) => match serde_json::from_str::<Value>(&encoded) {
            Ok(Value::Array(items)) => items,
            _ => return Err(malformed()),
        },
        _ => return Err(malformed()),
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::String(text) => Ok(text),
            _ => Err(malformed()),
        })
        .collect()
}
