//! Persistence collaborators.
//!
//! The front end only ever talks to these traits. JSON-file implementations
//! back the binary; the in-memory ones back the tests.

mod identity;
mod memory;
mod questions;
mod results;

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use uuid::Uuid;

use crate::i18n::Locale;
use crate::models::{AgeGroup, AssessmentResult, NewAssessment, Profile, Question, User};

pub use identity::JsonIdentityStore;
pub use memory::{MemoryIdentityStore, MemoryQuestionStore, MemoryResultStore};
pub use questions::{BankReport, JsonQuestionStore};
pub use results::JsonResultStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode records: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("unknown user {0}")]
    UnknownUser(Uuid),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// How a question set is ordered before it is asked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum QuestionOrder {
    /// By theme, then scenario number.
    Theme,
    /// By scam number, then scenario number. Keeps scam groups contiguous.
    #[default]
    ScamNumber,
}

/// Stable sort, so ties keep their stored order.
pub fn sort_questions(questions: &mut [Question], order: QuestionOrder) {
    match order {
        QuestionOrder::Theme => questions.sort_by(|a, b| {
            a.theme
                .cmp(&b.theme)
                .then(a.scenario_number.cmp(&b.scenario_number))
        }),
        QuestionOrder::ScamNumber => questions.sort_by_key(|q| {
            (
                q.scam_number.is_none(),
                q.scam_number,
                q.scenario_number,
            )
        }),
    }
}

#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// The ordered question set for a bracket. An empty set is not an error.
    async fn questions(&self, age_group: AgeGroup) -> Result<Vec<Question>, StoreError>;
}

#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Persists a completed run, assigning its id and completion time.
    async fn save(
        &self,
        user_id: Uuid,
        assessment: NewAssessment,
    ) -> Result<AssessmentResult, StoreError>;

    /// The user's results, most recent first.
    async fn history(&self, user_id: Uuid) -> Result<Vec<AssessmentResult>, StoreError>;
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Returns the user with this name, creating it on first sign-in.
    async fn sign_in(&self, username: &str) -> Result<User, StoreError>;

    async fn update_profile(&self, user_id: Uuid, profile: Profile) -> Result<User, StoreError>;

    async fn set_locale(&self, user_id: Uuid, locale: Locale) -> Result<User, StoreError>;
}

pub(crate) fn newest_first(results: &mut [AssessmentResult]) {
    results.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
}

/// Reads a JSON document, treating a missing file as the default value.
pub(crate) async fn read_json<T>(path: &Path) -> Result<T, StoreError>
where
    T: DeserializeOwned + Default,
{
    let text = match tokio::fs::read_to_string(path).await {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(T::default()),
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&text).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Rewrites the whole document through a sibling temp file.
pub(crate) async fn write_json<T>(path: &Path, value: &T) -> Result<(), StoreError>
where
    T: Serialize + ?Sized,
{
    let json = serde_json::to_string_pretty(value)?;
    let write_err = |source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(write_err)?;
    }

    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, json).await.map_err(write_err)?;
    tokio::fs::rename(&tmp, path).await.map_err(write_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::tests::question;

    #[test]
    fn scam_order_groups_and_keeps_ties_stable() {
        let mut a = question(Some(2), "Courier", 1);
        a.scenario_number = 1;
        let mut b = question(Some(1), "Banking", 1);
        b.scenario_number = 2;
        let mut c = question(Some(1), "Banking", 2);
        c.scenario_number = 1;
        let mut d = question(Some(1), "Banking", 3);
        d.scenario_number = 1;
        let unnumbered = question(None, "Aadhaar", 1);

        let mut questions = vec![unnumbered, a, b, c, d];
        sort_questions(&mut questions, QuestionOrder::ScamNumber);

        let order: Vec<(Option<u32>, usize)> = questions
            .iter()
            .map(|q| (q.scam_number, q.correct_answer))
            .collect();
        assert_eq!(
            order,
            vec![(Some(1), 2), (Some(1), 3), (Some(1), 1), (Some(2), 1), (None, 1)]
        );
    }

    #[test]
    fn theme_order_sorts_by_theme_then_scenario() {
        let mut a = question(None, "Romance", 1);
        a.scenario_number = 2;
        let mut b = question(None, "Romance", 2);
        b.scenario_number = 1;
        let c = question(None, "Courier", 3);

        let mut questions = vec![a, b, c];
        sort_questions(&mut questions, QuestionOrder::Theme);
        let answers: Vec<usize> = questions.iter().map(|q| q.correct_answer).collect();
        assert_eq!(answers, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn missing_file_reads_as_default() {
        let dir = tempfile::tempdir().unwrap();
        let records: Vec<User> = read_json(&dir.path().join("nope.json")).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        tokio::fs::write(&path, "{not json").await.unwrap();

        let err = read_json::<Vec<User>>(&path).await.unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
    }
}
