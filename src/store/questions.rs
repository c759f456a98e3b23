use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, warn};

use crate::models::{AgeGroup, Question, QuestionError, RawQuestion};

use super::{QuestionOrder, QuestionStore, StoreError, sort_questions};

/// Outcome of ingesting a question bank file.
#[derive(Debug, Default)]
pub struct BankReport {
    pub accepted: Vec<Question>,
    pub rejected: Vec<QuestionError>,
}

impl BankReport {
    /// Validates every record. Records that fail are collected, not fatal.
    pub fn from_records(records: Vec<Value>) -> Self {
        let mut report = BankReport::default();

        for (index, record) in records.into_iter().enumerate() {
            let parsed = serde_json::from_value::<RawQuestion>(record)
                .map_err(|err| QuestionError::InvalidRecord {
                    index,
                    reason: err.to_string(),
                })
                .and_then(Question::try_from);

            match parsed {
                Ok(question) => report.accepted.push(question),
                Err(err) => report.rejected.push(err),
            }
        }

        report
    }

    pub fn count_for(&self, age_group: AgeGroup) -> usize {
        self.accepted
            .iter()
            .filter(|q| q.age_group == age_group)
            .count()
    }
}

/// Question bank read from a JSON file holding a list of raw records.
///
/// The file is re-read on each fetch so edits show up without a restart.
pub struct JsonQuestionStore {
    path: PathBuf,
    order: QuestionOrder,
}

impl JsonQuestionStore {
    pub fn new(path: impl Into<PathBuf>, order: QuestionOrder) -> Self {
        Self {
            path: path.into(),
            order,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and validates the whole bank. Unlike a fetch, a missing bank
    /// file is an error here.
    pub async fn load(&self) -> Result<BankReport, StoreError> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| StoreError::Read {
                path: self.path.clone(),
                source,
            })?;

        let records: Vec<Value> =
            serde_json::from_str(&text).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;

        Ok(BankReport::from_records(records))
    }
}

#[async_trait]
impl QuestionStore for JsonQuestionStore {
    async fn questions(&self, age_group: AgeGroup) -> Result<Vec<Question>, StoreError> {
        let report = self.load().await?;

        for err in &report.rejected {
            warn!(path = %self.path.display(), %err, "skipping question record");
        }

        let mut questions: Vec<Question> = report
            .accepted
            .into_iter()
            .filter(|q| q.age_group == age_group)
            .collect();
        sort_questions(&mut questions, self.order);

        info!(%age_group, count = questions.len(), "loaded questions");
        Ok(questions)
    }
}
