use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::models::{AssessmentResult, NewAssessment};

use super::{ResultStore, StoreError, newest_first, read_json, write_json};

/// Results kept in one JSON file, rewritten in full on every save.
pub struct JsonResultStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles on the file.
    lock: Mutex<()>,
}

impl JsonResultStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl ResultStore for JsonResultStore {
    async fn save(
        &self,
        user_id: Uuid,
        assessment: NewAssessment,
    ) -> Result<AssessmentResult, StoreError> {
        let _guard = self.lock.lock().await;

        let mut records: Vec<AssessmentResult> = read_json(&self.path).await?;
        let result = AssessmentResult::from_new(user_id, assessment, Utc::now());
        records.push(result.clone());
        write_json(&self.path, &records).await?;

        info!(
            id = %result.id,
            %user_id,
            score = result.score_percentage,
            risk = %result.risk_level,
            "saved assessment"
        );
        Ok(result)
    }

    async fn history(&self, user_id: Uuid) -> Result<Vec<AssessmentResult>, StoreError> {
        let _guard = self.lock.lock().await;

        let records: Vec<AssessmentResult> = read_json(&self.path).await?;
        let mut mine: Vec<AssessmentResult> = records
            .into_iter()
            .filter(|r| r.user_id == user_id)
            .collect();
        newest_first(&mut mine);
        Ok(mine)
    }
}
