//! In-process stores with switchable failure, for tests and demos.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::i18n::Locale;
use crate::models::{AgeGroup, AssessmentResult, NewAssessment, Profile, Question, User};

use super::{
    IdentityProvider, QuestionOrder, QuestionStore, ResultStore, StoreError, newest_first,
    sort_questions,
};

/// Shared on/off switch that makes every call fail while set.
#[derive(Debug, Default)]
struct Outage(AtomicBool);

impl Outage {
    fn set(&self, failing: bool) {
        self.0.store(failing, Ordering::SeqCst);
    }

    fn check(&self, what: &str) -> Result<(), StoreError> {
        if self.0.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable(format!("{what} is offline")))
        } else {
            Ok(())
        }
    }
}

pub struct MemoryQuestionStore {
    questions: Vec<Question>,
    order: QuestionOrder,
    outage: Outage,
}

impl MemoryQuestionStore {
    pub fn new(questions: Vec<Question>, order: QuestionOrder) -> Self {
        Self {
            questions,
            order,
            outage: Outage::default(),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.outage.set(failing);
    }
}

#[async_trait]
impl QuestionStore for MemoryQuestionStore {
    async fn questions(&self, age_group: AgeGroup) -> Result<Vec<Question>, StoreError> {
        self.outage.check("question store")?;

        let mut questions: Vec<Question> = self
            .questions
            .iter()
            .filter(|q| q.age_group == age_group)
            .cloned()
            .collect();
        sort_questions(&mut questions, self.order);
        Ok(questions)
    }
}

#[derive(Default)]
pub struct MemoryResultStore {
    records: Mutex<Vec<AssessmentResult>>,
    outage: Outage,
}

impl MemoryResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.outage.set(failing);
    }

    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ResultStore for MemoryResultStore {
    async fn save(
        &self,
        user_id: Uuid,
        assessment: NewAssessment,
    ) -> Result<AssessmentResult, StoreError> {
        self.outage.check("result store")?;

        let result = AssessmentResult::from_new(user_id, assessment, Utc::now());
        self.records.lock().await.push(result.clone());
        Ok(result)
    }

    async fn history(&self, user_id: Uuid) -> Result<Vec<AssessmentResult>, StoreError> {
        self.outage.check("result store")?;

        let mut mine: Vec<AssessmentResult> = self
            .records
            .lock()
            .await
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        newest_first(&mut mine);
        Ok(mine)
    }
}

#[derive(Default)]
pub struct MemoryIdentityStore {
    users: Mutex<Vec<User>>,
    outage: Outage,
}

impl MemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.outage.set(failing);
    }

    async fn modify<F>(&self, user_id: Uuid, change: F) -> Result<User, StoreError>
    where
        F: FnOnce(&mut User) + Send,
    {
        self.outage.check("identity store")?;

        let mut users = self.users.lock().await;
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(StoreError::UnknownUser(user_id))?;
        change(user);
        Ok(user.clone())
    }
}

#[async_trait]
impl IdentityProvider for MemoryIdentityStore {
    async fn sign_in(&self, username: &str) -> Result<User, StoreError> {
        self.outage.check("identity store")?;

        let mut users = self.users.lock().await;
        if let Some(user) = users.iter().find(|u| u.username == username) {
            return Ok(user.clone());
        }
        let user = User::new(username);
        users.push(user.clone());
        Ok(user)
    }

    async fn update_profile(&self, user_id: Uuid, profile: Profile) -> Result<User, StoreError> {
        self.modify(user_id, |user| user.profile = Some(profile)).await
    }

    async fn set_locale(&self, user_id: Uuid, locale: Locale) -> Result<User, StoreError> {
        self.modify(user_id, |user| user.locale = locale).await
    }
}
