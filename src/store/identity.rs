use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::i18n::Locale;
use crate::models::{Profile, User};

use super::{IdentityProvider, StoreError, read_json, write_json};

/// Local users kept in a JSON file. A user is identified by name alone.
pub struct JsonIdentityStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonIdentityStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    async fn modify<F>(&self, user_id: Uuid, change: F) -> Result<User, StoreError>
    where
        F: FnOnce(&mut User) + Send,
    {
        let _guard = self.lock.lock().await;

        let mut users: Vec<User> = read_json(&self.path).await?;
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(StoreError::UnknownUser(user_id))?;
        change(user);
        let updated = user.clone();

        write_json(&self.path, &users).await?;
        Ok(updated)
    }
}

#[async_trait]
impl IdentityProvider for JsonIdentityStore {
    async fn sign_in(&self, username: &str) -> Result<User, StoreError> {
        let _guard = self.lock.lock().await;

        let mut users: Vec<User> = read_json(&self.path).await?;
        if let Some(user) = users.iter().find(|u| u.username == username) {
            info!(%username, "signed in");
            return Ok(user.clone());
        }

        let user = User::new(username);
        users.push(user.clone());
        write_json(&self.path, &users).await?;

        info!(%username, id = %user.id, "created user");
        Ok(user)
    }

    async fn update_profile(&self, user_id: Uuid, profile: Profile) -> Result<User, StoreError> {
        let user = self
            .modify(user_id, |user| user.profile = Some(profile))
            .await?;
        info!(%user_id, "profile updated");
        Ok(user)
    }

    async fn set_locale(&self, user_id: Uuid, locale: Locale) -> Result<User, StoreError> {
        self.modify(user_id, |user| user.locale = locale).await
    }
}
