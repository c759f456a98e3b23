use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::i18n::Locale;

pub const MIN_AGE: u8 = 13;
pub const MAX_AGE: u8 = 100;

const MIN_PHONE_DIGITS: usize = 7;
const MAX_PHONE_DIGITS: usize = 15;

/// A signed-in user as seen by the identity provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub profile: Option<Profile>,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            locale: Locale::default(),
            profile: None,
        }
    }

    pub fn profile_complete(&self) -> bool {
        self.profile.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub phone: String,
    pub age: u8,
    pub state: String,
    pub district: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("phone number must have 7 to 15 digits")]
    InvalidPhone,

    #[error("age must be a number between 13 and 100")]
    InvalidAge,
}

/// Unvalidated profile form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub name: String,
    pub phone: String,
    pub age: String,
    pub state: String,
    pub district: String,
}

impl ProfileDraft {
    pub fn validate(&self) -> Result<Profile, ProfileError> {
        let name = required("name", &self.name)?;
        let phone = required("phone", &self.phone)?;
        let age = required("age", &self.age)?;
        let state = required("state", &self.state)?;
        let district = required("district", &self.district)?;

        if !is_valid_phone(&phone) {
            return Err(ProfileError::InvalidPhone);
        }

        let age: u8 = age.parse().map_err(|_| ProfileError::InvalidAge)?;
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(ProfileError::InvalidAge);
        }

        Ok(Profile {
            name,
            phone,
            age,
            state,
            district,
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, ProfileError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ProfileError::Missing(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn is_valid_phone(phone: &str) -> bool {
    let body = phone.strip_prefix('+').unwrap_or(phone);
    if !body
        .chars()
        .all(|c| c.is_ascii_digit() || c == ' ' || c == '-')
    {
        return false;
    }

    let digits = body.chars().filter(char::is_ascii_digit).count();
    (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits)
}
