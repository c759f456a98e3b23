//! Messages between the front end and the store worker.
//!
//! The app emits a [`Request`] for every operation that touches a store and
//! later receives the matching [`Response`] over a channel. Store errors are
//! carried as display strings since the front end only shows them.

use uuid::Uuid;

use crate::i18n::Locale;
use crate::models::{AgeGroup, AssessmentResult, NewAssessment, Profile, Question, User};

/// Work the front end wants done.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// Load the ordered question set for a bracket.
    FetchQuestions { age_group: AgeGroup },

    /// Persist a completed run.
    SaveResult {
        user_id: Uuid,
        assessment: NewAssessment,
    },

    /// Load the user's past runs.
    FetchHistory { user_id: Uuid },

    SaveProfile { user_id: Uuid, profile: Profile },

    SaveLocale { user_id: Uuid, locale: Locale },
}

/// Completion of a [`Request`].
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Questions {
        age_group: AgeGroup,
        result: Result<Vec<Question>, String>,
    },

    Saved(Result<AssessmentResult, String>),

    History(Result<Vec<AssessmentResult>, String>),

    ProfileSaved(Result<User, String>),

    LocaleSaved(Result<User, String>),
}
