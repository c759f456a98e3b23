mod profile;
mod question;
mod result;

pub use profile::{Profile, ProfileDraft, ProfileError, User, MAX_AGE, MIN_AGE};
pub use question::{AgeGroup, Question, QuestionError, RawQuestion};
pub use result::{AssessmentResult, NewAssessment, RiskLevel, ScamResult};
