//! One quiz run as an explicit state machine.

use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{AgeGroup, NewAssessment, Question};
use crate::scoring;

/// Where a run currently stands.
///
/// While the run is in progress `index` always equals the number of answers
/// recorded so far.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    AwaitingAnswer { index: usize },
    AnswerSelected { index: usize, choice: usize },
    /// Scored once on entry; the summary is what gets persisted.
    Complete(NewAssessment),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("choice {choice} is not one of the {option_count} options")]
    ChoiceOutOfRange { choice: usize, option_count: usize },

    #[error("no option has been selected")]
    NothingSelected,

    #[error("the assessment is already complete")]
    AlreadyComplete,

    #[error("there is no answer that can be taken back")]
    NothingToRevoke,
}

#[derive(Debug, Clone)]
pub struct Assessment {
    age_group: AgeGroup,
    questions: Vec<Question>,
    answers: Vec<usize>,
    step: Step,
    /// Cleared by a revocation, set again when an answer is recorded.
    can_revoke: bool,
}

impl Assessment {
    /// Starts a run. There is nothing to ask with zero questions, so that
    /// case yields `None`.
    pub fn new(age_group: AgeGroup, questions: Vec<Question>) -> Option<Self> {
        if questions.is_empty() {
            return None;
        }

        Some(Self {
            age_group,
            answers: Vec::with_capacity(questions.len()),
            questions,
            step: Step::AwaitingAnswer { index: 0 },
            can_revoke: false,
        })
    }

    pub fn age_group(&self) -> AgeGroup {
        self.age_group
    }

    pub fn step(&self) -> &Step {
        &self.step
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[usize] {
        &self.answers
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Zero-based index of the question being asked, if still in progress.
    pub fn current_index(&self) -> Option<usize> {
        match self.step {
            Step::AwaitingAnswer { index } | Step::AnswerSelected { index, .. } => Some(index),
            Step::Complete(_) => None,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_index().and_then(|index| self.questions.get(index))
    }

    pub fn pending_choice(&self) -> Option<usize> {
        match self.step {
            Step::AnswerSelected { choice, .. } => Some(choice),
            _ => None,
        }
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index() == Some(self.questions.len() - 1)
    }

    pub fn can_go_back(&self) -> bool {
        self.can_revoke && matches!(self.current_index(), Some(index) if index > 0)
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.step, Step::Complete(_))
    }

    pub fn summary(&self) -> Option<&NewAssessment> {
        match &self.step {
            Step::Complete(summary) => Some(summary),
            _ => None,
        }
    }

    /// Marks `choice` (1-based) as the pending answer, replacing any earlier
    /// pending choice for the same question.
    pub fn select(&mut self, choice: usize) -> Result<(), TransitionError> {
        let index = self.current_index().ok_or(TransitionError::AlreadyComplete)?;
        let option_count = self.questions[index].option_count();

        if !(1..=option_count).contains(&choice) {
            return Err(TransitionError::ChoiceOutOfRange {
                choice,
                option_count,
            });
        }

        self.step = Step::AnswerSelected { index, choice };
        Ok(())
    }

    /// Records the pending choice and moves on. After the last question the
    /// run is scored and becomes `Complete`.
    pub fn advance(&mut self) -> Result<&Step, TransitionError> {
        let (index, choice) = match self.step {
            Step::AnswerSelected { index, choice } => (index, choice),
            Step::AwaitingAnswer { .. } => return Err(TransitionError::NothingSelected),
            Step::Complete(_) => return Err(TransitionError::AlreadyComplete),
        };

        self.answers.push(choice);
        self.can_revoke = true;

        let next = index + 1;
        self.step = if next < self.questions.len() {
            Step::AwaitingAnswer { index: next }
        } else {
            Step::Complete(self.finish())
        };

        debug!(age_group = %self.age_group, answered = next, "answer recorded");
        Ok(&self.step)
    }

    /// Takes back the most recently recorded answer and returns it.
    ///
    /// A pending selection on the current question is discarded. Only one
    /// step can be undone until another answer is recorded.
    pub fn previous(&mut self) -> Result<usize, TransitionError> {
        if self.is_complete() {
            return Err(TransitionError::AlreadyComplete);
        }
        if !self.can_go_back() {
            return Err(TransitionError::NothingToRevoke);
        }

        let revoked = self.answers.pop().ok_or(TransitionError::NothingToRevoke)?;
        self.can_revoke = false;
        self.step = Step::AwaitingAnswer {
            index: self.answers.len(),
        };
        Ok(revoked)
    }

    fn finish(&self) -> NewAssessment {
        let score = scoring::score(&self.questions, &self.answers);
        let scam_results =
            scoring::scam_results(&self.questions, &self.answers).unwrap_or_else(|err| {
                warn!(%err, "question set is not grouped by scam, skipping breakdown");
                None
            });

        NewAssessment {
            age_group: self.age_group,
            total_questions: score.total,
            correct_answers: score.correct,
            score_percentage: score.percentage,
            responses: self.answers.clone(),
            risk_level: score.risk,
            scam_results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RiskLevel;
    use crate::scoring::tests::question;

    fn run(count: usize) -> Assessment {
        let questions = (0..count)
            .map(|i| question(Some(i as u32 / 2 + 1), "Courier Scam", 2))
            .collect();
        Assessment::new(AgeGroup::Adults, questions).unwrap()
    }

    fn answer(assessment: &mut Assessment, choice: usize) {
        assessment.select(choice).unwrap();
        assessment.advance().unwrap();
    }

    #[test]
    fn empty_question_set_cannot_start() {
        assert!(Assessment::new(AgeGroup::Teens, Vec::new()).is_none());
    }

    #[test]
    fn starts_awaiting_first_answer() {
        let assessment = run(3);
        assert_eq!(assessment.step(), &Step::AwaitingAnswer { index: 0 });
        assert!(!assessment.can_go_back());
    }

    #[test]
    fn select_validates_range_and_replaces_pending_choice() {
        let mut assessment = run(2);
        assert_eq!(
            assessment.select(0),
            Err(TransitionError::ChoiceOutOfRange {
                choice: 0,
                option_count: 4
            })
        );
        assert!(assessment.select(5).is_err());

        assessment.select(1).unwrap();
        assessment.select(3).unwrap();
        assert_eq!(assessment.pending_choice(), Some(3));
    }

    #[test]
    fn advance_requires_a_selection() {
        let mut assessment = run(2);
        assert_eq!(assessment.advance(), Err(TransitionError::NothingSelected));
    }

    #[test]
    fn completing_scores_once_and_locks() {
        let mut assessment = run(4);
        for choice in [2, 2, 1, 2] {
            answer(&mut assessment, choice);
        }

        let summary = assessment.summary().unwrap();
        assert_eq!(summary.correct_answers, 3);
        assert_eq!(summary.total_questions, 4);
        assert_eq!(summary.responses, vec![2, 2, 1, 2]);
        assert_eq!(summary.risk_level, RiskLevel::Medium);

        let breakdown = summary.scam_results.as_ref().unwrap();
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[1].correct_answers, 1);

        assert_eq!(assessment.select(1), Err(TransitionError::AlreadyComplete));
        assert_eq!(assessment.advance(), Err(TransitionError::AlreadyComplete));
        assert_eq!(assessment.previous(), Err(TransitionError::AlreadyComplete));
    }

    #[test]
    fn only_one_step_can_be_undone() {
        let mut assessment = run(4);
        answer(&mut assessment, 2);
        answer(&mut assessment, 3);

        assert_eq!(assessment.previous(), Ok(3));
        assert_eq!(assessment.step(), &Step::AwaitingAnswer { index: 1 });
        assert_eq!(assessment.answers(), &[2]);

        assert_eq!(assessment.previous(), Err(TransitionError::NothingToRevoke));

        answer(&mut assessment, 1);
        assert!(assessment.can_go_back());
        assert_eq!(assessment.previous(), Ok(1));
    }

    #[test]
    fn previous_discards_pending_choice() {
        let mut assessment = run(3);
        answer(&mut assessment, 2);
        assessment.select(4).unwrap();

        assert_eq!(assessment.previous(), Ok(2));
        assert_eq!(assessment.pending_choice(), None);
        assert_eq!(assessment.current_index(), Some(0));
    }

    #[test]
    fn nothing_to_undo_on_first_question() {
        let mut assessment = run(2);
        assessment.select(1).unwrap();
        assert_eq!(assessment.previous(), Err(TransitionError::NothingToRevoke));
    }

    #[test]
    fn ungrouped_sets_have_no_breakdown() {
        let questions = vec![question(None, "Romance", 1), question(None, "Romance", 2)];
        let mut assessment = Assessment::new(AgeGroup::Teens, questions).unwrap();
        answer(&mut assessment, 1);
        answer(&mut assessment, 2);
        assert_eq!(assessment.summary().unwrap().scam_results, None);
    }
}
