//! Score tallying and risk classification.
//!
//! Everything here is pure: the same questions and answers always produce
//! the same result, and nothing touches a store.

use std::fmt;

use thiserror::Error;

use crate::i18n::Text;
use crate::models::{Question, RiskLevel, ScamResult};

/// Overall outcome of comparing an answer sequence with its questions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
    pub percentage: f64,
    pub risk: RiskLevel,
}

/// Score for one contiguous group of questions.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupResult<K> {
    pub key: K,
    /// Theme of the first question in the group.
    pub theme: String,
    pub score: Score,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupingError {
    /// A group key showed up again after a different group had started.
    #[error("group {key} reappears at question {index} after another group")]
    NonContiguous { key: String, index: usize },
}

/// Counts positions where the answer matches the question's correct option.
///
/// Answers outside a question's option range simply never match. When the
/// sequences differ in length only the paired prefix is compared, while the
/// total is always the number of questions.
pub fn score(questions: &[Question], answers: &[usize]) -> Score {
    let correct = questions
        .iter()
        .zip(answers)
        .filter(|(question, answer)| question.is_correct(**answer))
        .count();

    let total = questions.len();
    let percentage = percentage(correct, total);

    Score {
        correct,
        total,
        percentage,
        risk: RiskLevel::from_percentage(percentage),
    }
}

/// `100 * correct / total`, or 0 for an empty set.
pub fn percentage(correct: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (correct as f64 / total as f64) * 100.0
    }
}

/// Scores each group of questions sharing a key, in first-seen order.
///
/// Groups must already be contiguous in `questions`; this does not re-sort.
/// A key that comes back after another group is reported as an error rather
/// than silently merged.
pub fn score_groups<K, F>(
    questions: &[Question],
    answers: &[usize],
    key_fn: F,
) -> Result<Vec<GroupResult<K>>, GroupingError>
where
    K: PartialEq + fmt::Debug,
    F: Fn(&Question) -> K,
{
    let mut spans: Vec<(K, usize, usize)> = Vec::new();

    for (index, question) in questions.iter().enumerate() {
        let key = key_fn(question);

        if let Some((current, _, end)) = spans.last_mut() {
            if *current == key {
                *end = index + 1;
                continue;
            }
        }

        if spans.iter().any(|(seen, _, _)| *seen == key) {
            return Err(GroupingError::NonContiguous {
                key: format!("{key:?}"),
                index,
            });
        }

        spans.push((key, index, index + 1));
    }

    let answered = answers.len();
    Ok(spans
        .into_iter()
        .map(|(key, start, end)| {
            let group = &questions[start..end];
            let group_answers = &answers[start.min(answered)..end.min(answered)];
            GroupResult {
                key,
                theme: group[0].theme.clone(),
                score: score(group, group_answers),
            }
        })
        .collect())
}

/// Per-scam breakdown, when the question set is organised by scam number.
///
/// Returns `Ok(None)` unless every question carries a scam number.
pub fn scam_results(
    questions: &[Question],
    answers: &[usize],
) -> Result<Option<Vec<ScamResult>>, GroupingError> {
    if questions.is_empty() || questions.iter().any(|q| q.scam_number.is_none()) {
        return Ok(None);
    }

    let groups = score_groups(questions, answers, |q| q.scam_number.unwrap_or_default())?;

    Ok(Some(
        groups
            .into_iter()
            .map(|group| ScamResult {
                scam_number: group.key,
                theme: group.theme,
                total_questions: group.score.total,
                correct_answers: group.score.correct,
                score_percentage: group.score.percentage,
                risk_level: group.score.risk,
            })
            .collect(),
    ))
}

/// One-line verdict shown under the score.
pub fn score_message(percentage: f64) -> Text {
    match percentage {
        p if p >= 90.0 => Text::ScoreOutstanding,
        p if p >= 80.0 => Text::ScoreExcellent,
        p if p >= 70.0 => Text::ScoreGood,
        p if p >= 60.0 => Text::ScoreFair,
        p if p >= 40.0 => Text::ScoreBasic,
        _ => Text::ScoreUrgent,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::AgeGroup;

    pub(crate) fn question(scam_number: Option<u32>, theme: &str, correct_answer: usize) -> Question {
        Question {
            id: format!("{theme}-{correct_answer}"),
            age_group: AgeGroup::Adults,
            scam_number,
            theme: theme.to_string(),
            scenario_number: 1,
            scenario_title: "Scenario".to_string(),
            scenario_description: "Something suspicious happens.".to_string(),
            options: vec![
                "Option A".to_string(),
                "Option B".to_string(),
                "Option C".to_string(),
                "Option D".to_string(),
            ],
            correct_answer,
        }
    }

    fn questions(count: usize) -> Vec<Question> {
        (0..count).map(|i| question(None, "Courier Scam", i % 4 + 1)).collect()
    }

    /// Answers that match the first `matching` questions and miss the rest.
    fn answers_matching(questions: &[Question], matching: usize) -> Vec<usize> {
        questions
            .iter()
            .enumerate()
            .map(|(i, q)| {
                if i < matching {
                    q.correct_answer
                } else {
                    q.correct_answer % 4 + 1
                }
            })
            .collect()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 0.01, "{actual} != {expected}");
    }

    #[test]
    fn all_correct_is_low_risk() {
        let qs = questions(5);
        let result = score(&qs, &answers_matching(&qs, 5));
        assert_eq!(result.correct, 5);
        assert_close(result.percentage, 100.0);
        assert_eq!(result.risk, RiskLevel::Low);
    }

    #[test]
    fn forty_percent_is_high_not_critical() {
        let qs = questions(5);
        let result = score(&qs, &answers_matching(&qs, 2));
        assert_eq!(result.correct, 2);
        assert_close(result.percentage, 40.0);
        assert_eq!(result.risk, RiskLevel::High);
    }

    #[test]
    fn seventy_percent_is_medium() {
        let qs = questions(10);
        let result = score(&qs, &answers_matching(&qs, 7));
        assert_close(result.percentage, 70.0);
        assert_eq!(result.risk, RiskLevel::Medium);
    }

    #[test]
    fn thirty_percent_is_critical() {
        let qs = questions(10);
        let result = score(&qs, &answers_matching(&qs, 3));
        assert_close(result.percentage, 30.0);
        assert_eq!(result.risk, RiskLevel::Critical);
    }

    #[test]
    fn exact_boundaries() {
        let qs = questions(10);
        assert_eq!(score(&qs, &answers_matching(&qs, 8)).risk, RiskLevel::Low);
        assert_eq!(score(&qs, &answers_matching(&qs, 6)).risk, RiskLevel::Medium);
        assert_eq!(score(&qs, &answers_matching(&qs, 4)).risk, RiskLevel::High);
    }

    #[test]
    fn zero_questions_scores_zero() {
        let result = score(&[], &[]);
        assert_eq!(result.correct, 0);
        assert_eq!(result.total, 0);
        assert_eq!(result.percentage, 0.0);
        assert_eq!(result.risk, RiskLevel::Critical);
    }

    #[test]
    fn out_of_range_answers_count_as_wrong() {
        let qs = questions(3);
        let result = score(&qs, &[0, 9, qs[2].correct_answer]);
        assert_eq!(result.correct, 1);
    }

    #[test]
    fn scoring_is_deterministic_and_only_depends_on_correctness() {
        let qs = questions(4);
        let a = vec![1, 1, 1, 1];
        assert_eq!(score(&qs, &a), score(&qs, &a));

        // Different wrong answers at the same positions give the same score.
        let wrong_a: Vec<usize> = qs.iter().map(|q| q.correct_answer % 4 + 1).collect();
        let wrong_b: Vec<usize> = qs.iter().map(|q| (q.correct_answer + 1) % 4 + 1).collect();
        assert_eq!(score(&qs, &wrong_a), score(&qs, &wrong_b));
    }

    #[test]
    fn correct_count_grows_with_matches() {
        let qs = questions(6);
        let mut previous = 0;
        for matching in 0..=6 {
            let current = score(&qs, &answers_matching(&qs, matching)).correct;
            assert!(current >= previous);
            assert_eq!(current, matching);
            previous = current;
        }
    }

    #[test]
    fn groups_are_scored_in_first_seen_order() {
        let qs: Vec<Question> = [(1, "Banking"), (2, "Health"), (3, "Aadhaar")]
            .iter()
            .flat_map(|(scam, theme)| (0..3).map(move |i| question(Some(*scam), theme, i + 1)))
            .collect();

        let mut answers: Vec<usize> = qs.iter().map(|q| q.correct_answer).collect();
        // group 2 all wrong
        for answer in &mut answers[3..6] {
            *answer = 4;
        }
        // group 3 two of three
        answers[8] = 4;

        let groups = score_groups(&qs, &answers, |q| q.scam_number).unwrap();
        assert_eq!(groups.len(), 3);

        assert_eq!(groups[0].key, Some(1));
        assert_eq!(groups[0].theme, "Banking");
        assert_eq!(groups[0].score.correct, 3);
        assert_close(groups[0].score.percentage, 100.0);
        assert_eq!(groups[0].score.risk, RiskLevel::Low);

        assert_eq!(groups[1].score.correct, 0);
        assert_close(groups[1].score.percentage, 0.0);
        assert_eq!(groups[1].score.risk, RiskLevel::Critical);

        assert_eq!(groups[2].score.correct, 2);
        assert_close(groups[2].score.percentage, 66.67);
        assert_eq!(groups[2].score.risk, RiskLevel::Medium);
    }

    #[test]
    fn non_contiguous_groups_are_rejected() {
        let qs = vec![
            question(Some(1), "Banking", 1),
            question(Some(2), "Health", 1),
            question(Some(1), "Banking", 1),
        ];
        let err = score_groups(&qs, &[1, 1, 1], |q| q.scam_number).unwrap_err();
        assert_eq!(
            err,
            GroupingError::NonContiguous {
                key: "Some(1)".to_string(),
                index: 2
            }
        );
    }

    #[test]
    fn scam_results_need_scam_numbers() {
        let qs = questions(3);
        assert_eq!(scam_results(&qs, &[1, 2, 3]).unwrap(), None);

        let numbered = vec![question(Some(4), "Courier", 2), question(Some(4), "Courier", 3)];
        let results = scam_results(&numbered, &[2, 1]).unwrap().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].scam_number, 4);
        assert_eq!(results[0].correct_answers, 1);
        assert_eq!(results[0].total_questions, 2);
        assert_eq!(results[0].risk_level, RiskLevel::High);
    }

    #[test]
    fn messages_follow_score_bands() {
        assert_eq!(score_message(95.0), Text::ScoreOutstanding);
        assert_eq!(score_message(80.0), Text::ScoreExcellent);
        assert_eq!(score_message(75.0), Text::ScoreGood);
        assert_eq!(score_message(60.0), Text::ScoreFair);
        assert_eq!(score_message(40.0), Text::ScoreBasic);
        assert_eq!(score_message(10.0), Text::ScoreUrgent);
    }
}
