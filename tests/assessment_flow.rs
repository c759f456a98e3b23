use std::sync::Arc;

use crossterm::event::KeyCode;
use tokio::sync::mpsc;

use cyrex::app::{HistoryView, Screen, Submission};
use cyrex::models::{AgeGroup, Profile, Question, RiskLevel};
use cyrex::protocol::Request;
use cyrex::store::{
    IdentityProvider, MemoryIdentityStore, MemoryQuestionStore, MemoryResultStore, QuestionOrder,
};
use cyrex::{App, Backend, Stores};

fn question(scam_number: u32, scenario_number: u32, correct_answer: usize) -> Question {
    Question {
        id: format!("{scam_number}-{scenario_number}"),
        age_group: AgeGroup::Seniors,
        scam_number: Some(scam_number),
        theme: if scam_number == 1 {
            "Banking Missed Call".to_string()
        } else {
            "Aadhaar Scam".to_string()
        },
        scenario_number,
        scenario_title: format!("Scenario {scenario_number}"),
        scenario_description: "A stranger calls about your account.".to_string(),
        options: ["Share the OTP", "Hang up", "Ask them to call later", "Install their app"]
            .map(String::from)
            .to_vec(),
        correct_answer,
    }
}

struct Harness {
    app: App,
    backend: Backend,
    results: Arc<MemoryResultStore>,
}

impl Harness {
    async fn new() -> Self {
        // Stored out of order to check the fetch sorts by scam number.
        let bank = vec![
            question(2, 1, 2),
            question(1, 2, 2),
            question(1, 1, 2),
            question(2, 2, 2),
        ];
        let results = Arc::new(MemoryResultStore::new());
        let identity = Arc::new(MemoryIdentityStore::new());

        let mut user = identity.sign_in("lakshmi").await.unwrap();
        user = identity
            .update_profile(
                user.id,
                Profile {
                    name: "Lakshmi".to_string(),
                    phone: "9000000001".to_string(),
                    age: 68,
                    state: "Karnataka".to_string(),
                    district: "Mysuru".to_string(),
                },
            )
            .await
            .unwrap();

        let stores = Stores {
            questions: Arc::new(MemoryQuestionStore::new(bank, QuestionOrder::ScamNumber)),
            results: results.clone(),
            identity,
        };
        let (tx, _rx) = mpsc::unbounded_channel();

        Self {
            app: App::new(user, None),
            backend: Backend::new(stores, tx),
            results,
        }
    }

    /// Presses a key and runs whatever store work it asked for.
    async fn press(&mut self, key: KeyCode) {
        if let Some(request) = self.app.handle_key(key) {
            let response = self.backend.handle(request).await;
            self.app.apply(response);
        }
    }

    async fn answer_all(&mut self, choices: &[usize]) {
        for choice in choices {
            let digit = char::from_digit(*choice as u32, 10).unwrap();
            self.press(KeyCode::Char(digit)).await;
            self.press(KeyCode::Enter).await;
        }
    }
}

#[tokio::test]
async fn full_run_is_scored_saved_and_listed() {
    let mut harness = Harness::new().await;

    harness.press(KeyCode::Char('4')).await;
    harness.press(KeyCode::Enter).await;

    let Screen::Quiz(quiz) = &harness.app.screen else {
        panic!("expected the quiz screen");
    };
    let ids: Vec<&str> = quiz
        .assessment
        .questions()
        .iter()
        .map(|q| q.id.as_str())
        .collect();
    assert_eq!(ids, vec!["1-1", "1-2", "2-1", "2-2"]);

    harness.answer_all(&[2, 2, 1, 2]).await;

    let Screen::Results { result, .. } = &harness.app.screen else {
        panic!("expected the results screen");
    };
    assert_eq!(result.correct_answers, 3);
    assert_eq!(result.score_percentage, 75.0);
    assert_eq!(result.risk_level, RiskLevel::Medium);
    assert_eq!(result.responses, vec![2, 2, 1, 2]);

    let scams = result.scam_results.as_ref().unwrap();
    assert_eq!(scams.len(), 2);
    assert_eq!(scams[0].theme, "Banking Missed Call");
    assert_eq!(scams[0].risk_level, RiskLevel::Low);
    assert_eq!(scams[1].correct_answers, 1);
    assert_eq!(scams[1].risk_level, RiskLevel::High);

    assert_eq!(harness.results.len().await, 1);

    harness.press(KeyCode::Char('h')).await;
    let Screen::History(HistoryView::Loaded { results, .. }) = &harness.app.screen else {
        panic!("expected loaded history");
    };
    assert_eq!(results.len(), 1);
}

#[tokio::test]
async fn undo_replaces_only_the_last_answer() {
    let mut harness = Harness::new().await;
    harness.press(KeyCode::Char('4')).await;
    harness.press(KeyCode::Enter).await;

    harness.answer_all(&[1, 1]).await;
    harness.press(KeyCode::Char('p')).await;
    // A second undo in a row is refused.
    harness.press(KeyCode::Char('p')).await;
    harness.answer_all(&[2, 2, 2]).await;

    let Screen::Results { result, .. } = &harness.app.screen else {
        panic!("expected the results screen");
    };
    assert_eq!(result.responses, vec![1, 2, 2, 2]);
    assert_eq!(result.correct_answers, 3);
}

#[tokio::test]
async fn write_failure_keeps_answers_until_retry() {
    let mut harness = Harness::new().await;
    harness.press(KeyCode::Char('4')).await;
    harness.press(KeyCode::Enter).await;

    harness.results.set_failing(true);
    harness.answer_all(&[2, 2, 2, 2]).await;

    let Screen::Quiz(quiz) = &harness.app.screen else {
        panic!("a failed write must stay on the quiz");
    };
    assert!(matches!(quiz.submission, Submission::Failed(_)));
    assert_eq!(quiz.assessment.answers(), &[2, 2, 2, 2]);
    assert!(harness.results.is_empty().await);

    // No automatic resubmission: other keys do nothing.
    assert_eq!(harness.app.handle_key(KeyCode::Enter), None);

    harness.results.set_failing(false);
    let retry = harness.app.handle_key(KeyCode::Char('r'));
    assert!(matches!(retry, Some(Request::SaveResult { .. })));
    let response = harness.backend.handle(retry.unwrap()).await;
    harness.app.apply(response);

    let Screen::Results { result, .. } = &harness.app.screen else {
        panic!("expected the results screen after retry");
    };
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert_eq!(harness.results.len().await, 1);
}

#[tokio::test]
async fn fetch_failure_recovers_to_age_selection() {
    let mut harness = Harness::new().await;
    let failing = Arc::new(MemoryQuestionStore::new(Vec::new(), QuestionOrder::Theme));
    failing.set_failing(true);
    let (tx, _rx) = mpsc::unbounded_channel();
    harness.backend = Backend::new(
        Stores {
            questions: failing,
            results: harness.results.clone(),
            identity: Arc::new(MemoryIdentityStore::new()),
        },
        tx,
    );

    harness.press(KeyCode::Enter).await;
    assert!(matches!(harness.app.screen, Screen::Failure { .. }));

    harness.press(KeyCode::Esc).await;
    assert!(matches!(harness.app.screen, Screen::AgeSelection { .. }));
}
