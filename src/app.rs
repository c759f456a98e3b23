//! Front-end controller.
//!
//! `App` owns every screen's state and turns key presses into state changes
//! plus, at most, one [`Request`] for the backend. It never does I/O itself;
//! results come back through [`App::apply`].

use crossterm::event::KeyCode;
use tracing::{debug, info, warn};

use crate::assessment::{Assessment, Step};
use crate::i18n::{Locale, Text};
use crate::models::{AgeGroup, AssessmentResult, ProfileDraft, Question, User};
use crate::protocol::{Request, Response};

/// Profile form fields, in tab order.
pub const PROFILE_FIELDS: [Text; 5] = [
    Text::Name,
    Text::Phone,
    Text::Age,
    Text::State,
    Text::District,
];

#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub draft: ProfileDraft,
    pub field: usize,
    pub error: Option<String>,
    pub saving: bool,
}

impl ProfileForm {
    pub fn value(&self, field: usize) -> &str {
        match field {
            0 => &self.draft.name,
            1 => &self.draft.phone,
            2 => &self.draft.age,
            3 => &self.draft.state,
            _ => &self.draft.district,
        }
    }

    fn active_mut(&mut self) -> &mut String {
        match self.field {
            0 => &mut self.draft.name,
            1 => &mut self.draft.phone,
            2 => &mut self.draft.age,
            3 => &mut self.draft.state,
            _ => &mut self.draft.district,
        }
    }

    fn next_field(&mut self) {
        self.field = (self.field + 1) % PROFILE_FIELDS.len();
    }

    fn previous_field(&mut self) {
        self.field = (self.field + PROFILE_FIELDS.len() - 1) % PROFILE_FIELDS.len();
    }
}

/// Persistence status of a run.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Still answering.
    Idle,
    Submitting,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct QuizScreen {
    pub assessment: Assessment,
    pub submission: Submission,
}

#[derive(Debug, Clone)]
pub enum HistoryView {
    Loading,
    Loaded {
        results: Vec<AssessmentResult>,
        scroll: usize,
    },
}

#[derive(Debug, Clone)]
pub enum Screen {
    ProfileCompletion(ProfileForm),
    AgeSelection { selected: usize },
    LoadingQuestions { age_group: AgeGroup },
    NoQuestions { age_group: AgeGroup },
    Quiz(QuizScreen),
    Results {
        result: AssessmentResult,
        scroll: usize,
    },
    History(HistoryView),
    Failure { message: Text, detail: String },
}

impl Screen {
    fn age_selection() -> Self {
        Self::AgeSelection { selected: 0 }
    }

    /// Whether printable keys are text input on this screen.
    fn takes_text(&self) -> bool {
        matches!(self, Self::ProfileCompletion(_))
    }
}

pub struct App {
    pub screen: Screen,
    user: User,
    locale: Locale,
    /// One-shot message shown on the next screen, e.g. after a profile save.
    notice: Option<Text>,
    pub should_quit: bool,
}

impl App {
    /// `locale` overrides the user's stored preference for this session.
    pub fn new(user: User, locale: Option<Locale>) -> Self {
        let screen = if user.profile_complete() {
            Screen::age_selection()
        } else {
            Screen::ProfileCompletion(ProfileForm::default())
        };

        Self {
            screen,
            locale: locale.unwrap_or(user.locale),
            user,
            notice: None,
            should_quit: false,
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn notice(&self) -> Option<Text> {
        self.notice
    }

    /// Handles one key press. Returns the store work it requires, if any.
    pub fn handle_key(&mut self, key: KeyCode) -> Option<Request> {
        if !self.screen.takes_text() {
            match key {
                KeyCode::Char('q') | KeyCode::Char('Q') => {
                    self.should_quit = true;
                    return None;
                }
                KeyCode::Char('l') | KeyCode::Char('L') => return Some(self.cycle_locale()),
                _ => {}
            }
        }

        match self.screen {
            Screen::ProfileCompletion(_) => self.handle_profile_key(key),
            Screen::AgeSelection { .. } => self.handle_age_key(key),
            Screen::LoadingQuestions { .. } => {
                if key == KeyCode::Esc {
                    debug!("question fetch abandoned");
                    self.go_home();
                }
                None
            }
            Screen::NoQuestions { .. } | Screen::Failure { .. } => {
                if matches!(key, KeyCode::Esc | KeyCode::Enter) {
                    self.go_home();
                }
                None
            }
            Screen::Quiz(_) => self.handle_quiz_key(key),
            Screen::Results { .. } => self.handle_results_key(key),
            Screen::History(_) => self.handle_history_key(key),
        }
    }

    /// Applies a finished store operation. Responses for screens that have
    /// since been left are dropped.
    pub fn apply(&mut self, response: Response) {
        match response {
            Response::Questions { age_group, result } => self.questions_loaded(age_group, result),
            Response::Saved(result) => self.result_saved(result),
            Response::History(result) => self.history_loaded(result),
            Response::ProfileSaved(result) => self.profile_saved(result),
            Response::LocaleSaved(result) => match result {
                Ok(user) => self.user.locale = user.locale,
                Err(err) => warn!(%err, "locale preference not saved"),
            },
        }
    }

    fn cycle_locale(&mut self) -> Request {
        self.locale = self.locale.next();
        info!(locale = %self.locale, "switched locale");
        Request::SaveLocale {
            user_id: self.user.id,
            locale: self.locale,
        }
    }

    fn go_home(&mut self) {
        self.screen = Screen::age_selection();
    }

    fn open_history(&mut self) -> Request {
        self.notice = None;
        self.screen = Screen::History(HistoryView::Loading);
        Request::FetchHistory {
            user_id: self.user.id,
        }
    }

    fn handle_profile_key(&mut self, key: KeyCode) -> Option<Request> {
        let Screen::ProfileCompletion(form) = &mut self.screen else {
            return None;
        };
        if form.saving {
            return None;
        }

        match key {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.previous_field(),
            KeyCode::Backspace => {
                form.error = None;
                form.active_mut().pop();
            }
            KeyCode::Char(c) => {
                form.error = None;
                form.active_mut().push(c);
            }
            KeyCode::Enter => match form.draft.validate() {
                Ok(profile) => {
                    form.saving = true;
                    return Some(Request::SaveProfile {
                        user_id: self.user.id,
                        profile,
                    });
                }
                Err(err) => form.error = Some(err.to_string()),
            },
            _ => {}
        }
        None
    }

    fn handle_age_key(&mut self, key: KeyCode) -> Option<Request> {
        let Screen::AgeSelection { selected } = &mut self.screen else {
            return None;
        };
        let count = AgeGroup::ALL.len();

        match key {
            KeyCode::Down | KeyCode::Char('j') => *selected = (*selected + 1) % count,
            KeyCode::Up | KeyCode::Char('k') => *selected = (*selected + count - 1) % count,
            KeyCode::Char(c @ '1'..='4') => *selected = c as usize - '1' as usize,
            KeyCode::Enter => {
                let age_group = AgeGroup::ALL[*selected];
                self.notice = None;
                self.screen = Screen::LoadingQuestions { age_group };
                info!(%age_group, "starting assessment");
                return Some(Request::FetchQuestions { age_group });
            }
            KeyCode::Char('h') | KeyCode::Char('H') => return Some(self.open_history()),
            _ => {}
        }
        None
    }

    fn handle_quiz_key(&mut self, key: KeyCode) -> Option<Request> {
        let Screen::Quiz(quiz) = &mut self.screen else {
            return None;
        };

        if quiz.assessment.is_complete() {
            if !matches!(quiz.submission, Submission::Failed(_)) {
                return None;
            }
            return match key {
                KeyCode::Char('r') | KeyCode::Char('R') => {
                    info!("retrying result save");
                    quiz.submission = Submission::Submitting;
                    quiz.assessment.summary().cloned().map(|assessment| Request::SaveResult {
                        user_id: self.user.id,
                        assessment,
                    })
                }
                KeyCode::Esc => {
                    warn!("unsaved result discarded");
                    self.go_home();
                    None
                }
                _ => None,
            };
        }

        let assessment = &mut quiz.assessment;
        let option_count = assessment.current_question().map_or(0, |q| q.option_count());

        let outcome = match key {
            KeyCode::Down | KeyCode::Char('j') => {
                let choice = assessment
                    .pending_choice()
                    .map_or(1, |c| c % option_count + 1);
                assessment.select(choice)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                let choice = assessment
                    .pending_choice()
                    .map_or(option_count, |c| if c <= 1 { option_count } else { c - 1 });
                assessment.select(choice)
            }
            KeyCode::Char(c @ '1'..='9') => assessment.select(c as usize - '0' as usize),
            KeyCode::Char('p') | KeyCode::Backspace => assessment.previous().map(|_| ()),
            KeyCode::Enter | KeyCode::Char(' ') => match assessment.advance() {
                Ok(Step::Complete(summary)) => {
                    info!(
                        correct = summary.correct_answers,
                        total = summary.total_questions,
                        risk = %summary.risk_level,
                        "assessment complete"
                    );
                    let request = Request::SaveResult {
                        user_id: self.user.id,
                        assessment: summary.clone(),
                    };
                    quiz.submission = Submission::Submitting;
                    return Some(request);
                }
                Ok(_) => Ok(()),
                Err(err) => Err(err),
            },
            KeyCode::Esc => {
                debug!("assessment abandoned");
                self.go_home();
                return None;
            }
            _ => Ok(()),
        };

        if let Err(err) = outcome {
            debug!(%err, ?key, "ignored quiz key");
        }
        None
    }

    fn handle_results_key(&mut self, key: KeyCode) -> Option<Request> {
        let Screen::Results { scroll, .. } = &mut self.screen else {
            return None;
        };

        match key {
            KeyCode::Down | KeyCode::Char('j') => *scroll = scroll.saturating_add(1),
            KeyCode::Up | KeyCode::Char('k') => *scroll = scroll.saturating_sub(1),
            KeyCode::Enter | KeyCode::Esc => self.go_home(),
            KeyCode::Char('h') | KeyCode::Char('H') => return Some(self.open_history()),
            _ => {}
        }
        None
    }

    fn handle_history_key(&mut self, key: KeyCode) -> Option<Request> {
        if key == KeyCode::Esc {
            self.go_home();
            return None;
        }

        if let Screen::History(HistoryView::Loaded { results, scroll }) = &mut self.screen {
            match key {
                KeyCode::Down | KeyCode::Char('j') if *scroll + 1 < results.len() => *scroll += 1,
                KeyCode::Up | KeyCode::Char('k') => *scroll = scroll.saturating_sub(1),
                _ => {}
            }
        }
        None
    }

    fn questions_loaded(&mut self, age_group: AgeGroup, result: Result<Vec<Question>, String>) {
        match &self.screen {
            Screen::LoadingQuestions { age_group: waiting } if *waiting == age_group => {}
            _ => {
                debug!(%age_group, "dropping stale question response");
                return;
            }
        }

        self.screen = match result {
            Ok(questions) => match Assessment::new(age_group, questions) {
                Some(assessment) => Screen::Quiz(QuizScreen {
                    assessment,
                    submission: Submission::Idle,
                }),
                None => Screen::NoQuestions { age_group },
            },
            Err(detail) => Screen::Failure {
                message: Text::FetchFailed,
                detail,
            },
        };
    }

    fn result_saved(&mut self, result: Result<AssessmentResult, String>) {
        let Screen::Quiz(quiz) = &mut self.screen else {
            debug!("dropping stale save response");
            return;
        };
        if !quiz.assessment.is_complete() || quiz.submission != Submission::Submitting {
            debug!("dropping stale save response");
            return;
        }

        match result {
            Ok(saved) => {
                self.screen = Screen::Results {
                    result: saved,
                    scroll: 0,
                }
            }
            Err(err) => quiz.submission = Submission::Failed(err),
        }
    }

    fn history_loaded(&mut self, result: Result<Vec<AssessmentResult>, String>) {
        if !matches!(self.screen, Screen::History(HistoryView::Loading)) {
            debug!("dropping stale history response");
            return;
        }

        self.screen = match result {
            Ok(results) => Screen::History(HistoryView::Loaded { results, scroll: 0 }),
            Err(detail) => Screen::Failure {
                message: Text::HistoryFailed,
                detail,
            },
        };
    }

    fn profile_saved(&mut self, result: Result<User, String>) {
        let Screen::ProfileCompletion(form) = &mut self.screen else {
            return;
        };

        match result {
            Ok(user) => {
                self.user = user;
                self.notice = Some(Text::ProfileUpdated);
                self.go_home();
            }
            Err(err) => {
                form.saving = false;
                form.error = Some(err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewAssessment, Profile, RiskLevel};
    use crate::scoring::tests::question;

    fn profile() -> Profile {
        Profile {
            name: "Asha".to_string(),
            phone: "9876543210".to_string(),
            age: 30,
            state: "Telangana".to_string(),
            district: "Warangal".to_string(),
        }
    }

    fn ready_app() -> App {
        let mut user = User::new("asha");
        user.profile = Some(profile());
        App::new(user, None)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            assert_eq!(app.handle_key(KeyCode::Char(c)), None);
        }
    }

    fn quiz_app(count: usize) -> App {
        let mut app = ready_app();
        app.handle_key(KeyCode::Char('3'));
        let request = app.handle_key(KeyCode::Enter);
        assert_eq!(
            request,
            Some(Request::FetchQuestions {
                age_group: AgeGroup::Adults
            })
        );
        app.apply(Response::Questions {
            age_group: AgeGroup::Adults,
            result: Ok((0..count).map(|_| question(None, "Courier Scam", 1)).collect()),
        });
        app
    }

    fn saved(app: &App, summary: NewAssessment) -> AssessmentResult {
        AssessmentResult::from_new(app.user().id, summary, chrono::Utc::now())
    }

    #[test]
    fn incomplete_profile_starts_on_form() {
        let app = App::new(User::new("new"), None);
        assert!(matches!(app.screen, Screen::ProfileCompletion(_)));
        assert!(matches!(ready_app().screen, Screen::AgeSelection { selected: 0 }));
    }

    #[test]
    fn profile_form_validates_then_requests_save() {
        let mut app = App::new(User::new("new"), None);

        // q is text here, not quit
        type_text(&mut app, "qasim");
        assert!(!app.should_quit);

        assert_eq!(app.handle_key(KeyCode::Enter), None);
        let Screen::ProfileCompletion(form) = &app.screen else {
            panic!("left the form");
        };
        assert_eq!(form.error.as_deref(), Some("phone is required"));

        for value in ["9876543210", "40", "Telangana", "Warangal"] {
            app.handle_key(KeyCode::Tab);
            type_text(&mut app, value);
        }
        let Some(Request::SaveProfile { profile, .. }) = app.handle_key(KeyCode::Enter) else {
            panic!("expected a profile save");
        };
        assert_eq!(profile.name, "qasim");
        assert_eq!(profile.age, 40);

        let mut user = app.user().clone();
        user.profile = Some(profile);
        app.apply(Response::ProfileSaved(Ok(user)));
        assert!(matches!(app.screen, Screen::AgeSelection { .. }));
        assert_eq!(app.notice(), Some(Text::ProfileUpdated));
    }

    #[test]
    fn empty_set_shows_no_questions() {
        let mut app = ready_app();
        app.handle_key(KeyCode::Enter);
        app.apply(Response::Questions {
            age_group: AgeGroup::Teens,
            result: Ok(Vec::new()),
        });
        assert!(matches!(
            app.screen,
            Screen::NoQuestions {
                age_group: AgeGroup::Teens
            }
        ));
    }

    #[test]
    fn fetch_failure_shows_failure_and_esc_returns() {
        let mut app = ready_app();
        app.handle_key(KeyCode::Enter);
        app.apply(Response::Questions {
            age_group: AgeGroup::Teens,
            result: Err("offline".to_string()),
        });
        assert!(matches!(
            app.screen,
            Screen::Failure {
                message: Text::FetchFailed,
                ..
            }
        ));
        app.handle_key(KeyCode::Esc);
        assert!(matches!(app.screen, Screen::AgeSelection { .. }));
    }

    #[test]
    fn abandoned_fetch_ignores_late_response() {
        let mut app = ready_app();
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Esc);
        app.apply(Response::Questions {
            age_group: AgeGroup::Teens,
            result: Ok(vec![question(None, "Romance", 1)]),
        });
        assert!(matches!(app.screen, Screen::AgeSelection { .. }));
    }

    #[test]
    fn enter_without_selection_does_nothing() {
        let mut app = quiz_app(2);
        assert_eq!(app.handle_key(KeyCode::Enter), None);
        let Screen::Quiz(quiz) = &app.screen else {
            panic!("not on quiz");
        };
        assert_eq!(quiz.assessment.step(), &Step::AwaitingAnswer { index: 0 });
    }

    #[test]
    fn navigation_wraps_over_options() {
        let mut app = quiz_app(1);
        app.handle_key(KeyCode::Char('k'));
        let Screen::Quiz(quiz) = &app.screen else {
            panic!("not on quiz");
        };
        assert_eq!(quiz.assessment.pending_choice(), Some(4));

        app.handle_key(KeyCode::Char('j'));
        let Screen::Quiz(quiz) = &app.screen else {
            panic!("not on quiz");
        };
        assert_eq!(quiz.assessment.pending_choice(), Some(1));
    }

    #[test]
    fn completing_requests_one_save_and_shows_results() {
        let mut app = quiz_app(2);
        app.handle_key(KeyCode::Char('1'));
        assert_eq!(app.handle_key(KeyCode::Enter), None);
        app.handle_key(KeyCode::Char('2'));

        let Some(Request::SaveResult { assessment, .. }) = app.handle_key(KeyCode::Enter) else {
            panic!("expected a save");
        };
        assert_eq!(assessment.correct_answers, 1);
        assert_eq!(assessment.risk_level, RiskLevel::High);

        // Further keys on the completed quiz don't resubmit.
        assert_eq!(app.handle_key(KeyCode::Enter), None);
        assert_eq!(app.handle_key(KeyCode::Char('r')), None);

        let result = saved(&app, assessment);
        app.apply(Response::Saved(Ok(result.clone())));
        let Screen::Results { result: shown, .. } = &app.screen else {
            panic!("not on results");
        };
        assert_eq!(shown, &result);
    }

    #[test]
    fn failed_save_keeps_answers_and_retries_on_request() {
        let mut app = quiz_app(1);
        app.handle_key(KeyCode::Char('1'));
        let Some(Request::SaveResult { assessment, .. }) = app.handle_key(KeyCode::Enter) else {
            panic!("expected a save");
        };

        app.apply(Response::Saved(Err("disk full".to_string())));
        let Screen::Quiz(quiz) = &app.screen else {
            panic!("left the quiz");
        };
        assert_eq!(quiz.submission, Submission::Failed("disk full".to_string()));
        assert_eq!(quiz.assessment.answers(), &[1]);

        let retry = app.handle_key(KeyCode::Char('r'));
        assert_eq!(
            retry,
            Some(Request::SaveResult {
                user_id: app.user().id,
                assessment,
            })
        );
    }

    #[test]
    fn history_loads_and_scrolls() {
        let mut app = ready_app();
        assert!(matches!(
            app.handle_key(KeyCode::Char('h')),
            Some(Request::FetchHistory { .. })
        ));
        app.apply(Response::History(Ok(Vec::new())));
        assert!(matches!(
            app.screen,
            Screen::History(HistoryView::Loaded { .. })
        ));
        app.handle_key(KeyCode::Char('j'));
        app.handle_key(KeyCode::Esc);
        assert!(matches!(app.screen, Screen::AgeSelection { .. }));
    }

    #[test]
    fn locale_cycles_and_override_wins() {
        let mut user = User::new("asha");
        user.profile = Some(profile());
        user.locale = Locale::Hi;

        assert_eq!(App::new(user.clone(), None).locale(), Locale::Hi);
        let mut app = App::new(user, Some(Locale::Ur));
        assert_eq!(app.locale(), Locale::Ur);

        let request = app.handle_key(KeyCode::Char('l'));
        assert_eq!(app.locale(), Locale::En);
        assert!(matches!(
            request,
            Some(Request::SaveLocale {
                locale: Locale::En,
                ..
            })
        ));
    }

    #[test]
    fn q_quits_outside_text_input() {
        let mut app = ready_app();
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
