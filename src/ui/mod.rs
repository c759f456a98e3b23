mod age_select;
mod history;
mod profile;
mod quiz;
mod results;
mod status;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::{App, Screen};
use crate::i18n::{Text, tr};
use crate::models::RiskLevel;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Fill(1)])
        .margin(1)
        .split(area);

    render_header(frame, chunks[0], app);

    let body = chunks[1];
    match &app.screen {
        Screen::ProfileCompletion(form) => profile::render(frame, body, app, form),
        Screen::AgeSelection { selected } => age_select::render(frame, body, app, *selected),
        Screen::LoadingQuestions { .. } => status::render_loading(frame, body, app),
        Screen::NoQuestions { .. } => status::render_no_questions(frame, body, app),
        Screen::Failure { message, detail } => {
            status::render_failure(frame, body, app, *message, detail)
        }
        Screen::Quiz(quiz) => quiz::render(frame, body, app, quiz),
        Screen::Results { result, scroll } => results::render(frame, body, app, result, *scroll),
        Screen::History(view) => history::render(frame, body, app, view),
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let locale = app.locale();
    let chunks = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    let title = Line::from(vec![
        Span::styled("CYREX", Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!("  {}", tr(locale, Text::CybersecurityAssessmentPlatform)),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), chunks[0]);

    let who = Line::from(vec![
        Span::styled(
            format!("{} {}  ·  ", tr(locale, Text::SignedInAs), app.user().username),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(locale.native_name(), Style::default().fg(Color::Yellow)),
    ]);
    frame.render_widget(Paragraph::new(who).alignment(Alignment::Right), chunks[1]);
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App, hint: Text) {
    let widget = Paragraph::new(tr(app.locale(), hint))
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn risk_color(risk: RiskLevel) -> Color {
    match risk {
        RiskLevel::Low => Color::Green,
        RiskLevel::Medium => Color::Yellow,
        RiskLevel::High => Color::LightRed,
        RiskLevel::Critical => Color::Red,
    }
}
