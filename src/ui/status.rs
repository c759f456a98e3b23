//! Single-message screens: loading, nothing available, failure.

use ratatui::{prelude::*, widgets::Paragraph};

use crate::app::App;
use crate::i18n::{Text, tr};

pub fn render_loading(frame: &mut Frame, area: Rect, app: &App) {
    let content = vec![Line::from(Span::styled(
        tr(app.locale(), Text::LoadingAssessment),
        Style::default().fg(Color::Yellow),
    ))];
    render_centered(frame, area, app, content);
}

pub fn render_no_questions(frame: &mut Frame, area: Rect, app: &App) {
    let content = vec![Line::from(Span::styled(
        tr(app.locale(), Text::NoQuestionsAvailable),
        Style::default().fg(Color::Yellow).bold(),
    ))];
    render_centered(frame, area, app, content);
}

pub fn render_failure(frame: &mut Frame, area: Rect, app: &App, message: Text, detail: &str) {
    let content = vec![
        Line::from(Span::styled(
            tr(app.locale(), message),
            Style::default().fg(Color::Red).bold(),
        )),
        Line::from(""),
        Line::from(detail.fg(Color::DarkGray)),
    ];
    render_centered(frame, area, app, content);
}

fn render_centered(frame: &mut Frame, area: Rect, app: &App, content: Vec<Line>) {
    let chunks = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Length(content.len() as u16 + 2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    let widget = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(widget, chunks[1]);

    super::render_controls(frame, chunks[3], app, Text::HintBack);
}
