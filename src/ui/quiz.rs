use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::app::{App, QuizScreen, Submission};
use crate::i18n::{Text, theme_name, tr};
use crate::models::Question;

pub fn render(frame: &mut Frame, area: Rect, app: &App, quiz: &QuizScreen) {
    let assessment = &quiz.assessment;
    let Some(question) = assessment.current_question() else {
        render_submission(frame, area, app, &quiz.submission);
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    let index = assessment.current_index().unwrap_or(0);
    render_progress(frame, chunks[0], app, question, index, assessment.total_questions());

    let ratio = index as f64 / assessment.total_questions() as f64;
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .ratio(ratio)
        .label("");
    frame.render_widget(gauge, chunks[1]);

    render_scenario(frame, chunks[2], question);
    render_options(
        frame,
        chunks[3],
        app,
        question,
        assessment.pending_choice(),
        assessment.is_last_question(),
    );

    super::render_controls(frame, chunks[4], app, Text::HintQuiz);
}

fn render_progress(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    question: &Question,
    index: usize,
    total: usize,
) {
    let chunks = Layout::horizontal([Constraint::Fill(1), Constraint::Length(12)]).split(area);

    let theme = Line::from(vec![
        Span::styled(
            theme_name(app.locale(), &question.theme).into_owned(),
            Style::default().fg(Color::Yellow).bold(),
        ),
        Span::styled(
            format!(
                "  ·  {} {}",
                tr(app.locale(), Text::Scenario),
                question.scenario_number
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(theme), chunks[0]);

    let progress = Paragraph::new(format!("{}/{}", index + 1, total))
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(progress, chunks[1]);
}

fn render_scenario(frame: &mut Frame, area: Rect, question: &Question) {
    let content = vec![
        Line::from(Span::styled(
            question.scenario_title.as_str(),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
        Line::from(question.scenario_description.as_str().fg(Color::Gray)),
    ];

    let widget = Paragraph::new(content).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    question: &Question,
    selected: Option<usize>,
    is_last: bool,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(question.option_count() * 2 + 2);
    lines.push(Line::from(Span::styled(
        tr(app.locale(), Text::WhatWouldYouDo),
        Style::default().fg(Color::Cyan),
    )));
    lines.push(Line::from(""));

    for (index, option) in question.options.iter().enumerate() {
        let choice = index + 1;
        let is_selected = selected == Some(choice);
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {marker} "), style),
            Span::styled(format!("{choice}. "), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    if selected.is_some() {
        let next = if is_last {
            Text::CompleteAssessment
        } else {
            Text::NextQuestion
        };
        lines.push(Line::from(Span::styled(
            format!("   [enter] {}", tr(app.locale(), next)),
            Style::default().fg(Color::Green),
        )));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().padding(Padding::top(1)));
    frame.render_widget(widget, area);
}

fn render_submission(frame: &mut Frame, area: Rect, app: &App, submission: &Submission) {
    let locale = app.locale();
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    let mut content = vec![
        Line::from(Span::styled(
            tr(locale, Text::AssessmentComplete),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
    ];

    match submission {
        Submission::Failed(err) => {
            content.push(Line::from(Span::styled(
                tr(locale, Text::SaveFailed),
                Style::default().fg(Color::Red).bold(),
            )));
            content.push(Line::from(err.as_str().fg(Color::DarkGray)));
            super::render_controls(frame, chunks[3], app, Text::HintSaveFailed);
        }
        Submission::Submitting | Submission::Idle => {
            content.push(Line::from(tr(locale, Text::Submitting).fg(Color::Yellow)));
        }
    }

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, chunks[1]);
}
