use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use super::risk_color;
use crate::app::App;
use crate::i18n::{Locale, Text, theme_name, tr};
use crate::models::{AssessmentResult, ScamResult};
use crate::scoring::score_message;

pub fn render(frame: &mut Frame, area: Rect, app: &App, result: &AssessmentResult, scroll: usize) {
    let chunks = Layout::vertical([
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_score_summary(frame, chunks[0], app.locale(), result);
    render_details(frame, chunks[1], app.locale(), result, scroll);
    super::render_controls(frame, chunks[2], app, Text::HintResults);
}

fn render_score_summary(frame: &mut Frame, area: Rect, locale: Locale, result: &AssessmentResult) {
    let color = risk_color(result.risk_level);

    let content = vec![
        Line::from(Span::styled(
            tr(locale, Text::AssessmentComplete),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            format!(
                "{} {}",
                tr(locale, Text::CompletedOn),
                result.completed_at.format("%Y-%m-%d %H:%M UTC")
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} / {}  ({:.0}%)",
                result.correct_answers, result.total_questions, result.score_percentage
            ),
            Style::default().fg(color).bold(),
        )),
        Line::from(tr(locale, score_message(result.score_percentage)).fg(Color::Gray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_details(
    frame: &mut Frame,
    area: Rect,
    locale: Locale,
    result: &AssessmentResult,
    scroll: usize,
) {
    let risk = result.risk_level;
    let color = risk_color(risk);
    let label = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::from(Span::styled(
            tr(locale, risk.headline()),
            Style::default().fg(color).bold(),
        )),
        Line::from(tr(locale, risk.description()).fg(Color::Gray)),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{}: ", tr(locale, Text::CorrectAnswers)), label),
            Span::raw(result.correct_answers.to_string()),
            Span::styled(format!("    {}: ", tr(locale, Text::TotalQuestions)), label),
            Span::raw(result.total_questions.to_string()),
            Span::styled(format!("    {}: ", tr(locale, Text::RiskLevel)), label),
            Span::styled(tr(locale, risk.label()), Style::default().fg(color)),
        ]),
    ];

    if let Some(scams) = &result.scam_results {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            tr(locale, Text::ScamBreakdown),
            Style::default().fg(Color::Cyan),
        )));
        lines.extend(scams.iter().map(|scam| scam_line(locale, scam)));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        tr(locale, Text::Recommendations),
        Style::default().fg(Color::Cyan),
    )));
    lines.extend(
        risk.recommendations()
            .iter()
            .map(|text| Line::from(Span::styled(format!("  · {}", tr(locale, *text)), Style::default().fg(Color::Gray)))),
    );

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().padding(Padding::new(1, 1, 1, 0)))
        .scroll((scroll.min(u16::MAX as usize) as u16, 0));
    frame.render_widget(widget, area);
}

fn scam_line(locale: Locale, scam: &ScamResult) -> Line<'static> {
    let color = risk_color(scam.risk_level);
    Line::from(vec![
        Span::styled(
            format!("  {:>2}. ", scam.scam_number),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("{:<32}", theme_name(locale, &scam.theme)),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!(
                "{}/{}  {:>3.0}%  ",
                scam.correct_answers, scam.total_questions, scam.score_percentage
            ),
            Style::default().fg(color),
        ),
        Span::styled(tr(locale, scam.risk_level.label()), Style::default().fg(color)),
    ])
}
