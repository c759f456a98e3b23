use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::i18n::{Text, tr};
use crate::models::AgeGroup;

pub fn render(frame: &mut Frame, area: Rect, app: &App, selected: usize) {
    let locale = app.locale();
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    if let Some(notice) = app.notice() {
        let widget = Paragraph::new(tr(locale, notice))
            .alignment(Alignment::Center)
            .fg(Color::Green);
        frame.render_widget(widget, chunks[0]);
    }

    let intro = vec![
        Line::from(Span::styled(
            tr(locale, Text::ChooseYourAgeGroup),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(tr(locale, Text::SelectAgeGroupToStart).fg(Color::Gray)),
    ];
    let widget = Paragraph::new(intro)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, chunks[1]);

    let cards = Layout::horizontal([Constraint::Ratio(1, 4); 4])
        .spacing(1)
        .split(chunks[2]);
    for (index, group) in AgeGroup::ALL.iter().enumerate() {
        render_card(frame, cards[index], app, *group, index == selected);
    }

    super::render_controls(frame, chunks[3], app, Text::HintAgeSelection);
}

fn render_card(frame: &mut Frame, area: Rect, app: &App, group: AgeGroup, selected: bool) {
    let locale = app.locale();
    let accent = if selected { Color::Cyan } else { Color::DarkGray };

    let mut lines = vec![
        Line::from(Span::styled(
            tr(locale, group.title()),
            Style::default().fg(if selected { Color::Cyan } else { Color::White }).bold(),
        )),
        Line::from(Span::styled(
            format!("{} {}", group.key(), tr(locale, Text::Years)),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(tr(locale, Text::AssessmentIncludes).fg(Color::DarkGray)),
    ];
    lines.extend(
        group
            .featured_scenarios()
            .iter()
            .map(|scenario| Line::from(Span::styled(format!("  · {scenario}"), Style::default().fg(Color::Gray)))),
    );
    lines.push(Line::from(""));
    if selected {
        lines.push(Line::from(Span::styled(
            format!("[{}]", tr(locale, Text::StartAssessment)),
            Style::default().fg(Color::Cyan).bold(),
        )));
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(accent)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}
