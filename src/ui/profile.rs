use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::{App, PROFILE_FIELDS, ProfileForm};
use crate::i18n::{Text, tr};

const LABEL_WIDTH: usize = 14;

pub fn render(frame: &mut Frame, area: Rect, app: &App, form: &ProfileForm) {
    let locale = app.locale();
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(16),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    let mut content = vec![
        Line::from(Span::styled(
            tr(locale, Text::CompleteProfile),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(tr(locale, Text::ProfileIntro).fg(Color::DarkGray)),
        Line::from(""),
    ];

    for (index, label) in PROFILE_FIELDS.iter().enumerate() {
        let active = index == form.field;
        let label_style = if active {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if active { ">" } else { " " };

        let mut spans = vec![
            Span::styled(format!(" {marker} "), label_style),
            Span::styled(
                format!("{:<LABEL_WIDTH$}", tr(locale, *label)),
                label_style,
            ),
            Span::styled(form.value(index).to_string(), Style::default().fg(Color::Yellow)),
        ];
        if active && !form.saving {
            spans.push(Span::styled("_", Style::default().fg(Color::Yellow)));
        }
        content.push(Line::from(spans));
        content.push(Line::from(""));
    }

    if form.saving {
        content.push(Line::from(tr(locale, Text::Loading).fg(Color::Yellow)));
    } else if let Some(err) = &form.error {
        content.push(Line::from(err.as_str().fg(Color::Red)));
    }

    let widget = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(2)),
    );
    let [_, form_area, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(64),
        Constraint::Fill(1),
    ])
    .areas(chunks[1]);
    frame.render_widget(widget, form_area);

    super::render_controls(frame, chunks[3], app, Text::HintProfile);
}
