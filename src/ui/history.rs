use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use super::risk_color;
use crate::app::{App, HistoryView};
use crate::i18n::{Text, tr};

pub fn render(frame: &mut Frame, area: Rect, app: &App, view: &HistoryView) {
    let locale = app.locale();
    let chunks = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {} ", tr(locale, Text::AssessmentHistory)))
        .title_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    let widget = match view {
        HistoryView::Loading => {
            Paragraph::new(tr(locale, Text::Loading).fg(Color::Yellow)).block(block)
        }
        HistoryView::Loaded { results, .. } if results.is_empty() => {
            Paragraph::new(tr(locale, Text::NoAssessmentsYet).fg(Color::DarkGray)).block(block)
        }
        HistoryView::Loaded { results, scroll } => {
            let lines: Vec<Line> = results
                .iter()
                .enumerate()
                .map(|(index, result)| {
                    let color = risk_color(result.risk_level);
                    Line::from(vec![
                        Span::styled(
                            format!("{:>3}. ", index + 1),
                            Style::default().fg(Color::DarkGray),
                        ),
                        Span::styled(
                            result.completed_at.format("%Y-%m-%d %H:%M  ").to_string(),
                            Style::default().fg(Color::DarkGray),
                        ),
                        Span::styled(
                            format!("{:<8}", result.age_group.key()),
                            Style::default().fg(Color::Gray),
                        ),
                        Span::styled(
                            format!(
                                "{} {}/{} ({:.0}%)  ",
                                tr(locale, Text::Score),
                                result.correct_answers,
                                result.total_questions,
                                result.score_percentage
                            ),
                            Style::default().fg(Color::White),
                        ),
                        Span::styled(
                            tr(locale, result.risk_level.label()),
                            Style::default().fg(color).bold(),
                        ),
                    ])
                })
                .collect();

            Paragraph::new(lines)
                .block(block)
                .scroll(((*scroll).min(u16::MAX as usize) as u16, 0))
        }
    };
    frame.render_widget(widget, chunks[0]);

    super::render_controls(frame, chunks[1], app, Text::HintHistory);
}
