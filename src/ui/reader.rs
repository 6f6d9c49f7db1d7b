use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::status_bar::status_bar;
use super::theme::Theme;
use super::widgets::{Hint, help_bar, hint, sanitize_text};
use crate::app::state::{AppState, ReaderState};
use crate::mail::types::EmailDetail;

const HINTS: [Hint; 5] = [
    hint("j/k", "↑/↓", "scroll"),
    hint("r", "^R", "reply"),
    hint("a", "^A", "archive"),
    hint("h/l", "Alt+←/→", "back/fwd"),
    hint("q", "^Q", "quit"),
];

/// Same as `HINTS` without the archive control
const SENT_HINTS: [Hint; 4] = [
    hint("j/k", "↑/↓", "scroll"),
    hint("r", "^R", "reply"),
    hint("h/l", "Alt+←/→", "back/fwd"),
    hint("q", "^Q", "quit"),
];

pub fn render_reader(frame: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status bar
            Constraint::Length(5), // Headers
            Constraint::Length(1), // Controls
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    status_bar(frame, chunks[0], state);

    let reader = &state.reader;
    match reader.email {
        Some(ref email) => {
            render_headers(frame, chunks[1], email);
            render_controls(frame, chunks[2], reader, email);
            render_body(frame, chunks[3], reader, email);
        }
        None => {
            let text = if reader.loading {
                "Loading..."
            } else {
                "Email could not be loaded"
            };
            frame.render_widget(Paragraph::new(text).style(Theme::text_muted()), chunks[1]);
        }
    }

    let hints: &[Hint] = if reader.shows_archive() {
        &HINTS
    } else {
        &SENT_HINTS
    };
    help_bar(frame, chunks[4], state, hints);
}

fn render_headers(frame: &mut Frame, area: Rect, email: &EmailDetail) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Theme::border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label_style = Theme::label();
    let value_style = Theme::text();

    let lines = vec![
        Line::from(vec![
            Span::styled("From:    ", label_style),
            Span::styled(sanitize_text(&email.sender), value_style),
        ]),
        Line::from(vec![
            Span::styled("To:      ", label_style),
            Span::styled(sanitize_text(&email.recipients_display()), value_style),
        ]),
        Line::from(vec![
            Span::styled("Subject: ", label_style),
            Span::styled(sanitize_text(&email.subject), Theme::row_unread()),
        ]),
        Line::from(vec![
            Span::styled("Date:    ", label_style),
            Span::styled(email.timestamp.clone(), value_style),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_controls(frame: &mut Frame, area: Rect, reader: &ReaderState, email: &EmailDetail) {
    let mut spans = vec![Span::raw(" "), Span::styled(" Reply ", Theme::control())];
    if reader.shows_archive() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!(" {} ", email.archive_label()),
            Theme::control(),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_body(frame: &mut Frame, area: Rect, reader: &ReaderState, email: &EmailDetail) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = Paragraph::new(Text::raw(sanitize_text(&email.body)))
        .style(Theme::text())
        .wrap(Wrap { trim: false })
        .scroll((reader.scroll.min(u16::MAX as usize) as u16, 0));

    frame.render_widget(paragraph, inner);
}
