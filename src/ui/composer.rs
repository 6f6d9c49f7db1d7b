use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::status_bar::status_bar;
use super::theme::Theme;
use super::widgets::{Hint, error_bar, help_bar, hint};
use crate::app::state::{AppState, ComposerField};

const HINTS: [Hint; 3] = [
    hint("Tab", "Tab", "next field"),
    hint("^S", "^S", "send"),
    hint("Esc", "Esc", "back"),
];

pub fn render_composer(frame: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status bar
            Constraint::Length(3), // Recipients
            Constraint::Length(3), // Subject
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Error region or help bar
        ])
        .split(frame.area());

    status_bar(frame, chunks[0], state);

    let compose = &state.compose;
    let draft = &compose.draft;

    render_field(
        frame,
        chunks[1],
        "To (comma separated)",
        &draft.recipients,
        compose.field == ComposerField::Recipients,
    );
    render_field(
        frame,
        chunks[2],
        "Subject",
        &draft.subject,
        compose.field == ComposerField::Subject,
    );
    render_body_field(
        frame,
        chunks[3],
        &draft.body,
        compose.field == ComposerField::Body,
    );

    // The error region is only shown while a rejection is outstanding
    match compose.error {
        Some(ref error) => error_bar(frame, chunks[4], error),
        None if compose.sending => frame.render_widget(
            Paragraph::new(" Sending...").style(Theme::text_muted()),
            chunks[4],
        ),
        None => help_bar(frame, chunks[4], state, &HINTS),
    }
}

fn border_style(focused: bool) -> ratatui::style::Style {
    if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    }
}

fn field_text(value: &str, focused: bool) -> (String, ratatui::style::Style) {
    if focused {
        (format!("{}│", value), Theme::text())
    } else {
        (value.to_string(), Theme::text_secondary())
    }
}

fn render_field(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(focused))
        .title(format!(" {} ", label));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (text, style) = field_text(value, focused);
    frame.render_widget(Paragraph::new(text).style(style), inner);
}

fn render_body_field(frame: &mut Frame, area: Rect, body: &str, focused: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(focused))
        .title(" Body ");

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (text, style) = field_text(body, focused);

    // Keep the cursor line in view for long bodies
    let lines = text.lines().count() + usize::from(text.ends_with('\n'));
    let overflow = lines.saturating_sub(inner.height as usize);

    let paragraph = Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: false })
        .scroll((overflow.min(u16::MAX as usize) as u16, 0));
    frame.render_widget(paragraph, inner);
}
