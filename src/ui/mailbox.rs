use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::status_bar::status_bar;
use super::theme::{Theme, symbols};
use super::widgets::{Hint, fit_width, help_bar, hint, sanitize_text};
use crate::app::state::AppState;
use crate::constants::SCROLL_TARGET_FRACTION;
use crate::mail::types::{EmailSummary, MailboxName};

const HINTS: [Hint; 7] = [
    hint("j/k", "↑/↓", "move"),
    hint("Enter", "Enter", "open"),
    hint("1/2/3", "F1/F2/F3", "mailbox"),
    hint("c", "^N", "compose"),
    hint("h/l", "Alt+←/→", "back/fwd"),
    hint("^L", "F5", "refresh"),
    hint("q", "^Q", "quit"),
];

/// Width of the sender column
const SENDER_WIDTH: usize = 28;
/// Width of the timestamp column
const DATE_WIDTH: usize = 22;

pub fn render_mailbox(frame: &mut Frame, state: &AppState, mailbox: MailboxName) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status bar
            Constraint::Min(0),    // Email list
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    status_bar(frame, chunks[0], state);
    render_list(frame, chunks[1], state, mailbox);
    help_bar(frame, chunks[2], state, &HINTS);
}

fn render_list(frame: &mut Frame, area: Rect, state: &AppState, mailbox: MailboxName) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border_focused())
        .title(Span::styled(format!(" {} ", mailbox.title()), Theme::title()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let emails = &state.mailbox.emails;
    if emails.is_empty() {
        let text = if state.mailbox.loading {
            "Loading..."
        } else {
            "No emails"
        };
        frame.render_widget(Paragraph::new(text).style(Theme::text_muted()), inner);
        return;
    }

    let visible = inner.height as usize;
    let offset = scroll_offset(state.mailbox.selected, emails.len(), visible);
    let width = inner.width as usize;

    let items: Vec<ListItem> = emails
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(i, email)| email_row(email, i == state.mailbox.selected, width))
        .collect();

    frame.render_widget(List::new(items), inner);
}

/// First visible row so the selection sits near the top third
fn scroll_offset(selected: usize, total: usize, visible: usize) -> usize {
    if visible == 0 {
        return 0;
    }
    let target = visible / SCROLL_TARGET_FRACTION;
    selected
        .saturating_sub(target)
        .min(total.saturating_sub(visible))
}

fn row_style(read: bool, selected: bool) -> Style {
    let base = if read {
        Theme::row_read()
    } else {
        Theme::row_unread()
    };
    if selected {
        base.patch(Theme::selected())
    } else {
        base
    }
}

fn email_row(email: &EmailSummary, selected: bool, width: usize) -> ListItem<'static> {
    let style = row_style(email.read, selected);

    let marker = if email.read {
        symbols::READ
    } else {
        symbols::UNREAD
    };
    // marker + spaces between columns
    let subject_width = width.saturating_sub(SENDER_WIDTH + DATE_WIDTH + 6);

    let line = Line::from(vec![
        Span::styled(format!(" {} ", marker), style),
        Span::styled(fit_width(&sanitize_text(&email.sender), SENDER_WIDTH), style),
        Span::styled(" ", style),
        Span::styled(
            fit_width(&sanitize_text(&email.subject), subject_width),
            style,
        ),
        Span::styled(" ", style),
        Span::styled(fit_width(&email.timestamp, DATE_WIDTH), style),
    ]);

    ListItem::new(line).style(style)
}
