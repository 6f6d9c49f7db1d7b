//! Status bar: active page, history position, request indicator and server

use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use super::theme::{Theme, symbols};
use super::widgets::truncate_to_width;
use crate::app::state::AppState;
use crate::constants::SPINNER_FRAME_MS;

pub fn status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let style = Theme::status_bar();
    let width = area.width as usize;

    let indicator = if state.is_loading() {
        format!(" {} ", spinner_char())
    } else {
        "   ".to_string()
    };
    let label = format!("{} ", state.nav.label());
    let history = history_marker(state);

    let message = if state.status.message.is_empty() {
        String::new()
    } else {
        format!("{} │ ", state.status.message)
    };

    let left_width = indicator.width() + label.width() + history.width();
    let available = width.saturating_sub(left_width + message.width() + 2);
    let server = truncate_to_width(&state.server, available.max(10));
    let right_width = message.width() + server.width() + 1;
    let padding = " ".repeat(width.saturating_sub(left_width + right_width));

    let spans = vec![
        Span::styled(indicator, style),
        Span::styled(label, style.add_modifier(Modifier::BOLD)),
        Span::styled(history, style),
        Span::styled(padding, style),
        Span::styled(message, style),
        Span::styled(format!("{} ", server), style),
    ];

    frame.render_widget(Paragraph::new(Line::from(spans)).style(style), area);
}

/// e.g. "◀ 3/5 ▶", with arrows only where movement is possible
fn history_marker(state: &AppState) -> String {
    let info = state.history;
    if info.len == 0 {
        return String::new();
    }
    let back = if info.can_go_back { symbols::BACK } else { " " };
    let forward = if info.can_go_forward {
        symbols::FORWARD
    } else {
        " "
    };
    format!("{} {}/{} {}", back, info.position, info.len, forward)
}

/// Get an animated spinner character for loading states
pub fn spinner_char() -> char {
    const FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
    let millis = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    FRAMES[(millis / SPINNER_FRAME_MS) as usize % FRAMES.len()]
}
