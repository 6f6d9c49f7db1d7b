//! Common UI widgets and utilities

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme::Theme;
use crate::app::state::AppState;
use crate::config::KeybindingMode;

pub fn error_bar(frame: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(format!(" Error: {} ", message)).style(Theme::error_bar());
    frame.render_widget(paragraph, area);
}

/// Key/description pair; the key differs per binding mode
pub struct Hint {
    pub vim: &'static str,
    pub arrows: &'static str,
    pub desc: &'static str,
}

pub const fn hint(vim: &'static str, arrows: &'static str, desc: &'static str) -> Hint {
    Hint { vim, arrows, desc }
}

pub fn help_bar(frame: &mut Frame, area: Rect, state: &AppState, hints: &[Hint]) {
    let pairs: Vec<(&str, &str)> = hints
        .iter()
        .map(|h| match state.keys {
            KeybindingMode::Vim => (h.vim, h.desc),
            KeybindingMode::Arrows => (h.arrows, h.desc),
        })
        .collect();

    let shown = fitting_hints(&pairs, area.width as usize);

    let mut spans: Vec<Span> = Vec::new();
    for (i, (key, desc)) in pairs.iter().take(shown).enumerate() {
        spans.push(Span::styled(format!(" {} ", key), Theme::help_key()));
        spans.push(Span::styled(desc.to_string(), Theme::help_desc()));
        if i + 1 < shown {
            spans.push(Span::styled(" │ ", Theme::text_muted()));
        }
    }
    spans.push(Span::styled(" ", Theme::text_muted()));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// How many hints fit in `width` columns (at least one if any exist)
fn fitting_hints(hints: &[(&str, &str)], width: usize) -> usize {
    let mut total = 0;
    let mut count = 0;
    for (i, (key, desc)) in hints.iter().enumerate() {
        let separator = if i + 1 < hints.len() { 3 } else { 1 };
        let needed = key.width() + 2 + desc.width() + separator;
        if total + needed > width {
            break;
        }
        total += needed;
        count += 1;
    }
    count.max(1).min(hints.len())
}

/// Truncate to a display width, appending "..." when cut
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width < 4 {
        return s.chars().take(max_width).collect();
    }

    let mut width = 0;
    let mut result = String::new();
    for c in s.chars() {
        let char_width = c.width().unwrap_or(1);
        if width + char_width > max_width - 3 {
            break;
        }
        width += char_width;
        result.push(c);
    }
    result.push_str("...");
    result
}

/// Pad or cut to exactly `width` columns
pub fn fit_width(s: &str, width: usize) -> String {
    let cut = truncate_to_width(s, width);
    let pad = width.saturating_sub(cut.width());
    format!("{}{}", cut, " ".repeat(pad))
}

/// Sanitize text for display: remove control characters and ANSI escape sequences
pub fn sanitize_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // Skip until the final letter of the sequence
            for ch in chars.by_ref() {
                if ch.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        if c.is_control() && c != '\n' && c != '\t' {
            result.push(' ');
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello world", 8), "hello...");
        assert_eq!(truncate_to_width("hello", 2), "he");
    }

    #[test]
    fn test_fit_width_pads() {
        assert_eq!(fit_width("ab", 5), "ab   ");
        assert_eq!(fit_width("abcdefgh", 6), "abc...");
    }

    #[test]
    fn test_sanitize_text() {
        assert_eq!(sanitize_text("a\x1b[31mred\x1b[0m"), "ared");
        assert_eq!(sanitize_text("tab\tok\nline\x07"), "tab\tok\nline ");
    }

    #[test]
    fn test_fitting_hints() {
        let hints = [("j", "down"), ("k", "up"), ("q", "quit")];
        assert_eq!(fitting_hints(&hints, 200), 3);
        assert_eq!(fitting_hints(&hints, 10), 1);
        assert_eq!(fitting_hints(&[], 10), 0);
    }
}
