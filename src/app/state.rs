//! Application state types
//!
//! All state types live here to maintain clean dependency:
//! UI layer imports from app layer, not vice versa.

use crate::config::KeybindingMode;
use crate::mail::types::{ComposeDraft, EmailDetail, EmailId, EmailSummary, MailboxName};

/// Which panel is active and what it shows.
///
/// Exactly one is active at a time; panel visibility is derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationState {
    Mailbox {
        mailbox: MailboxName,
    },
    Compose {
        /// Seed the compose form was opened with
        draft: ComposeDraft,
    },
    EmailDetail {
        id: EmailId,
        /// Opened from the sent mailbox: archive control hidden
        from_sent: bool,
    },
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::Mailbox {
            mailbox: MailboxName::Inbox,
        }
    }
}

impl NavigationState {
    pub fn panel(&self) -> Panel {
        match self {
            Self::Mailbox { .. } => Panel::Mailbox,
            Self::Compose { .. } => Panel::Compose,
            Self::EmailDetail { .. } => Panel::EmailDetail,
        }
    }

    /// Short label for the status bar
    pub fn label(&self) -> String {
        match self {
            Self::Mailbox { mailbox } => mailbox.title().to_string(),
            Self::Compose { .. } => "Compose".to_string(),
            Self::EmailDetail { id, .. } => format!("Email #{}", id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Mailbox,
    Compose,
    EmailDetail,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ComposerField {
    #[default]
    Recipients,
    Subject,
    Body,
}

impl ComposerField {
    pub fn next(self) -> Self {
        match self {
            Self::Recipients => Self::Subject,
            Self::Subject => Self::Body,
            Self::Body => Self::Recipients,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Recipients => Self::Body,
            Self::Subject => Self::Recipients,
            Self::Body => Self::Subject,
        }
    }
}

/// Mailbox list panel
#[derive(Debug, Clone, Default)]
pub struct MailboxState {
    pub emails: Vec<EmailSummary>,
    pub selected: usize,
    pub loading: bool,
}

impl MailboxState {
    pub fn reset(&mut self) {
        self.emails.clear();
        self.selected = 0;
        self.loading = true;
    }

    pub fn selected_email(&self) -> Option<&EmailSummary> {
        self.emails.get(self.selected)
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.emails.len() {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_by(&mut self, delta: isize) {
        let last = self.emails.len().saturating_sub(1);
        self.selected = self.selected.saturating_add_signed(delta).min(last);
    }

    pub fn move_to_top(&mut self) {
        self.selected = 0;
    }

    pub fn move_to_bottom(&mut self) {
        self.selected = self.emails.len().saturating_sub(1);
    }
}

/// Compose form panel
#[derive(Debug, Clone, Default)]
pub struct ComposeState {
    /// Working copy being edited
    pub draft: ComposeDraft,
    pub field: ComposerField,
    /// Backend-reported error from the last submission
    pub error: Option<String>,
    pub sending: bool,
}

impl ComposeState {
    pub fn open(&mut self, draft: ComposeDraft) {
        // Replies start in the body, fresh drafts at the recipients
        self.field = if draft.recipients.is_empty() {
            ComposerField::Recipients
        } else {
            ComposerField::Body
        };
        self.draft = draft;
        self.error = None;
        self.sending = false;
    }

    fn field_mut(&mut self) -> &mut String {
        match self.field {
            ComposerField::Recipients => &mut self.draft.recipients,
            ComposerField::Subject => &mut self.draft.subject,
            ComposerField::Body => &mut self.draft.body,
        }
    }

    /// Type a character into the focused field.
    /// Newlines only land in the body; elsewhere they advance the focus.
    pub fn insert_char(&mut self, c: char) {
        if c == '\n' && self.field != ComposerField::Body {
            self.field = self.field.next();
            return;
        }
        self.field_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.field_mut().pop();
    }
}

/// Email detail panel
#[derive(Debug, Clone, Default)]
pub struct ReaderState {
    pub email: Option<EmailDetail>,
    pub from_sent: bool,
    pub scroll: usize,
    pub loading: bool,
    /// An archive toggle is in flight
    pub archiving: bool,
}

impl ReaderState {
    pub fn reset(&mut self, from_sent: bool) {
        self.email = None;
        self.from_sent = from_sent;
        self.scroll = 0;
        self.loading = true;
        self.archiving = false;
    }

    /// Whether the archive control is offered
    pub fn shows_archive(&self) -> bool {
        !self.from_sent && self.email.is_some()
    }

    /// Last body line that can sit at the top of the view
    fn max_scroll(&self) -> usize {
        self.email
            .as_ref()
            .map_or(0, |email| email.body.lines().count().saturating_sub(1))
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1).min(self.max_scroll());
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll = self
            .scroll
            .saturating_add_signed(delta)
            .min(self.max_scroll());
    }
}

/// Status line state
#[derive(Debug, Clone, Default)]
pub struct StatusState {
    pub message: String,
}

/// History summary for rendering
#[derive(Debug, Clone, Copy, Default)]
pub struct HistoryInfo {
    pub position: usize,
    pub len: usize,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub nav: NavigationState,
    /// Incremented on every panel entry; completions for older visits are dropped
    pub visit: u64,
    pub mailbox: MailboxState,
    pub compose: ComposeState,
    pub reader: ReaderState,
    pub status: StatusState,
    pub history: HistoryInfo,
    /// Backend base URL, shown in the status bar
    pub server: String,
    /// Selects which key hints the help bar shows
    pub keys: KeybindingMode,
}

impl AppState {
    pub fn panel(&self) -> Panel {
        self.nav.panel()
    }

    /// Whether a request for the active panel is outstanding
    pub fn is_loading(&self) -> bool {
        match self.panel() {
            Panel::Mailbox => self.mailbox.loading,
            Panel::Compose => self.compose.sending,
            Panel::EmailDetail => self.reader.loading,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status.message = message.into();
    }

    pub fn clear_status(&mut self) {
        self.status.message.clear();
    }

    /// Mailbox currently listed, if the mailbox panel is active
    pub fn current_mailbox(&self) -> Option<MailboxName> {
        match self.nav {
            NavigationState::Mailbox { mailbox } => Some(mailbox),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: u64) -> EmailSummary {
        EmailSummary {
            id,
            sender: "a@x.com".to_string(),
            subject: "Hi".to_string(),
            timestamp: "t".to_string(),
            read: false,
        }
    }

    #[test]
    fn test_panel_derived_from_nav() {
        let mut state = AppState::default();
        assert_eq!(state.panel(), Panel::Mailbox);

        state.nav = NavigationState::Compose {
            draft: ComposeDraft::default(),
        };
        assert_eq!(state.panel(), Panel::Compose);

        state.nav = NavigationState::EmailDetail {
            id: 3,
            from_sent: true,
        };
        assert_eq!(state.panel(), Panel::EmailDetail);
        assert_eq!(state.current_mailbox(), None);
    }

    #[test]
    fn test_mailbox_selection_is_clamped() {
        let mut mailbox = MailboxState {
            emails: vec![summary(1), summary(2), summary(3)],
            ..Default::default()
        };
        mailbox.move_up();
        assert_eq!(mailbox.selected, 0);
        mailbox.move_by(10);
        assert_eq!(mailbox.selected, 2);
        mailbox.move_down();
        assert_eq!(mailbox.selected, 2);
        mailbox.move_by(-1);
        assert_eq!(mailbox.selected_email().map(|e| e.id), Some(2));
        mailbox.move_to_top();
        assert_eq!(mailbox.selected, 0);
    }

    #[test]
    fn test_compose_typing() {
        let mut compose = ComposeState::default();
        compose.open(ComposeDraft::default());
        assert_eq!(compose.field, ComposerField::Recipients);

        for c in "bob@x.com\nHello\nline1\nline2".chars() {
            compose.insert_char(c);
        }
        assert_eq!(compose.draft.recipients, "bob@x.com");
        assert_eq!(compose.draft.subject, "Hello");
        assert_eq!(compose.draft.body, "line1\nline2");

        compose.backspace();
        assert_eq!(compose.draft.body, "line1\nline");
    }

    #[test]
    fn test_reply_draft_focuses_body() {
        let mut compose = ComposeState {
            error: Some("old".to_string()),
            ..Default::default()
        };
        compose.open(ComposeDraft {
            recipients: "a@x.com".to_string(),
            subject: "Re: Hi".to_string(),
            body: String::new(),
        });
        assert_eq!(compose.field, ComposerField::Body);
        assert!(compose.error.is_none());
    }

    #[test]
    fn test_reader_scroll_stops_at_last_line() {
        let mut reader = ReaderState::default();
        reader.scroll_down();
        assert_eq!(reader.scroll, 0);

        reader.email = Some(EmailDetail {
            id: 1,
            sender: "a@x.com".to_string(),
            recipients: vec![],
            subject: "Hi".to_string(),
            body: "one\ntwo\nthree".to_string(),
            timestamp: "t".to_string(),
            archived: false,
            read: true,
        });
        for _ in 0..10 {
            reader.scroll_down();
        }
        assert_eq!(reader.scroll, 2);

        reader.scroll_by(-1);
        assert_eq!(reader.scroll, 1);
        reader.scroll_by(50);
        assert_eq!(reader.scroll, 2);
        reader.scroll_by(-50);
        assert_eq!(reader.scroll, 0);

        reader.archiving = true;
        reader.scroll = 2;
        reader.reset(false);
        assert_eq!(reader.scroll, 0);
        assert!(!reader.archiving);
    }

    #[test]
    fn test_composer_field_cycle() {
        let field = ComposerField::Recipients;
        assert_eq!(field.next().next().next(), field);
        assert_eq!(field.prev(), ComposerField::Body);
    }
}
