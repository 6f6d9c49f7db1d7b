//! Action handlers for user input
//!
//! This module is split into focused submodules:
//! - `mailbox`: Mailbox listing and opening rows
//! - `email`: Email detail view and archive toggle
//! - `compose`: Composition, replies and submission
//! - `navigation`: Movement, history replay and refresh
//! - `input`: Text input handling

mod compose;
mod email;
mod input;
mod mailbox;
mod navigation;

use anyhow::Result;

use crate::input::Action;
use crate::mail::MailboxName;

use super::App;

impl App {
    pub(crate) async fn handle_action(&mut self, action: Action) -> Result<()> {
        match action {
            // Movement
            Action::Up => self.move_up(),
            Action::Down => self.move_down(),
            Action::Top => self.move_to_top(),
            Action::Bottom => self.move_to_bottom(),
            Action::PageUp => self.move_page(-1),
            Action::PageDown => self.move_page(1),

            // History
            Action::Back => self.history_back(),
            Action::Forward => self.history_forward(),
            Action::Refresh => self.refresh(),
            Action::Quit => {} // Handled in event loop

            // Mailboxes
            Action::Inbox => self.show_mailbox(MailboxName::Inbox.as_str()),
            Action::Sent => self.show_mailbox(MailboxName::Sent.as_str()),
            Action::Archive => self.show_mailbox(MailboxName::Archive.as_str()),
            Action::Open => self.open_selected(),

            // Email detail
            Action::Reply => self.reply(),
            Action::ToggleArchive => self.toggle_archive_current(),

            // Composer
            Action::Compose => self.compose_email(None),
            Action::NextField => self.next_composer_field(),
            Action::PrevField => self.prev_composer_field(),
            Action::Send => {
                let draft = self.state.compose.draft.clone();
                self.submit_compose(draft);
            }
        }
        Ok(())
    }
}
