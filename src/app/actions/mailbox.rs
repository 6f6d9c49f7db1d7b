//! Mailbox actions (listing, opening rows)

use std::sync::Arc;

use crate::app::handlers::ServiceEvent;
use crate::app::state::NavigationState;
use crate::mail::MailboxName;

use super::super::App;

impl App {
    /// Show a mailbox by name. Unknown names redirect to the inbox.
    pub(crate) fn show_mailbox(&mut self, name: &str) {
        let mailbox = match name.parse::<MailboxName>() {
            Ok(mailbox) => mailbox,
            Err(e) => {
                tracing::warn!("{}, redirecting to {}", e, MailboxName::Inbox);
                self.show_mailbox(MailboxName::Inbox.as_str());
                return;
            }
        };

        self.navigate(NavigationState::Mailbox { mailbox });
    }

    /// Request the listing for the active mailbox visit
    pub(crate) fn load_mailbox(&mut self, mailbox: MailboxName, visit: u64) {
        self.state.mailbox.reset();

        let service = Arc::clone(&self.service);
        self.spawn_request(async move {
            let result = service.list(mailbox).await;
            ServiceEvent::MailboxLoaded {
                visit,
                mailbox,
                result,
            }
        });
    }

    /// Open the selected row in the detail view
    pub(super) fn open_selected(&mut self) {
        let Some(mailbox) = self.state.current_mailbox() else {
            return;
        };
        if let Some(email) = self.state.mailbox.selected_email() {
            let id = email.id;
            self.view_email(id, mailbox.is_sent());
        }
    }
}
