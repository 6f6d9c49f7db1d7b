//! Email composition actions (compose, reply, submit)

use std::sync::Arc;

use crate::app::handlers::ServiceEvent;
use crate::app::state::{NavigationState, Panel};
use crate::mail::ComposeDraft;

use super::super::App;

impl App {
    /// Open the compose panel, empty or seeded with `draft`
    pub(crate) fn compose_email(&mut self, draft: Option<ComposeDraft>) {
        self.navigate(NavigationState::Compose {
            draft: draft.unwrap_or_default(),
        });
    }

    /// Reply to the email shown in the detail view
    pub(super) fn reply(&mut self) {
        if self.state.panel() != Panel::EmailDetail {
            return;
        }
        let Some(email) = self.state.reader.email.as_ref() else {
            return;
        };
        let draft = ComposeDraft::reply_to(email);
        self.compose_email(Some(draft));
    }

    /// Send `draft`. The compose panel stays active until the backend answers:
    /// success moves to the sent mailbox, a reported error is shown in place.
    pub(crate) fn submit_compose(&mut self, draft: ComposeDraft) {
        if !matches!(self.state.nav, NavigationState::Compose { .. }) {
            return;
        }
        if self.state.compose.sending {
            tracing::debug!("Submit ignored: already sending");
            return;
        }

        tracing::info!("Sending email to {}", draft.recipients);
        self.state.compose.sending = true;
        self.state.set_status("Sending...");

        let visit = self.state.visit;
        let service = Arc::clone(&self.service);
        self.spawn_request(async move {
            let result = service.create(&draft).await;
            ServiceEvent::Submitted { visit, result }
        });
    }

    pub(super) fn next_composer_field(&mut self) {
        if matches!(self.state.nav, NavigationState::Compose { .. }) {
            self.state.compose.field = self.state.compose.field.next();
        }
    }

    pub(super) fn prev_composer_field(&mut self) {
        if matches!(self.state.nav, NavigationState::Compose { .. }) {
            self.state.compose.field = self.state.compose.field.prev();
        }
    }
}
