//! Email detail actions (open, mark read, archive)

use std::sync::Arc;

use crate::app::handlers::ServiceEvent;
use crate::app::state::{NavigationState, Panel};
use crate::mail::{EmailId, EmailUpdate, ServiceError};

use super::super::App;

impl App {
    /// Show one email. `from_sent` hides the archive control.
    pub(crate) fn view_email(&mut self, id: EmailId, from_sent: bool) {
        self.navigate(NavigationState::EmailDetail { id, from_sent });
    }

    /// Fetch the email for the active detail visit and mark it read.
    ///
    /// The read update is detached: its result is discarded and it is not
    /// ordered against the fetch.
    pub(crate) fn load_email(&mut self, id: EmailId, from_sent: bool, visit: u64) {
        self.state.reader.reset(from_sent);

        let service = Arc::clone(&self.service);
        self.spawn_request(async move {
            let result = service.get(id).await;
            ServiceEvent::EmailLoaded { visit, id, result }
        });

        let service = Arc::clone(&self.service);
        tokio::spawn(async move {
            if let Err(e) = service.update(id, EmailUpdate::mark_read()).await {
                tracing::warn!("Failed to mark email {} as read: {}", id, e);
            }
        });
    }

    /// Flip the archived flag of `id` from its current server-side value,
    /// then return to the inbox
    pub(crate) fn toggle_archive(&mut self, id: EmailId) {
        if self.state.reader.archiving {
            tracing::debug!("Archive toggle ignored: already updating");
            return;
        }
        self.state.reader.archiving = true;

        let visit = self.state.visit;
        let service = Arc::clone(&self.service);
        self.state.set_status("Updating...");
        self.spawn_request(async move {
            let result = async {
                let current = service.get(id).await?;
                let archived = !current.archived;
                service
                    .update(id, EmailUpdate::set_archived(archived))
                    .await?;
                Ok::<_, ServiceError>(archived)
            }
            .await;
            ServiceEvent::ArchiveToggled { visit, id, result }
        });
    }

    /// Archive toggle from the detail view, when the control is shown
    pub(super) fn toggle_archive_current(&mut self) {
        if self.state.panel() != Panel::EmailDetail || !self.state.reader.shows_archive() {
            return;
        }
        if let Some(id) = self.state.reader.email.as_ref().map(|e| e.id) {
            self.toggle_archive(id);
        }
    }
}
