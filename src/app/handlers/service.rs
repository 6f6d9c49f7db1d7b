//! Backend completion handlers
//!
//! Every request is tagged with the panel visit it was issued for. A
//! completion whose visit is no longer active is dropped so a late response
//! never repaints a panel the user has left.

use crate::mail::{CreateOutcome, EmailDetail, EmailId, EmailSummary, MailboxName, ServiceError};

use super::super::App;

/// Completion of a spawned backend request
#[derive(Debug)]
pub enum ServiceEvent {
    MailboxLoaded {
        visit: u64,
        mailbox: MailboxName,
        result: Result<Vec<EmailSummary>, ServiceError>,
    },
    EmailLoaded {
        visit: u64,
        id: EmailId,
        result: Result<EmailDetail, ServiceError>,
    },
    Submitted {
        visit: u64,
        result: Result<CreateOutcome, ServiceError>,
    },
    /// Archive flag flipped; carries the new value
    ArchiveToggled {
        visit: u64,
        id: EmailId,
        result: Result<bool, ServiceError>,
    },
}

impl ServiceEvent {
    fn visit(&self) -> u64 {
        match self {
            Self::MailboxLoaded { visit, .. }
            | Self::EmailLoaded { visit, .. }
            | Self::Submitted { visit, .. }
            | Self::ArchiveToggled { visit, .. } => *visit,
        }
    }
}

impl App {
    pub(crate) fn handle_service_event(&mut self, event: ServiceEvent) {
        if event.visit() != self.state.visit {
            tracing::debug!(
                "Discarding completion for visit {} (active visit {}): {:?}",
                event.visit(),
                self.state.visit,
                event
            );
            return;
        }

        self.dirty = true;
        match event {
            ServiceEvent::MailboxLoaded {
                mailbox, result, ..
            } => self.handle_mailbox_loaded(mailbox, result),
            ServiceEvent::EmailLoaded { id, result, .. } => self.handle_email_loaded(id, result),
            ServiceEvent::Submitted { result, .. } => self.handle_submitted(result),
            ServiceEvent::ArchiveToggled { id, result, .. } => {
                self.handle_archive_toggled(id, result)
            }
        }
    }

    fn handle_mailbox_loaded(
        &mut self,
        mailbox: MailboxName,
        result: Result<Vec<EmailSummary>, ServiceError>,
    ) {
        self.state.mailbox.loading = false;
        match result {
            Ok(emails) => {
                tracing::debug!("Loaded {} emails from {}", emails.len(), mailbox);
                self.state.mailbox.emails = emails;
                self.state.mailbox.selected = 0;
            }
            Err(e) => {
                tracing::warn!("Failed to load mailbox {}: {}", mailbox, e);
            }
        }
    }

    fn handle_email_loaded(&mut self, id: EmailId, result: Result<EmailDetail, ServiceError>) {
        self.state.reader.loading = false;
        match result {
            Ok(email) => {
                self.state.reader.email = Some(email);
            }
            Err(e) => {
                tracing::warn!("Failed to load email {}: {}", id, e);
            }
        }
    }

    fn handle_submitted(&mut self, result: Result<CreateOutcome, ServiceError>) {
        self.state.compose.sending = false;
        match result {
            Ok(CreateOutcome::Sent) => {
                tracing::info!("Email sent");
                self.state.compose.error = None;
                self.show_mailbox("sent");
                self.state.set_status("Email sent");
            }
            Ok(CreateOutcome::Rejected(error)) => {
                tracing::info!("Backend rejected email: {}", error);
                self.state.clear_status();
                self.state.compose.error = Some(error);
            }
            Err(e) => {
                tracing::warn!("Failed to send email: {}", e);
                self.state.clear_status();
            }
        }
    }

    fn handle_archive_toggled(&mut self, id: EmailId, result: Result<bool, ServiceError>) {
        self.state.reader.archiving = false;
        match result {
            Ok(archived) => {
                tracing::info!("Email {} archived={}", id, archived);
                // Always lands on the inbox, even when toggled from the archive
                self.show_mailbox("inbox");
                self.state.set_status(if archived {
                    "Email archived"
                } else {
                    "Email moved to inbox"
                });
            }
            Err(e) => {
                tracing::warn!("Failed to toggle archive on email {}: {}", id, e);
                self.state.clear_status();
            }
        }
    }
}
