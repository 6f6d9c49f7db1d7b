//! In-memory backend used by controller tests

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use super::service::{CreateOutcome, EmailService, ServiceError};
use super::types::{ComposeDraft, EmailDetail, EmailId, EmailSummary, EmailUpdate, MailboxName};

/// A request the fake backend received
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List(MailboxName),
    Get(EmailId),
    Create(ComposeDraft),
    Update(EmailId, EmailUpdate),
}

struct StoredEmail {
    detail: EmailDetail,
    sent: bool,
}

#[derive(Default)]
pub struct FakeEmailService {
    emails: Mutex<Vec<StoredEmail>>,
    calls: Mutex<Vec<Call>>,
    create_error: Mutex<Option<String>>,
    offline: AtomicBool,
}

impl FakeEmailService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a received email (appears in inbox, or archive once archived)
    pub fn with_received(self, detail: EmailDetail) -> Self {
        self.push(detail, false);
        self
    }

    /// Add an email the user sent
    pub fn with_sent(self, detail: EmailDetail) -> Self {
        self.push(detail, true);
        self
    }

    fn push(&self, detail: EmailDetail, sent: bool) {
        self.emails
            .lock()
            .unwrap()
            .push(StoredEmail { detail, sent });
    }

    /// Make the next creates fail with a backend-reported error
    pub fn reject_creates_with(&self, error: &str) {
        *self.create_error.lock().unwrap() = Some(error.to_string());
    }

    /// Make every request fail at the transport level
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn archived(&self, id: EmailId) -> Option<bool> {
        self.emails
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.detail.id == id)
            .map(|e| e.detail.archived)
    }

    pub fn is_read(&self, id: EmailId) -> Option<bool> {
        self.emails
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.detail.id == id)
            .map(|e| e.detail.read)
    }

    fn record(&self, call: Call) -> Result<(), ServiceError> {
        self.calls.lock().unwrap().push(call);
        if self.offline.load(Ordering::SeqCst) {
            return Err(ServiceError::Status {
                status: 503,
                body: "offline".to_string(),
            });
        }
        Ok(())
    }
}

pub fn detail(id: EmailId, sender: &str, subject: &str) -> EmailDetail {
    EmailDetail {
        id,
        sender: sender.to_string(),
        recipients: vec!["me@example.com".to_string()],
        subject: subject.to_string(),
        body: format!("body of {}", id),
        timestamp: "Jan 01 2024, 09:30 AM".to_string(),
        archived: false,
        read: false,
    }
}

#[async_trait]
impl EmailService for FakeEmailService {
    async fn list(&self, mailbox: MailboxName) -> Result<Vec<EmailSummary>, ServiceError> {
        self.record(Call::List(mailbox))?;
        let emails = self.emails.lock().unwrap();
        Ok(emails
            .iter()
            .filter(|e| match mailbox {
                MailboxName::Inbox => !e.sent && !e.detail.archived,
                MailboxName::Sent => e.sent,
                MailboxName::Archive => !e.sent && e.detail.archived,
            })
            .map(|e| EmailSummary {
                id: e.detail.id,
                sender: e.detail.sender.clone(),
                subject: e.detail.subject.clone(),
                timestamp: e.detail.timestamp.clone(),
                read: e.detail.read,
            })
            .collect())
    }

    async fn get(&self, id: EmailId) -> Result<EmailDetail, ServiceError> {
        self.record(Call::Get(id))?;
        self.emails
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.detail.id == id)
            .map(|e| e.detail.clone())
            .ok_or_else(|| ServiceError::Status {
                status: 404,
                body: r#"{"error": "Email not found."}"#.to_string(),
            })
    }

    async fn create(&self, draft: &ComposeDraft) -> Result<CreateOutcome, ServiceError> {
        self.record(Call::Create(draft.clone()))?;
        if let Some(error) = self.create_error.lock().unwrap().clone() {
            return Ok(CreateOutcome::Rejected(error));
        }
        let mut emails = self.emails.lock().unwrap();
        let id = emails.iter().map(|e| e.detail.id).max().unwrap_or(0) + 1;
        emails.push(StoredEmail {
            detail: EmailDetail {
                id,
                sender: "me@example.com".to_string(),
                recipients: draft
                    .recipients
                    .split(',')
                    .map(|r| r.trim().to_string())
                    .filter(|r| !r.is_empty())
                    .collect(),
                subject: draft.subject.clone(),
                body: draft.body.clone(),
                timestamp: "now".to_string(),
                archived: false,
                read: true,
            },
            sent: true,
        });
        Ok(CreateOutcome::Sent)
    }

    async fn update(&self, id: EmailId, update: EmailUpdate) -> Result<(), ServiceError> {
        self.record(Call::Update(id, update))?;
        let mut emails = self.emails.lock().unwrap();
        if let Some(email) = emails.iter_mut().find(|e| e.detail.id == id) {
            if let Some(read) = update.read {
                email.detail.read = read;
            }
            if let Some(archived) = update.archived {
                email.detail.archived = archived;
            }
        }
        Ok(())
    }
}
