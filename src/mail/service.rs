//! Backend collaborator contract

use async_trait::async_trait;

use super::types::{ComposeDraft, EmailDetail, EmailId, EmailSummary, EmailUpdate, MailboxName};

/// Transport-level failure talking to the backend
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result of `POST /emails`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Sent,
    /// Backend-reported error string, shown verbatim to the user
    Rejected(String),
}

/// The JSON CRUD API backing the client
#[async_trait]
pub trait EmailService: Send + Sync {
    /// `GET /emails/{mailbox}`
    async fn list(&self, mailbox: MailboxName) -> Result<Vec<EmailSummary>, ServiceError>;

    /// `GET /emails/{id}`
    async fn get(&self, id: EmailId) -> Result<EmailDetail, ServiceError>;

    /// `POST /emails`
    async fn create(&self, draft: &ComposeDraft) -> Result<CreateOutcome, ServiceError>;

    /// `PUT /emails/{id}`
    async fn update(&self, id: EmailId, update: EmailUpdate) -> Result<(), ServiceError>;
}
