pub mod http;
pub mod service;
#[cfg(test)]
pub mod testing;
pub mod types;

pub use http::HttpEmailService;
pub use service::{CreateOutcome, EmailService, ServiceError};
pub use types::{ComposeDraft, EmailDetail, EmailId, EmailSummary, EmailUpdate, MailboxName};
