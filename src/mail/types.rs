use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Backend identifier of a single email
pub type EmailId = u64;

/// The three mailboxes the backend serves
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MailboxName {
    #[default]
    Inbox,
    Sent,
    Archive,
}

impl MailboxName {
    /// Path segment used by the backend (`/emails/{mailbox}`)
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inbox => "inbox",
            Self::Sent => "sent",
            Self::Archive => "archive",
        }
    }

    /// Capitalized name for panel titles
    pub fn title(self) -> &'static str {
        match self {
            Self::Inbox => "Inbox",
            Self::Sent => "Sent",
            Self::Archive => "Archive",
        }
    }

    pub fn is_sent(self) -> bool {
        self == Self::Sent
    }
}

impl fmt::Display for MailboxName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mailbox: {0:?}")]
pub struct UnknownMailbox(pub String);

impl FromStr for MailboxName {
    type Err = UnknownMailbox;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inbox" => Ok(Self::Inbox),
            "sent" => Ok(Self::Sent),
            "archive" => Ok(Self::Archive),
            other => Err(UnknownMailbox(other.to_string())),
        }
    }
}

/// One row of a mailbox listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailSummary {
    pub id: EmailId,
    pub sender: String,
    pub subject: String,
    pub timestamp: String,
    #[serde(default)]
    pub read: bool,
}

/// Full email as returned by `GET /emails/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailDetail {
    pub id: EmailId,
    pub sender: String,
    #[serde(default)]
    pub recipients: Vec<String>,
    pub subject: String,
    #[serde(default)]
    pub body: String,
    pub timestamp: String,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub read: bool,
}

impl EmailDetail {
    pub fn recipients_display(&self) -> String {
        self.recipients.join(", ")
    }

    /// Label of the archive control for the current state
    pub fn archive_label(&self) -> &'static str {
        if self.archived { "Unarchive" } else { "Archive" }
    }
}

/// Contents of the compose form; also the body of `POST /emails`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposeDraft {
    /// Comma-separated addresses, exactly as typed
    pub recipients: String,
    pub subject: String,
    pub body: String,
}

/// Subject prefix added to replies
pub const REPLY_PREFIX: &str = "Re: ";

impl ComposeDraft {
    /// Draft replying to `original`: addressed to its sender, subject prefixed
    /// once with "Re: ", original body quoted below an attribution line.
    pub fn reply_to(original: &EmailDetail) -> Self {
        let subject = if original.subject.starts_with(REPLY_PREFIX) {
            original.subject.clone()
        } else {
            format!("{}{}", REPLY_PREFIX, original.subject)
        };

        let quoted_body = original
            .body
            .lines()
            .map(|line| format!("> {}", line))
            .collect::<Vec<_>>()
            .join("\n");

        let body = format!(
            "\n\nOn {}, {} wrote:\n{}",
            original.timestamp, original.sender, quoted_body
        );

        Self {
            recipients: original.sender.clone(),
            subject,
            body,
        }
    }
}

/// Partial update for `PUT /emails/{id}`; unset fields are left untouched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EmailUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

impl EmailUpdate {
    pub fn mark_read() -> Self {
        Self {
            read: Some(true),
            ..Self::default()
        }
    }

    pub fn set_archived(archived: bool) -> Self {
        Self {
            archived: Some(archived),
            ..Self::default()
        }
    }
}
