//! reqwest implementation of the backend contract

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::service::{CreateOutcome, EmailService, ServiceError};
use super::types::{ComposeDraft, EmailDetail, EmailId, EmailSummary, EmailUpdate, MailboxName};
use crate::config::ServerConfig;

/// Client for the webmail JSON API
#[derive(Clone)]
pub struct HttpEmailService {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct CreateResponse {
    #[serde(default)]
    error: Option<String>,
}

impl HttpEmailService {
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ServiceError> {
        let url = self.endpoint(path);
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        let response = ensure_success(response).await?;
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Turn a non-2xx response into `ServiceError::Status`
async fn ensure_success(response: Response) -> Result<Response, ServiceError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ServiceError::Status {
        status: status.as_u16(),
        body,
    })
}

/// Interpret the body of `POST /emails`.
///
/// The backend answers validation failures with `{"error": "..."}` and a 4xx
/// status, so the body is inspected before the status.
fn decode_create_response(status: StatusCode, text: &str) -> Result<CreateOutcome, ServiceError> {
    match serde_json::from_str::<CreateResponse>(text) {
        Ok(CreateResponse { error: Some(error) }) => Ok(CreateOutcome::Rejected(error)),
        Ok(CreateResponse { error: None }) if status.is_success() => Ok(CreateOutcome::Sent),
        Ok(CreateResponse { error: None }) => Err(ServiceError::Status {
            status: status.as_u16(),
            body: text.to_string(),
        }),
        Err(_) if status.is_success() && text.trim().is_empty() => Ok(CreateOutcome::Sent),
        Err(_) if !status.is_success() => Err(ServiceError::Status {
            status: status.as_u16(),
            body: text.to_string(),
        }),
        Err(e) => Err(ServiceError::Decode(e)),
    }
}

#[async_trait]
impl EmailService for HttpEmailService {
    async fn list(&self, mailbox: MailboxName) -> Result<Vec<EmailSummary>, ServiceError> {
        self.get_json(&format!("emails/{}", mailbox.as_str())).await
    }

    async fn get(&self, id: EmailId) -> Result<EmailDetail, ServiceError> {
        self.get_json(&format!("emails/{}", id)).await
    }

    async fn create(&self, draft: &ComposeDraft) -> Result<CreateOutcome, ServiceError> {
        let url = self.endpoint("emails");
        tracing::debug!("POST {}", url);
        let response = self.client.post(&url).json(draft).send().await?;
        let status = response.status();
        let text = response.text().await?;
        decode_create_response(status, &text)
    }

    async fn update(&self, id: EmailId, update: EmailUpdate) -> Result<(), ServiceError> {
        let url = self.endpoint(&format!("emails/{}", id));
        tracing::debug!("PUT {} {:?}", url, update);
        let response = self.client.put(&url).json(&update).send().await?;
        ensure_success(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(base_url: &str) -> HttpEmailService {
        let config = ServerConfig {
            base_url: base_url.to_string(),
            ..ServerConfig::default()
        };
        HttpEmailService::new(&config).unwrap()
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        assert_eq!(
            service("http://localhost:8000/").endpoint("emails/inbox"),
            "http://localhost:8000/emails/inbox"
        );
        assert_eq!(
            service("http://mail.test/app").endpoint("emails/5"),
            "http://mail.test/app/emails/5"
        );
    }

    #[test]
    fn test_create_success_bodies() {
        assert_eq!(
            decode_create_response(StatusCode::CREATED, "{}").unwrap(),
            CreateOutcome::Sent
        );
        assert_eq!(
            decode_create_response(
                StatusCode::CREATED,
                r#"{"message": "Email sent successfully."}"#
            )
            .unwrap(),
            CreateOutcome::Sent
        );
        assert_eq!(
            decode_create_response(StatusCode::CREATED, "").unwrap(),
            CreateOutcome::Sent
        );
    }

    #[test]
    fn test_create_error_is_reported_verbatim() {
        let outcome = decode_create_response(
            StatusCode::BAD_REQUEST,
            r#"{"error": "User with email nobody@x.com does not exist."}"#,
        )
        .unwrap();
        assert_eq!(
            outcome,
            CreateOutcome::Rejected("User with email nobody@x.com does not exist.".to_string())
        );
    }

    #[test]
    fn test_create_non_json_failure_is_status_error() {
        let result = decode_create_response(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
        assert!(matches!(
            result,
            Err(ServiceError::Status { status: 500, .. })
        ));
    }

    #[test]
    fn test_create_garbage_success_is_decode_error() {
        let result = decode_create_response(StatusCode::OK, "not json");
        assert!(matches!(result, Err(ServiceError::Decode(_))));
    }
}
