//! Form relay client
//!
//! One JSON POST per signup. Any 2xx response means the relay accepted it;
//! there is no retry and transient and permanent failures look the same.

use std::thread;
use std::time::Duration;

use crossbeam_channel::Receiver;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::Serialize;
use thiserror::Error;

/// Hosted relay the page posts signups to
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://formsubmit.co/ajax/trovul.waitlist@gmail.com";

/// Subject line of the notification mail the relay sends
pub const SUBJECT: &str = "🎉 Nova pessoa na Waitlist do Trovul!";

/// Errors that can occur while submitting a signup
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Relay rejected signup with status {0}")]
    Status(u16),
    #[error("Submission worker stopped before reporting")]
    Disconnected,
}

#[derive(Debug, Serialize)]
struct Signup<'a> {
    email: &'a str,
    #[serde(rename = "_subject")]
    subject: &'a str,
}

/// Check the shape of an email address before posting it
pub fn validate_email(email: &str) -> Result<(), SubmitError> {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return Err(SubmitError::InvalidEmail);
    }

    let (local, domain) = email.split_once('@').ok_or(SubmitError::InvalidEmail)?;
    let domain_ok = !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.');

    if local.is_empty() || !domain_ok {
        return Err(SubmitError::InvalidEmail);
    }
    Ok(())
}

/// Blocking client for the form relay
#[derive(Debug, Clone)]
pub struct RelayClient {
    client: Client,
    endpoint: String,
}

impl RelayClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, SubmitError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("trovul/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Post one signup and wait for the relay's answer
    pub fn submit(&self, email: &str) -> Result<(), SubmitError> {
        let email = email.trim();
        validate_email(email)?;

        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .json(&Signup {
                email,
                subject: SUBJECT,
            })
            .send()?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(status = status.as_u16(), "waitlist signup accepted");
            Ok(())
        } else {
            tracing::warn!(status = status.as_u16(), "waitlist signup rejected");
            Err(SubmitError::Status(status.as_u16()))
        }
    }
}

/// Submit on a worker thread; the result arrives on the returned channel
pub fn spawn_submit(client: RelayClient, email: String) -> Receiver<Result<(), SubmitError>> {
    let (tx, rx) = crossbeam_channel::bounded(1);

    thread::spawn(move || {
        let result = client.submit(&email);
        if let Err(ref e) = result {
            tracing::warn!(error = %e, "waitlist submission failed");
        }
        let _ = tx.send(result);
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ana@trovul.app").is_ok());
        assert!(validate_email("  ana@trovul.app ").is_ok());
        assert!(validate_email("ana").is_err());
        assert!(validate_email("@trovul.app").is_err());
        assert!(validate_email("ana@trovul").is_err());
        assert!(validate_email("ana@.app").is_err());
        assert!(validate_email("ana@trovul.").is_err());
        assert!(validate_email("a@b@trovul.app").is_err());
        assert!(validate_email("ana maria@trovul.app").is_err());
    }

    #[test]
    fn test_signup_body() {
        let body = serde_json::to_value(Signup {
            email: "ana@trovul.app",
            subject: SUBJECT,
        })
        .unwrap();
        assert_eq!(body, json!({ "email": "ana@trovul.app", "_subject": SUBJECT }));
    }

    #[test]
    fn test_invalid_email_not_sent() {
        let client = RelayClient::new("http://127.0.0.1:9/unused").unwrap();
        assert!(matches!(client.submit("nope"), Err(SubmitError::InvalidEmail)));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_submit_accepted() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ajax/waitlist"))
            .and(header("accept", "application/json"))
            .and(body_json(json!({ "email": "ana@trovul.app", "_subject": SUBJECT })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": "true" })))
            .expect(1)
            .mount(&server)
            .await;

        let endpoint = format!("{}/ajax/waitlist", server.uri());
        let result = tokio::task::spawn_blocking(move || {
            let client = RelayClient::new(endpoint)?;
            client.submit("ana@trovul.app")
        })
        .await
        .unwrap();

        assert!(result.is_ok());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_submit_rejected_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let endpoint = server.uri();
        let result = tokio::task::spawn_blocking(move || {
            let client = RelayClient::new(endpoint)?;
            client.submit("ana@trovul.app")
        })
        .await
        .unwrap();

        assert!(matches!(result, Err(SubmitError::Status(500))));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_spawn_submit_reports_on_channel() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let endpoint = server.uri();
        let result = tokio::task::spawn_blocking(move || {
            let client = RelayClient::new(endpoint)?;
            let rx = spawn_submit(client, "ana@trovul.app".to_string());
            rx.recv_timeout(Duration::from_secs(10))
                .map_err(|_| SubmitError::Disconnected)?
        })
        .await
        .unwrap();

        assert!(result.is_ok());
    }
}
