//! Standalone login feature.
//!
//! Completely decoupled from the report pipeline: its own HTTP client, its
//! own error type, no shared state. A session is just the validated
//! username; logout is dropping it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("please fill all fields")]
    MissingFields,
    #[error("login failed: {0}")]
    InvalidCredentials(String),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub username: String,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

pub struct LoginClient {
    base_url: String,
    client: reqwest::Client,
}

impl LoginClient {
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .build()
            .expect("reqwest client build should not fail");
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        if username.trim().is_empty() || password.trim().is_empty() {
            return Err(AuthError::MissingFields);
        }

        let url = format!("{}/login", self.base_url);
        let body = LoginRequest { username, password };
        let resp = self.client.post(&url).json(&body).send().await?;

        if resp.status().is_success() {
            tracing::info!("login successful for {}", username);
            return Ok(Session {
                username: username.to_string(),
            });
        }

        let message = resp
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|b| b.error)
            .unwrap_or_else(|| "invalid credentials".to_string());
        Err(AuthError::InvalidCredentials(message))
    }
}
