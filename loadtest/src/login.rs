//! The login iteration: one POST against the auth service and the two
//! checks evaluated on whatever comes back.

use crate::checks::Check;
use balter::prelude::*;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::debug;

pub const LOGIN_URL: &str = "http://localhost:8080/auth/login";
pub const LOGIN_EMAIL: &str = "me9@me.com";
pub const LOGIN_PASSWORD: &str = "secret";

/// The credential pair submitted on every iteration. Fixed for the whole
/// run; a fresh value is built per request and dropped with it.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: &'static str,
    pub password: &'static str,
}

impl LoginRequest {
    pub fn fixed() -> Self {
        Self {
            email: LOGIN_EMAIL,
            password: LOGIN_PASSWORD,
        }
    }
}

/// The two checks evaluated against every login response.
pub struct LoginChecks {
    pub status_is_200: Check,
    pub token_received: Check,
}

impl LoginChecks {
    pub const fn new() -> Self {
        Self {
            status_is_200: Check::new("status is 200"),
            token_received: Check::new("token received"),
        }
    }

    /// Evaluate both checks against a response, returning whether every
    /// check passed.
    ///
    /// A non-200 status fails both checks; there is no partial-pass state
    /// for a rejected login. On a 200 the token check stands alone: the
    /// `token` field must be present and a non-empty string.
    pub fn evaluate(&self, status: StatusCode, body: &Value) -> bool {
        let status_ok = self.status_is_200.record(status == StatusCode::OK);
        let token_ok = self.token_received.record(
            status_ok && matches!(body.get("token"), Some(Value::String(token)) if !token.is_empty()),
        );
        status_ok && token_ok
    }
}

#[derive(Debug, Error)]
pub enum LoginError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("response failed checks")]
    ChecksFailed,
}

static CLIENT: OnceLock<Client> = OnceLock::new();
static CHECKS: LoginChecks = LoginChecks::new();

/// Tallies for the scenario's two checks.
pub fn checks() -> &'static LoginChecks {
    &CHECKS
}

#[scenario]
pub async fn login_scenario() {
    let _ = login_transaction(LOGIN_URL, &CHECKS).await;
}

/// One login attempt. Failed checks surface as an `Err` so the engine's
/// success/error accounting sees them; they are never retried here.
#[transaction]
pub async fn login_transaction(url: &str, checks: &LoginChecks) -> Result<(), LoginError> {
    let client = CLIENT.get_or_init(Client::new);

    let res = client.post(url).json(&LoginRequest::fixed()).send().await?;

    let status = res.status();
    // Non-JSON and empty bodies read as Null, which fails the token check.
    let body: Value = res.json().await.unwrap_or(Value::Null);

    if checks.evaluate(status, &body) {
        Ok(())
    } else {
        debug!("login checks failed with status {status}");
        Err(LoginError::ChecksFailed)
    }
}
