//! Form relay: posts a JSON payload to a third-party endpoint that forwards
//! submissions by email.

use std::future::Future;

use serde::Serialize;
use thiserror::Error;
use web_time::Instant;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("relay answered with HTTP {0}")]
    Status(u16),
    #[error("could not reach relay: {0}")]
    Transport(String),
    #[error("could not encode payload: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Something that accepts a form submission.
pub trait FormRelay {
    fn post_json(&self, payload: &serde_json::Value)
    -> impl Future<Output = Result<(), RelayError>>;
}

/// Serializes `payload` and hands it to `relay`.
pub async fn submit<R, P>(relay: &R, payload: &P) -> Result<(), RelayError>
where
    R: FormRelay + ?Sized,
    P: Serialize,
{
    let body = serde_json::to_value(payload)?;
    relay.post_json(&body).await
}

/// Maps a response status onto the relay contract: any 2xx is accepted.
pub fn check_status(status: u16) -> Result<(), RelayError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(RelayError::Status(status))
    }
}

#[derive(Clone)]
pub struct HttpRelay {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl FormRelay for HttpRelay {
    async fn post_json(&self, payload: &serde_json::Value) -> Result<(), RelayError> {
        let started = Instant::now();
        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                log::warn!("relay POST {} failed: {e}", self.endpoint);
                RelayError::Transport(e.to_string())
            })?;
        let status = response.status().as_u16();
        log::info!(
            "relay POST {} -> {status} in {:?}",
            self.endpoint,
            started.elapsed()
        );
        check_status(status)
    }
}
