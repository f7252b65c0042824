use std::time::Duration;

use anyhow::{Error, Result};
use async_trait::async_trait;

use crate::api::public::relay::{RelayRequest, RelayResponse};
use crate::openai::Message;

/// Seam between the chat session and the wire so the session can be
/// exercised without a running server.
#[async_trait]
pub trait Relay {
    async fn reply(&self, transcript: &[Message]) -> Result<String, Error>;
}

/// Relay client backed by the HTTP relay endpoint.
pub struct HttpRelay {
    api_url: String,
}

impl HttpRelay {
    pub fn new(api_url: &str) -> Self {
        Self {
            api_url: api_url.to_string(),
        }
    }
}

#[async_trait]
impl Relay for HttpRelay {
    async fn reply(&self, transcript: &[Message]) -> Result<String, Error> {
        let payload = RelayRequest {
            messages: transcript.to_vec(),
        };
        let response: RelayResponse = reqwest::Client::new()
            .post(&self.api_url)
            .header("Content-Type", "application/json")
            .timeout(Duration::from_secs(30))
            .json(&payload)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.reply)
    }
}
