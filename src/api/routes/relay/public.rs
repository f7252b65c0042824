//! Public types for the completion relay API
use serde::{Deserialize, Serialize};

use crate::openai::Message;

/// A full conversation transcript as held by the client. The relay is
/// stateless so every request carries the whole transcript.
#[derive(Serialize, Deserialize)]
pub struct RelayRequest {
    pub messages: Vec<Message>,
}

#[derive(Serialize, Deserialize)]
pub struct RelayResponse {
    pub reply: String,
}
