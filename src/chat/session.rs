use crate::chat::relay::Relay;
use crate::openai::{Message, Role};

/// Synthetic assistant greeting seeded into every new transcript. It
/// is never typed by the user and never stored server-side.
pub const GREETING: &str = "I'm RutDoc™ — ask me anything about scent, wind, or scrape setup.";

/// Shown in place of a reply when the relay call fails. Failures are
/// swallowed here so the user never sees a raw error or status code.
pub const FALLBACK_REPLY: &str = "Something went wrong. Please try again.";

#[derive(Debug, PartialEq)]
pub enum Submission {
    /// Empty or whitespace-only input, nothing was sent
    Ignored,
    /// A user turn was sent and a reply turn was appended
    Replied,
    /// A user turn was sent but the relay failed; the fallback turn
    /// was appended instead
    Failed,
}

/// One conversation held in memory for the lifetime of the session.
/// Turns are append-only and appended in call-completion order.
///
/// `submit` takes `&mut self` so a second send can not start while
/// one is in flight.
pub struct ChatSession {
    transcript: Vec<Message>,
    input: String,
    visible: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            transcript: vec![Message::new(Role::Assistant, GREETING)],
            input: String::new(),
            visible: false,
        }
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn open(&mut self) {
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Visibility never touches the transcript
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Sends the current input to the relay. Appends the user turn,
    /// clears the input buffer, then appends exactly one turn for the
    /// outcome: the reply on success or the fixed fallback on any
    /// failure. The input is cleared before the call so a failure
    /// never re-populates the field.
    pub async fn submit(&mut self, relay: &(dyn Relay + Send + Sync)) -> Submission {
        let text = self.input.trim().to_string();
        if text.is_empty() {
            return Submission::Ignored;
        }
        self.input.clear();

        self.transcript.push(Message::new(Role::User, &text));

        match relay.reply(&self.transcript).await {
            Ok(reply) if !reply.is_empty() => {
                self.transcript.push(Message::new(Role::Assistant, &reply));
                Submission::Replied
            }
            Ok(_) => {
                self.transcript
                    .push(Message::new(Role::Assistant, crate::openai::NO_REPLY_PLACEHOLDER));
                Submission::Replied
            }
            Err(e) => {
                tracing::error!("Relay call failed: {}", e);
                self.transcript
                    .push(Message::new(Role::Assistant, FALLBACK_REPLY));
                Submission::Failed
            }
        }
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
