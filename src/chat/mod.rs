mod relay;
mod session;

pub use relay::{HttpRelay, Relay};
pub use session::{ChatSession, FALLBACK_REPLY, GREETING, Submission};
