mod chat;
mod core;

pub use chat::{NO_REPLY_PLACEHOLDER, reply};
pub use core::{Message, Role, completion};
