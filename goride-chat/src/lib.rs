pub mod responder;
pub mod rules;

pub use responder::{ChatMessage, ChatResponder, ChatTranscript, Sender};
pub use rules::{rules, ChatRule, Intent, DEFAULT_REPLY};
