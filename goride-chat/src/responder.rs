use crate::rules::{rules, Intent, DEFAULT_REPLY, GREETING};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sender {
    User,
    Bot,
}

/// One transcript entry; never mutated after creation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Append-only conversation log. Opens with the bot greeting, the way the
/// chat panel does on first load.
#[derive(Debug, Clone, Serialize)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::new(Sender::Bot, GREETING)],
        }
    }

    pub fn push_user(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.push(ChatMessage::new(Sender::User, text))
    }

    pub fn push_bot(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.push(ChatMessage::new(Sender::Bot, text))
    }

    fn push(&mut self, message: ChatMessage) -> &ChatMessage {
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for ChatTranscript {
    fn default() -> Self {
        Self::new()
    }
}

/// Classifies free text against the static rule table and returns the
/// canned reply. Holds no state; a pure function from input text to
/// output text. Timing concerns (the typing indicator) live with the
/// caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChatResponder;

impl ChatResponder {
    pub fn new() -> Self {
        Self
    }

    /// First matching rule wins; matching is case-insensitive and happens
    /// anywhere in the input. None means no rule fired.
    pub fn classify(&self, text: &str) -> Option<Intent> {
        let lowered = text.to_lowercase();
        rules()
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(|rule| rule.intent)
    }

    /// Reply for the input, falling back to the fixed default
    pub fn respond(&self, text: &str) -> &'static str {
        let lowered = text.to_lowercase();
        rules()
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(|rule| rule.reply)
            .unwrap_or(DEFAULT_REPLY)
    }
}
