//! Chat messages as they travel between the coaching client and its backend.
//!
//! The request body is `{ "messages": [...], "image": ... }` and a successful
//! reply is `{ "content": "..." }`. Only assistant replies carry markdown;
//! user messages are shown exactly as typed.

use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::config::Config;
use crate::error::Result;
use crate::parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    /// The assistant reply recorded when a chat request fails.
    pub fn error_reply(config: &Config) -> Self {
        Self::assistant(config.transcript.error_reply.clone())
    }

    pub fn render(&self) -> RenderedMessage {
        let body = match self.role {
            Role::Assistant => MessageBody::Blocks(parser::parse(&self.content)),
            Role::User => MessageBody::Raw(self.content.clone()),
        };
        RenderedMessage {
            role: self.role,
            body,
        }
    }
}

/// Body of a chat request: the whole conversation so far plus the photo the
/// user uploaded, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
    #[serde(default)]
    pub image: Option<String>,
}

impl ChatRequest {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn render(&self) -> Vec<RenderedMessage> {
        self.messages.iter().map(Message::render).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub content: String,
}

impl ChatResponse {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn into_message(self) -> Message {
        Message::assistant(self.content)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "format", content = "body", rename_all = "snake_case")]
pub enum MessageBody {
    Raw(String),
    Blocks(Vec<Block>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedMessage {
    pub role: Role,
    #[serde(flatten)]
    pub body: MessageBody,
}
